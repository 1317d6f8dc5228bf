use std::str::FromStr;

use crate::convert::{lunar_to_solar, weekday_index};
use crate::names::{LocaleNames, names};
use crate::prelude::*;
use crate::types::{CalendarKind, Locale, LunarDate, SolarDate};
use crate::ParseError;

/// One of the fixed display patterns accepted by the picker.
///
/// `D`/`M` are unpadded numbers, `DD`/`MM` are zero-padded to two digits,
/// `MMM`/`MMMM` are short/long month names, `ddd`/`dddd` are short/long
/// weekday names and `YYYY` is the year as-is.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display)]
pub enum FormatPattern {
    #[display(fmt = "DD/MM/YYYY")]
    DayMonthYearSlash,
    #[display(fmt = "MM/DD/YYYY")]
    MonthDayYearSlash,
    #[display(fmt = "YYYY-MM-DD")]
    YearMonthDayDash,
    #[default]
    #[display(fmt = "DD-MM-YYYY")]
    DayMonthYearDash,
    #[display(fmt = "D MMMM YYYY")]
    DayMonthNameYear,
    #[display(fmt = "MMMM D, YYYY")]
    MonthNameDayYear,
    #[display(fmt = "D MMM YYYY")]
    DayMonthShortYear,
    #[display(fmt = "MMM D, YYYY")]
    MonthShortDayYear,
    #[display(fmt = "dddd, D MMMM YYYY")]
    WeekdayDayMonthNameYear,
    #[display(fmt = "ddd, D MMM YYYY")]
    WeekdayShortDayMonthShortYear,
    #[display(fmt = "DD.MM.YYYY")]
    DayMonthYearDot,
    #[display(fmt = "D/M/YYYY")]
    DayMonthYearUnpadded,
    #[display(fmt = "YYYY/MM/DD")]
    YearMonthDaySlash,
}

impl FormatPattern {
    pub const ALL: [Self; 13] = [
        Self::DayMonthYearSlash,
        Self::MonthDayYearSlash,
        Self::YearMonthDayDash,
        Self::DayMonthYearDash,
        Self::DayMonthNameYear,
        Self::MonthNameDayYear,
        Self::DayMonthShortYear,
        Self::MonthShortDayYear,
        Self::WeekdayDayMonthNameYear,
        Self::WeekdayShortDayMonthShortYear,
        Self::DayMonthYearDot,
        Self::DayMonthYearUnpadded,
        Self::YearMonthDaySlash,
    ];

    /// Pattern used when an unrecognized pattern string is given
    pub const FALLBACK: Self = Self::DayMonthNameYear;
}

impl FromStr for FormatPattern {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|pattern| pattern.to_string() == s)
            .ok_or_else(|| ParseError::UnknownPattern(s.to_owned()))
    }
}

impl serde::Serialize for FormatPattern {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for FormatPattern {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Values substituted into a pattern, taken from the active calendar.
struct Parts {
    day: i32,
    month: i32,
    year: i32,
    month_long: &'static str,
    month_short: &'static str,
    weekday_long: &'static str,
    weekday_short: &'static str,
}

impl Parts {
    fn new(date: SolarDate, lunar: LunarDate, table: &LocaleNames, active: CalendarKind) -> Self {
        let (year, month, day, weekday) = match active {
            CalendarKind::Lunar => {
                let lunar = lunar.clamped();
                let weekday = weekday_index(lunar_to_solar(lunar.year, lunar.month, lunar.day));
                (lunar.year, lunar.month, lunar.day, weekday)
            }
            #[allow(clippy::cast_possible_wrap)]
            CalendarKind::Solar => (
                date.year(),
                date.month() as i32,
                date.day() as i32,
                weekday_index(date),
            ),
        };

        Self {
            day,
            month,
            year,
            month_long: table.month(active, month),
            month_short: table.month_short(active, month),
            weekday_long: table.weekday_long(weekday),
            weekday_short: table.weekday_short(weekday),
        }
    }

    fn render(&self, pattern: FormatPattern) -> String {
        let Self {
            day,
            month,
            year,
            month_long,
            month_short,
            weekday_long,
            weekday_short,
        } = self;

        match pattern {
            FormatPattern::DayMonthYearSlash => format!("{day:02}/{month:02}/{year}"),
            FormatPattern::MonthDayYearSlash => format!("{month:02}/{day:02}/{year}"),
            FormatPattern::YearMonthDayDash => format!("{year}-{month:02}-{day:02}"),
            FormatPattern::DayMonthYearDash => format!("{day:02}-{month:02}-{year}"),
            FormatPattern::DayMonthNameYear => format!("{day} {month_long} {year}"),
            FormatPattern::MonthNameDayYear => format!("{month_long} {day}, {year}"),
            FormatPattern::DayMonthShortYear => format!("{day} {month_short} {year}"),
            FormatPattern::MonthShortDayYear => format!("{month_short} {day}, {year}"),
            FormatPattern::WeekdayDayMonthNameYear => {
                format!("{weekday_long}, {day} {month_long} {year}")
            }
            FormatPattern::WeekdayShortDayMonthShortYear => {
                format!("{weekday_short}, {day} {month_short} {year}")
            }
            FormatPattern::DayMonthYearDot => format!("{day:02}.{month:02}.{year}"),
            FormatPattern::DayMonthYearUnpadded => format!("{day}/{month}/{year}"),
            FormatPattern::YearMonthDaySlash => format!("{year}/{month:02}/{day:02}"),
        }
    }
}

/// Renders the `active` calendar's view of a selected date.
///
/// `date` and `lunar` are expected to describe the same day; only the one
/// matching `active` is read. Lunar months outside `1..=12` are clamped
/// before any name lookup.
pub fn format_date(
    date: SolarDate,
    lunar: LunarDate,
    pattern: FormatPattern,
    locale: Locale,
    active: CalendarKind,
) -> String {
    Parts::new(date, lunar, names(locale), active).render(pattern)
}

/// Like [`format_date`], but takes the pattern as text. Unknown patterns
/// render as `D MMMM YYYY`.
pub fn format_date_str(
    date: SolarDate,
    lunar: LunarDate,
    pattern: &str,
    locale: Locale,
    active: CalendarKind,
) -> String {
    let pattern = pattern.parse().unwrap_or_else(|err: ParseError| {
        tracing::debug!(error = %err, "falling back to the default pattern");
        FormatPattern::FALLBACK
    });
    format_date(date, lunar, pattern, locale, active)
}

/// The two status lines shown under the picker for a selected date.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
#[display(fmt = "{lunar}\n{solar}")]
pub struct Summary {
    pub lunar: String,
    pub solar: String,
}

/// Status lines for a selection: the lunar date with its month name, and the
/// numeric solar date in the locale's customary order.
///
/// `lunar` is rendered as given, so a date picked in the lunar grid keeps
/// its day even where the conversion back from `date` would land one off.
pub fn summary(date: SolarDate, lunar: LunarDate, locale: Locale) -> Summary {
    let table = names(locale);

    let lunar_text = format_date(
        date,
        lunar,
        FormatPattern::DayMonthNameYear,
        locale,
        CalendarKind::Lunar,
    );
    let solar_text = match locale {
        Locale::Default => format!("{}/{}/{}", date.month(), date.day(), date.year()),
        Locale::Secondary => format_date(
            date,
            lunar,
            FormatPattern::DayMonthYearUnpadded,
            locale,
            CalendarKind::Solar,
        ),
    };

    Summary {
        lunar: format!("{}: {lunar_text}", table.lunar_label),
        solar: format!("{}: {solar_text}", table.solar_label),
    }
}
