use crate::ParseError;
use crate::consts::{
    DAYS_IN_LUNAR_MONTH, FIRST_MONTH, MAX_DAYS_IN_SOLAR_MONTH, MIN_DAY, MIN_DAYS_IN_SOLAR_MONTH,
    MONTHS_IN_YEAR,
};
use crate::prelude::*;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A proleptic Gregorian calendar date.
pub type SolarDate = chrono::NaiveDate;

/// A date in the approximated lunar calendar.
///
/// This is a plain value with no invariant of its own: months are modelled
/// as 30 days and nothing stops a caller from building `month: 13`. Use
/// [`LunarDate::clamped`] before treating the fields as table indices.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Display,
)]
#[display(fmt = "{year:04}-{month:02}-{day:02}")]
pub struct LunarDate {
    pub year: i32,
    pub month: i32,
    pub day: i32,
}

impl LunarDate {
    pub const fn new(year: i32, month: i32, day: i32) -> Self {
        Self { year, month, day }
    }

    /// Returns a copy with month in `1..=12` and day in `1..=30`
    pub fn clamped(self) -> Self {
        Self {
            year: self.year,
            month: self.month.clamp(FIRST_MONTH as i32, MONTHS_IN_YEAR as i32),
            day: self.day.clamp(MIN_DAY as i32, DAYS_IN_LUNAR_MONTH as i32),
        }
    }

    /// Solar equivalent of this date
    pub fn to_solar(self) -> SolarDate {
        crate::convert::lunar_to_solar(self.year, self.month, self.day)
    }
}

impl From<SolarDate> for LunarDate {
    fn from(date: SolarDate) -> Self {
        crate::convert::solar_to_lunar(date)
    }
}

/// Which of the two calendars a value or a view refers to.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display,
)]
#[serde(rename_all = "lowercase")]
pub enum CalendarKind {
    #[default]
    #[serde(alias = "hijri")]
    #[display(fmt = "lunar")]
    Lunar,
    #[serde(alias = "gregorian")]
    #[display(fmt = "solar")]
    Solar,
}

impl CalendarKind {
    /// The other calendar
    pub const fn toggled(self) -> Self {
        match self {
            Self::Lunar => Self::Solar,
            Self::Solar => Self::Lunar,
        }
    }

    pub const fn is_lunar(self) -> bool {
        matches!(self, Self::Lunar)
    }
}

impl FromStr for CalendarKind {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "lunar" | "hijri" => Ok(Self::Lunar),
            "solar" | "gregorian" => Ok(Self::Solar),
            other => Err(ParseError::UnknownCalendar(other.to_owned())),
        }
    }
}

/// Selects the name tables used for rendering.
///
/// `Default` is English. `Secondary` is Arabic and lays out right-to-left.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display,
)]
pub enum Locale {
    #[default]
    #[serde(rename = "en", alias = "default")]
    #[display(fmt = "en")]
    Default,
    #[serde(rename = "ar", alias = "secondary")]
    #[display(fmt = "ar")]
    Secondary,
}

impl Locale {
    pub const fn is_rtl(self) -> bool {
        matches!(self, Self::Secondary)
    }
}

impl FromStr for Locale {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "en" | "default" => Ok(Self::Default),
            "ar" | "secondary" => Ok(Self::Secondary),
            other => Err(ParseError::UnknownLocale(other.to_owned())),
        }
    }
}

/// Weekday shown in the first column of a month grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum FirstDayOfWeek {
    #[default]
    Sunday = 0,
    Monday = 1,
}

impl FirstDayOfWeek {
    /// Weekday index in the Sunday-based numbering used by [`crate::weekday_index`]
    pub const fn index(self) -> u32 {
        self as u32
    }
}

impl TryFrom<u8> for FirstDayOfWeek {
    type Error = ParseError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Sunday),
            1 => Ok(Self::Monday),
            other => Err(ParseError::InvalidFirstDayOfWeek(other)),
        }
    }
}

impl From<FirstDayOfWeek> for u8 {
    fn from(first: FirstDayOfWeek) -> Self {
        first as Self
    }
}

// Helper functions

/// Whether `year` has a February 29. Years outside chrono's supported
/// range report `false`.
pub fn is_leap_year(year: i32) -> bool {
    SolarDate::from_ymd_opt(year, 2, 29).is_some()
}

/// Folds an out-of-range month into the neighbouring years, so month 13 of
/// 2023 is January 2024 and month 0 is December of the previous year.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub(crate) fn normalize_month(year: i32, month: i32) -> (i32, u32) {
    let months = MONTHS_IN_YEAR as i32;
    let zero_based = i64::from(month) - 1;
    let year_shift = zero_based.div_euclid(i64::from(months));
    let year = i64::from(year)
        .saturating_add(year_shift)
        .clamp(i64::from(i32::MIN), i64::from(i32::MAX));
    let month = zero_based.rem_euclid(i64::from(months)) as u32 + 1;
    (year as i32, month)
}

/// Day count of a solar month, read off the platform date type.
/// Out-of-range months are normalized first. Years chrono cannot represent
/// get the longest month length.
pub fn days_in_solar_month(year: i32, month: i32) -> u32 {
    let (year, month) = normalize_month(year, month);
    (MIN_DAYS_IN_SOLAR_MONTH..=MAX_DAYS_IN_SOLAR_MONTH)
        .rev()
        .find(|&day| SolarDate::from_ymd_opt(year, month, day).is_some())
        .unwrap_or(MAX_DAYS_IN_SOLAR_MONTH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lunar_date_display() {
        assert_eq!(LunarDate::new(1445, 9, 1).to_string(), "1445-09-01");
        assert_eq!(LunarDate::new(1, 1, 1).to_string(), "0001-01-01");
    }

    #[test]
    fn test_lunar_date_clamped() {
        assert_eq!(
            LunarDate::new(1445, 13, 1).clamped(),
            LunarDate::new(1445, 12, 1)
        );
        assert_eq!(
            LunarDate::new(1445, 0, 31).clamped(),
            LunarDate::new(1445, 1, 30)
        );
        assert_eq!(
            LunarDate::new(1445, 9, 0).clamped(),
            LunarDate::new(1445, 9, 1)
        );
        let in_range = LunarDate::new(1445, 9, 15);
        assert_eq!(in_range.clamped(), in_range);
    }

    #[test]
    fn test_lunar_date_ordering() {
        let a = LunarDate::new(1445, 8, 30);
        let b = LunarDate::new(1445, 9, 1);
        let c = LunarDate::new(1446, 1, 1);
        assert!(a < b);
        assert!(b < c);
    }

    #[test]
    fn test_lunar_date_serde() {
        let date = LunarDate::new(1445, 9, 1);
        let json = serde_json::to_string(&date).unwrap();
        assert_eq!(json, r#"{"year":1445,"month":9,"day":1}"#);

        let parsed: LunarDate = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, date);
    }

    #[test]
    fn test_calendar_kind_parse_and_toggle() {
        assert_eq!("lunar".parse::<CalendarKind>(), Ok(CalendarKind::Lunar));
        assert_eq!("hijri".parse::<CalendarKind>(), Ok(CalendarKind::Lunar));
        assert_eq!("gregorian".parse::<CalendarKind>(), Ok(CalendarKind::Solar));
        assert!(matches!(
            "julian".parse::<CalendarKind>(),
            Err(ParseError::UnknownCalendar(_))
        ));

        assert_eq!(CalendarKind::Lunar.toggled(), CalendarKind::Solar);
        assert_eq!(CalendarKind::Solar.toggled(), CalendarKind::Lunar);
        assert!(CalendarKind::Lunar.is_lunar());
        assert_eq!(CalendarKind::Solar.to_string(), "solar");
    }

    #[test]
    fn test_calendar_kind_serde_aliases() {
        let kind: CalendarKind = serde_json::from_str(r#""gregorian""#).unwrap();
        assert_eq!(kind, CalendarKind::Solar);
        let kind: CalendarKind = serde_json::from_str(r#""lunar""#).unwrap();
        assert_eq!(kind, CalendarKind::Lunar);
        assert_eq!(
            serde_json::to_string(&CalendarKind::Lunar).unwrap(),
            r#""lunar""#
        );
    }

    #[test]
    fn test_locale_parse_and_serde() {
        assert_eq!("en".parse::<Locale>(), Ok(Locale::Default));
        assert_eq!("ar".parse::<Locale>(), Ok(Locale::Secondary));
        assert!(matches!(
            "fr".parse::<Locale>(),
            Err(ParseError::UnknownLocale(_))
        ));

        assert_eq!(serde_json::to_string(&Locale::Secondary).unwrap(), r#""ar""#);
        let locale: Locale = serde_json::from_str(r#""en""#).unwrap();
        assert_eq!(locale, Locale::Default);
        assert!(Locale::Secondary.is_rtl());
        assert!(!Locale::Default.is_rtl());
    }

    #[test]
    fn test_first_day_of_week_try_from() {
        assert_eq!(FirstDayOfWeek::try_from(0), Ok(FirstDayOfWeek::Sunday));
        assert_eq!(FirstDayOfWeek::try_from(1), Ok(FirstDayOfWeek::Monday));
        assert_eq!(
            FirstDayOfWeek::try_from(2),
            Err(ParseError::InvalidFirstDayOfWeek(2))
        );
        assert_eq!(FirstDayOfWeek::Monday.index(), 1);

        let parsed: FirstDayOfWeek = serde_json::from_str("1").unwrap();
        assert_eq!(parsed, FirstDayOfWeek::Monday);
        assert!(serde_json::from_str::<FirstDayOfWeek>("7").is_err());
    }

    #[test]
    fn test_is_leap_year_cases() {
        struct TestCase {
            year: i32,
            is_leap: bool,
            description: &'static str,
        }

        let cases = [
            TestCase {
                year: 2024,
                is_leap: true,
                description: "divisible by 4",
            },
            TestCase {
                year: 2023,
                is_leap: false,
                description: "not divisible by 4",
            },
            TestCase {
                year: 1900,
                is_leap: false,
                description: "century not divisible by 400",
            },
            TestCase {
                year: 2000,
                is_leap: true,
                description: "divisible by 400",
            },
            TestCase {
                year: 624,
                is_leap: true,
                description: "early proleptic year",
            },
            TestCase {
                year: 0,
                is_leap: true,
                description: "year zero is divisible by 400",
            },
            TestCase {
                year: -1,
                is_leap: false,
                description: "negative year",
            },
        ];

        for case in &cases {
            assert_eq!(
                is_leap_year(case.year),
                case.is_leap,
                "Year {} ({})",
                case.year,
                case.description
            );
        }
    }

    #[test]
    fn test_days_in_solar_month() {
        let expected = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
        for month in 1..=12 {
            assert_eq!(
                days_in_solar_month(2023, month),
                expected[month as usize],
                "Month {month} has incorrect day count"
            );
        }
        assert_eq!(days_in_solar_month(2024, 2), 29);
        assert_eq!(days_in_solar_month(1900, 2), 28);
        assert_eq!(days_in_solar_month(2000, 2), 29);
    }

    #[test]
    fn test_days_in_solar_month_at_date_limits() {
        let max = SolarDate::MAX;
        #[allow(clippy::cast_possible_wrap)]
        let last_month = days_in_solar_month(max.year(), max.month() as i32);
        assert_eq!(last_month, 31);
        assert_eq!(days_in_solar_month(i32::MAX, 2), 31);
        assert!(!is_leap_year(i32::MAX));
    }

    #[test]
    fn test_days_in_solar_month_normalizes_month() {
        // Month 14 of 2023 is February 2024
        assert_eq!(days_in_solar_month(2023, 14), 29);
        // Month 0 of 2024 is December 2023
        assert_eq!(days_in_solar_month(2024, 0), 31);
        assert_eq!(normalize_month(2024, 0), (2023, 12));
        assert_eq!(normalize_month(2024, -12), (2022, 12));
        assert_eq!(normalize_month(2023, 13), (2024, 1));
    }
}
