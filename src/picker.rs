//! Clock-free state logic of a dual-calendar date picker.
//!
//! The host owns rendering and input; it forwards user actions to
//! [`PickerState`] and reads back display text, the status summary and
//! [`MonthView`] grids. Anything that depends on the current date takes
//! `today` as an argument; [`today`] reads the wall clock for hosts that
//! want it.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::consts::{
    DAYS_IN_WEEK, FIRST_MONTH, LUNAR_YEAR_RANGE_END, LUNAR_YEAR_RANGE_START, MONTHS_IN_YEAR,
    SOLAR_YEAR_RANGE_END, SOLAR_YEAR_RANGE_START,
};
use crate::convert::{
    days_in_month, first_weekday_offset, lunar_to_solar, solar_date, solar_to_lunar,
    weekday_index,
};
use crate::format::{FormatPattern, Summary, format_date, summary};
use crate::names::names;
use crate::prelude::*;
use crate::types::{
    CalendarKind, FirstDayOfWeek, Locale, LunarDate, SolarDate, days_in_solar_month,
};

/// Error type for picker configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// Year range start is after its end.
    #[error("Invalid {kind} year range: start ({start}) is after end ({end})")]
    InvalidYearRange {
        kind: CalendarKind,
        start: i32,
        end: i32,
    },

    /// Configuration text could not be parsed.
    #[error("Invalid picker configuration: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Inclusive range of years offered by a year selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[display(fmt = "{start}..={end}")]
pub struct YearRange {
    pub start: i32,
    pub end: i32,
}

impl YearRange {
    pub const fn new(start: i32, end: i32) -> Self {
        Self { start, end }
    }

    pub const fn years(&self) -> RangeInclusive<i32> {
        self.start..=self.end
    }

    pub const fn contains(&self, year: i32) -> bool {
        self.start <= year && year <= self.end
    }

    /// Checks the range is not inverted.
    ///
    /// # Errors
    /// Returns `ConfigError::InvalidYearRange` if start > end.
    pub fn validate(&self, kind: CalendarKind) -> Result<(), ConfigError> {
        if self.start > self.end {
            return Err(ConfigError::InvalidYearRange {
                kind,
                start: self.start,
                end: self.end,
            });
        }
        Ok(())
    }
}

/// Options the host passes through to the picker logic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
#[allow(clippy::struct_excessive_bools)]
pub struct PickerConfig {
    pub locale: Locale,
    pub format: FormatPattern,
    pub first_day_of_week: FirstDayOfWeek,
    pub default_calendar: CalendarKind,
    /// Selecting in one calendar moves the other calendar's view to match
    pub sync_calendars: bool,
    pub close_on_select: bool,
    pub highlight_today: bool,
    pub highlight_weekends: bool,
    pub show_both_calendars: bool,
    pub allow_calendar_switch: bool,
    pub lunar_year_range: YearRange,
    pub solar_year_range: YearRange,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            locale: Locale::default(),
            format: FormatPattern::default(),
            first_day_of_week: FirstDayOfWeek::default(),
            default_calendar: CalendarKind::Lunar,
            sync_calendars: true,
            close_on_select: true,
            highlight_today: true,
            highlight_weekends: true,
            show_both_calendars: false,
            allow_calendar_switch: true,
            lunar_year_range: YearRange::new(LUNAR_YEAR_RANGE_START, LUNAR_YEAR_RANGE_END),
            solar_year_range: YearRange::new(SOLAR_YEAR_RANGE_START, SOLAR_YEAR_RANGE_END),
        }
    }
}

impl PickerConfig {
    /// Parses a TOML document. Missing keys take their defaults.
    ///
    /// # Errors
    /// Returns `ConfigError::Toml` for malformed input or unknown values and
    /// `ConfigError::InvalidYearRange` for an inverted year range.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// # Errors
    /// Returns `ConfigError::InvalidYearRange` if either year range is inverted.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.lunar_year_range.validate(CalendarKind::Lunar)?;
        self.solar_year_range.validate(CalendarKind::Solar)
    }

    pub const fn year_range(&self, kind: CalendarKind) -> YearRange {
        match kind {
            CalendarKind::Lunar => self.lunar_year_range,
            CalendarKind::Solar => self.solar_year_range,
        }
    }
}

/// A picked date in both calendars, as handed to the host's change callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Selection {
    pub date: SolarDate,
    pub lunar: LunarDate,
}

/// Current date from the local wall clock.
pub fn today() -> SolarDate {
    chrono::Local::now().date_naive()
}

/// Whether the `kind` calendar's `year`-`month`-`day` is `today`.
pub fn is_today(year: i32, month: i32, day: i32, kind: CalendarKind, today: SolarDate) -> bool {
    match kind {
        CalendarKind::Lunar => solar_to_lunar(today) == LunarDate::new(year, month, day),
        CalendarKind::Solar => solar_date(year, month, day) == today,
    }
}

/// Sunday and Saturday, by Sunday-based weekday index.
pub const fn is_weekend(weekday_index: u32) -> bool {
    matches!(weekday_index % DAYS_IN_WEEK, 0 | 6)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekdayHeader {
    pub label: &'static str,
    pub is_weekend: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayCell {
    pub day: u32,
    pub is_today: bool,
    pub is_selected: bool,
    pub is_weekend: bool,
}

/// One month of one calendar, laid out for a seven-column grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthView {
    pub kind: CalendarKind,
    pub year: i32,
    pub month: i32,
    pub title: &'static str,
    /// Empty cells before day 1
    pub leading_blanks: u32,
    pub weekday_headers: Vec<WeekdayHeader>,
    pub cells: Vec<DayCell>,
}

/// State of an open or closed picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerState {
    config: PickerConfig,
    selected: Option<Selection>,
    active: CalendarKind,
    open: bool,
    lunar_display: LunarDate,
    solar_display: SolarDate,
}

impl PickerState {
    /// Both calendar views start on `value`, or on `today` when nothing is selected.
    pub fn new(config: PickerConfig, value: Option<SolarDate>, today: SolarDate) -> Self {
        let shown = value.unwrap_or(today);
        Self {
            active: config.default_calendar,
            config,
            selected: value.map(|date| Selection {
                date,
                lunar: solar_to_lunar(date),
            }),
            open: false,
            lunar_display: solar_to_lunar(shown),
            solar_display: shown,
        }
    }

    pub const fn config(&self) -> &PickerConfig {
        &self.config
    }

    pub fn selected(&self) -> Option<SolarDate> {
        self.selected.map(|selection| selection.date)
    }

    /// The picked date in both calendars, with the lunar side as it was picked.
    pub const fn selection(&self) -> Option<Selection> {
        self.selected
    }

    pub const fn active_calendar(&self) -> CalendarKind {
        self.active
    }

    pub const fn is_open(&self) -> bool {
        self.open
    }

    pub const fn lunar_display(&self) -> LunarDate {
        self.lunar_display
    }

    pub const fn solar_display(&self) -> SolarDate {
        self.solar_display
    }

    /// Opens or closes the popup. A disabled input never opens.
    pub fn toggle_open(&mut self, disabled: bool) {
        if disabled {
            return;
        }
        self.open = !self.open;
        tracing::trace!(open = self.open, "picker toggled");
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Picks a day from the `kind` calendar grid.
    pub fn select(&mut self, year: i32, month: i32, day: i32, kind: CalendarKind) -> Selection {
        let selection = match kind {
            CalendarKind::Lunar => {
                let date = lunar_to_solar(year, month, day);
                if self.config.sync_calendars {
                    self.solar_display = date;
                }
                Selection {
                    date,
                    lunar: LunarDate::new(year, month, day),
                }
            }
            CalendarKind::Solar => {
                let date = solar_date(year, month, day);
                let lunar = solar_to_lunar(date);
                if self.config.sync_calendars {
                    self.lunar_display = lunar;
                }
                Selection { date, lunar }
            }
        };

        self.selected = Some(selection);
        if self.config.close_on_select {
            self.open = false;
        }
        tracing::trace!(%kind, date = %selection.date, lunar = %selection.lunar, "date selected");
        selection
    }

    /// Selects `today` and moves both views to it.
    pub fn select_today(&mut self, today: SolarDate) -> Selection {
        let selection = Selection {
            date: today,
            lunar: solar_to_lunar(today),
        };
        self.selected = Some(selection);
        self.lunar_display = selection.lunar;
        self.solar_display = today;
        if self.config.close_on_select {
            self.open = false;
        }
        selection
    }

    /// Drops the selection. Views stay where they are.
    pub fn clear(&mut self) {
        self.selected = None;
        tracing::trace!("selection cleared");
    }

    /// Flips the active calendar. No-op when switching is disabled.
    pub fn switch_calendar(&mut self) {
        self.set_active_calendar(self.active.toggled());
    }

    pub fn set_active_calendar(&mut self, kind: CalendarKind) {
        if !self.config.allow_calendar_switch {
            tracing::trace!(active = %self.active, "calendar switch disabled");
            return;
        }
        self.active = kind;
    }

    /// Calendars the popup renders, lunar first when both are shown.
    pub fn visible_calendars(&self) -> Vec<CalendarKind> {
        if self.config.show_both_calendars {
            vec![CalendarKind::Lunar, CalendarKind::Solar]
        } else {
            vec![self.active]
        }
    }

    pub fn prev_month(&mut self, kind: CalendarKind) {
        self.shift_month(kind, -1);
    }

    pub fn next_month(&mut self, kind: CalendarKind) {
        self.shift_month(kind, 1);
    }

    fn shift_month(&mut self, kind: CalendarKind, delta: i32) {
        match kind {
            CalendarKind::Lunar => {
                let display = self.lunar_display;
                let month = display.month + delta;
                self.lunar_display = if month < FIRST_MONTH as i32 {
                    LunarDate::new(
                        display.year.saturating_sub(1),
                        MONTHS_IN_YEAR as i32,
                        display.day,
                    )
                } else if month > MONTHS_IN_YEAR as i32 {
                    LunarDate::new(
                        display.year.saturating_add(1),
                        FIRST_MONTH as i32,
                        display.day,
                    )
                } else {
                    LunarDate::new(display.year, month, display.day)
                };
            }
            CalendarKind::Solar => {
                let display = self.solar_display;
                #[allow(clippy::cast_possible_wrap)]
                let month = display.month() as i32 + delta;
                self.solar_display = Self::solar_in_month(display.year(), month, display.day());
            }
        }
    }

    /// Same day in another solar month, pulled back to that month's last day
    /// when it is shorter.
    #[allow(clippy::cast_possible_wrap)]
    fn solar_in_month(year: i32, month: i32, day: u32) -> SolarDate {
        let day = day.min(days_in_solar_month(year, month));
        solar_date(year, month, day as i32)
    }

    /// Jumps the `kind` view to `month`, clamped into `1..=12`.
    pub fn set_display_month(&mut self, kind: CalendarKind, month: i32) {
        let month = month.clamp(FIRST_MONTH as i32, MONTHS_IN_YEAR as i32);
        match kind {
            CalendarKind::Lunar => self.lunar_display.month = month,
            CalendarKind::Solar => {
                let display = self.solar_display;
                self.solar_display = Self::solar_in_month(display.year(), month, display.day());
            }
        }
    }

    pub fn set_display_year(&mut self, kind: CalendarKind, year: i32) {
        match kind {
            CalendarKind::Lunar => self.lunar_display.year = year,
            CalendarKind::Solar => {
                let display = self.solar_display;
                #[allow(clippy::cast_possible_wrap)]
                let month = display.month() as i32;
                self.solar_display = Self::solar_in_month(year, month, display.day());
            }
        }
    }

    /// Text for the input field, empty when nothing is selected.
    pub fn display_text(&self) -> String {
        self.selected
            .map(|selection| {
                format_date(
                    selection.date,
                    selection.lunar,
                    self.config.format,
                    self.config.locale,
                    self.active,
                )
            })
            .unwrap_or_default()
    }

    pub fn summary(&self) -> Option<Summary> {
        self.selected
            .map(|selection| summary(selection.date, selection.lunar, self.config.locale))
    }

    /// Years offered by the `kind` year selector.
    pub const fn year_options(&self, kind: CalendarKind) -> RangeInclusive<i32> {
        self.config.year_range(kind).years()
    }

    /// Grid for the month currently shown in the `kind` calendar.
    pub fn month_view(&self, kind: CalendarKind, today: SolarDate) -> MonthView {
        let (year, month) = match kind {
            CalendarKind::Lunar => (self.lunar_display.year, self.lunar_display.month),
            #[allow(clippy::cast_possible_wrap)]
            CalendarKind::Solar => (self.solar_display.year(), self.solar_display.month() as i32),
        };
        let table = names(self.config.locale);
        let first_day = self.config.first_day_of_week;

        let weekday_headers = (0..DAYS_IN_WEEK)
            .map(|column| {
                let weekday = (column + first_day.index()) % DAYS_IN_WEEK;
                WeekdayHeader {
                    label: table.weekday_min(weekday),
                    is_weekend: self.config.highlight_weekends && is_weekend(weekday),
                }
            })
            .collect();

        let cells = (1..=days_in_month(year, month, kind))
            .map(|day| {
                #[allow(clippy::cast_possible_wrap)]
                let day_i32 = day as i32;
                let date = match kind {
                    CalendarKind::Lunar => lunar_to_solar(year, month, day_i32),
                    CalendarKind::Solar => solar_date(year, month, day_i32),
                };
                let is_selected = self.selected.is_some_and(|selection| match kind {
                    CalendarKind::Lunar => selection.lunar == LunarDate::new(year, month, day_i32),
                    CalendarKind::Solar => selection.date == date,
                });
                DayCell {
                    day,
                    is_today: self.config.highlight_today
                        && is_today(year, month, day_i32, kind, today),
                    is_selected,
                    is_weekend: self.config.highlight_weekends && is_weekend(weekday_index(date)),
                }
            })
            .collect();

        MonthView {
            kind,
            year,
            month,
            title: table.month(kind, month),
            leading_blanks: first_weekday_offset(year, month, kind, first_day),
            weekday_headers,
            cells,
        }
    }
}
