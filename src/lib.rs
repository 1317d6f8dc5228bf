//! Hijri/Gregorian conversion and date formatting for a dual-calendar picker.
//!
//! The lunar calendar is approximated with mean lengths (354.367 days per
//! year, 29.53 days per month) counted from 622-07-16. It is not an
//! observational or tabular Hijri calendar: converted dates can drift by a
//! day or so from published calendars, and a solar date converted to lunar
//! and back may land one day earlier than where it started.

mod consts;
mod convert;
mod format;
mod names;
mod picker;
mod prelude;
mod types;

pub use consts::*;
pub use convert::{
    days_in_lunar_month, days_in_month, epoch, first_weekday_offset, lunar_to_solar, solar_date,
    solar_to_lunar, weekday_index,
};
pub use format::{FormatPattern, Summary, format_date, format_date_str, summary};
pub use names::{LocaleNames, names};
pub use picker::{
    ConfigError, DayCell, MonthView, PickerConfig, PickerState, Selection, WeekdayHeader,
    YearRange, is_today, is_weekend, today,
};
pub use types::{
    CalendarKind, FirstDayOfWeek, Locale, LunarDate, SolarDate, days_in_solar_month, is_leap_year,
};

use crate::prelude::*;

/// Errors produced when parsing one of the crate's enumerations from text.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Unknown format pattern: {_0}")]
    UnknownPattern(String),
    #[display(fmt = "Unknown locale: {_0} (expected en or ar)")]
    UnknownLocale(String),
    #[display(fmt = "Unknown calendar: {_0} (expected lunar or solar)")]
    UnknownCalendar(String),
    #[display(fmt = "Invalid first day of week: {_0} (must be 0 or 1)")]
    InvalidFirstDayOfWeek(u8),
}

impl std::error::Error for ParseError {}
