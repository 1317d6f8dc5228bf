//! Conversion between the approximated lunar calendar and solar dates.
//!
//! Both directions use floor arithmetic on mean lengths, so they are not
//! exact inverses: `lunar_to_solar(solar_to_lunar(d))` is `d` or the day
//! before it.

use crate::consts::{
    DAYS_IN_LUNAR_MONTH, DAYS_IN_WEEK, EPOCH_DAY, EPOCH_MONTH, EPOCH_YEAR, FIRST_MONTH,
    LUNAR_MONTH_LEN, LUNAR_YEAR_LEN, MIN_DAY, MONTHS_IN_YEAR,
};
use crate::prelude::*;
use crate::types::{
    CalendarKind, FirstDayOfWeek, LunarDate, SolarDate, days_in_solar_month, normalize_month,
};
use chrono::Days;

/// Day zero of the lunar era, 622-07-16.
pub fn epoch() -> SolarDate {
    SolarDate::from_ymd_opt(EPOCH_YEAR, EPOCH_MONTH, EPOCH_DAY).unwrap_or_default()
}

/// Moves `base` by `offset` days, saturating at the representable range.
fn shift_days(base: SolarDate, offset: i64) -> SolarDate {
    let days = Days::new(offset.unsigned_abs());
    let shifted = if offset >= 0 {
        base.checked_add_days(days)
    } else {
        base.checked_sub_days(days)
    };

    shifted.unwrap_or_else(|| {
        tracing::warn!(%base, offset, "day offset outside the supported date range, saturating");
        if offset >= 0 {
            SolarDate::MAX
        } else {
            SolarDate::MIN
        }
    })
}

/// Converts a lunar date to its solar equivalent.
///
/// Month and day are not validated: month 13 or day 0 extrapolate to some
/// neighbouring solar date instead of failing.
pub fn lunar_to_solar(year: i32, month: i32, day: i32) -> SolarDate {
    #[allow(clippy::suboptimal_flops)]
    let offset = (f64::from(year) - 1.0) * LUNAR_YEAR_LEN
        + (f64::from(month) - 1.0) * LUNAR_MONTH_LEN
        + (f64::from(day) - 1.0);

    // float to int casts saturate, shift_days handles the rest
    #[allow(clippy::cast_possible_truncation)]
    let offset = offset.floor() as i64;
    shift_days(epoch(), offset)
}

/// Year and real-valued day remainder within that year, before any month split.
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
fn split_year(date: SolarDate) -> (i32, f64) {
    let diff_days = date.signed_duration_since(epoch()).num_days() as f64;
    let year = (diff_days / LUNAR_YEAR_LEN).floor() as i32 + 1;
    (year, diff_days % LUNAR_YEAR_LEN)
}

/// Month and day straight from the mean-length formula. Month can reach 13
/// in the last few hundredths of a day before a lunar year boundary.
#[cfg(test)]
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn solar_to_lunar_unclamped(date: SolarDate) -> LunarDate {
    let (year, rem_days) = split_year(date);
    LunarDate {
        year,
        month: (rem_days / LUNAR_MONTH_LEN).floor() as i32 + 1,
        day: (rem_days % LUNAR_MONTH_LEN).floor() as i32 + 1,
    }
}

/// Converts a solar date to the lunar calendar.
///
/// For dates on or after [`epoch`] the result has `year >= 1`, `month` in
/// `1..=12` and `day` in `1..=30`. When the mean-length formula overshoots
/// into a 13th month, the date is pinned to the end of month 12. Dates
/// before the epoch yield a clamped but otherwise meaningless value.
#[allow(clippy::cast_possible_truncation, clippy::suboptimal_flops)]
pub fn solar_to_lunar(date: SolarDate) -> LunarDate {
    let (year, rem_days) = split_year(date);

    let raw_month = (rem_days / LUNAR_MONTH_LEN).floor() as i32 + 1;
    let month = raw_month.clamp(FIRST_MONTH as i32, MONTHS_IN_YEAR as i32);

    let raw_day = if month == raw_month {
        (rem_days % LUNAR_MONTH_LEN).floor() as i32 + 1
    } else {
        tracing::debug!(%date, year, raw_month, "lunar month drifted out of range, clamping");
        f64::from(month - 1)
            .mul_add(-LUNAR_MONTH_LEN, rem_days)
            .floor() as i32
            + 1
    };
    let day = raw_day.clamp(MIN_DAY as i32, DAYS_IN_LUNAR_MONTH as i32);

    LunarDate { year, month, day }
}

/// Every lunar month has 30 days in this model.
pub const fn days_in_lunar_month() -> u32 {
    DAYS_IN_LUNAR_MONTH
}

pub fn days_in_month(year: i32, month: i32, kind: CalendarKind) -> u32 {
    match kind {
        CalendarKind::Lunar => days_in_lunar_month(),
        CalendarKind::Solar => days_in_solar_month(year, month),
    }
}

/// Builds a solar date the way the platform date primitive does: months
/// outside `1..=12` roll into neighbouring years and days past the end of
/// the month roll into the next month.
pub fn solar_date(year: i32, month: i32, day: i32) -> SolarDate {
    let (year, month) = normalize_month(year, month);
    let first = SolarDate::from_ymd_opt(year, month, MIN_DAY).unwrap_or_else(|| {
        tracing::warn!(year, month, "solar month outside the supported date range, saturating");
        if year > 0 {
            SolarDate::MAX
        } else {
            SolarDate::MIN
        }
    });
    shift_days(first, i64::from(day) - 1)
}

/// Weekday of `date`, 0 = Sunday through 6 = Saturday.
pub fn weekday_index(date: SolarDate) -> u32 {
    date.weekday().num_days_from_sunday()
}

/// Number of blank cells before day 1 in a month grid whose first column is
/// `first_day_of_week`. Always in `0..=6`.
pub fn first_weekday_offset(
    year: i32,
    month: i32,
    kind: CalendarKind,
    first_day_of_week: FirstDayOfWeek,
) -> u32 {
    let first = match kind {
        CalendarKind::Lunar => lunar_to_solar(year, month, 1),
        CalendarKind::Solar => solar_date(year, month, 1),
    };
    (weekday_index(first) + DAYS_IN_WEEK - first_day_of_week.index()) % DAYS_IN_WEEK
}
