/// Solar year of the lunar era's day zero
pub const EPOCH_YEAR: i32 = 622;
/// Solar month of the lunar era's day zero (July)
pub const EPOCH_MONTH: u32 = 7;
/// Solar day of the lunar era's day zero
pub const EPOCH_DAY: u32 = 16;

/// Mean length of a lunar year in days
pub const LUNAR_YEAR_LEN: f64 = 354.367;
/// Mean length of a synodic month in days
pub const LUNAR_MONTH_LEN: f64 = 29.53;

/// Every lunar month is modelled with the same length
pub const DAYS_IN_LUNAR_MONTH: u32 = 30;

/// Months in a year, for both calendars
pub const MONTHS_IN_YEAR: u32 = 12;
/// First month of a year
pub const FIRST_MONTH: u32 = 1;
/// First day of month, used for lower bounds
pub const MIN_DAY: u32 = 1;
/// Number of weekday columns in a month grid
pub const DAYS_IN_WEEK: u32 = 7;

/// Shortest solar month (February outside leap years)
pub const MIN_DAYS_IN_SOLAR_MONTH: u32 = 28;
/// Longest solar month
pub const MAX_DAYS_IN_SOLAR_MONTH: u32 = 31;

/// Default first year offered by the lunar year selector
pub const LUNAR_YEAR_RANGE_START: i32 = 1400;
/// Default last year offered by the lunar year selector
pub const LUNAR_YEAR_RANGE_END: i32 = 1500;
/// Default first year offered by the solar year selector
pub const SOLAR_YEAR_RANGE_START: i32 = 1970;
/// Default last year offered by the solar year selector
pub const SOLAR_YEAR_RANGE_END: i32 = 2100;
