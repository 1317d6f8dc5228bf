//! Static month and weekday name tables for the two supported locales.

use crate::consts::{DAYS_IN_WEEK, FIRST_MONTH, MONTHS_IN_YEAR};
use crate::types::{CalendarKind, Locale};

/// Every string a locale needs to render dates and the picker chrome.
#[derive(Debug, PartialEq, Eq)]
pub struct LocaleNames {
    pub lunar_months: [&'static str; 12],
    pub lunar_months_short: [&'static str; 12],
    pub solar_months: [&'static str; 12],
    pub solar_months_short: [&'static str; 12],
    pub weekdays_long: [&'static str; 7],
    pub weekdays_short: [&'static str; 7],
    /// Two-letter (or single glyph) headers for the month grid
    pub weekdays_min: [&'static str; 7],
    pub lunar_label: &'static str,
    pub solar_label: &'static str,
    pub today_label: &'static str,
    pub clear_label: &'static str,
    /// Glyph on the "previous month" button
    pub prev_arrow: &'static str,
    /// Glyph on the "next month" button
    pub next_arrow: &'static str,
    pub is_rtl: bool,
}

static DEFAULT_NAMES: LocaleNames = LocaleNames {
    lunar_months: [
        "Muharram",
        "Safar",
        "Rabi' al-awwal",
        "Rabi' al-thani",
        "Jumada al-awwal",
        "Jumada al-thani",
        "Rajab",
        "Sha'ban",
        "Ramadan",
        "Shawwal",
        "Dhu al-Qa'dah",
        "Dhu al-Hijjah",
    ],
    lunar_months_short: [
        "Muh", "Saf", "Rab1", "Rab2", "Jum1", "Jum2", "Raj", "Sha", "Ram", "Shaw", "DhuQ", "DhuH",
    ],
    solar_months: [
        "January",
        "February",
        "March",
        "April",
        "May",
        "June",
        "July",
        "August",
        "September",
        "October",
        "November",
        "December",
    ],
    solar_months_short: [
        "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
    ],
    weekdays_long: [
        "Sunday",
        "Monday",
        "Tuesday",
        "Wednesday",
        "Thursday",
        "Friday",
        "Saturday",
    ],
    weekdays_short: ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"],
    weekdays_min: ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"],
    lunar_label: "Hijri",
    solar_label: "Gregorian",
    today_label: "Today",
    clear_label: "Clear",
    prev_arrow: "◀",
    next_arrow: "▶",
    is_rtl: false,
};

static SECONDARY_NAMES: LocaleNames = LocaleNames {
    lunar_months: [
        "محرم",
        "صفر",
        "ربيع الأول",
        "ربيع الآخر",
        "جمادى الأولى",
        "جمادى الآخرة",
        "رجب",
        "شعبان",
        "رمضان",
        "شوال",
        "ذو القعدة",
        "ذو الحجة",
    ],
    lunar_months_short: [
        "محر", "صفر", "رب١", "رب٢", "جم١", "جم٢", "رجب", "شعب", "رمض", "شوا", "ذقع", "ذحج",
    ],
    solar_months: [
        "يناير",
        "فبراير",
        "مارس",
        "أبريل",
        "مايو",
        "يونيو",
        "يوليو",
        "أغسطس",
        "سبتمبر",
        "أكتوبر",
        "نوفمبر",
        "ديسمبر",
    ],
    solar_months_short: [
        "ينا", "فبر", "مار", "أبر", "ماي", "يون", "يول", "أغس", "سبت", "أكت", "نوف", "ديس",
    ],
    weekdays_long: [
        "الأحد",
        "الإثنين",
        "الثلاثاء",
        "الأربعاء",
        "الخميس",
        "الجمعة",
        "السبت",
    ],
    weekdays_short: ["أحد", "إثن", "ثلا", "أرب", "خمي", "جمع", "سبت"],
    weekdays_min: ["ح", "ن", "ث", "ر", "خ", "ج", "س"],
    lunar_label: "هجري",
    solar_label: "ميلادي",
    today_label: "اليوم",
    clear_label: "مسح",
    // arrows point the other way in a right-to-left layout
    prev_arrow: "▶",
    next_arrow: "◀",
    is_rtl: true,
};

/// Name tables for `locale`.
pub fn names(locale: Locale) -> &'static LocaleNames {
    match locale {
        Locale::Default => &DEFAULT_NAMES,
        Locale::Secondary => &SECONDARY_NAMES,
    }
}

/// Table slot for a 1-based month, clamped into `1..=12`.
#[allow(clippy::cast_sign_loss)]
const fn month_slot(month: i32) -> usize {
    let month = if month < FIRST_MONTH as i32 {
        FIRST_MONTH as i32
    } else if month > MONTHS_IN_YEAR as i32 {
        MONTHS_IN_YEAR as i32
    } else {
        month
    };
    (month - 1) as usize
}

/// Table slot for a weekday index, wrapped into `0..=6`.
const fn weekday_slot(index: u32) -> usize {
    (index % DAYS_IN_WEEK) as usize
}

impl LocaleNames {
    /// Long month name. Months outside `1..=12` are clamped.
    pub const fn month(&self, kind: CalendarKind, month: i32) -> &'static str {
        match kind {
            CalendarKind::Lunar => self.lunar_months[month_slot(month)],
            CalendarKind::Solar => self.solar_months[month_slot(month)],
        }
    }

    /// Short month name. Months outside `1..=12` are clamped.
    pub const fn month_short(&self, kind: CalendarKind, month: i32) -> &'static str {
        match kind {
            CalendarKind::Lunar => self.lunar_months_short[month_slot(month)],
            CalendarKind::Solar => self.solar_months_short[month_slot(month)],
        }
    }

    pub const fn months(&self, kind: CalendarKind) -> &[&'static str; 12] {
        match kind {
            CalendarKind::Lunar => &self.lunar_months,
            CalendarKind::Solar => &self.solar_months,
        }
    }

    /// 0 = Sunday
    pub const fn weekday_long(&self, index: u32) -> &'static str {
        self.weekdays_long[weekday_slot(index)]
    }

    pub const fn weekday_short(&self, index: u32) -> &'static str {
        self.weekdays_short[weekday_slot(index)]
    }

    pub const fn weekday_min(&self, index: u32) -> &'static str {
        self.weekdays_min[weekday_slot(index)]
    }

    pub const fn calendar_label(&self, kind: CalendarKind) -> &'static str {
        match kind {
            CalendarKind::Lunar => self.lunar_label,
            CalendarKind::Solar => self.solar_label,
        }
    }
}
