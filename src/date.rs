use crate::error::{Error, RangeError};
use crate::iso8601::days_in_month;

/// Supported proleptic year range. Wide enough for any historical date while
/// keeping every day count in the crate within i32.
pub(crate) const MIN_YEAR: i32 = -999_999;
pub(crate) const MAX_YEAR: i32 = 999_999;

/// A date on the proleptic Gregorian calendar, the canonical representation
/// shared by every calendar variant. Era-based calendars convert to and from
/// this triple at their boundary and never carry era-relative years
/// internally.
///
/// The day is always valid for the year and month; no value of this type can
/// hold a day that overflows its month. Ordering is chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate {
    year: i32,
    month: u8,
    day: u8,
}

impl CalendarDate {
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, Error> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(RangeError::YearOutOfRange(year as i64).into());
        }
        if !(1..=12).contains(&month) {
            return Err(RangeError::MonthOutOfRange(month as i32).into());
        }
        let last = days_in_month(year as i64, month);
        if !(1..=last).contains(&day) {
            return Err(RangeError::DayOutOfRange(day as i32).into());
        }
        Ok(CalendarDate { year, month, day })
    }

    /// The triple must already have been regulated.
    pub(crate) fn from_regulated(year: i32, month: u8, day: u8) -> Self {
        debug_assert!((MIN_YEAR..=MAX_YEAR).contains(&year));
        debug_assert!((1..=12).contains(&month));
        debug_assert!(day >= 1 && day <= days_in_month(year as i64, month));
        CalendarDate { year, month, day }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u8 {
        self.month
    }

    pub fn day(&self) -> u8 {
        self.day
    }
}

/// The year and month half of a date. The reference day that anchors it to a
/// full date belongs to the caller, not to this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct YearMonth {
    year: i32,
    month: u8,
}

impl YearMonth {
    pub(crate) fn new(year: i32, month: u8) -> Self {
        YearMonth { year, month }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u8 {
        self.month
    }
}

/// The month and day half of a date, validated against a fixed leap
/// reference year so February 29 is representable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MonthDay {
    month: u8,
    day: u8,
}

impl MonthDay {
    pub(crate) fn new(month: u8, day: u8) -> Self {
        MonthDay { month, day }
    }

    pub fn month(&self) -> u8 {
        self.month
    }

    pub fn day(&self) -> u8 {
        self.day
    }
}
