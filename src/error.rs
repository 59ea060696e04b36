use thiserror::Error;

use crate::fields::Field;

/// A field record that cannot be interpreted: a required field is missing,
/// two fields contradict each other, or a value is outside its domain.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("missing required field '{0}'")]
    MissingField(Field),

    /// Neither `month` nor `monthCode` was supplied.
    #[error("either month or monthCode is required")]
    MissingMonth,

    /// A month-day operation received `month` with neither `year` nor
    /// `monthCode` to anchor it.
    #[error("either year or monthCode is required with month")]
    MissingYearOrMonthCode,

    /// An era-based calendar needs `year`, or both `era` and `eraYear`.
    #[error("must include 'year' and/or both 'era' and 'eraYear'")]
    MissingYearOrEra,

    #[error("monthCode '{code}' does not match month {month}")]
    MonthConflict { code: String, month: i32 },

    #[error("'era' and 'eraYear' conflict with 'year'")]
    EraConflict,

    #[error("eraYear {0} is before the first year of the era")]
    EraYearOutOfRange(i32),

    #[error("unknown era '{0}'")]
    UnknownEra(String),
}

/// A numeric field outside its calendar-valid range, or a malformed
/// month-code string. Under the `Constrain` overflow policy most of these
/// are clamped away instead of raised.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RangeError {
    #[error("month {0} is out of range")]
    MonthOutOfRange(i32),

    #[error("day {0} is out of range")]
    DayOutOfRange(i32),

    #[error("year {0} is out of range")]
    YearOutOfRange(i64),

    #[error("invalid month code '{0}'")]
    InvalidMonthCode(String),

    #[error("unknown calendar '{0}'")]
    UnknownCalendar(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Range(#[from] RangeError),
}
