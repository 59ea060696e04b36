use crate::date::{CalendarDate, MonthDay, YearMonth, MAX_YEAR, MIN_YEAR};
use crate::error::{Error, RangeError};
use crate::iso8601::math::days_in_month;

/// How out-of-range month and day values are handled: clamped into the
/// valid range, or refused. Supplied per operation, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overflow {
    Constrain,
    Reject,
}

/// Reference year against which day-of-month is validated for month-day
/// values. A leap year, so February 29 is accepted as a month-day.
const MONTH_DAY_REFERENCE_YEAR: i64 = 1972;

/// Validates or constrains a raw (year, month, day) triple into a date.
pub fn regulate_date(
    year: i32,
    month: i32,
    day: i32,
    overflow: Overflow,
) -> Result<CalendarDate, Error> {
    if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
        return Err(RangeError::YearOutOfRange(year as i64).into());
    }
    let (month, day) = regulate_month_and_day(year as i64, month, day, overflow)?;
    Ok(CalendarDate::from_regulated(year, month, day))
}

/// The year-month analogue of `regulate_date`: no day to validate.
pub fn regulate_year_month(year: i32, month: i32, overflow: Overflow) -> Result<YearMonth, Error> {
    if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
        return Err(RangeError::YearOutOfRange(year as i64).into());
    }
    let month = regulate_month(month, overflow)?;
    Ok(YearMonth::new(year, month))
}

/// The month-day analogue of `regulate_date`: the day is validated against
/// the fixed reference year rather than a real one.
pub fn regulate_month_day(month: i32, day: i32, overflow: Overflow) -> Result<MonthDay, Error> {
    let (month, day) = regulate_month_and_day(MONTH_DAY_REFERENCE_YEAR, month, day, overflow)?;
    Ok(MonthDay::new(month, day))
}

fn regulate_month(month: i32, overflow: Overflow) -> Result<u8, Error> {
    match overflow {
        Overflow::Reject => {
            if !(1..=12).contains(&month) {
                return Err(RangeError::MonthOutOfRange(month).into());
            }
            Ok(month as u8)
        }
        Overflow::Constrain => Ok(month.clamp(1, 12) as u8),
    }
}

fn regulate_month_and_day(
    year: i64,
    month: i32,
    day: i32,
    overflow: Overflow,
) -> Result<(u8, u8), Error> {
    let month = regulate_month(month, overflow)?;
    let last = days_in_month(year, month) as i32;
    match overflow {
        Overflow::Reject => {
            if !(1..=last).contains(&day) {
                return Err(RangeError::DayOutOfRange(day).into());
            }
            Ok((month, day as u8))
        }
        Overflow::Constrain => Ok((month, day.clamp(1, last) as u8)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regulate_date_reject() {
        // Valid triples pass through unchanged.
        let date = regulate_date(2021, 3, 14, Overflow::Reject).unwrap();
        assert_eq!((date.year(), date.month(), date.day()), (2021, 3, 14));

        let date = regulate_date(2020, 2, 29, Overflow::Reject).unwrap();
        assert_eq!((date.year(), date.month(), date.day()), (2020, 2, 29));

        // Every out-of-range boundary is refused.
        assert_eq!(
            regulate_date(2021, 0, 1, Overflow::Reject),
            Err(Error::Range(RangeError::MonthOutOfRange(0)))
        );
        assert_eq!(
            regulate_date(2021, 13, 1, Overflow::Reject),
            Err(Error::Range(RangeError::MonthOutOfRange(13)))
        );
        assert_eq!(
            regulate_date(2021, 1, 0, Overflow::Reject),
            Err(Error::Range(RangeError::DayOutOfRange(0)))
        );
        assert_eq!(
            regulate_date(2021, 1, 32, Overflow::Reject),
            Err(Error::Range(RangeError::DayOutOfRange(32)))
        );
        assert_eq!(
            regulate_date(2021, 2, 29, Overflow::Reject),
            Err(Error::Range(RangeError::DayOutOfRange(29)))
        );
        assert_eq!(
            regulate_date(2_000_000, 1, 1, Overflow::Reject),
            Err(Error::Range(RangeError::YearOutOfRange(2_000_000)))
        );
    }

    #[test]
    fn test_regulate_date_constrain() {
        // In-range values are untouched.
        let date = regulate_date(2021, 3, 14, Overflow::Constrain).unwrap();
        assert_eq!((date.year(), date.month(), date.day()), (2021, 3, 14));

        // Month clamps first, then the day clamps against the clamped month.
        let date = regulate_date(2021, 13, 1, Overflow::Constrain).unwrap();
        assert_eq!((date.year(), date.month(), date.day()), (2021, 12, 1));

        let date = regulate_date(2021, 0, 0, Overflow::Constrain).unwrap();
        assert_eq!((date.year(), date.month(), date.day()), (2021, 1, 1));

        let date = regulate_date(2021, 2, 31, Overflow::Constrain).unwrap();
        assert_eq!((date.year(), date.month(), date.day()), (2021, 2, 28));

        let date = regulate_date(2020, 2, 31, Overflow::Constrain).unwrap();
        assert_eq!((date.year(), date.month(), date.day()), (2020, 2, 29));

        let date = regulate_date(2021, 99, 99, Overflow::Constrain).unwrap();
        assert_eq!((date.year(), date.month(), date.day()), (2021, 12, 31));

        // The year is never constrained; out of range is an error under
        // either policy.
        assert_eq!(
            regulate_date(-2_000_000, 1, 1, Overflow::Constrain),
            Err(Error::Range(RangeError::YearOutOfRange(-2_000_000)))
        );
    }

    #[test]
    fn test_regulate_year_month() {
        let year_month = regulate_year_month(2021, 12, Overflow::Reject).unwrap();
        assert_eq!((year_month.year(), year_month.month()), (2021, 12));

        assert_eq!(
            regulate_year_month(2021, 13, Overflow::Reject),
            Err(Error::Range(RangeError::MonthOutOfRange(13)))
        );

        let year_month = regulate_year_month(2021, 13, Overflow::Constrain).unwrap();
        assert_eq!((year_month.year(), year_month.month()), (2021, 12));

        let year_month = regulate_year_month(2021, -3, Overflow::Constrain).unwrap();
        assert_eq!((year_month.year(), year_month.month()), (2021, 1));
    }

    #[test]
    fn test_regulate_month_day() {
        let month_day = regulate_month_day(2, 29, Overflow::Reject).unwrap();
        assert_eq!((month_day.month(), month_day.day()), (2, 29));

        assert_eq!(
            regulate_month_day(2, 30, Overflow::Reject),
            Err(Error::Range(RangeError::DayOutOfRange(30)))
        );
        assert_eq!(
            regulate_month_day(0, 1, Overflow::Reject),
            Err(Error::Range(RangeError::MonthOutOfRange(0)))
        );

        let month_day = regulate_month_day(2, 30, Overflow::Constrain).unwrap();
        assert_eq!((month_day.month(), month_day.day()), (2, 29));

        let month_day = regulate_month_day(13, 40, Overflow::Constrain).unwrap();
        assert_eq!((month_day.month(), month_day.day()), (12, 31));
    }
}
