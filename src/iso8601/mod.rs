pub use arithmetic::{add_date, difference_date};
pub use math::{day_of_week, day_of_year, days_in_month, days_in_year, is_leap_year, week_of_year};
pub use regulate::{regulate_date, regulate_month_day, regulate_year_month, Overflow};

mod arithmetic;
mod math;
mod regulate;

use crate::date::{CalendarDate, MonthDay, YearMonth};
use crate::error::{Error, ValidationError};
use crate::fields::{prepare_fields, resolve_month, DateFields, Field, Presence};

pub(crate) const DAYS_PER_WEEK: u8 = 7;
pub(crate) const MONTHS_PER_YEAR: u8 = 12;

const DATE_FIELD_SPEC: &[(Field, Presence)] = &[
    (Field::Day, Presence::Required),
    (Field::Month, Presence::Optional),
    (Field::MonthCode, Presence::Optional),
    (Field::Year, Presence::Required),
];

const YEAR_MONTH_FIELD_SPEC: &[(Field, Presence)] = &[
    (Field::Month, Presence::Optional),
    (Field::MonthCode, Presence::Optional),
    (Field::Year, Presence::Required),
];

const MONTH_DAY_FIELD_SPEC: &[(Field, Presence)] = &[
    (Field::Day, Presence::Required),
    (Field::Month, Presence::Optional),
    (Field::MonthCode, Presence::Optional),
    (Field::Year, Presence::Optional),
];

pub(crate) fn date_from_fields(
    fields: &DateFields,
    overflow: Overflow,
) -> Result<CalendarDate, Error> {
    let fields = prepare_fields(fields, DATE_FIELD_SPEC)?;
    let fields = resolve_month(&fields)?;
    let year = fields.year.ok_or(ValidationError::MissingField(Field::Year))?;
    let month = fields.month.ok_or(ValidationError::MissingMonth)?;
    let day = fields.day.ok_or(ValidationError::MissingField(Field::Day))?;
    regulate_date(year, month, day, overflow)
}

pub(crate) fn year_month_from_fields(
    fields: &DateFields,
    overflow: Overflow,
) -> Result<YearMonth, Error> {
    let fields = prepare_fields(fields, YEAR_MONTH_FIELD_SPEC)?;
    let fields = resolve_month(&fields)?;
    let year = fields.year.ok_or(ValidationError::MissingField(Field::Year))?;
    let month = fields.month.ok_or(ValidationError::MissingMonth)?;
    regulate_year_month(year, month, overflow)
}

pub(crate) fn month_day_from_fields(
    fields: &DateFields,
    overflow: Overflow,
) -> Result<MonthDay, Error> {
    let fields = prepare_fields(fields, MONTH_DAY_FIELD_SPEC)?;
    // A bare month number is ambiguous as a month-day: it needs either a
    // year to regulate against or a month code to confirm it.
    if fields.month.is_some() && fields.year.is_none() && fields.month_code.is_none() {
        return Err(ValidationError::MissingYearOrMonthCode.into());
    }
    let fields = resolve_month(&fields)?;
    let month = fields.month.ok_or(ValidationError::MissingMonth)?;
    let day = fields.day.ok_or(ValidationError::MissingField(Field::Day))?;
    regulate_month_day(month, day, overflow)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RangeError;

    #[test]
    fn test_date_from_fields() {
        let fields = DateFields {
            year: Some(2021),
            month: Some(3),
            day: Some(14),
            ..Default::default()
        };
        let date = date_from_fields(&fields, Overflow::Reject).unwrap();
        assert_eq!((date.year(), date.month(), date.day()), (2021, 3, 14));

        // A month code alone works too.
        let fields = DateFields {
            year: Some(2021),
            month_code: Some("3".to_string()),
            day: Some(14),
            ..Default::default()
        };
        let date = date_from_fields(&fields, Overflow::Reject).unwrap();
        assert_eq!(date.month(), 3);

        // Era fields are not part of the ISO field set and are dropped
        // before resolution.
        let fields = DateFields {
            year: Some(2021),
            month: Some(3),
            day: Some(14),
            era: Some("ad".to_string()),
            era_year: Some(2021),
            ..Default::default()
        };
        assert!(date_from_fields(&fields, Overflow::Reject).is_ok());

        // Missing required fields, reported in declared order.
        assert_eq!(
            date_from_fields(&DateFields::default(), Overflow::Reject),
            Err(Error::Validation(ValidationError::MissingField(Field::Day)))
        );
        let fields = DateFields {
            day: Some(14),
            month: Some(3),
            ..Default::default()
        };
        assert_eq!(
            date_from_fields(&fields, Overflow::Reject),
            Err(Error::Validation(ValidationError::MissingField(Field::Year)))
        );

        // The overflow policy applies to the resolved triple.
        let fields = DateFields {
            year: Some(2021),
            month: Some(2),
            day: Some(31),
            ..Default::default()
        };
        assert_eq!(
            date_from_fields(&fields, Overflow::Reject),
            Err(Error::Range(RangeError::DayOutOfRange(31)))
        );
        let date = date_from_fields(&fields, Overflow::Constrain).unwrap();
        assert_eq!((date.year(), date.month(), date.day()), (2021, 2, 28));
    }

    #[test]
    fn test_year_month_from_fields() {
        let fields = DateFields {
            year: Some(2021),
            month: Some(6),
            ..Default::default()
        };
        let year_month = year_month_from_fields(&fields, Overflow::Reject).unwrap();
        assert_eq!((year_month.year(), year_month.month()), (2021, 6));

        let fields = DateFields {
            month: Some(6),
            ..Default::default()
        };
        assert_eq!(
            year_month_from_fields(&fields, Overflow::Reject),
            Err(Error::Validation(ValidationError::MissingField(Field::Year)))
        );

        let fields = DateFields {
            year: Some(2021),
            month: Some(13),
            ..Default::default()
        };
        let year_month = year_month_from_fields(&fields, Overflow::Constrain).unwrap();
        assert_eq!(year_month.month(), 12);
    }

    #[test]
    fn test_month_day_from_fields() {
        // February 29 is a valid month-day; the reference year is a leap
        // year.
        let fields = DateFields {
            month_code: Some("2".to_string()),
            day: Some(29),
            ..Default::default()
        };
        let month_day = month_day_from_fields(&fields, Overflow::Reject).unwrap();
        assert_eq!((month_day.month(), month_day.day()), (2, 29));

        // A numeric month needs a year or a month code to anchor it.
        let fields = DateFields {
            month: Some(2),
            day: Some(29),
            ..Default::default()
        };
        assert_eq!(
            month_day_from_fields(&fields, Overflow::Reject),
            Err(Error::Validation(ValidationError::MissingYearOrMonthCode))
        );

        let fields = DateFields {
            year: Some(2021),
            month: Some(2),
            day: Some(29),
            ..Default::default()
        };
        let month_day = month_day_from_fields(&fields, Overflow::Reject).unwrap();
        assert_eq!((month_day.month(), month_day.day()), (2, 29));
    }
}
