//! The "gregory" calendar: the ISO calendar with BC/AD eras layered on top.
//! Era years count from 1 with no year zero, so 1 BC is ISO year 0 and
//! 2 BC is ISO year -1.

use crate::date::{CalendarDate, MonthDay, YearMonth};
use crate::error::{Error, ValidationError};
use crate::fields::{prepare_fields, DateFields, Field, Presence};
use crate::iso8601::{self, Overflow};

pub(crate) const ERA_BC: &str = "bc";
pub(crate) const ERA_AD: &str = "ad";

/// Converts (eraYear, era) to the proleptic ISO year.
pub(crate) fn iso_year(era_year: i32, era: &str) -> Result<i32, Error> {
    match era {
        ERA_BC => Ok(-(era_year - 1)),
        ERA_AD => Ok(era_year),
        _ => Err(ValidationError::UnknownEra(era.to_string()).into()),
    }
}

/// The era and era year a proleptic ISO year falls in. The era year is
/// always at least 1.
pub(crate) fn era_of(iso_year: i32) -> (&'static str, i32) {
    if iso_year < 1 {
        (ERA_BC, 1 - iso_year)
    } else {
        (ERA_AD, iso_year)
    }
}

pub(crate) fn era(date: CalendarDate) -> &'static str {
    era_of(date.year()).0
}

pub(crate) fn era_year(date: CalendarDate) -> i32 {
    era_of(date.year()).1
}

/// The year must be given directly, or as an era/eraYear pair, or both ways
/// in agreement.
pub(crate) fn validate_fields(fields: &DateFields) -> Result<(), Error> {
    if (fields.era.is_none() || fields.era_year.is_none()) && fields.year.is_none() {
        return Err(ValidationError::MissingYearOrEra.into());
    }
    let era_year = match fields.era_year {
        Some(era_year) => era_year,
        None => return Ok(()),
    };
    if era_year < 1 {
        return Err(ValidationError::EraYearOutOfRange(era_year).into());
    }
    let year = match fields.year {
        Some(year) => year,
        None => return Ok(()),
    };
    let era = match &fields.era {
        Some(era) => era,
        None => return Ok(()),
    };
    if iso_year(era_year, era)? != year {
        return Err(ValidationError::EraConflict.into());
    }
    Ok(())
}

/// The ISO year named by the fields: the era/eraYear pair when complete,
/// the plain year otherwise.
fn resolved_year(fields: &DateFields) -> Result<Option<i32>, Error> {
    if let (Some(era), Some(era_year)) = (fields.era.as_deref(), fields.era_year) {
        Ok(Some(iso_year(era_year, era)?))
    } else {
        Ok(fields.year)
    }
}

// Intentionally alphabetical.
const DATE_FIELD_SPEC: &[(Field, Presence)] = &[
    (Field::Day, Presence::Required),
    (Field::Era, Presence::Optional),
    (Field::EraYear, Presence::Optional),
    (Field::Month, Presence::Optional),
    (Field::MonthCode, Presence::Optional),
    (Field::Year, Presence::Optional),
];

const YEAR_MONTH_FIELD_SPEC: &[(Field, Presence)] = &[
    (Field::Era, Presence::Optional),
    (Field::EraYear, Presence::Optional),
    (Field::Month, Presence::Optional),
    (Field::MonthCode, Presence::Optional),
    (Field::Year, Presence::Optional),
];

pub(crate) fn date_from_fields(
    fields: &DateFields,
    overflow: Overflow,
) -> Result<CalendarDate, Error> {
    let fields = prepare_fields(fields, DATE_FIELD_SPEC)?;
    validate_fields(&fields)?;
    let year = resolved_year(&fields)?;
    let fields = DateFields { year, ..fields };
    iso8601::date_from_fields(&fields, overflow)
}

pub(crate) fn year_month_from_fields(
    fields: &DateFields,
    overflow: Overflow,
) -> Result<YearMonth, Error> {
    let fields = prepare_fields(fields, YEAR_MONTH_FIELD_SPEC)?;
    validate_fields(&fields)?;
    let year = resolved_year(&fields)?;
    let fields = DateFields { year, ..fields };
    iso8601::year_month_from_fields(&fields, overflow)
}

pub(crate) fn month_day_from_fields(
    fields: &DateFields,
    overflow: Overflow,
) -> Result<MonthDay, Error> {
    let fields = prepare_fields(fields, DATE_FIELD_SPEC)?;
    // The year fields only need to hold together when they are actually
    // used, i.e. when a bare month number must be anchored to a year.
    if fields.month.is_some() && fields.month_code.is_none() {
        validate_fields(&fields)?;
    }
    let year = resolved_year(&fields)?;
    let fields = DateFields { year, ..fields };
    iso8601::month_day_from_fields(&fields, overflow)
}
