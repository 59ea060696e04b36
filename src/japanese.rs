//! The "japanese" calendar: ISO dates with the five modern Japanese eras
//! layered on top. Only the modern eras are carried; dates before the first
//! table entry are treated as still belonging to Meiji, with no lower bound.
//! That also means Meiji is the one era whose first year is irregular, so an
//! era year below 1 is accepted for it alone.

use lazy_static::lazy_static;

use crate::date::{CalendarDate, YearMonth};
use crate::error::{Error, ValidationError};
use crate::fields::{prepare_fields, DateFields, Field, Presence};
use crate::iso8601::{self, Overflow};

/// One table entry: the first day of the era and the offset such that
/// `iso_year = era_year + offset`.
#[derive(Debug)]
struct Era {
    name: &'static str,
    start: CalendarDate,
    offset: i32,
}

lazy_static! {
    /// The modern eras, ascending by start date.
    static ref ERA_TABLE: [Era; 5] = {
        let entry = |name, year, month, day, offset| Era {
            name,
            start: CalendarDate::new(year, month, day)
                .expect("era start dates are valid"),
            offset,
        };
        [
            entry("meiji", 1868, 9, 8, 1867),
            entry("taisho", 1912, 7, 30, 1911),
            entry("showa", 1926, 12, 25, 1925),
            entry("heisei", 1989, 1, 8, 1988),
            entry("reiwa", 2019, 5, 1, 2018),
        ]
    };
}

/// Index of the era the date falls in: the greatest entry whose start date
/// is not after it. Dates before the first entry land in the first era.
fn find_era(date: CalendarDate) -> usize {
    match ERA_TABLE.iter().position(|era| date < era.start) {
        None => ERA_TABLE.len() - 1,
        Some(0) => 0,
        Some(index) => index - 1,
    }
}

pub(crate) fn era(date: CalendarDate) -> &'static str {
    ERA_TABLE[find_era(date)].name
}

pub(crate) fn era_year(date: CalendarDate) -> i32 {
    date.year() - ERA_TABLE[find_era(date)].offset
}

/// Converts (eraYear, era) to the proleptic ISO year.
pub(crate) fn iso_year(era_year: i32, era: &str) -> Result<i32, Error> {
    match ERA_TABLE.iter().find(|entry| entry.name == era) {
        Some(entry) => Ok(era_year + entry.offset),
        None => Err(ValidationError::UnknownEra(era.to_string()).into()),
    }
}

/// Same shape as the Gregorian validation, except that an era year below 1
/// is allowed for the earliest era.
pub(crate) fn validate_fields(fields: &DateFields) -> Result<(), Error> {
    if (fields.era.is_none() || fields.era_year.is_none()) && fields.year.is_none() {
        return Err(ValidationError::MissingYearOrEra.into());
    }
    let era_year = match fields.era_year {
        Some(era_year) => era_year,
        None => return Ok(()),
    };
    if era_year < 1 && fields.era.as_deref() != Some(ERA_TABLE[0].name) {
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

// Intentionally alphabetical. No month code here: the era pair and a
// numeric month are required outright.
const DATE_FIELD_SPEC: &[(Field, Presence)] = &[
    (Field::Day, Presence::Required),
    (Field::Era, Presence::Required),
    (Field::EraYear, Presence::Required),
    (Field::Month, Presence::Required),
    (Field::Year, Presence::Optional),
];

const YEAR_MONTH_FIELD_SPEC: &[(Field, Presence)] = &[
    (Field::Era, Presence::Required),
    (Field::EraYear, Presence::Required),
    (Field::Month, Presence::Required),
    (Field::Year, Presence::Optional),
];

fn resolved_year(fields: &DateFields) -> Result<i32, Error> {
    match (&fields.era, fields.era_year) {
        (Some(era), Some(era_year)) => iso_year(era_year, era),
        _ => Err(ValidationError::MissingYearOrEra.into()),
    }
}

pub(crate) fn date_from_fields(
    fields: &DateFields,
    overflow: Overflow,
) -> Result<CalendarDate, Error> {
    let fields = prepare_fields(fields, DATE_FIELD_SPEC)?;
    validate_fields(&fields)?;
    let year = resolved_year(&fields)?;
    let fields = DateFields {
        year: Some(year),
        ..fields
    };
    iso8601::date_from_fields(&fields, overflow)
}

pub(crate) fn year_month_from_fields(
    fields: &DateFields,
    overflow: Overflow,
) -> Result<YearMonth, Error> {
    let fields = prepare_fields(fields, YEAR_MONTH_FIELD_SPEC)?;
    validate_fields(&fields)?;
    let year = resolved_year(&fields)?;
    let fields = DateFields {
        year: Some(year),
        ..fields
    };
    iso8601::year_month_from_fields(&fields, overflow)
}
