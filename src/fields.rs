use std::fmt;

use crate::error::{Error, RangeError, ValidationError};

/// The field names a calendar operation may accept. The string forms are the
/// names callers use in field records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Day,
    Era,
    EraYear,
    Month,
    MonthCode,
    Year,
}

impl Field {
    pub fn name(self) -> &'static str {
        match self {
            Field::Day => "day",
            Field::Era => "era",
            Field::EraYear => "eraYear",
            Field::Month => "month",
            Field::MonthCode => "monthCode",
            Field::Year => "year",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A partially-specified set of calendar fields, as handed over by the
/// caller. Month and day are plain integers here because raw inputs may be
/// out of range until a regulation step has been applied.
///
/// A record is never modified in place; every normalization step builds a
/// new one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DateFields {
    pub year: Option<i32>,
    pub month: Option<i32>,
    pub month_code: Option<String>,
    pub day: Option<i32>,
    pub era: Option<String>,
    pub era_year: Option<i32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Presence {
    Required,
    Optional,
}

/// Copies the fields named in `field_spec` (walked in declared order) into a
/// fresh record. A required field that is absent is an error; fields not
/// named are not carried forward, so each operation states exactly which
/// fields it accepts.
pub(crate) fn prepare_fields(
    fields: &DateFields,
    field_spec: &[(Field, Presence)],
) -> Result<DateFields, Error> {
    let mut prepared = DateFields::default();
    for &(field, presence) in field_spec {
        let present = match field {
            Field::Day => {
                prepared.day = fields.day;
                fields.day.is_some()
            }
            Field::Era => {
                prepared.era = fields.era.clone();
                fields.era.is_some()
            }
            Field::EraYear => {
                prepared.era_year = fields.era_year;
                fields.era_year.is_some()
            }
            Field::Month => {
                prepared.month = fields.month;
                fields.month.is_some()
            }
            Field::MonthCode => {
                prepared.month_code = fields.month_code.clone();
                fields.month_code.is_some()
            }
            Field::Year => {
                prepared.year = fields.year;
                fields.year.is_some()
            }
        };
        if presence == Presence::Required && !present {
            return Err(ValidationError::MissingField(field).into());
        }
    }
    Ok(prepared)
}

/// Merges a `month`/`monthCode` pair into one consistent integer month. When
/// both are given they must agree, and the code must be the exact decimal
/// form of the month number (a padded form like "03" is rejected).
///
/// This does not work for lunisolar calendars, where a month code may carry
/// a leap-month suffix; those calendars are unsupported.
pub(crate) fn resolve_month(fields: &DateFields) -> Result<DateFields, Error> {
    let mut resolved = fields.clone();
    match &fields.month_code {
        None => {
            let month = match fields.month {
                Some(month) => month,
                None => return Err(ValidationError::MissingMonth.into()),
            };
            resolved.month_code = Some(month.to_string());
        }
        Some(code) => {
            let number: i32 = code
                .parse()
                .map_err(|_| RangeError::InvalidMonthCode(code.clone()))?;
            if let Some(month) = fields.month {
                if month != number {
                    return Err(ValidationError::MonthConflict {
                        code: code.clone(),
                        month,
                    }
                    .into());
                }
            }
            if *code != number.to_string() {
                return Err(RangeError::InvalidMonthCode(code.clone()).into());
            }
            resolved.month = Some(number);
        }
    }
    Ok(resolved)
}

/// Overlays `additional` onto `fields`, key by key: a field present in
/// `additional` replaces the original, an absent one leaves the original in
/// place. The exception is the `month`/`monthCode` pair, which is dropped
/// from the original wholesale unless `additional` specifies neither, since
/// a caller replacing the month must not inherit a stale month code.
pub(crate) fn merge_fields(fields: &DateFields, additional: &DateFields) -> DateFields {
    let mut merged = DateFields {
        month: None,
        month_code: None,
        ..fields.clone()
    };
    if additional.month.is_none() && additional.month_code.is_none() {
        merged.month = fields.month;
        merged.month_code = fields.month_code.clone();
    }
    if additional.year.is_some() {
        merged.year = additional.year;
    }
    if additional.month.is_some() {
        merged.month = additional.month;
    }
    if additional.month_code.is_some() {
        merged.month_code = additional.month_code.clone();
    }
    if additional.day.is_some() {
        merged.day = additional.day;
    }
    if additional.era.is_some() {
        merged.era = additional.era.clone();
    }
    if additional.era_year.is_some() {
        merged.era_year = additional.era_year;
    }
    merged
}
