use std::fmt;
use std::str::FromStr;

use crate::date::{CalendarDate, MonthDay, YearMonth};
use crate::duration::{DateDuration, LargestUnit};
use crate::error::{Error, RangeError};
use crate::fields::{self, DateFields, Field};
use crate::gregorian;
use crate::iso8601::{self, Overflow, DAYS_PER_WEEK, MONTHS_PER_YEAR};
use crate::japanese;

/// The closed set of supported calendars. The ISO calendar is the base
/// implementation; the era-based variants override field resolution and the
/// era accessors and delegate everything else to it. All arithmetic runs on
/// the canonical ISO triple, so it is shared by every variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Calendar {
    Iso8601,
    Gregorian,
    Japanese,
}

impl Calendar {
    pub fn as_str(&self) -> &'static str {
        match self {
            Calendar::Iso8601 => "iso8601",
            Calendar::Gregorian => "gregory",
            Calendar::Japanese => "japanese",
        }
    }

    /// Resolves a field record into a full date under the overflow policy.
    pub fn date_from_fields(
        &self,
        fields: &DateFields,
        overflow: Overflow,
    ) -> Result<CalendarDate, Error> {
        match self {
            Calendar::Iso8601 => iso8601::date_from_fields(fields, overflow),
            Calendar::Gregorian => gregorian::date_from_fields(fields, overflow),
            Calendar::Japanese => japanese::date_from_fields(fields, overflow),
        }
    }

    /// Resolves a field record into a year-month.
    pub fn year_month_from_fields(
        &self,
        fields: &DateFields,
        overflow: Overflow,
    ) -> Result<YearMonth, Error> {
        match self {
            Calendar::Iso8601 => iso8601::year_month_from_fields(fields, overflow),
            Calendar::Gregorian => gregorian::year_month_from_fields(fields, overflow),
            Calendar::Japanese => japanese::year_month_from_fields(fields, overflow),
        }
    }

    /// Resolves a field record into a month-day. The Japanese calendar does
    /// not override this: a month-day needs no era.
    pub fn month_day_from_fields(
        &self,
        fields: &DateFields,
        overflow: Overflow,
    ) -> Result<MonthDay, Error> {
        match self {
            Calendar::Iso8601 | Calendar::Japanese => {
                iso8601::month_day_from_fields(fields, overflow)
            }
            Calendar::Gregorian => gregorian::month_day_from_fields(fields, overflow),
        }
    }

    /// Expands a requested field list with the fields implied by it: on the
    /// era calendars, asking for the year also asks for the era year, and
    /// the era pair implies itself both ways.
    pub fn fields(&self, names: &[Field]) -> Vec<Field> {
        match self {
            Calendar::Iso8601 => names.to_vec(),
            Calendar::Gregorian | Calendar::Japanese => {
                let mut augmented = names.to_vec();
                if augmented.contains(&Field::Year) && !augmented.contains(&Field::EraYear) {
                    augmented.push(Field::EraYear);
                }
                if augmented.contains(&Field::EraYear) {
                    if !augmented.contains(&Field::Era) {
                        augmented.push(Field::Era);
                    }
                } else if augmented.contains(&Field::Era) {
                    augmented.push(Field::EraYear);
                }
                augmented
            }
        }
    }

    /// Overlays `additional` onto `fields`; see `fields::merge_fields` for
    /// the month/monthCode retention rule. Identical for all calendars.
    pub fn merge_fields(&self, fields: &DateFields, additional: &DateFields) -> DateFields {
        fields::merge_fields(fields, additional)
    }

    pub fn date_add(
        &self,
        date: CalendarDate,
        duration: DateDuration,
        overflow: Overflow,
    ) -> Result<CalendarDate, Error> {
        iso8601::add_date(date, duration, overflow)
    }

    pub fn date_until(
        &self,
        one: CalendarDate,
        two: CalendarDate,
        largest_unit: LargestUnit,
    ) -> DateDuration {
        iso8601::difference_date(one, two, largest_unit)
    }

    pub fn year(&self, date: CalendarDate) -> i32 {
        date.year()
    }

    pub fn month(&self, date: CalendarDate) -> u8 {
        date.month()
    }

    pub fn month_code(&self, date: CalendarDate) -> String {
        date.month().to_string()
    }

    pub fn day(&self, date: CalendarDate) -> u8 {
        date.day()
    }

    /// The era the date falls in; the ISO calendar has none.
    pub fn era(&self, date: CalendarDate) -> Option<&'static str> {
        match self {
            Calendar::Iso8601 => None,
            Calendar::Gregorian => Some(gregorian::era(date)),
            Calendar::Japanese => Some(japanese::era(date)),
        }
    }

    pub fn era_year(&self, date: CalendarDate) -> Option<i32> {
        match self {
            Calendar::Iso8601 => None,
            Calendar::Gregorian => Some(gregorian::era_year(date)),
            Calendar::Japanese => Some(japanese::era_year(date)),
        }
    }

    pub fn day_of_week(&self, date: CalendarDate) -> u8 {
        iso8601::day_of_week(date.year() as i64, date.month(), date.day())
    }

    pub fn day_of_year(&self, date: CalendarDate) -> u16 {
        iso8601::day_of_year(date.year() as i64, date.month(), date.day())
    }

    pub fn week_of_year(&self, date: CalendarDate) -> u8 {
        iso8601::week_of_year(date.year() as i64, date.month(), date.day())
    }

    pub fn days_in_week(&self, _date: CalendarDate) -> u8 {
        DAYS_PER_WEEK
    }

    pub fn days_in_month(&self, date: CalendarDate) -> u8 {
        iso8601::days_in_month(date.year() as i64, date.month())
    }

    pub fn days_in_year(&self, date: CalendarDate) -> u16 {
        iso8601::days_in_year(date.year() as i64)
    }

    pub fn months_in_year(&self, _date: CalendarDate) -> u8 {
        MONTHS_PER_YEAR
    }

    pub fn in_leap_year(&self, date: CalendarDate) -> bool {
        iso8601::is_leap_year(date.year() as i64)
    }
}

impl fmt::Display for Calendar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Calendar {
    type Err = Error;

    fn from_str(id: &str) -> Result<Self, Self::Err> {
        match id {
            "iso8601" => Ok(Calendar::Iso8601),
            "gregory" => Ok(Calendar::Gregorian),
            "japanese" => Ok(Calendar::Japanese),
            _ => Err(RangeError::UnknownCalendar(id.to_string()).into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u8, day: u8) -> CalendarDate {
        CalendarDate::new(year, month, day).unwrap()
    }

    #[test]
    fn test_identifiers() {
        for calendar in [Calendar::Iso8601, Calendar::Gregorian, Calendar::Japanese] {
            assert_eq!(calendar.as_str().parse::<Calendar>().unwrap(), calendar);
        }
        assert_eq!(
            "buddhist".parse::<Calendar>(),
            Err(Error::Range(RangeError::UnknownCalendar(
                "buddhist".to_string()
            )))
        );
        assert_eq!(Calendar::Gregorian.to_string(), "gregory");
    }

    #[test]
    fn test_accessors() {
        let calendar = Calendar::Iso8601;
        let d = date(2021, 1, 1);
        assert_eq!(calendar.year(d), 2021);
        assert_eq!(calendar.month(d), 1);
        assert_eq!(calendar.month_code(d), "1");
        assert_eq!(calendar.day(d), 1);
        assert_eq!(calendar.day_of_week(d), 5);
        assert_eq!(calendar.day_of_year(d), 1);
        assert_eq!(calendar.week_of_year(d), 53);
        assert_eq!(calendar.days_in_week(d), 7);
        assert_eq!(calendar.days_in_month(d), 31);
        assert_eq!(calendar.days_in_year(d), 365);
        assert_eq!(calendar.months_in_year(d), 12);
        assert!(!calendar.in_leap_year(d));
        assert!(calendar.in_leap_year(date(2020, 1, 1)));
    }

    #[test]
    fn test_era_accessors() {
        let d = date(1989, 1, 7);
        assert_eq!(Calendar::Iso8601.era(d), None);
        assert_eq!(Calendar::Iso8601.era_year(d), None);
        assert_eq!(Calendar::Gregorian.era(d), Some("ad"));
        assert_eq!(Calendar::Gregorian.era_year(d), Some(1989));
        assert_eq!(Calendar::Japanese.era(d), Some("showa"));
        assert_eq!(Calendar::Japanese.era_year(d), Some(64));

        let bc = date(-49, 3, 15);
        assert_eq!(Calendar::Gregorian.era(bc), Some("bc"));
        assert_eq!(Calendar::Gregorian.era_year(bc), Some(50));
    }

    #[test]
    fn test_fields_augmentation() {
        // The ISO calendar passes the list through untouched.
        assert_eq!(
            Calendar::Iso8601.fields(&[Field::Year, Field::Month]),
            vec![Field::Year, Field::Month]
        );

        // Era calendars pull in the implied era fields.
        assert_eq!(
            Calendar::Gregorian.fields(&[Field::Year, Field::Month]),
            vec![Field::Year, Field::Month, Field::EraYear, Field::Era]
        );
        assert_eq!(
            Calendar::Japanese.fields(&[Field::EraYear]),
            vec![Field::EraYear, Field::Era]
        );
        assert_eq!(
            Calendar::Japanese.fields(&[Field::Era]),
            vec![Field::Era, Field::EraYear]
        );
        assert_eq!(
            Calendar::Gregorian.fields(&[Field::Month, Field::Day]),
            vec![Field::Month, Field::Day]
        );
    }

    #[test]
    fn test_dispatch_date_from_fields() {
        let fields = DateFields {
            year: Some(2021),
            month: Some(3),
            day: Some(14),
            ..Default::default()
        };
        let via_iso = Calendar::Iso8601
            .date_from_fields(&fields, Overflow::Reject)
            .unwrap();
        let via_gregorian = Calendar::Gregorian
            .date_from_fields(&fields, Overflow::Reject)
            .unwrap();
        assert_eq!(via_iso, via_gregorian);

        let fields = DateFields {
            era: Some("reiwa".to_string()),
            era_year: Some(3),
            month: Some(3),
            day: Some(14),
            ..Default::default()
        };
        let via_japanese = Calendar::Japanese
            .date_from_fields(&fields, Overflow::Reject)
            .unwrap();
        assert_eq!(via_japanese, via_iso);
    }

    #[test]
    fn test_date_add_and_until_shared() {
        let start = date(2021, 1, 31);
        for calendar in [Calendar::Iso8601, Calendar::Gregorian, Calendar::Japanese] {
            let end = calendar
                .date_add(start, DateDuration::new(0, 1, 0, 0), Overflow::Constrain)
                .unwrap();
            assert_eq!(end, date(2021, 2, 28));
            assert_eq!(
                calendar.date_until(start, end, LargestUnit::Months),
                DateDuration::new(0, 1, 0, 0)
            );
        }
    }
}
