use std::cmp::Ordering;

use num_integer::Integer;

use crate::date::{CalendarDate, MAX_YEAR, MIN_YEAR};
use crate::duration::{DateDuration, LargestUnit};
use crate::error::{Error, RangeError};
use crate::iso8601::math::{day_of_year, days_in_month, days_in_year};
use crate::iso8601::regulate::{regulate_date, Overflow};
use crate::iso8601::DAYS_PER_WEEK;

/// Adds a duration to a date. Years and months are applied to the year and
/// month first and the result regulated under `overflow`; weeks and days are
/// then applied as a day count and carried across month and year boundaries.
/// The order matters: adding one month and one day to January 31 lands on
/// March 1, not March 2.
pub fn add_date(
    date: CalendarDate,
    duration: DateDuration,
    overflow: Overflow,
) -> Result<CalendarDate, Error> {
    let year = date.year() as i64 + duration.years as i64;
    let month = date.month() as i64 + duration.months as i64;
    let (year, month) = balance_year_month(year, month);
    if !(MIN_YEAR as i64..=MAX_YEAR as i64).contains(&year) {
        return Err(RangeError::YearOutOfRange(year).into());
    }
    let intermediate = regulate_date(year as i32, month as i32, date.day() as i32, overflow)?;

    let delta = duration.weeks as i64 * DAYS_PER_WEEK as i64 + duration.days as i64;
    // A delta this large is past the supported year range no matter where it
    // starts; bail before the year-stepping below walks it.
    const RANGE_DAYS: i64 = (MAX_YEAR as i64 - MIN_YEAR as i64 + 2) * 366;
    if delta.abs() > RANGE_DAYS {
        return Err(RangeError::YearOutOfRange(intermediate.year() as i64 + delta / 365).into());
    }
    let (year, month, day) = balance_date(
        intermediate.year() as i64,
        intermediate.month() as i64,
        intermediate.day() as i64 + delta,
    );
    if !(MIN_YEAR as i64..=MAX_YEAR as i64).contains(&year) {
        return Err(RangeError::YearOutOfRange(year).into());
    }
    Ok(CalendarDate::from_regulated(
        year as i32,
        month as u8,
        day as u8,
    ))
}

/// The duration from `one` to `two`, expressed with the given largest unit.
/// Whole years, then months, then weeks are peeled off greedily, each step
/// checked by re-adding so the result never overshoots; adding the result to
/// `one` always lands exactly on `two`.
pub fn difference_date(
    one: CalendarDate,
    two: CalendarDate,
    largest_unit: LargestUnit,
) -> DateDuration {
    match largest_unit {
        LargestUnit::Years | LargestUnit::Months => difference_in_months(one, two, largest_unit),
        LargestUnit::Weeks | LargestUnit::Days => difference_in_days(one, two, largest_unit),
    }
}

/// Normalizes a month outside 1..=12 by carrying whole years.
fn balance_year_month(year: i64, month: i64) -> (i64, i64) {
    let (carry, month) = (month - 1).div_mod_floor(&12);
    (year + carry, month + 1)
}

/// Normalizes a day count that may lie far outside the month, stepping whole
/// years first and then whole months.
fn balance_date(year: i64, month: i64, day: i64) -> (i64, i64, i64) {
    let (mut year, mut month) = balance_year_month(year, month);
    let mut day = day;

    // Step by whole years while the day is more than a year out of range.
    // The year whose length matters is the one covered by the step, which
    // depends on which side of February we start on.
    let mut test_year = if month > 2 { year } else { year - 1 };
    loop {
        let year_length = days_in_year(test_year) as i64;
        if day >= -year_length {
            break;
        }
        year -= 1;
        test_year -= 1;
        day += year_length;
    }
    test_year += 1;
    loop {
        let year_length = days_in_year(test_year) as i64;
        if day <= year_length {
            break;
        }
        year += 1;
        test_year += 1;
        day -= year_length;
    }

    while day < 1 {
        let (balanced_year, balanced_month) = balance_year_month(year, month - 1);
        year = balanced_year;
        month = balanced_month;
        day += days_in_month(year, month as u8) as i64;
    }
    loop {
        let month_length = days_in_month(year, month as u8) as i64;
        if day <= month_length {
            break;
        }
        day -= month_length;
        let (balanced_year, balanced_month) = balance_year_month(year, month + 1);
        year = balanced_year;
        month = balanced_month;
    }

    (year, month, day)
}

/// Sign of `to` relative to `from`: 1 when `to` is later, -1 earlier.
fn direction(from: CalendarDate, to: CalendarDate) -> i32 {
    match from.cmp(&to) {
        Ordering::Less => 1,
        Ordering::Equal => 0,
        Ordering::Greater => -1,
    }
}

/// A whole-years-and-months step between two valid dates cannot leave the
/// supported range.
fn constrained_add(date: CalendarDate, years: i32, months: i32) -> CalendarDate {
    add_date(
        date,
        DateDuration::new(years, months, 0, 0),
        Overflow::Constrain,
    )
    .expect("intermediate date lies between two valid dates")
}

fn difference_in_months(
    one: CalendarDate,
    two: CalendarDate,
    largest_unit: LargestUnit,
) -> DateDuration {
    let sign = direction(one, two);
    if sign == 0 {
        return DateDuration::default();
    }

    let mut years = two.year() - one.year();
    let mut mid = constrained_add(one, years, 0);
    let mut mid_sign = direction(mid, two);
    if mid_sign == 0 {
        return if largest_unit == LargestUnit::Years {
            DateDuration::new(years, 0, 0, 0)
        } else {
            DateDuration::new(0, years * 12, 0, 0)
        };
    }

    let mut months = two.month() as i32 - one.month() as i32;
    if mid_sign != sign {
        years -= sign;
        months += sign * 12;
    }
    mid = constrained_add(one, years, months);
    mid_sign = direction(mid, two);
    if mid_sign == 0 {
        return if largest_unit == LargestUnit::Years {
            DateDuration::new(years, months, 0, 0)
        } else {
            DateDuration::new(0, months + years * 12, 0, 0)
        };
    }
    if mid_sign != sign {
        // The candidate overshot the target; back up one month.
        months -= sign;
        if months == -sign {
            years -= sign;
            months = 11 * sign;
        }
        mid = constrained_add(one, years, months);
    }

    // `mid` is now a whole number of months from the start and lies between
    // the operands. Three cases for the leftover days.
    let days = if mid.year() == two.year() && mid.month() == two.month() {
        two.day() as i32 - mid.day() as i32
    } else if sign < 0 {
        // The target is in the month before `mid`.
        -(mid.day() as i32)
            - (days_in_month(two.year() as i64, two.month()) as i32 - two.day() as i32)
    } else {
        // The target is in the month after `mid`.
        two.day() as i32 + days_in_month(mid.year() as i64, mid.month()) as i32 - mid.day() as i32
    };

    if largest_unit == LargestUnit::Months {
        DateDuration::new(0, months + years * 12, 0, days)
    } else {
        DateDuration::new(years, months, 0, days)
    }
}

fn difference_in_days(
    one: CalendarDate,
    two: CalendarDate,
    largest_unit: LargestUnit,
) -> DateDuration {
    let (smaller, larger, sign) = if one <= two {
        (one, two, 1i64)
    } else {
        (two, one, -1i64)
    };

    let mut days = day_of_year(larger.year() as i64, larger.month(), larger.day()) as i64
        - day_of_year(smaller.year() as i64, smaller.month(), smaller.day()) as i64;
    let mut years = larger.year() as i64 - smaller.year() as i64;
    while years > 0 {
        days += days_in_year(smaller.year() as i64 + years - 1) as i64;
        years -= 1;
    }

    let mut weeks = 0;
    if largest_unit == LargestUnit::Weeks {
        weeks = days / DAYS_PER_WEEK as i64;
        days %= DAYS_PER_WEEK as i64;
    }
    DateDuration::new(0, 0, (weeks * sign) as i32, (days * sign) as i32)
}
