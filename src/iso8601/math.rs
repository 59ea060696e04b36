use num_integer::Integer;

const LAST_DAY_OF_MONTH: [u8; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Gregorian leap-year rule, applied proleptically: zero and negative years
/// follow the same divisibility test as positive ones.
pub fn is_leap_year(year: i64) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Number of days in the given month. `month` must be in 1..=12.
pub fn days_in_month(year: i64, month: u8) -> u8 {
    if month == 2 && is_leap_year(year) {
        29
    } else {
        LAST_DAY_OF_MONTH[(month - 1) as usize]
    }
}

pub fn days_in_year(year: i64) -> u16 {
    if is_leap_year(year) {
        366
    } else {
        365
    }
}

/// ISO day of the week, 1 (Monday) through 7 (Sunday).
pub fn day_of_week(year: i64, month: u8, day: u8) -> u8 {
    // Gaussian congruence over a year shifted to start in March, so the leap
    // day falls at the end of the shifted year and needs no special casing.
    let month = month as i64;
    let shifted_month = month + if month < 3 { 10 } else { -2 };
    let year = year - if month < 3 { 1 } else { 0 };
    let (century, year_of_century) = year.div_mod_floor(&100);

    let day_term = day as i64;
    let month_term = (26 * shifted_month - 2) / 10;
    let year_term = year_of_century + year_of_century / 4;
    let century_term = century.div_mod_floor(&4).0 - 2 * century;

    let weekday = (day_term + month_term + year_term + century_term) % 7;
    if weekday <= 0 {
        (weekday + 7) as u8
    } else {
        weekday as u8
    }
}

/// Ordinal day within the year, 1-based.
pub fn day_of_year(year: i64, month: u8, day: u8) -> u16 {
    let mut days = day as u16;
    for prior in 1..month {
        days += days_in_month(year, prior) as u16;
    }
    days
}

/// ISO-8601 week number. A date in the first days of January may belong to
/// week 52 or 53 of the previous year, and a date in the last days of
/// December may belong to week 1 of the next.
pub fn week_of_year(year: i64, month: u8, day: u8) -> u8 {
    let ordinal = day_of_year(year, month, day) as i64;
    let weekday = day_of_week(year, month, day) as i64;
    let week = (ordinal - weekday + 10) / 7;

    if week < 1 {
        // Belongs to the last week of the previous year: week 53 when that
        // year had 53 weeks, week 52 otherwise.
        let jan1_weekday = day_of_week(year, 1, 1) as i64;
        if jan1_weekday == 5 || (jan1_weekday == 6 && is_leap_year(year - 1)) {
            return 53;
        }
        return 52;
    }
    if week == 53 {
        // A 53rd week only exists if the year does not end before the
        // Thursday of that week; otherwise the date is in week 1 of the
        // next year.
        if days_in_year(year) as i64 - ordinal < 4 - weekday {
            return 1;
        }
    }
    week as u8
}
