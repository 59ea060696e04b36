/// A calendar-unit duration: the only addition operand and difference result
/// the date engine deals in. Sub-day units belong to the caller's richer
/// duration type, not to this crate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct DateDuration {
    pub years: i32,
    pub months: i32,
    pub weeks: i32,
    pub days: i32,
}

impl DateDuration {
    pub fn new(years: i32, months: i32, weeks: i32, days: i32) -> Self {
        DateDuration {
            years,
            months,
            weeks,
            days,
        }
    }
}

/// The coarsest unit a date difference is expressed in. Units coarser than
/// the largest unit stay zero in the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LargestUnit {
    Years,
    Months,
    Weeks,
    Days,
}
