pub use calendar::Calendar;
pub use date::{CalendarDate, MonthDay, YearMonth};
pub use duration::{DateDuration, LargestUnit};
pub use error::{Error, RangeError, ValidationError};
pub use fields::{DateFields, Field};
pub use iso8601::Overflow;

mod calendar;
mod date;
mod duration;
mod error;
mod fields;
mod gregorian;
pub mod iso8601;
mod japanese;
