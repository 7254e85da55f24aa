//! Custom column formats

mod datetime;
mod week;
mod numeric;
mod elapsed;

pub use datetime::{ByHour, DayHourMinute, DayHourMinuteSecond, DayMinuteSecond};
pub use week::{WeekRange, WeekError, parse_week_key, week_anchor};
pub use numeric::{WholeCurrency, GroupedWhole};
pub use elapsed::ElapsedTime;
