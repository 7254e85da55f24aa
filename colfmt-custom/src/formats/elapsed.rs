//! Elapsed-time format for second counts

use chrono::TimeDelta;
use colfmt_plugin::prelude::*;

/// Largest millisecond count the host's time span can hold
/// (i64 ticks of 100ns)
const MAX_MILLIS: f64 = (i64::MAX / 10_000) as f64;

/// Seconds rendered as `dd.hh:mm:ss`
///
/// The count is rounded to whole milliseconds, ties away from zero. The
/// sign is dropped and fractional seconds are truncated.
pub struct ElapsedTime;

static ELAPSED_EXAMPLES: [&str; 2] = ["90061 -> 01.01:01:01", "8640000 -> 100.00:00:00"];

impl Formatter for ElapsedTime {
    fn meta(&self) -> FormatMeta {
        FormatMeta {
            name: "HH:MM:SS",
            description: "Seconds as days.hours:minutes:seconds",
            data_type: DataType::Numeric,
            category: FormatCategory::Custom,
            group_by: None,
            js_format: None,
            format_data_type: None,
            examples: &ELAPSED_EXAMPLES,
        }
    }

    fn format(&self, value: &Value) -> Result<String, FormatError> {
        let seconds = value.to_f64()?;
        let span = span_from_seconds(seconds)?.abs();

        Ok(format!(
            "{:02}.{:02}:{:02}:{:02}",
            span.num_days(),
            span.num_hours() % 24,
            span.num_minutes() % 60,
            span.num_seconds() % 60,
        ))
    }
}

fn span_from_seconds(seconds: f64) -> Result<TimeDelta, FormatError> {
    let millis = (seconds * 1000.0).round();
    if millis.is_nan() || millis.abs() > MAX_MILLIS {
        return Err(FormatError::overflow(format!("{} seconds is not a valid time span", seconds)));
    }
    TimeDelta::try_milliseconds(millis as i64)
        .ok_or_else(|| FormatError::overflow(format!("{} seconds is not a valid time span", seconds)))
}
