//! Fixed-pattern DateTime formats
//!
//! Each format converts the cell to a wall-clock datetime and renders a
//! single pattern. A cell that is not a datetime is a conversion error.

use crate::helpers::format_datetime;
use colfmt_plugin::prelude::*;

const GROUP_DATE_AND_TIME: Option<&str> = Some("dateandtime");

pub struct ByHour;
pub struct DayHourMinute;
pub struct DayHourMinuteSecond;
pub struct DayMinuteSecond;

static BY_HOUR_EXAMPLES: [&str; 1] = ["2021-03-05 14:07:09 -> 3/5/2021 2:00 PM"];
static DAY_HOUR_MINUTE_EXAMPLES: [&str; 1] = ["2021-03-05 14:07:09 -> 05 14:07"];
static DAY_HOUR_MINUTE_SECOND_EXAMPLES: [&str; 1] = ["2021-03-05 14:07:09 -> 05 14:07:09"];
static DAY_MINUTE_SECOND_EXAMPLES: [&str; 1] = ["2021-03-05 14:07:09 -> 05 07:09"];

impl Formatter for ByHour {
    fn meta(&self) -> FormatMeta {
        FormatMeta {
            name: "By Hour",
            description: "Date with the hour, minutes zeroed (M/d/yyyy h:00 AM)",
            data_type: DataType::DateTime,
            category: FormatCategory::Custom,
            group_by: GROUP_DATE_AND_TIME,
            js_format: Some("By Hour"),
            format_data_type: None,
            examples: &BY_HOUR_EXAMPLES,
        }
    }

    fn format(&self, value: &Value) -> Result<String, FormatError> {
        format_datetime(value, "%-m/%-d/%Y %-I:00 %p")
    }
}

impl Formatter for DayHourMinute {
    fn meta(&self) -> FormatMeta {
        FormatMeta {
            // Display name kept as the host knows it; the pattern is dd HH:mm
            name: "dd MM:mm",
            description: "Day of month with 24-hour time (dd HH:mm)",
            data_type: DataType::DateTime,
            category: FormatCategory::Custom,
            group_by: GROUP_DATE_AND_TIME,
            js_format: Some("{value:%d %H:%M}"),
            format_data_type: None,
            examples: &DAY_HOUR_MINUTE_EXAMPLES,
        }
    }

    fn format(&self, value: &Value) -> Result<String, FormatError> {
        format_datetime(value, "%d %H:%M")
    }
}

impl Formatter for DayHourMinuteSecond {
    fn meta(&self) -> FormatMeta {
        FormatMeta {
            name: "dd HH:mm:ss",
            description: "Day of month with 24-hour time and seconds",
            data_type: DataType::DateTime,
            category: FormatCategory::Custom,
            group_by: GROUP_DATE_AND_TIME,
            js_format: Some("{value:%d %H:%M:%S}"),
            format_data_type: None,
            examples: &DAY_HOUR_MINUTE_SECOND_EXAMPLES,
        }
    }

    fn format(&self, value: &Value) -> Result<String, FormatError> {
        format_datetime(value, "%d %H:%M:%S")
    }
}

impl Formatter for DayMinuteSecond {
    fn meta(&self) -> FormatMeta {
        FormatMeta {
            name: "dd mm:ss",
            description: "Day of month with minutes and seconds",
            data_type: DataType::DateTime,
            category: FormatCategory::Custom,
            group_by: GROUP_DATE_AND_TIME,
            js_format: Some("{value:%d %M:%S}"),
            format_data_type: None,
            examples: &DAY_MINUTE_SECOND_EXAMPLES,
        }
    }

    fn format(&self, value: &Value) -> Result<String, FormatError> {
        format_datetime(value, "%d %M:%S")
    }
}
