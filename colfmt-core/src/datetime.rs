//! Wall-clock parsing and display for DateTime cells
//!
//! Report cells carry naive wall-clock times. Text cells are accepted in
//! ISO 8601 and US month/day/year forms; an RFC 3339 offset is parsed but
//! the wall clock is kept as written.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};

use crate::ConvertError;

/// Date-and-time layouts tried in order
const DATETIME_LAYOUTS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
    "%m/%d/%Y %I:%M:%S %p",
    "%m/%d/%Y %I:%M %p",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
];

/// Date-only layouts (time = 00:00:00)
const DATE_LAYOUTS: &[&str] = &["%Y-%m-%d", "%m/%d/%Y"];

/// Default display layout: `1/15/2020 2:30:00 PM`
pub const DISPLAY_LAYOUT: &str = "%-m/%-d/%Y %-I:%M:%S %p";

/// Parse a text cell into a wall-clock datetime
pub fn parse_datetime(s: &str) -> Result<NaiveDateTime, ConvertError> {
    let s = s.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.naive_local());
    }

    for layout in DATETIME_LAYOUTS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, layout) {
            return Ok(dt);
        }
    }

    for layout in DATE_LAYOUTS {
        if let Ok(d) = NaiveDate::parse_from_str(s, layout) {
            return Ok(d.and_time(NaiveTime::MIN));
        }
    }

    Err(ConvertError::DateParse(s.to_string()))
}

/// `0001-01-01 00:00:00`, the datetime a null cell converts to
pub fn min_datetime() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(1, 1, 1)
        .unwrap_or(NaiveDate::MIN)
        .and_time(NaiveTime::MIN)
}

/// Plain string form of a datetime cell
pub fn display_datetime(dt: &NaiveDateTime) -> String {
    dt.format(DISPLAY_LAYOUT).to_string()
}
