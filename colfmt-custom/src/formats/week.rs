//! Week-range format
//!
//! Renders a `"<year>-<week>"` grouping key (or a datetime) as the Monday
//! that opens the week: `Week from Monday, December 30, 2019`.
//!
//! The anchor rule is not ISO 8601. Week 1 starts on the Monday of the
//! Sunday-based week that contains January 1st, so it may fall in the
//! previous year, and weeks past the end of the year run on into the next.
//! The host groups rows by the same rule.

use chrono::{Datelike, NaiveDate, TimeDelta};
use colfmt_plugin::prelude::*;
use thiserror::Error;
use tracing::trace;

/// Layout after the "Week from " prefix
const WEEK_LAYOUT: &str = "%A, %B %-d, %Y";

/// Calendar years a week key may name
const MIN_YEAR: i32 = 1;
const MAX_YEAR: i32 = 9999;

/// Failure resolving a week key
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WeekError {
    #[error("expected <year>-<week>, got '{0}'")]
    MissingWeek(String),

    #[error("invalid {field} '{text}'")]
    InvalidNumber { field: &'static str, text: String },

    #[error("year {0} out of range 1-9999")]
    YearOutOfRange(i32),

    #[error("week {week} of {year} falls outside the calendar")]
    AnchorOutOfRange { year: i32, week: i32 },
}

impl From<WeekError> for FormatError {
    fn from(err: WeekError) -> Self {
        match err {
            WeekError::MissingWeek(_) | WeekError::InvalidNumber { .. } => {
                FormatError::parse_error(err.to_string())
                    .with_suggestion("Use a <year>-<week> key such as 2020-1")
            }
            WeekError::YearOutOfRange(_) | WeekError::AnchorOutOfRange { .. } => {
                FormatError::invalid_date(err.to_string())
            }
        }
    }
}

/// Split a `"<year>-<week>"` key. Segments past the second are ignored.
pub fn parse_week_key(key: &str) -> Result<(i32, i32), WeekError> {
    let mut parts = key.split('-');
    let year_text = parts.next().unwrap_or_default();
    let week_text = parts
        .next()
        .ok_or_else(|| WeekError::MissingWeek(key.to_string()))?;

    Ok((parse_int(year_text, "year")?, parse_int(week_text, "week")?))
}

fn parse_int(text: &str, field: &'static str) -> Result<i32, WeekError> {
    text.trim().parse().map_err(|_| WeekError::InvalidNumber {
        field,
        text: text.to_string(),
    })
}

/// Monday that opens `week` of `year`
///
/// `anchor = Jan 1 + (week - 1) * 7 - dow(Jan 1) + 1` with Sunday = 0.
pub fn week_anchor(year: i32, week: i32) -> Result<NaiveDate, WeekError> {
    if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
        return Err(WeekError::YearOutOfRange(year));
    }
    let out_of_range = || WeekError::AnchorOutOfRange { year, week };

    let jan1 = NaiveDate::from_ymd_opt(year, 1, 1).ok_or_else(out_of_range)?;
    let dow = i64::from(jan1.weekday().num_days_from_sunday());
    let offset = (i64::from(week) - 1) * 7 - dow + 1;

    let anchor = TimeDelta::try_days(offset)
        .and_then(|delta| jan1.checked_add_signed(delta))
        .ok_or_else(out_of_range)?;
    if !(MIN_YEAR..=MAX_YEAR).contains(&anchor.year()) {
        return Err(out_of_range());
    }
    Ok(anchor)
}

fn render_week(date: NaiveDate) -> String {
    format!("Week from {}", date.format(WEEK_LAYOUT))
}

/// Text always goes through the week key; anything else must be a datetime
fn resolve(value: &Value) -> Result<NaiveDate, FormatError> {
    match value {
        Value::Text(key) => {
            let (year, week) = parse_week_key(key)?;
            Ok(week_anchor(year, week)?)
        }
        other => Ok(other.to_datetime()?.date()),
    }
}

pub struct WeekRange;

static WEEK_EXAMPLES: [&str; 2] = [
    "2020-1 -> Week from Monday, December 30, 2019",
    "2021-10 -> Week from Monday, March 1, 2021",
];

impl Formatter for WeekRange {
    fn meta(&self) -> FormatMeta {
        FormatMeta {
            name: "week",
            description: "Monday that opens a <year>-<week> grouping key",
            data_type: DataType::DateTime,
            category: FormatCategory::Custom,
            group_by: Some("weeknumber"),
            js_format: Some("Week from {value:%A, %B %e, %Y}"),
            format_data_type: Some(DataType::DateTime),
            examples: &WEEK_EXAMPLES,
        }
    }

    /// Never fails: an unusable cell renders as its plain string
    fn format(&self, value: &Value) -> Result<String, FormatError> {
        Ok(match resolve(value) {
            Ok(date) => render_week(date),
            Err(e) => {
                trace!(error = %e, "week key not resolved, rendering raw value");
                value.to_string()
            }
        })
    }
}
