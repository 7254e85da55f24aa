//! Common formatting utilities

use colfmt_core::{FormatError, Value};

/// Convert a cell to a datetime and render it with a chrono layout
pub fn format_datetime(value: &Value, layout: &str) -> Result<String, FormatError> {
    let dt = value.to_datetime()?;
    Ok(dt.format(layout).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use colfmt_core::codes;

    #[test]
    fn test_format_datetime_from_text() {
        let v = Value::from("2021-03-05 14:07:09");
        assert_eq!(format_datetime(&v, "%d %H:%M").unwrap(), "05 14:07");
    }

    #[test]
    fn test_format_datetime_rejects_number() {
        let err = format_datetime(&Value::from(3_i64), "%d").unwrap_err();
        assert_eq!(err.code, codes::TYPE_ERROR);
    }

    #[test]
    fn test_format_datetime_rejects_bad_text() {
        let err = format_datetime(&Value::from("yesterday"), "%d").unwrap_err();
        assert_eq!(err.code, codes::DATE_PARSE_ERROR);
    }
}
