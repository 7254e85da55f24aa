//! colfmt Custom Formats
//!
//! The report column formats layered on top of the host's built-ins:
//! fixed datetime patterns, week ranges, whole-unit currencies, grouped
//! numbers and elapsed time.

pub mod formats;
mod helpers;

use colfmt_plugin::{FormatConfig, FormatRegistry};
use tracing::debug;

/// Register every custom format, in display order
pub fn load_custom_formats(registry: FormatRegistry) -> FormatRegistry {
    registry
        // Date and time
        .with_format(formats::ByHour)
        .with_format(formats::DayHourMinute)
        .with_format(formats::DayHourMinuteSecond)
        .with_format(formats::DayMinuteSecond)
        .with_format(formats::WeekRange)
        // Numeric
        .with_format(formats::WholeCurrency::POUND_STERLING)
        .with_format(formats::WholeCurrency::YEN)
        .with_format(formats::GroupedWhole::PLAIN)
        .with_format(formats::GroupedWhole::DOLLAR)
        .with_format(formats::ElapsedTime)
}

/// Build the registry of custom formats with default options
///
/// Every call returns a fresh registry with the same entries.
pub fn load_formats() -> FormatRegistry {
    load_formats_with(&FormatConfig::default())
}

/// Build the registry of custom formats, dropping the excluded ones
pub fn load_formats_with(config: &FormatConfig) -> FormatRegistry {
    let registry = load_custom_formats(FormatRegistry::new()).apply_config(config);
    debug!(formats = registry.len(), "custom formats loaded");
    registry
}

#[cfg(test)]
mod tests {
    use super::*;
    use colfmt_plugin::prelude::*;
    use std::collections::HashSet;

    #[test]
    fn test_load_formats_count() {
        assert_eq!(load_formats().len(), 10);
    }

    #[test]
    fn test_names_unique() {
        let registry = load_formats();
        let names: HashSet<_> = registry.names().into_iter().collect();
        assert_eq!(names.len(), registry.len());
    }

    #[test]
    fn test_repeated_loads_agree() {
        assert_eq!(load_formats().names(), load_formats().names());
    }

    #[test]
    fn test_registration_order() {
        assert_eq!(
            load_formats().names(),
            vec![
                "By Hour",
                "dd MM:mm",
                "dd HH:mm:ss",
                "dd mm:ss",
                "week",
                "£0,000",
                "¥0,000",
                "0,000",
                "$0,000",
                "HH:MM:SS",
            ]
        );
    }

    #[test]
    fn test_all_custom() {
        for entry in load_formats().iter() {
            assert_eq!(entry.meta().category, FormatCategory::Custom, "{}", entry.name());
        }
    }

    #[test]
    fn test_data_type_split() {
        let registry = load_formats();
        assert_eq!(registry.by_data_type(DataType::DateTime).len(), 5);
        assert_eq!(registry.by_data_type(DataType::Numeric).len(), 5);
    }

    #[test]
    fn test_config_exclusion() {
        let config = FormatConfig::new().with_excluded("WEEK").with_excluded("¥0,000");
        let registry = load_formats_with(&config);
        assert_eq!(registry.len(), 8);
        assert!(!registry.contains("week"));
        assert!(registry.contains("£0,000"));
    }

    #[test]
    fn test_describe_lists_every_format() {
        let json = load_formats().describe();
        let text = serde_json::to_string(&json).unwrap();
        assert!(text.contains("\"weeknumber\""));
        assert!(text.contains("Week from {value:%A, %B %e, %Y}"));
    }

    #[test]
    fn test_render_through_registry() {
        let registry = load_formats();
        assert_eq!(
            registry.render("week", &Value::from("2020-1")),
            "Week from Monday, December 30, 2019"
        );
        assert_eq!(registry.render("£0,000", &Value::from("1234.5")), "£1,235");
        assert_eq!(registry.render("HH:MM:SS", &Value::from(90061_i64)), "01.01:01:01");
        // a failed conversion falls back to the raw cell
        assert_eq!(registry.render("dd mm:ss", &Value::from("noon")), "noon");
    }

    #[test]
    fn test_render_huge_exponent_falls_back() {
        let registry = load_formats();
        let cell = Value::from("1e2000000000");
        for name in ["£0,000", "¥0,000", "HH:MM:SS"] {
            assert_eq!(registry.render(name, &cell), "1e2000000000", "{}", name);
        }
        assert_eq!(registry.render("0,000", &cell), "1e2000000000");
        assert_eq!(registry.render("$0,000", &cell), "$1e2000000000");
    }

    #[test]
    fn test_render_null_datetime() {
        let registry = load_formats();
        assert_eq!(registry.render("By Hour", &Value::Null), "1/1/0001 12:00 AM");
        assert_eq!(registry.render("week", &Value::Null), "Week from Monday, January 1, 0001");
    }

    #[test]
    fn test_unknown_format() {
        let err = load_formats().format("weak", &Value::Null).unwrap_err();
        assert_eq!(err.code, codes::UNKNOWN_FORMAT);
    }
}
