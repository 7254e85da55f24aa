//! Currency and grouped-number formats

use colfmt_plugin::prelude::*;

/// Whole-unit currency in a named culture, e.g. `£1,235`
///
/// The cell is converted to a decimal first; text that is not a number
/// is an error.
pub struct WholeCurrency {
    name: &'static str,
    culture: Culture,
    examples: &'static [&'static str],
}

const POUND_EXAMPLES: [&str; 2] = ["1234.5 -> £1,235", "-1234.5 -> -£1,235"];
const YEN_EXAMPLES: [&str; 1] = ["1234567 -> ¥1,234,567"];

impl WholeCurrency {
    pub const POUND_STERLING: WholeCurrency = WholeCurrency {
        name: "£0,000",
        culture: Culture::EN_GB,
        examples: &POUND_EXAMPLES,
    };

    pub const YEN: WholeCurrency = WholeCurrency {
        name: "¥0,000",
        culture: Culture::JA_JP,
        examples: &YEN_EXAMPLES,
    };
}

impl Formatter for WholeCurrency {
    fn meta(&self) -> FormatMeta {
        FormatMeta {
            name: self.name,
            description: "Whole-unit currency with group separators",
            data_type: DataType::Numeric,
            category: FormatCategory::Custom,
            group_by: None,
            js_format: None,
            format_data_type: None,
            examples: self.examples,
        }
    }

    fn format(&self, value: &Value) -> Result<String, FormatError> {
        let amount = value.to_decimal()?;
        Ok(self.culture.format_currency_whole(&amount))
    }
}

/// Whole number with group separators and at least two digits
///
/// The pattern applies to numeric cells only; any other cell is written
/// out unchanged after the prefix.
pub struct GroupedWhole {
    name: &'static str,
    prefix: &'static str,
    examples: &'static [&'static str],
}

const GROUPED_EXAMPLES: [&str; 2] = ["1234567 -> 1,234,567", "5 -> 05"];
const DOLLAR_EXAMPLES: [&str; 2] = ["1234.5 -> $1,235", "-1234.5 -> $-1,235"];

/// Integer digits the `0,0` pattern always shows
const MIN_DIGITS: usize = 2;

impl GroupedWhole {
    pub const PLAIN: GroupedWhole = GroupedWhole {
        name: "0,000",
        prefix: "",
        examples: &GROUPED_EXAMPLES,
    };

    pub const DOLLAR: GroupedWhole = GroupedWhole {
        name: "$0,000",
        prefix: "$",
        examples: &DOLLAR_EXAMPLES,
    };
}

impl Formatter for GroupedWhole {
    fn meta(&self) -> FormatMeta {
        FormatMeta {
            name: self.name,
            description: "Whole number with group separators",
            data_type: DataType::Numeric,
            category: FormatCategory::Custom,
            group_by: None,
            js_format: None,
            format_data_type: None,
            examples: self.examples,
        }
    }

    fn format(&self, value: &Value) -> Result<String, FormatError> {
        let body = match value {
            Value::Number(n) => Culture::INVARIANT.format_grouped_whole(n, MIN_DIGITS),
            other => other.to_string(),
        };
        Ok(format!("{}{}", self.prefix, body))
    }
}
