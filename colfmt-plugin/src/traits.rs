//! Formatter traits

use colfmt_core::{DataType, FormatError, Value};
use serde::Serialize;

/// Classification tag the host uses to group formats in its UI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FormatCategory {
    /// Shipped with the host
    BuiltIn,
    /// Registered by an extension
    Custom,
}

/// Metadata for a format
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormatMeta {
    pub name: &'static str,
    pub description: &'static str,
    /// Column type the format applies to
    pub data_type: DataType,
    pub category: FormatCategory,
    /// Host grouping key for the column values, e.g. "weeknumber"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_by: Option<&'static str>,
    /// Client-side rendering hint
    #[serde(skip_serializing_if = "Option::is_none")]
    pub js_format: Option<&'static str>,
    /// Type of the formatted output, when it differs from `data_type`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format_data_type: Option<DataType>,
    pub examples: &'static [&'static str],
}

/// Pure formatting function for one column format
///
/// `format` may fail when the cell cannot be converted to the type the
/// format expects. Callers that need a display string regardless should
/// go through [`crate::FormatEntry::render`].
pub trait Formatter: Send + Sync {
    fn meta(&self) -> FormatMeta;
    fn format(&self, value: &Value) -> Result<String, FormatError>;
}
