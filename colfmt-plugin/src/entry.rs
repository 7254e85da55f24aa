//! Registered format entries

use crate::{FormatCategory, FormatMeta, Formatter};
use colfmt_core::{DataType, FormatError, Value};
use std::sync::Arc;
use tracing::debug;

/// One named, typed formatting rule
///
/// Metadata is captured once at registration; the entry is immutable
/// afterwards and cheap to clone.
#[derive(Clone)]
pub struct FormatEntry {
    meta: FormatMeta,
    formatter: Arc<dyn Formatter>,
}

impl FormatEntry {
    pub fn new<F: Formatter + 'static>(formatter: F) -> Self {
        Self {
            meta: formatter.meta(),
            formatter: Arc::new(formatter),
        }
    }

    pub fn meta(&self) -> &FormatMeta {
        &self.meta
    }

    pub fn name(&self) -> &'static str {
        self.meta.name
    }

    pub fn data_type(&self) -> DataType {
        self.meta.data_type
    }

    pub fn category(&self) -> FormatCategory {
        self.meta.category
    }

    pub fn group_by(&self) -> Option<&'static str> {
        self.meta.group_by
    }

    pub fn js_format(&self) -> Option<&'static str> {
        self.meta.js_format
    }

    pub fn format_data_type(&self) -> Option<DataType> {
        self.meta.format_data_type
    }

    /// Format a cell, surfacing conversion failures
    pub fn format(&self, value: &Value) -> Result<String, FormatError> {
        self.formatter.format(value)
    }

    /// Format a cell, falling back to its plain string form
    pub fn render(&self, value: &Value) -> String {
        match self.formatter.format(value) {
            Ok(s) => s,
            Err(e) => {
                debug!(format = self.meta.name, error = %e, "format failed, rendering raw value");
                value.to_string()
            }
        }
    }
}

impl std::fmt::Debug for FormatEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormatEntry").field("meta", &self.meta).finish_non_exhaustive()
    }
}
