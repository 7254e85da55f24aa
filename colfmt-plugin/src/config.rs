//! Registry configuration

use colfmt_core::FormatError;
use serde::{Deserialize, Serialize};
use std::env;

/// Environment variable holding a comma-separated list of excluded formats
pub const EXCLUDE_ENV: &str = "COLFMT_EXCLUDE";

/// Options applied when a registry is loaded
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatConfig {
    /// Format names to leave out (case-insensitive)
    pub exclude: Vec<String>,
}

impl FormatConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_excluded(mut self, name: impl Into<String>) -> Self {
        self.exclude.push(name.into());
        self
    }

    /// Parse from JSON, e.g. `{"exclude": ["week"]}`
    pub fn from_json(json: &str) -> Result<Self, FormatError> {
        serde_json::from_str(json).map_err(|e| FormatError::config_error(e.to_string()))
    }

    /// Read exclusions from `COLFMT_EXCLUDE`; unset means no exclusions
    pub fn from_env() -> Self {
        env::var(EXCLUDE_ENV)
            .map(|list| Self::from_exclude_list(&list))
            .unwrap_or_default()
    }

    fn from_exclude_list(list: &str) -> Self {
        Self {
            exclude: list
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect(),
        }
    }

    pub fn is_excluded(&self, name: &str) -> bool {
        self.exclude.iter().any(|n| n.eq_ignore_ascii_case(name))
    }
}
