//! Structured formatting errors
//!
//! A failed format is a value the host can inspect: a machine-readable
//! code, a message and an optional hint for fixing the input.

use crate::{ConvertError, NumberError};
use serde::{Deserialize, Serialize};

/// Standard error codes (machine-readable)
pub mod codes {
    pub const PARSE_ERROR: &str = "PARSE_ERROR";
    pub const TYPE_ERROR: &str = "TYPE_ERROR";
    pub const OVERFLOW: &str = "OVERFLOW";
    pub const INVALID_DATE: &str = "INVALID_DATE";
    pub const DATE_PARSE_ERROR: &str = "DATE_PARSE_ERROR";
    pub const UNKNOWN_FORMAT: &str = "UNKNOWN_FORMAT";
    pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
}

/// Structured formatting error
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatError {
    /// Machine-readable error code
    pub code: String,

    /// Human-readable error message
    pub message: String,

    /// Suggestion for fixing the error
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl FormatError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            suggestion: None,
        }
    }

    /// Builder: add suggestion
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    // ========== Common Error Constructors ==========

    pub fn parse_error(details: impl Into<String>) -> Self {
        Self::new(codes::PARSE_ERROR, format!("Parse error: {}", details.into()))
            .with_suggestion("Supply a numeric cell value")
    }

    pub fn type_error(expected: &str, got: &str) -> Self {
        Self::new(codes::TYPE_ERROR, format!("Expected {}, got {}", expected, got))
            .with_suggestion(format!("Apply this format only to {} columns", expected))
    }

    pub fn overflow(details: impl Into<String>) -> Self {
        Self::new(codes::OVERFLOW, format!("Overflow: {}", details.into()))
    }

    pub fn invalid_date(details: impl Into<String>) -> Self {
        Self::new(codes::INVALID_DATE, format!("Invalid date: {}", details.into()))
    }

    pub fn date_parse_error(details: impl Into<String>) -> Self {
        Self::new(codes::DATE_PARSE_ERROR, format!("DateTime parse error: {}", details.into()))
            .with_suggestion("Use YYYY-MM-DD[THH:MM:SS] or M/D/YYYY [H:MM:SS]")
    }

    pub fn unknown_format(name: &str) -> Self {
        Self::new(codes::UNKNOWN_FORMAT, format!("Unknown format: {}", name))
    }

    pub fn config_error(details: impl Into<String>) -> Self {
        Self::new(codes::CONFIG_ERROR, format!("Configuration error: {}", details.into()))
    }
}

impl std::fmt::Display for FormatError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        if let Some(ref suggestion) = self.suggestion {
            write!(f, " (suggestion: {})", suggestion)?;
        }
        Ok(())
    }
}

impl std::error::Error for FormatError {}

impl From<NumberError> for FormatError {
    fn from(err: NumberError) -> Self {
        match err {
            NumberError::ParseError(s) => Self::parse_error(format!("'{}' is not a number", s)),
            NumberError::Overflow => Self::overflow("numeric value out of range"),
        }
    }
}

impl From<ConvertError> for FormatError {
    fn from(err: ConvertError) -> Self {
        match err {
            ConvertError::Number(e) => e.into(),
            ConvertError::Type { expected, got } => Self::type_error(expected, got),
            ConvertError::DateParse(s) => Self::date_parse_error(format!("'{}'", s)),
        }
    }
}
