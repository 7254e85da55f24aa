//! Cell values handed to formatters
//!
//! Values can be numbers, text, booleans, datetimes or null. Conversions
//! follow the host's loose typing: numeric text is a number, a boolean
//! counts as 1/0, null counts as zero (or as the earliest datetime).

use crate::datetime::{display_datetime, min_datetime, parse_datetime};
use crate::{Number, NumberError};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Source or output type of a column, as the host classifies it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DataType {
    DateTime,
    Numeric,
}

/// Failure converting a cell value to the type a formatter needs
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConvertError {
    #[error(transparent)]
    Number(#[from] NumberError),

    #[error("expected {expected}, got {got}")]
    Type {
        expected: &'static str,
        got: &'static str,
    },

    #[error("unrecognized datetime: {0}")]
    DateParse(String),
}

/// Runtime cell value
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum Value {
    Number(Number),
    Text(String),
    Bool(bool),
    DateTime(NaiveDateTime),
    #[default]
    Null,
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Type name for error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Number(_) => "Number",
            Value::Text(_) => "Text",
            Value::Bool(_) => "Bool",
            Value::DateTime(_) => "DateTime",
            Value::Null => "Null",
        }
    }

    // ========== Type Coercion ==========

    /// Convert to an exact decimal
    pub fn to_decimal(&self) -> Result<Number, ConvertError> {
        match self {
            Value::Number(n) => Ok(n.clone()),
            Value::Text(s) => {
                let cleaned: String = s.chars().filter(|c| *c != ',').collect();
                Ok(Number::from_str(&cleaned)?)
            }
            Value::Bool(b) => Ok(Number::from_i64(if *b { 1 } else { 0 })),
            Value::Null => Ok(Number::from_i64(0)),
            Value::DateTime(_) => Err(ConvertError::Type {
                expected: "Number",
                got: self.type_name(),
            }),
        }
    }

    /// Convert to a double (may lose precision)
    pub fn to_f64(&self) -> Result<f64, ConvertError> {
        self.to_decimal()?
            .to_f64()
            .ok_or(ConvertError::Number(NumberError::Overflow))
    }

    /// Convert to a wall-clock datetime. Null is the earliest
    /// representable moment, `0001-01-01 00:00:00`.
    pub fn to_datetime(&self) -> Result<NaiveDateTime, ConvertError> {
        match self {
            Value::DateTime(dt) => Ok(*dt),
            Value::Text(s) => parse_datetime(s),
            Value::Null => Ok(min_datetime()),
            _ => Err(ConvertError::Type {
                expected: "DateTime",
                got: self.type_name(),
            }),
        }
    }

    /// Build a cell from a JSON scalar. Strings stay text; arrays and
    /// objects are kept as their JSON text.
    pub fn from_json(json: &serde_json::Value) -> Value {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(*b),
            serde_json::Value::Number(n) => Number::from_str(&n.to_string())
                .map(Value::Number)
                .unwrap_or_else(|_| Value::Text(n.to_string())),
            serde_json::Value::String(s) => Value::Text(s.clone()),
            other => Value::Text(other.to_string()),
        }
    }
}

/// Plain string form, used whenever a format cannot apply
impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{}", n),
            Value::Text(s) => write!(f, "{}", s),
            Value::Bool(true) => write!(f, "True"),
            Value::Bool(false) => write!(f, "False"),
            Value::DateTime(dt) => write!(f, "{}", display_datetime(dt)),
            Value::Null => Ok(()),
        }
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(Number::from_i64(n))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<Number> for Value {
    fn from(n: Number) -> Self {
        Value::Number(n)
    }
}

impl From<NaiveDateTime> for Value {
    fn from(dt: NaiveDateTime) -> Self {
        Value::DateTime(dt)
    }
}
