//! Cell values and incoming row labels

use crate::error::DataError;
use serde::{Deserialize, Serialize};

/// A single cell of the observation table.
///
/// `Missing` is the explicit no-value marker used when the column union
/// leaves holes; it serializes as JSON `null` and is never silently replaced
/// by a default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Int(i64),
    Float(f64),
    Bool(bool),
    Text(String),
    Missing,
}

impl Value {
    pub fn is_missing(&self) -> bool {
        matches!(self, Value::Missing)
    }

    /// Numeric view of the cell, when one exists.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(value) => Some(*value as f64),
            Value::Float(value) => Some(*value),
            Value::Bool(_) | Value::Text(_) | Value::Missing => None,
        }
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

/// Row identity attached to an incoming batch.
///
/// Labels are advisory: the table derives identity from position and only
/// requires that textual labels are numeric-coercible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowLabel {
    Int(i64),
    Text(String),
}

impl RowLabel {
    /// Coerce the label to an integer.
    ///
    /// Numeric-looking text (including surrounding whitespace) coerces;
    /// anything else is a caller contract violation.
    pub fn coerce(&self) -> Result<i64, DataError> {
        match self {
            RowLabel::Int(value) => Ok(*value),
            RowLabel::Text(text) => {
                text.trim()
                    .parse()
                    .map_err(|_| DataError::NonNumericLabel { label: text.clone() })
            }
        }
    }
}

impl From<i64> for RowLabel {
    fn from(value: i64) -> Self {
        RowLabel::Int(value)
    }
}

impl From<&str> for RowLabel {
    fn from(value: &str) -> Self {
        RowLabel::Text(value.to_string())
    }
}

impl From<String> for RowLabel {
    fn from(value: String) -> Self {
        RowLabel::Text(value)
    }
}
