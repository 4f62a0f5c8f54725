//! Table cell values
//!
//! A [`Value`] is one cell of a column: a number, a string, or missing.
//! Parsing and rendering rules live here so every consumer agrees on how
//! raw fields become cells and how cells become identifier strings and
//! category tokens.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single table cell
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum Value {
    Number(f64),
    Text(String),
    Null,
}

impl Value {
    /// Parse a raw field into a cell value
    ///
    /// Empty fields are missing. Fields that parse as a float become
    /// numbers (NaN tokens count as missing); everything else is text.
    #[must_use]
    pub fn parse(field: &str) -> Self {
        if field.is_empty() {
            return Value::Null;
        }
        match field.parse::<f64>() {
            Ok(n) if n.is_nan() => Value::Null,
            Ok(n) => Value::Number(n),
            Err(_) => Value::Text(field.to_string()),
        }
    }

    #[inline]
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Numeric view of the cell, if it holds a number
    #[inline]
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Text view of the cell, if it holds a string
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }
}

/// Renders the cell as an identifier string or category token.
///
/// Missing cells render as the empty string, which doubles as the
/// missing-value sentinel for categorical encoding. Integral floats
/// render without a fractional part, so a numeric identifier matches
/// its query-string form.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{n}"),
            Value::Text(s) => write!(f, "{s}"),
            Value::Null => Ok(()),
        }
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
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
