//! Columnar record tables
//!
//! A [`Table`] is an ordered list of equal-length named [`Column`]s. It
//! is handed to the engine wholesale per call and treated as read-only
//! for the duration of that call.

use crate::error::{Error, Result};
use crate::value::Value;
use ahash::AHashSet;
use serde::{Deserialize, Serialize};

/// A named column of cells
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Column {
    name: String,
    values: Vec<Value>,
}

impl Column {
    #[must_use]
    pub fn new(name: impl Into<String>, values: Vec<Value>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }

    /// Build a column from raw string fields, inferring cell types
    #[must_use]
    pub fn parse(name: impl Into<String>, fields: &[&str]) -> Self {
        Self {
            name: name.into(),
            values: fields.iter().map(|f| Value::parse(f)).collect(),
        }
    }

    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    #[must_use]
    pub fn values(&self) -> &[Value] {
        &self.values
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn get(&self, row: usize) -> Option<&Value> {
        self.values.get(row)
    }

    /// Whether every present cell is numeric
    ///
    /// An all-missing column counts as numeric, matching how a float
    /// column with no observed values loads from CSV.
    #[must_use]
    pub fn is_numeric(&self) -> bool {
        self.values.iter().all(|v| !matches!(v, Value::Text(_)))
    }

    /// Number of missing cells
    #[must_use]
    pub fn null_count(&self) -> usize {
        self.values.iter().filter(|v| v.is_null()).count()
    }

    /// Number of distinct present values, compared by rendered form
    #[must_use]
    pub fn distinct_count(&self) -> usize {
        let mut seen = AHashSet::new();
        for value in &self.values {
            if !value.is_null() {
                seen.insert(value.to_string());
            }
        }
        seen.len()
    }
}

/// An in-memory record table
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Table {
    columns: Vec<Column>,
}

impl Table {
    /// Build a table from columns, which must all have the same length
    pub fn new(columns: Vec<Column>) -> Result<Self> {
        if let Some(first) = columns.first() {
            let expected = first.len();
            for column in &columns {
                if column.len() != expected {
                    return Err(Error::ColumnLengthMismatch {
                        name: column.name().to_string(),
                        expected,
                        actual: column.len(),
                    });
                }
            }
        }
        Ok(Self { columns })
    }

    #[must_use]
    pub fn empty() -> Self {
        Self {
            columns: Vec::new(),
        }
    }

    #[inline]
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.columns.first().map_or(0, Column::len)
    }

    #[inline]
    #[must_use]
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.row_count() == 0
    }

    #[inline]
    #[must_use]
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    #[must_use]
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(Column::name).collect()
    }

    #[inline]
    #[must_use]
    pub fn first_column(&self) -> Option<&Column> {
        self.columns.first()
    }

    #[must_use]
    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c.name() == name)
    }

    /// Look up a column by name
    pub fn column(&self, name: &str) -> Result<&Column> {
        self.columns
            .iter()
            .find(|c| c.name() == name)
            .ok_or_else(|| Error::ColumnNotFound(name.to_string()))
    }

    /// First `limit` records as JSON objects, in column order
    #[must_use]
    pub fn head(&self, limit: usize) -> Vec<serde_json::Map<String, serde_json::Value>> {
        let rows = self.row_count().min(limit);
        (0..rows)
            .map(|row| {
                self.columns
                    .iter()
                    .map(|column| {
                        let cell = column.get(row).cloned().unwrap_or(Value::Null);
                        let json = serde_json::to_value(&cell).unwrap_or(serde_json::Value::Null);
                        (column.name().to_string(), json)
                    })
                    .collect()
            })
            .collect()
    }
}
