//! Table summaries
//!
//! Shape and per-column statistics for a loaded table: the kind of each
//! column, how many cells are missing, and how many distinct values it
//! holds.

use crate::table::Table;
use serde::Serialize;

/// The inferred kind of a column
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ColumnKind {
    Numeric,
    Text,
}

/// Per-column statistics
#[derive(Debug, Clone, Serialize)]
pub struct ColumnSummary {
    pub name: String,
    pub kind: ColumnKind,
    pub missing: usize,
    pub distinct: usize,
}

/// Shape and column statistics for a table
#[derive(Debug, Clone, Serialize)]
pub struct TableSummary {
    pub rows: usize,
    pub columns: Vec<ColumnSummary>,
}

impl TableSummary {
    /// Compute the summary for a table
    #[must_use]
    pub fn describe(table: &Table) -> Self {
        let columns = table
            .columns()
            .iter()
            .map(|column| ColumnSummary {
                name: column.name().to_string(),
                kind: if column.is_numeric() {
                    ColumnKind::Numeric
                } else {
                    ColumnKind::Text
                },
                missing: column.null_count(),
                distinct: column.distinct_count(),
            })
            .collect();
        Self {
            rows: table.row_count(),
            columns,
        }
    }

    #[must_use]
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }
}
