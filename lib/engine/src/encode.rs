//! Feature encoding for profile tables
//!
//! Turns heterogeneous records into fixed-width vectors: numeric columns
//! are standardized to zero mean and unit variance, categorical columns
//! are one-hot encoded over the values observed at fit time. The output
//! layout is the numeric columns in declared order followed by one block
//! per categorical column, each block spanning that column's sorted
//! observed values.

use crate::schema::ProfileSchema;
use ahash::{AHashMap, AHashSet};
use friendlens_core::{Result, Table, Vector};

/// Standardization state for one numeric column
#[derive(Debug, Clone)]
struct NumericScaler {
    column: String,
    mean: f64,
    std: f64,
}

/// One-hot state for one categorical column
#[derive(Debug, Clone)]
struct CategoryMap {
    column: String,
    /// Observed values in sorted order; one output dimension each
    categories: Vec<String>,
    index: AHashMap<String, usize>,
}

/// Threshold below which a column counts as constant
const MIN_STD: f64 = 1e-10;

/// Fitted feature encoder
///
/// Fitting captures per-column state from the whole table; transforming
/// applies that state row by row. Every vector from one fit has the
/// same dimension, so rows stay comparable.
#[derive(Debug, Clone)]
pub struct FeatureEncoder {
    numeric: Vec<NumericScaler>,
    categorical: Vec<CategoryMap>,
}

impl FeatureEncoder {
    /// Fit the encoder to a table
    ///
    /// Missing numeric cells count as 0.0; missing categorical cells
    /// become the empty-string value, which is itself a category when
    /// observed. Population variance, computed over every row.
    ///
    /// # Errors
    /// Returns an error if a schema column is absent from the table.
    pub fn fit(table: &Table, schema: &ProfileSchema) -> Result<Self> {
        let mut numeric = Vec::with_capacity(schema.numeric.len());
        for name in &schema.numeric {
            let column = table.column(name)?;
            let n = column.len() as f64;

            let mut sum = 0.0;
            for value in column.values() {
                sum += value.as_f64().unwrap_or(0.0);
            }
            let mean = if column.is_empty() { 0.0 } else { sum / n };

            let mut sum_sq = 0.0;
            for value in column.values() {
                let dev = value.as_f64().unwrap_or(0.0) - mean;
                sum_sq += dev * dev;
            }
            let std = if column.is_empty() {
                0.0
            } else {
                (sum_sq / n).sqrt()
            };

            numeric.push(NumericScaler {
                column: name.clone(),
                mean,
                std,
            });
        }

        let mut categorical = Vec::with_capacity(schema.categorical.len());
        for name in &schema.categorical {
            let column = table.column(name)?;
            let mut seen = AHashSet::new();
            for value in column.values() {
                seen.insert(value.to_string());
            }
            let mut categories: Vec<String> = seen.into_iter().collect();
            categories.sort();
            let index = categories
                .iter()
                .enumerate()
                .map(|(slot, category)| (category.clone(), slot))
                .collect();
            categorical.push(CategoryMap {
                column: name.clone(),
                categories,
                index,
            });
        }

        Ok(Self {
            numeric,
            categorical,
        })
    }

    /// Total dimension of encoded vectors
    #[must_use]
    pub fn output_dim(&self) -> usize {
        self.numeric.len()
            + self
                .categorical
                .iter()
                .map(|map| map.categories.len())
                .sum::<usize>()
    }

    /// Encode every row of a table with the fitted state
    ///
    /// Values unseen at fit time encode as an all-zero block. Constant
    /// numeric columns encode as 0.0.
    ///
    /// # Errors
    /// Returns an error if a fitted column is absent from the table.
    pub fn transform(&self, table: &Table) -> Result<Vec<Vector>> {
        let dim = self.output_dim();
        let mut out: Vec<Vec<f32>> = (0..table.row_count())
            .map(|_| Vec::with_capacity(dim))
            .collect();

        for scaler in &self.numeric {
            let column = table.column(&scaler.column)?;
            for (row, value) in column.values().iter().enumerate() {
                let v = value.as_f64().unwrap_or(0.0);
                let scaled = if scaler.std > MIN_STD {
                    (v - scaler.mean) / scaler.std
                } else {
                    0.0
                };
                out[row].push(scaled as f32);
            }
        }

        for map in &self.categorical {
            let column = table.column(&map.column)?;
            for (row, value) in column.values().iter().enumerate() {
                let start = out[row].len();
                out[row].resize(start + map.categories.len(), 0.0);
                if let Some(&slot) = map.index.get(&value.to_string()) {
                    out[row][start + slot] = 1.0;
                }
            }
        }

        Ok(out.into_iter().map(Vector::new).collect())
    }

    /// Fit to a table and encode it in one step
    pub fn fit_transform(table: &Table, schema: &ProfileSchema) -> Result<Vec<Vector>> {
        let encoder = Self::fit(table, schema)?;
        encoder.transform(table)
    }
}
