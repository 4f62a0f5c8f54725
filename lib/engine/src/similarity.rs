//! All-pairs cosine similarity
//!
//! Builds a dense symmetric matrix of cosine scores over a set of row
//! vectors. Two constructors derive the vectors from a table first:
//! edge-list mode cross-tabulates a source/target pair column into
//! connection-count vectors, attribute mode reads numeric columns
//! directly.
//!
//! The matrix is rebuilt from scratch on every call, O(n^2 * d) for n
//! rows of dimension d. Callers that reuse one matrix across lookups
//! should hold on to it rather than reconstruct per query.

use friendlens_core::{Result, Table, Value, Vector};
use std::collections::BTreeSet;

use ahash::AHashMap;

/// Dense symmetric similarity matrix with row identifiers
#[derive(Debug, Clone, PartialEq)]
pub struct SimilarityMatrix {
    ids: Vec<String>,
    scores: Vec<Vec<f32>>,
}

impl SimilarityMatrix {
    /// Matrix with no rows
    #[must_use]
    pub fn empty() -> Self {
        Self {
            ids: Vec::new(),
            scores: Vec::new(),
        }
    }

    /// Build from pre-computed row vectors
    ///
    /// Scores are cosine similarity, with zero-norm rows scoring 0.0
    /// against everything. Degenerate input (mismatched lengths, ragged
    /// or zero-dimension vectors) yields the empty matrix rather than
    /// an error.
    #[must_use]
    pub fn from_vectors(ids: Vec<String>, vectors: &[Vector]) -> Self {
        if ids.is_empty() || ids.len() != vectors.len() {
            return Self::empty();
        }
        let dim = vectors[0].dim();
        if dim == 0 || vectors.iter().any(|v| v.dim() != dim) {
            return Self::empty();
        }

        let n = vectors.len();
        let mut scores = vec![vec![0.0f32; n]; n];
        for i in 0..n {
            for j in i..n {
                let score = vectors[i].cosine_similarity(&vectors[j]);
                scores[i][j] = score;
                scores[j][i] = score;
            }
        }

        Self { ids, scores }
    }

    /// Build from a table of source/target connection pairs
    ///
    /// Each row records one connection. Sources become matrix rows,
    /// distinct targets become count-vector axes, both in sorted order.
    /// Rows with a missing source or target are skipped.
    ///
    /// # Errors
    /// Returns an error if either column is absent from the table.
    pub fn from_edge_list(
        table: &Table,
        source_column: &str,
        target_column: &str,
    ) -> Result<Self> {
        let sources = table.column(source_column)?;
        let targets = table.column(target_column)?;

        let mut source_set = BTreeSet::new();
        let mut target_set = BTreeSet::new();
        for (source, target) in sources.values().iter().zip(targets.values()) {
            if source.is_null() || target.is_null() {
                continue;
            }
            source_set.insert(source.to_string());
            target_set.insert(target.to_string());
        }

        let source_ids: Vec<String> = source_set.into_iter().collect();
        let target_ids: Vec<String> = target_set.into_iter().collect();
        let source_index: AHashMap<&str, usize> = source_ids
            .iter()
            .enumerate()
            .map(|(i, id)| (id.as_str(), i))
            .collect();
        let target_index: AHashMap<&str, usize> = target_ids
            .iter()
            .enumerate()
            .map(|(i, id)| (id.as_str(), i))
            .collect();

        let mut counts = vec![vec![0.0f32; target_ids.len()]; source_ids.len()];
        for (source, target) in sources.values().iter().zip(targets.values()) {
            if source.is_null() || target.is_null() {
                continue;
            }
            if let (Some(&row), Some(&col)) = (
                source_index.get(source.to_string().as_str()),
                target_index.get(target.to_string().as_str()),
            ) {
                counts[row][col] += 1.0;
            }
        }

        let vectors: Vec<Vector> = counts.into_iter().map(Vector::new).collect();
        Ok(Self::from_vectors(source_ids, &vectors))
    }

    /// Build from a table's numeric attribute columns
    ///
    /// The first column supplies row identifiers in table order; every
    /// other numeric column becomes one vector dimension, with missing
    /// cells read as 0.0. Tables without a usable identifier column or
    /// without any numeric feature column yield the empty matrix.
    ///
    /// Row identity here is positional, so tables where the first
    /// column is not actually an identifier still produce a matrix,
    /// just one whose scores compare raw attribute magnitudes.
    #[must_use]
    pub fn from_numeric_attributes(table: &Table) -> Self {
        match numeric_attribute_rows(table) {
            Some((ids, vectors)) => Self::from_vectors(ids, &vectors),
            None => Self::empty(),
        }
    }

    /// Number of rows
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Check if the matrix has no rows
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Row identifiers in matrix order
    #[inline]
    #[must_use]
    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    /// Score row at a position
    #[must_use]
    pub fn row(&self, position: usize) -> Option<&[f32]> {
        self.scores.get(position).map(Vec::as_slice)
    }

    /// Score between two row positions
    #[must_use]
    pub fn score(&self, i: usize, j: usize) -> Option<f32> {
        self.scores.get(i).and_then(|row| row.get(j)).copied()
    }

    /// Position of an identifier, if present
    #[must_use]
    pub fn position_of(&self, id: &str) -> Option<usize> {
        self.ids.iter().position(|candidate| candidate == id)
    }
}

/// Extract identifiers and numeric feature vectors from a table
///
/// Returns `None` when the table has no columns or no numeric feature
/// column beyond the first.
pub(crate) fn numeric_attribute_rows(table: &Table) -> Option<(Vec<String>, Vec<Vector>)> {
    let id_column = table.first_column()?;
    let features: Vec<_> = table.columns()[1..]
        .iter()
        .filter(|column| column.is_numeric())
        .collect();
    if features.is_empty() {
        return None;
    }

    let ids: Vec<String> = id_column.values().iter().map(Value::to_string).collect();
    let vectors: Vec<Vector> = (0..table.row_count())
        .map(|row| {
            let data: Vec<f32> = features
                .iter()
                .map(|column| {
                    column
                        .get(row)
                        .and_then(Value::as_f64)
                        .unwrap_or(0.0) as f32
                })
                .collect();
            Vector::new(data)
        })
        .collect();

    Some((ids, vectors))
}
