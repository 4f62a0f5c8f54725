//! Neighbor ranking over a similarity matrix
//!
//! Resolves a target row, scores every other row against it, and
//! returns the top k by similarity. Ties keep matrix order.

use crate::similarity::SimilarityMatrix;
use ahash::AHashSet;
use serde::Serialize;

/// A neighbor row with its similarity to the target
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ScoredNeighbor {
    pub id: String,
    pub score: f32,
}

/// Rank the rows most similar to a target
///
/// The target resolves by identifier first; a query made entirely of
/// ASCII digits that matches no identifier falls back to a zero-based
/// row position. Unresolvable targets rank nothing. Rows sharing the
/// target's identifier are excluded, and a duplicated neighbor id
/// keeps only its best-scoring row.
#[must_use]
pub fn rank_neighbors(matrix: &SimilarityMatrix, target: &str, k: usize) -> Vec<ScoredNeighbor> {
    let Some(position) = locate(matrix, target) else {
        return Vec::new();
    };
    let Some(row) = matrix.row(position) else {
        return Vec::new();
    };
    let target_id = matrix.ids()[position].clone();

    let mut neighbors = Vec::with_capacity(matrix.len().saturating_sub(1));
    for (index, id) in matrix.ids().iter().enumerate() {
        if *id == target_id {
            continue;
        }
        neighbors.push(ScoredNeighbor {
            id: id.clone(),
            score: row[index],
        });
    }

    neighbors.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let mut seen = AHashSet::new();
    neighbors.retain(|neighbor| seen.insert(neighbor.id.clone()));
    neighbors.truncate(k);
    neighbors
}

/// Resolve a target query to a matrix position
fn locate(matrix: &SimilarityMatrix, target: &str) -> Option<usize> {
    if let Some(position) = matrix.position_of(target) {
        return Some(position);
    }
    if !target.is_empty() && target.bytes().all(|b| b.is_ascii_digit()) {
        if let Ok(position) = target.parse::<usize>() {
            if position < matrix.len() {
                return Some(position);
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use friendlens_core::Vector;

    fn build_matrix(ids: &[&str], rows: &[&[f32]]) -> SimilarityMatrix {
        let vectors: Vec<Vector> = rows.iter().map(|row| Vector::from_slice(row)).collect();
        SimilarityMatrix::from_vectors(ids.iter().map(|s| s.to_string()).collect(), &vectors)
    }

    #[test]
    fn test_ranks_by_descending_score() {
        let matrix = build_matrix(
            &["a", "b", "c"],
            &[&[1.0, 0.0], &[1.0, 0.1], &[0.0, 1.0]],
        );

        let ranked = rank_neighbors(&matrix, "a", 10);
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].id, "b");
        assert_eq!(ranked[1].id, "c");
        assert!(ranked[0].score > ranked[1].score);
    }

    #[test]
    fn test_positional_fallback() {
        let matrix = build_matrix(&["ann", "bob"], &[&[1.0, 0.0], &[1.0, 1.0]]);

        let ranked = rank_neighbors(&matrix, "1", 10);
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].id, "ann", "position 1 resolves to bob, ranking ann");
    }

    #[test]
    fn test_literal_match_beats_position() {
        let matrix = build_matrix(&["1", "0"], &[&[1.0, 0.0], &[0.0, 1.0]]);

        // "0" names a row, so it must not resolve to position 0
        let ranked = rank_neighbors(&matrix, "0", 10);
        assert_eq!(ranked[0].id, "1");
    }

    #[test]
    fn test_out_of_range_position_is_empty() {
        let matrix = build_matrix(&["a", "b"], &[&[1.0], &[1.0]]);
        assert!(rank_neighbors(&matrix, "99", 10).is_empty());
    }

    #[test]
    fn test_unknown_target_is_empty() {
        let matrix = build_matrix(&["a", "b"], &[&[1.0], &[1.0]]);
        assert!(rank_neighbors(&matrix, "zed", 10).is_empty());
        assert!(rank_neighbors(&matrix, "", 10).is_empty());
    }

    #[test]
    fn test_ties_keep_matrix_order() {
        let matrix = build_matrix(
            &["a", "b", "c", "d"],
            &[&[1.0, 0.0], &[1.0, 0.0], &[1.0, 0.0], &[1.0, 0.0]],
        );

        let ranked = rank_neighbors(&matrix, "a", 10);
        let ids: Vec<&str> = ranked.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "c", "d"]);
    }

    #[test]
    fn test_duplicate_target_ids_all_excluded() {
        let matrix = build_matrix(
            &["a", "b", "a"],
            &[&[1.0, 0.0], &[1.0, 1.0], &[0.0, 1.0]],
        );

        let ranked = rank_neighbors(&matrix, "a", 10);
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].id, "b");
    }

    #[test]
    fn test_duplicate_neighbor_ids_keep_best_score() {
        let matrix = build_matrix(
            &["a", "b", "b"],
            &[&[1.0, 0.0], &[0.5, 0.5], &[1.0, 0.1]],
        );

        let ranked = rank_neighbors(&matrix, "a", 10);
        assert_eq!(ranked.len(), 1, "duplicated id must appear once");
        assert_eq!(ranked[0].id, "b");
        let best = matrix.score(0, 1).unwrap().max(matrix.score(0, 2).unwrap());
        assert!((ranked[0].score - best).abs() < 1e-6);
    }

    #[test]
    fn test_k_bounds_result() {
        let matrix = build_matrix(
            &["a", "b", "c"],
            &[&[1.0, 0.0], &[1.0, 0.1], &[0.0, 1.0]],
        );

        assert_eq!(rank_neighbors(&matrix, "a", 1).len(), 1);
        assert!(rank_neighbors(&matrix, "a", 0).is_empty());
    }
}
