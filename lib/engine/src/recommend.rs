//! High-level recommendation pipelines
//!
//! Ties the encoder, similarity matrix, ranker and harvester together
//! into the three operations the binary exposes: friend ranking over a
//! connection table, interest suggestion over a profile table, and
//! ad-hoc profile matching against a caller-supplied vector. Every
//! call recomputes from the table it is handed; nothing is cached
//! between calls.

use crate::aggregate::aggregate_multivalue;
use crate::encode::FeatureEncoder;
use crate::rank::{rank_neighbors, ScoredNeighbor};
use crate::schema::ProfileSchema;
use crate::similarity::SimilarityMatrix;
use friendlens_core::{Column, Error, Result, Table, Value, Vector};

/// Result length when the caller does not pick one
pub const DEFAULT_TOP_K: usize = 5;

/// Connection-table column naming the user on each row
pub const SOURCE_COLUMN: &str = "User";

/// Connection-table column naming the user's friend on each row
pub const TARGET_COLUMN: &str = "Friend";

/// Recommend friends for a target using the default pair columns
#[must_use]
pub fn recommend_friends(table: &Table, target: &str, k: usize) -> Vec<String> {
    recommend_friends_with(table, SOURCE_COLUMN, TARGET_COLUMN, target, k)
}

/// Recommend friends for a target user
///
/// When both pair columns are present the table is read as a
/// connection list and users are compared by who they connect to.
/// Otherwise the table is read as numeric attributes with the first
/// column as identifier. Degenerate tables rank nobody rather than
/// failing.
#[must_use]
pub fn recommend_friends_with(
    table: &Table,
    source_column: &str,
    target_column: &str,
    target: &str,
    k: usize,
) -> Vec<String> {
    let matrix = if table.has_column(source_column) && table.has_column(target_column) {
        SimilarityMatrix::from_edge_list(table, source_column, target_column)
            .unwrap_or_else(|_| SimilarityMatrix::empty())
    } else {
        SimilarityMatrix::from_numeric_attributes(table)
    };

    rank_neighbors(&matrix, target, k)
        .into_iter()
        .map(|neighbor| neighbor.id)
        .collect()
}

/// Suggest interests for a target from its most similar profiles
///
/// Encodes the table with the schema, ranks the target's nearest
/// profiles by cosine similarity, then harvests the multivalue columns
/// of those profiles for interests the target does not already hold.
/// One `k` bounds both the neighborhood and the suggestion list.
///
/// # Arguments
/// * `table` - Profile table containing the schema's columns
/// * `schema` - Column roles used for encoding and harvesting
/// * `target` - Identifier of the profile to suggest for
/// * `k` - Maximum neighbors consulted and suggestions returned
///
/// # Errors
/// Returns an error if a schema column is absent from the table.
pub fn recommend_hobbies(
    table: &Table,
    schema: &ProfileSchema,
    target: &str,
    k: usize,
) -> Result<Vec<String>> {
    let vectors = FeatureEncoder::fit_transform(table, schema)?;
    let ids: Vec<String> = table
        .column(&schema.id_column)?
        .values()
        .iter()
        .map(Value::to_string)
        .collect();

    let matrix = SimilarityMatrix::from_vectors(ids, &vectors);
    let neighbor_ids: Vec<String> = rank_neighbors(&matrix, target, k)
        .into_iter()
        .map(|neighbor| neighbor.id)
        .collect();

    aggregate_multivalue(
        table,
        &schema.id_column,
        target,
        &neighbor_ids,
        &schema.multivalue,
        k,
    )
}

/// Rank table rows against an ad-hoc feature vector
///
/// Features come from the named columns, or from every numeric column
/// after the first when no names are given. The value list must match
/// the feature count exactly. Tables with no rows or no usable
/// features match nobody.
///
/// # Errors
/// Returns an error if a named column is absent, or if the value
/// list's length differs from the feature count.
pub fn match_profile(
    table: &Table,
    columns: Option<&[String]>,
    values: &[f32],
    k: usize,
) -> Result<Vec<ScoredNeighbor>> {
    if table.is_empty() || values.is_empty() {
        return Ok(Vec::new());
    }
    let Some(id_column) = table.first_column() else {
        return Ok(Vec::new());
    };

    let features: Vec<&Column> = match columns {
        Some(names) => names
            .iter()
            .map(|name| table.column(name))
            .collect::<Result<_>>()?,
        None => table.columns()[1..]
            .iter()
            .filter(|column| column.is_numeric())
            .collect(),
    };
    if features.is_empty() {
        return Ok(Vec::new());
    }
    if values.len() != features.len() {
        return Err(Error::InvalidDimension {
            expected: features.len(),
            actual: values.len(),
        });
    }

    let query = Vector::from_slice(values);
    let mut matches: Vec<ScoredNeighbor> = (0..table.row_count())
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
            ScoredNeighbor {
                id: id_column
                    .get(row)
                    .map(Value::to_string)
                    .unwrap_or_default(),
                score: query.cosine_similarity(&Vector::new(data)),
            }
        })
        .collect();

    matches.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    matches.truncate(k);
    Ok(matches)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(name: &str, values: &[&str]) -> Column {
        Column::new(
            name,
            values.iter().map(|v| Value::Text(v.to_string())).collect(),
        )
    }

    fn num(name: &str, values: &[f64]) -> Column {
        Column::new(name, values.iter().map(|v| Value::Number(*v)).collect())
    }

    fn strings(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_default_top_k() {
        assert_eq!(DEFAULT_TOP_K, 5);
    }

    #[test]
    fn test_friends_from_connection_table() {
        let table = Table::new(vec![
            text("User", &["ann", "ann", "bob"]),
            text("Friend", &["bob", "cid", "cid"]),
        ])
        .unwrap();

        assert_eq!(recommend_friends(&table, "ann", 5), vec!["bob".to_string()]);
    }

    #[test]
    fn test_friends_fall_back_to_attributes() {
        let table = Table::new(vec![
            text("user_id", &["u1", "u2", "u3"]),
            num("x", &[1.0, 1.0, 0.0]),
            num("y", &[0.0, 0.1, 1.0]),
        ])
        .unwrap();

        let friends = recommend_friends(&table, "u1", 1);
        assert_eq!(friends, vec!["u2".to_string()]);
    }

    #[test]
    fn test_friends_unknown_target_is_empty() {
        let table = Table::new(vec![
            text("User", &["ann"]),
            text("Friend", &["bob"]),
        ])
        .unwrap();

        assert!(recommend_friends(&table, "zed", 5).is_empty());
        assert!(recommend_friends(&Table::empty(), "ann", 5).is_empty());
    }

    #[test]
    fn test_hobby_suggestions() {
        let table = Table::new(vec![
            text("user_id", &["1", "2", "3"]),
            num("age", &[25.0, 26.0, 40.0]),
            text(
                "hobbies",
                &["Reading,Chess", "Reading,Chess,Painting", "Chess,Gaming"],
            ),
        ])
        .unwrap();
        let schema = ProfileSchema::new(
            "user_id",
            strings(&["age"]),
            strings(&["hobbies"]),
            strings(&["hobbies"]),
        );

        let suggested = recommend_hobbies(&table, &schema, "1", 5).unwrap();
        assert_eq!(
            suggested,
            vec!["Painting".to_string(), "Gaming".to_string()],
            "nearer profile's new interest should rank first"
        );
    }

    #[test]
    fn test_hobby_suggestions_missing_column() {
        let table = Table::new(vec![text("user_id", &["1"])]).unwrap();
        let schema = ProfileSchema::new("user_id", strings(&["age"]), vec![], vec![]);
        assert!(recommend_hobbies(&table, &schema, "1", 5).is_err());
    }

    #[test]
    fn test_match_profile_ranks_rows() {
        let table = Table::new(vec![
            text("user_id", &["u1", "u2"]),
            num("x", &[1.0, 0.0]),
            num("y", &[0.0, 1.0]),
        ])
        .unwrap();

        let matches = match_profile(&table, None, &[1.0, 0.0], 5).unwrap();
        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].id, "u1");
        assert!((matches[0].score - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_match_profile_named_columns() {
        let table = Table::new(vec![
            text("user_id", &["u1", "u2"]),
            num("x", &[1.0, 0.0]),
            num("y", &[0.0, 1.0]),
        ])
        .unwrap();

        let matches = match_profile(&table, Some(&strings(&["y"])), &[1.0], 1).unwrap();
        assert_eq!(matches[0].id, "u2");
    }

    #[test]
    fn test_match_profile_dimension_mismatch() {
        let table = Table::new(vec![
            text("user_id", &["u1"]),
            num("x", &[1.0]),
            num("y", &[2.0]),
        ])
        .unwrap();

        assert!(matches!(
            match_profile(&table, None, &[1.0], 5),
            Err(Error::InvalidDimension {
                expected: 2,
                actual: 1
            })
        ));
    }

    #[test]
    fn test_match_profile_degenerate_inputs() {
        assert!(match_profile(&Table::empty(), None, &[1.0], 5)
            .unwrap()
            .is_empty());

        let table = Table::new(vec![
            text("user_id", &["u1"]),
            num("x", &[1.0]),
        ])
        .unwrap();
        assert!(match_profile(&table, None, &[], 5).unwrap().is_empty());

        let no_features = Table::new(vec![text("user_id", &["u1"])]).unwrap();
        assert!(match_profile(&no_features, None, &[1.0], 5)
            .unwrap()
            .is_empty());
    }
}
