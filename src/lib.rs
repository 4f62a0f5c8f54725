//! # Friendlens
//!
//! Friend and interest recommendations from tabular profiles.
//!
//! Friendlens loads CSV records into columnar tables, compares rows by
//! cosine similarity, and answers three questions: who is a user most
//! similar to, which interests should they pick up from their nearest
//! profiles, and which rows best match an ad-hoc feature vector.
//!
//! ## Quick Start
//!
//! ### As a CLI
//!
//! ```bash
//! cargo install friendlens
//! friendlens recommend --file connections.csv --target ann
//! friendlens suggest --file profiles.csv --target 1
//! ```
//!
//! ### As a Library
//!
//! ```rust
//! use friendlens::prelude::*;
//!
//! // A connection table: one row per friendship
//! let table = Table::new(vec![
//!     Column::parse("User", &["ann", "ann", "bob"]),
//!     Column::parse("Friend", &["bob", "cid", "cid"]),
//! ])
//! .unwrap();
//!
//! // Users who befriend the same people rank highest
//! let friends = recommend_friends(&table, "ann", DEFAULT_TOP_K);
//! assert_eq!(friends, vec!["bob".to_string()]);
//! ```
//!
//! ## Crate Structure
//!
//! Friendlens is composed of two crates:
//!
//! - [`friendlens-core`](https://docs.rs/friendlens-core) - Tables, cell values, vectors, CSV loading, summaries
//! - [`friendlens-engine`](https://docs.rs/friendlens-engine) - Schemas, encoding, similarity, ranking, harvesting
//!
//! ## Features
//!
//! - **Friend Ranking**: Cosine similarity over connection counts or numeric attributes
//! - **Interest Suggestion**: Frequency-ranked hobbies and clubs harvested from similar profiles
//! - **Profile Matching**: Rank rows against a caller-supplied feature vector
//! - **Schema-driven Encoding**: Standardized numerics and one-hot categoricals
//!
//! Every operation recomputes from the table it is handed, so results
//! always reflect the data passed in and no state leaks between calls.

// Re-export core types
pub use friendlens_core::{
    load_table, Column, ColumnKind, ColumnSummary, Error, Result, Table, TableSummary, Value,
    Vector,
};

// Re-export engine types
pub use friendlens_engine::{
    aggregate_multivalue, match_profile, rank_neighbors, recommend_friends,
    recommend_friends_with, recommend_hobbies, FeatureEncoder, FriendReport, HobbyReport,
    MatchReport, ProfileSchema, SchemaError, ScoredNeighbor, SimilarityMatrix, DEFAULT_TOP_K,
    SOURCE_COLUMN, TARGET_COLUMN,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        aggregate_multivalue, load_table, match_profile, rank_neighbors, recommend_friends,
        recommend_friends_with, recommend_hobbies, Column, Error, FeatureEncoder, FriendReport,
        HobbyReport, MatchReport, ProfileSchema, Result, ScoredNeighbor, SimilarityMatrix, Table,
        TableSummary, Value, Vector, DEFAULT_TOP_K, SOURCE_COLUMN, TARGET_COLUMN,
    };
}
