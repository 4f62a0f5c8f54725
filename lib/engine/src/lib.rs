//! # Friendlens Engine
//!
//! A schema-driven recommendation engine for tabular profiles.
//!
//! This crate turns profile tables into friend and interest
//! recommendations: rows are encoded into feature vectors, compared
//! all-pairs by cosine similarity, and the nearest neighbors are either
//! returned directly or harvested for interests the target lacks.
//!
//! ## Features
//!
//! - **Feature Encoding**: Standardized numerics and one-hot categoricals from a declarative schema
//! - **All-pairs Similarity**: Dense cosine matrix over encoded rows, connection counts, or raw attributes
//! - **Neighbor Ranking**: Top-k most similar rows, with a positional fallback for digit-only queries
//! - **Interest Harvesting**: Frequency-ranked suggestions drawn from neighbors' multivalue columns
//!
//! ## Example
//!
//! ```rust
//! use friendlens_core::{Column, Table};
//! use friendlens_engine::{recommend_hobbies, ProfileSchema};
//!
//! let table = Table::new(vec![
//!     Column::parse("user_id", &["1", "2", "3"]),
//!     Column::parse("age", &["25", "26", "40"]),
//!     Column::parse(
//!         "hobbies",
//!         &["Reading,Chess", "Reading,Chess,Painting", "Chess,Gaming"],
//!     ),
//! ])
//! .unwrap();
//!
//! let schema = ProfileSchema::new(
//!     "user_id",
//!     vec!["age".to_string()],
//!     vec!["hobbies".to_string()],
//!     vec!["hobbies".to_string()],
//! );
//!
//! // User 1 is closest in age to user 2, whose new interest comes first
//! let suggested = recommend_hobbies(&table, &schema, "1", 5).unwrap();
//! assert_eq!(suggested, vec!["Painting".to_string(), "Gaming".to_string()]);
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │    Table    │────>│   Encoder   │────>│ Similarity  │
//! │  (columns)  │     │ (rows→vecs) │     │   Matrix    │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!       │                                        │
//!       │              ┌─────────────┐    ┌─────────────┐
//!       └─────────────>│  Harvester  │<───│   Ranker    │
//!                      │ (interests) │    │   (top k)   │
//!                      └─────────────┘    └─────────────┘
//! ```

pub mod schema;
pub mod encode;
pub mod similarity;
pub mod rank;
pub mod aggregate;
pub mod recommend;
pub mod report;

// Re-export main types for convenience
pub use schema::{ProfileSchema, SchemaError};
pub use encode::FeatureEncoder;
pub use similarity::SimilarityMatrix;
pub use rank::{rank_neighbors, ScoredNeighbor};
pub use aggregate::aggregate_multivalue;
pub use recommend::{
    match_profile, recommend_friends, recommend_friends_with, recommend_hobbies, DEFAULT_TOP_K,
    SOURCE_COLUMN, TARGET_COLUMN,
};
pub use report::{FriendReport, HobbyReport, MatchReport};
