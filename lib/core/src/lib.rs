//! # friendlens Core
//!
//! Core library for the friendlens recommendation engine.
//!
//! This crate provides the data substrate the engine works on:
//!
//! - [`Value`] - A single table cell (number, text, or missing)
//! - [`Column`] / [`Table`] - Columnar record tables with typed access
//! - [`Vector`] - Dense vector representation with cosine similarity
//! - [`TableSummary`] - Shape and per-column statistics
//! - [`load_table`] - CSV ingestion with per-field type inference
//!
//! ## Example
//!
//! ```rust
//! use friendlens_core::{Column, Table, Value};
//!
//! let table = Table::new(vec![
//!     Column::new("user_id", vec![Value::Number(1.0), Value::Number(2.0)]),
//!     Column::new("age", vec![Value::Number(25.0), Value::Null]),
//! ])
//! .unwrap();
//!
//! assert_eq!(table.row_count(), 2);
//! assert!(table.column("age").unwrap().is_numeric());
//! assert_eq!(table.column("age").unwrap().null_count(), 1);
//! ```

pub mod error;
pub mod io;
pub mod summary;
pub mod table;
pub mod value;
pub mod vector;

pub use error::{Error, Result};
pub use io::load_table;
pub use summary::{ColumnKind, ColumnSummary, TableSummary};
pub use table::{Column, Table};
pub use value::Value;
pub use vector::Vector;
