//! Shared vocabulary for the Trackman combine pipeline.
//!
//! This crate holds the types the other workspace crates agree on: the
//! well-known tracking column names, the missing-value vocabulary, the raw
//! string table produced by CSV ingestion, and the frozen column universe
//! that defines the shape of every combined output row.

pub mod columns;
pub mod table;
pub mod universe;

pub use table::RawTable;
pub use universe::{ColumnUniverse, UniverseBuilder};
