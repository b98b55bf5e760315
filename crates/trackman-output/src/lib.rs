//! Combined-dataset CSV writing for the Trackman pipeline.

pub mod writer;

pub use writer::{CombinedWriter, write_table};
