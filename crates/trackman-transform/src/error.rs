//! Error types for column transformations.

use thiserror::Error;

/// Errors raised by transformations that require specific columns.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TransformError {
    /// A required column is absent from the table header.
    #[error("required column '{column}' not found in header")]
    MissingColumn { column: String },
}
