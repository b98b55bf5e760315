//! Error types for source discovery and CSV reading.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while discovering or reading game exports.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Root data directory is missing or is not a directory.
    #[error("root directory not found: {path}")]
    RootNotFound { path: PathBuf },

    /// Failed to read directory entries.
    #[error("failed to read directory {path}: {source}")]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Header row could not be read or parsed as CSV.
    #[error("failed to read header of {path}: {message}")]
    HeaderParse { path: PathBuf, message: String },

    /// File has no header row or only blank header fields.
    #[error("no usable header row in {path}")]
    EmptyHeader { path: PathBuf },

    /// File could not be opened or parsed at all.
    #[error("failed to parse CSV {path}: {message}")]
    CsvParse { path: PathBuf, message: String },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
