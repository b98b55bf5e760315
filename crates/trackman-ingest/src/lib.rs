//! Source discovery and CSV reading for the Trackman combine pipeline.
//!
//! Game exports land under `<root>/<month>/<day>/csv/*.csv`. This crate
//! walks that tree, filters out placeholder and batting-practice exports,
//! reads headers to build the combined column universe, and reads full
//! files permissively for normalization.

pub mod discovery;
pub mod error;
pub mod reader;
pub mod schema;

pub use discovery::{
    Candidate, DEFAULT_EXCLUDE_TOKEN, DEFAULT_MIN_SIZE_BYTES, Selection, SelectorOptions,
    SkipReason, SkippedFile, select_files,
};
pub use error::{IngestError, Result};
pub use reader::{read_csv_schema, read_csv_table};
pub use schema::{UnifiedSchema, unify_headers};
