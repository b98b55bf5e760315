//! CSV reading for game exports.
//!
//! Two entry points mirror the pipeline's two passes: [`read_csv_schema`]
//! reads only the header row while the column universe is being built, and
//! [`read_csv_table`] reads a full file permissively for normalization.

use std::path::Path;

use csv::ReaderBuilder;
use tracing::debug;

use trackman_model::RawTable;

use crate::error::{IngestError, Result};

fn normalize_header(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

/// Read only the header row of `path`.
pub fn read_csv_schema(path: &Path) -> Result<Vec<String>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .map_err(|error| IngestError::HeaderParse {
            path: path.to_path_buf(),
            message: error.to_string(),
        })?;
    let headers = reader.headers().map_err(|error| IngestError::HeaderParse {
        path: path.to_path_buf(),
        message: error.to_string(),
    })?;
    let columns: Vec<String> = headers.iter().map(normalize_header).collect();
    if columns.is_empty() || columns.iter().all(|column| column.is_empty()) {
        return Err(IngestError::EmptyHeader {
            path: path.to_path_buf(),
        });
    }
    Ok(columns)
}

/// Read a full export permissively.
///
/// Individual malformed records are skipped with a diagnostic; they never
/// fail the file. A file whose records are all malformed comes back with
/// zero rows and is handled by the caller.
pub fn read_csv_table(path: &Path) -> Result<RawTable> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .map_err(|error| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: error.to_string(),
        })?;
    let headers: Vec<String> = reader
        .headers()
        .map_err(|error| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: error.to_string(),
        })?
        .iter()
        .map(normalize_header)
        .collect();

    let mut rows: Vec<Vec<String>> = Vec::new();
    let mut bad_lines = 0usize;
    for record in reader.records() {
        match record {
            Ok(record) => rows.push(record.iter().map(str::to_string).collect()),
            Err(error) => {
                bad_lines += 1;
                debug!(path = %path.display(), %error, "skipping malformed line");
            }
        }
    }
    if bad_lines > 0 {
        debug!(path = %path.display(), bad_lines, "malformed lines skipped");
    }

    Ok(RawTable::new(headers, rows))
}
