//! Column-universe construction from candidate headers.

use tracing::{debug, warn};

use trackman_model::{ColumnUniverse, UniverseBuilder};

use crate::discovery::{Candidate, SkipReason, SkippedFile};
use crate::reader::read_csv_schema;

/// Result of the header pass over all candidates.
#[derive(Debug)]
pub struct UnifiedSchema {
    /// Frozen column set; empty when no candidate had a readable header.
    pub universe: ColumnUniverse,
    /// Candidates whose headers were readable, in input order.
    pub readable: Vec<Candidate>,
    /// Candidates dropped because their header could not be parsed.
    pub skipped: Vec<SkippedFile>,
}

/// Read every candidate's header and freeze the column universe.
///
/// Header failures are soft: the file is dropped from later stages with a
/// diagnostic and the run continues.
pub fn unify_headers(candidates: Vec<Candidate>) -> UnifiedSchema {
    let mut builder = UniverseBuilder::new();
    let mut readable = Vec::with_capacity(candidates.len());
    let mut skipped = Vec::new();

    for candidate in candidates {
        match read_csv_schema(&candidate.path) {
            Ok(columns) => {
                debug!(
                    path = %candidate.path.display(),
                    columns = columns.len(),
                    "header read"
                );
                builder.add_header(&columns);
                readable.push(candidate);
            }
            Err(error) => {
                warn!(
                    path = %candidate.path.display(),
                    %error,
                    "skipping file with unreadable header"
                );
                skipped.push(SkippedFile {
                    path: candidate.path,
                    reason: SkipReason::UnreadableHeader,
                });
            }
        }
    }

    UnifiedSchema {
        universe: builder.finish(),
        readable,
        skipped,
    }
}
