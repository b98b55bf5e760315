//! Result types returned by the subcommands.

use std::path::PathBuf;

use serde::Serialize;

use trackman_ingest::SkippedFile;

/// Summary of one combine run.
#[derive(Debug, Serialize)]
pub struct CombineReport {
    pub root: PathBuf,
    pub output: PathBuf,
    /// CSV files the walk looked at.
    pub files_scanned: usize,
    /// Files that contributed at least one row.
    pub files_kept: usize,
    pub rows_written: u64,
    /// Columns in the frozen universe; zero when no output was produced.
    pub columns: usize,
    /// Subdirectories that could not be read.
    pub unreadable_dirs: usize,
    pub skips: SkipCounts,
    pub skipped_files: Vec<SkippedFileReport>,
    /// False when no eligible file produced rows and no file was created.
    pub output_written: bool,
}

/// Skip tallies grouped by reason.
#[derive(Debug, Default, Serialize)]
pub struct SkipCounts {
    pub below_size_threshold: usize,
    pub excluded_name: usize,
    pub stat_failed: usize,
    pub unreadable_header: usize,
    pub read_failed: usize,
    pub no_data_rows: usize,
}

impl SkipCounts {
    pub fn tally(skipped: &[SkippedFile]) -> Self {
        use trackman_ingest::SkipReason;

        let mut counts = Self::default();
        for skip in skipped {
            match skip.reason {
                SkipReason::BelowSizeThreshold => counts.below_size_threshold += 1,
                SkipReason::ExcludedName => counts.excluded_name += 1,
                SkipReason::StatFailed => counts.stat_failed += 1,
                SkipReason::UnreadableHeader => counts.unreadable_header += 1,
                SkipReason::ReadFailed => counts.read_failed += 1,
                SkipReason::NoDataRows => counts.no_data_rows += 1,
            }
        }
        counts
    }
}

/// One skipped file with its printable reason.
#[derive(Debug, Serialize)]
pub struct SkippedFileReport {
    pub path: PathBuf,
    pub reason: String,
}

impl From<&SkippedFile> for SkippedFileReport {
    fn from(skip: &SkippedFile) -> Self {
        Self {
            path: skip.path.clone(),
            reason: skip.reason.to_string(),
        }
    }
}

/// Summary of one cleanup run.
#[derive(Debug, Serialize)]
pub struct CleanReport {
    pub input: PathBuf,
    pub output: PathBuf,
    pub rows: usize,
    pub columns_dropped: usize,
    pub cells_coerced: usize,
    pub cells_rounded: usize,
    pub cells_blanked: usize,
}

/// Summary of one team-name filter run.
#[derive(Debug, Serialize)]
pub struct FilterReport {
    pub input: PathBuf,
    pub output: PathBuf,
    pub input_rows: usize,
    pub removed_rows: usize,
    pub kept_rows: usize,
}

/// Summary of one team-name backfill run.
#[derive(Debug, Serialize)]
pub struct BackfillReport {
    pub input: PathBuf,
    pub output: PathBuf,
    pub rows: usize,
}
