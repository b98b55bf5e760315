//! Dated-tree discovery of eligible game exports.
//!
//! Exports are organized as `<root>/<month>/<day>/csv/*.csv`, with month and
//! day directories named by exactly two digits. Discovery walks the tree in
//! ascending month/day/file-name order and applies the eligibility filters,
//! logging every decision.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::{IngestError, Result};

/// Files at or below this size are placeholder exports with no pitch data.
pub const DEFAULT_MIN_SIZE_BYTES: u64 = 190 * 1024;

/// Batting-practice exports carry this token in their file name.
pub const DEFAULT_EXCLUDE_TOKEN: &str = "-bp-";

/// Name of the per-day directory that holds the CSV exports.
const CSV_DIR_NAME: &str = "csv";

/// Eligibility filters applied during discovery.
#[derive(Debug, Clone)]
pub struct SelectorOptions {
    /// Minimum on-disk size in bytes, exclusive. A file of exactly this
    /// size is still a placeholder.
    pub min_size_bytes: u64,
    /// Case-insensitive file-name substring that marks excluded exports.
    /// An empty token disables the check.
    pub exclude_token: String,
}

impl Default for SelectorOptions {
    fn default() -> Self {
        Self {
            min_size_bytes: DEFAULT_MIN_SIZE_BYTES,
            exclude_token: DEFAULT_EXCLUDE_TOKEN.to_string(),
        }
    }
}

/// Why a scanned file was passed over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// At or below the configured size threshold.
    BelowSizeThreshold,
    /// File name contains the exclusion token.
    ExcludedName,
    /// File size could not be determined.
    StatFailed,
    /// Header row could not be parsed.
    UnreadableHeader,
    /// Full read failed after the header had been read.
    ReadFailed,
    /// File parsed but held no data rows.
    NoDataRows,
}

impl SkipReason {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::BelowSizeThreshold => "below size threshold",
            Self::ExcludedName => "excluded name",
            Self::StatFailed => "stat failed",
            Self::UnreadableHeader => "unreadable header",
            Self::ReadFailed => "read failed",
            Self::NoDataRows => "no data rows",
        }
    }
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A file that passed every discovery filter.
#[derive(Debug, Clone)]
pub struct Candidate {
    pub path: PathBuf,
    pub size: u64,
}

/// A scanned file that was passed over, with the reason.
#[derive(Debug, Clone)]
pub struct SkippedFile {
    pub path: PathBuf,
    pub reason: SkipReason,
}

/// Outcome of one discovery walk.
#[derive(Debug, Default)]
pub struct Selection {
    /// Eligible files in month/day/file-name order.
    pub candidates: Vec<Candidate>,
    /// Files scanned but rejected by a filter.
    pub skipped: Vec<SkippedFile>,
    /// Subdirectories that could not be read and were passed over.
    pub unreadable_dirs: usize,
}

impl Selection {
    /// Total number of CSV files the walk looked at.
    pub fn scanned(&self) -> usize {
        self.candidates.len() + self.skipped.len()
    }
}

/// Walk the dated tree under `root` and apply the eligibility filters.
///
/// A missing root is fatal; unreadable subdirectories are skipped with a
/// diagnostic. An empty selection is a valid outcome.
pub fn select_files(root: &Path, options: &SelectorOptions) -> Result<Selection> {
    if !root.is_dir() {
        return Err(IngestError::RootNotFound {
            path: root.to_path_buf(),
        });
    }

    let month_dirs = two_digit_dirs(root).map_err(|source| IngestError::DirectoryRead {
        path: root.to_path_buf(),
        source,
    })?;

    let mut selection = Selection::default();
    let exclude_token = options.exclude_token.to_lowercase();

    for month_dir in month_dirs {
        let day_dirs = match two_digit_dirs(&month_dir) {
            Ok(dirs) => dirs,
            Err(error) => {
                warn!(path = %month_dir.display(), %error, "skipping unreadable month directory");
                selection.unreadable_dirs += 1;
                continue;
            }
        };

        for day_dir in day_dirs {
            let csv_dir = day_dir.join(CSV_DIR_NAME);
            if !csv_dir.is_dir() {
                debug!(path = %csv_dir.display(), "no csv directory, skipping day");
                continue;
            }
            let files = match csv_files(&csv_dir) {
                Ok(files) => files,
                Err(error) => {
                    warn!(path = %csv_dir.display(), %error, "skipping unreadable csv directory");
                    selection.unreadable_dirs += 1;
                    continue;
                }
            };
            for path in files {
                classify(path, options.min_size_bytes, &exclude_token, &mut selection);
            }
        }
    }

    Ok(selection)
}

/// Apply the per-file filters in order: size first, then name token.
fn classify(path: PathBuf, min_size_bytes: u64, exclude_token: &str, selection: &mut Selection) {
    let size = match fs::metadata(&path) {
        Ok(metadata) => metadata.len(),
        Err(error) => {
            warn!(path = %path.display(), %error, "skipping file that cannot be stat'd");
            selection.skipped.push(SkippedFile {
                path,
                reason: SkipReason::StatFailed,
            });
            return;
        }
    };

    if size <= min_size_bytes {
        debug!(path = %path.display(), size, "skipping placeholder export");
        selection.skipped.push(SkippedFile {
            path,
            reason: SkipReason::BelowSizeThreshold,
        });
        return;
    }

    let name = path
        .file_name()
        .map(|name| name.to_string_lossy().to_lowercase())
        .unwrap_or_default();
    if !exclude_token.is_empty() && name.contains(exclude_token) {
        debug!(path = %path.display(), "skipping batting-practice export");
        selection.skipped.push(SkippedFile {
            path,
            reason: SkipReason::ExcludedName,
        });
        return;
    }

    debug!(path = %path.display(), size, "accepted");
    selection.candidates.push(Candidate { path, size });
}

fn is_two_digit_name(name: &str) -> bool {
    name.len() == 2 && name.bytes().all(|byte| byte.is_ascii_digit())
}

/// Subdirectories of `dir` whose names are exactly two ASCII digits,
/// sorted ascending by name.
fn two_digit_dirs(dir: &Path) -> io::Result<Vec<PathBuf>> {
    let mut dirs = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if !path.is_dir() {
            continue;
        }
        let name = entry.file_name();
        if is_two_digit_name(&name.to_string_lossy()) {
            dirs.push(path);
        }
    }
    dirs.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(dirs)
}

/// CSV files directly inside `dir`, sorted ascending by file name.
fn csv_files(dir: &Path) -> io::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let is_csv = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.eq_ignore_ascii_case("csv"))
            .unwrap_or(false);
        if is_csv {
            files.push(path);
        }
    }
    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_digit_names() {
        assert!(is_two_digit_name("02"));
        assert!(is_two_digit_name("31"));
        assert!(!is_two_digit_name("2"));
        assert!(!is_two_digit_name("002"));
        assert!(!is_two_digit_name("ab"));
        assert!(!is_two_digit_name("2a"));
    }
}
