//! Combine pipeline with explicit stages.
//!
//! The pipeline follows these stages in order:
//! 1. **Select**: walk the dated tree and filter exports
//! 2. **Unify**: read headers only and freeze the column universe
//! 3. **Normalize**: project each file's rows onto the universe
//! 4. **Write**: append each normalized batch to the combined output
//!
//! Stages run strictly in sequence; each file is read, normalized, and
//! flushed before the next one is opened, so at most one file's rows are
//! in memory at a time.

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result, bail};
use tracing::{debug, info, info_span, warn};

use trackman_ingest::{
    Selection, SelectorOptions, SkipReason, SkippedFile, read_csv_table, select_files,
    unify_headers,
};
use trackman_output::CombinedWriter;
use trackman_transform::{NormalizeOptions, normalize_table};

use crate::types::{CombineReport, SkipCounts, SkippedFileReport};

/// Everything a combine run needs to know.
pub struct CombineConfig<'a> {
    pub root: &'a Path,
    pub output: &'a Path,
    pub selector: SelectorOptions,
    pub normalize: NormalizeOptions,
}

/// Run the full combine pipeline.
///
/// Soft failures (filtered files, unreadable headers, empty files) are
/// folded into the report; a missing root, an empty column universe, or a
/// write failure aborts the run.
pub fn combine(config: &CombineConfig<'_>) -> Result<CombineReport> {
    let span = info_span!("combine", root = %config.root.display());
    let _guard = span.enter();

    // Stage 1: select
    let select_start = Instant::now();
    let Selection {
        candidates,
        mut skipped,
        unreadable_dirs,
    } = select_files(config.root, &config.selector).context("discover source files")?;
    let files_scanned = candidates.len() + skipped.len();
    info!(
        candidates = candidates.len(),
        skipped = skipped.len(),
        unreadable_dirs,
        duration_ms = select_start.elapsed().as_millis(),
        "selection complete"
    );

    if candidates.is_empty() {
        info!("no eligible files; nothing to combine");
        return Ok(empty_report(
            config,
            files_scanned,
            &skipped,
            unreadable_dirs,
        ));
    }

    // Stage 2: unify headers
    let unify_start = Instant::now();
    let unified = info_span!("unify").in_scope(|| unify_headers(candidates));
    skipped.extend(unified.skipped);
    if unified.universe.is_empty() {
        bail!("could not determine any columns from eligible files");
    }
    info!(
        columns = unified.universe.len(),
        files = unified.readable.len(),
        duration_ms = unify_start.elapsed().as_millis(),
        "column universe frozen"
    );

    // Stages 3 + 4: normalize and write, one file at a time
    let write_start = Instant::now();
    let mut writer = CombinedWriter::new(config.output, &unified.universe);
    for candidate in &unified.readable {
        let table = match read_csv_table(&candidate.path) {
            Ok(table) => table,
            Err(error) => {
                warn!(path = %candidate.path.display(), %error, "skipping unreadable file");
                skipped.push(SkippedFile {
                    path: candidate.path.clone(),
                    reason: SkipReason::ReadFailed,
                });
                continue;
            }
        };
        if table.is_empty() {
            debug!(path = %candidate.path.display(), "skipping file with no data rows");
            skipped.push(SkippedFile {
                path: candidate.path.clone(),
                reason: SkipReason::NoDataRows,
            });
            continue;
        }

        let rows = normalize_table(&unified.universe, &table, config.normalize);
        writer.append_batch(&rows).with_context(|| {
            format!(
                "append {} to {}",
                candidate.path.display(),
                config.output.display()
            )
        })?;
        debug!(path = %candidate.path.display(), rows = rows.len(), "file appended");
    }
    info!(
        files = writer.files_written(),
        rows = writer.rows_written(),
        duration_ms = write_start.elapsed().as_millis(),
        "combine complete"
    );

    Ok(CombineReport {
        root: config.root.to_path_buf(),
        output: config.output.to_path_buf(),
        files_scanned,
        files_kept: writer.files_written(),
        rows_written: writer.rows_written(),
        columns: unified.universe.len(),
        unreadable_dirs,
        skips: SkipCounts::tally(&skipped),
        skipped_files: skipped.iter().map(SkippedFileReport::from).collect(),
        output_written: writer.started(),
    })
}

fn empty_report(
    config: &CombineConfig<'_>,
    files_scanned: usize,
    skipped: &[SkippedFile],
    unreadable_dirs: usize,
) -> CombineReport {
    CombineReport {
        root: config.root.to_path_buf(),
        output: config.output.to_path_buf(),
        files_scanned,
        files_kept: 0,
        rows_written: 0,
        columns: 0,
        unreadable_dirs,
        skips: SkipCounts::tally(skipped),
        skipped_files: skipped.iter().map(SkippedFileReport::from).collect(),
        output_written: false,
    }
}
