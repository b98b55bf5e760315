//! Subcommand entry points.

use std::fs::File;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::info;

use trackman_ingest::{SelectorOptions, read_csv_table};
use trackman_output::write_table;
use trackman_transform::{
    NormalizeOptions, backfill_team_names, clean_table, filter_missing_teams,
};

use crate::cli::{BackfillTeamsArgs, CleanArgs, CombineArgs, FilterTeamsArgs};
use crate::pipeline::{CombineConfig, combine};
use crate::types::{BackfillReport, CleanReport, CombineReport, FilterReport};

pub fn run_combine(args: &CombineArgs) -> Result<CombineReport> {
    let output = args
        .output
        .clone()
        .unwrap_or_else(|| args.root.join("combined.csv"));
    let config = CombineConfig {
        root: &args.root,
        output: &output,
        selector: SelectorOptions {
            min_size_bytes: args.min_size,
            exclude_token: args.exclude_token.clone(),
        },
        normalize: NormalizeOptions {
            fix_pitch_types: args.fix_pitch_types,
        },
    };
    let report = combine(&config)?;
    if let Some(path) = &args.report_json {
        write_report_json(path, &report)?;
        info!(path = %path.display(), "run report written");
    }
    Ok(report)
}

pub fn run_clean(args: &CleanArgs) -> Result<CleanReport> {
    let output = output_path(&args.input, args.output.as_ref());
    let mut table = read_csv_table(&args.input)
        .with_context(|| format!("read {}", args.input.display()))?;
    let stats = clean_table(&mut table);
    write_table(&output, &table)
        .with_context(|| format!("write {}", output.display()))?;
    Ok(CleanReport {
        input: args.input.clone(),
        output,
        rows: table.row_count(),
        columns_dropped: stats.columns_dropped,
        cells_coerced: stats.cells_coerced,
        cells_rounded: stats.cells_rounded,
        cells_blanked: stats.cells_blanked,
    })
}

pub fn run_filter_teams(args: &FilterTeamsArgs) -> Result<FilterReport> {
    let output = output_path(&args.input, args.output.as_ref());
    let mut table = read_csv_table(&args.input)
        .with_context(|| format!("read {}", args.input.display()))?;
    let stats = filter_missing_teams(&mut table)
        .with_context(|| format!("filter {}", args.input.display()))?;
    write_table(&output, &table)
        .with_context(|| format!("write {}", output.display()))?;
    Ok(FilterReport {
        input: args.input.clone(),
        output,
        input_rows: stats.input_rows,
        removed_rows: stats.removed_rows,
        kept_rows: stats.kept_rows,
    })
}

pub fn run_backfill_teams(args: &BackfillTeamsArgs) -> Result<BackfillReport> {
    let output = output_path(&args.input, args.output.as_ref());
    let mut table = read_csv_table(&args.input)
        .with_context(|| format!("read {}", args.input.display()))?;
    let rows = backfill_team_names(&mut table)
        .with_context(|| format!("backfill {}", args.input.display()))?;
    write_table(&output, &table)
        .with_context(|| format!("write {}", output.display()))?;
    Ok(BackfillReport {
        input: args.input.clone(),
        output,
        rows,
    })
}

fn output_path(input: &Path, output: Option<&PathBuf>) -> PathBuf {
    output.cloned().unwrap_or_else(|| input.to_path_buf())
}

fn write_report_json<T: Serialize>(path: &Path, report: &T) -> Result<()> {
    let file =
        File::create(path).with_context(|| format!("create report {}", path.display()))?;
    serde_json::to_writer_pretty(file, report).context("serialize run report")?;
    Ok(())
}
