//! Human-readable run summaries printed to stdout.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::types::{BackfillReport, CleanReport, CombineReport, FilterReport};

pub fn print_combine_summary(report: &CombineReport) {
    println!("Root: {}", report.root.display());
    if report.output_written {
        println!("Output: {}", report.output.display());
    } else {
        println!("Output: none (no rows written)");
    }

    let mut table = Table::new();
    table.set_header(vec![header_cell("Stage"), header_cell("Count")]);
    apply_table_style(&mut table);
    table.add_row(vec![Cell::new("Files scanned"), count_cell(report.files_scanned)]);
    add_skip_row(
        &mut table,
        "Skipped: below size threshold",
        report.skips.below_size_threshold,
    );
    add_skip_row(&mut table, "Skipped: excluded name", report.skips.excluded_name);
    add_skip_row(&mut table, "Skipped: stat failed", report.skips.stat_failed);
    add_skip_row(
        &mut table,
        "Skipped: unreadable header",
        report.skips.unreadable_header,
    );
    add_skip_row(&mut table, "Skipped: read failed", report.skips.read_failed);
    add_skip_row(&mut table, "Skipped: no data rows", report.skips.no_data_rows);
    if report.unreadable_dirs > 0 {
        add_skip_row(&mut table, "Unreadable directories", report.unreadable_dirs);
    }
    table.add_row(vec![
        Cell::new("Files kept").add_attribute(Attribute::Bold),
        count_cell(report.files_kept),
    ]);
    table.add_row(vec![
        Cell::new("Rows written").add_attribute(Attribute::Bold),
        count_cell_u64(report.rows_written),
    ]);
    println!("{table}");

    if report.files_scanned == 0 {
        println!("No eligible CSV files found under {}.", report.root.display());
    } else if !report.output_written {
        println!("No rows written; all eligible files were empty or unreadable.");
    }
}

pub fn print_clean_summary(report: &CleanReport) {
    println!("Cleaned: {}", report.output.display());
    println!(
        "Rows: {} | Columns dropped: {} | Cells coerced: {} | Cells rounded: {} | Cells blanked: {}",
        report.rows,
        report.columns_dropped,
        report.cells_coerced,
        report.cells_rounded,
        report.cells_blanked
    );
}

pub fn print_filter_summary(report: &FilterReport) {
    println!("Input rows: {}", report.input_rows);
    println!("Removed rows (missing team names): {}", report.removed_rows);
    println!(
        "Wrote: {} with {} rows",
        report.output.display(),
        report.kept_rows
    );
}

pub fn print_backfill_summary(report: &BackfillReport) {
    println!(
        "Wrote: {} with {} rows; HomeTeamFull/AwayTeamFull backfilled",
        report.output.display(),
        report.rows
    );
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    if let Some(column) = table.column_mut(1) {
        column.set_cell_alignment(CellAlignment::Right);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn count_cell(value: usize) -> Cell {
    Cell::new(value)
}

fn count_cell_u64(value: u64) -> Cell {
    Cell::new(value)
}

/// Skip rows are noise when zero, so only non-zero counts are printed.
fn add_skip_row(table: &mut Table, label: &str, count: usize) {
    if count > 0 {
        table.add_row(vec![
            Cell::new(label).fg(Color::DarkGrey),
            Cell::new(count).fg(Color::Yellow),
        ]);
    }
}
