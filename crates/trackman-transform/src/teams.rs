//! Team-name row filtering and alias backfill.

use tracing::debug;

use trackman_model::{RawTable, columns};

use crate::error::TransformError;

/// What a team-name filter pass removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TeamFilterStats {
    pub input_rows: usize,
    pub removed_rows: usize,
    pub kept_rows: usize,
}

/// Drop every row whose `HomeNameFull` or `AwayNameFull` is missing.
///
/// Column lookup is lenient (case-insensitive, trimmed) since hand-edited
/// combined files occasionally vary header casing. Absence of either column
/// is an error rather than a silent no-op.
pub fn filter_missing_teams(table: &mut RawTable) -> Result<TeamFilterStats, TransformError> {
    let home = require_column(table, columns::HOME_NAME_FULL)?;
    let away = require_column(table, columns::AWAY_NAME_FULL)?;

    let input_rows = table.rows.len();
    table.rows.retain(|row| {
        !columns::is_missing(cell(row, home)) && !columns::is_missing(cell(row, away))
    });
    let kept_rows = table.rows.len();
    let stats = TeamFilterStats {
        input_rows,
        removed_rows: input_rows - kept_rows,
        kept_rows,
    };
    debug!(
        input_rows = stats.input_rows,
        removed_rows = stats.removed_rows,
        "team-name filter done"
    );
    Ok(stats)
}

/// Copy `HomeTeam`/`AwayTeam` into the `*TeamFull` alias columns, creating
/// them when absent. Returns the number of rows touched.
pub fn backfill_team_names(table: &mut RawTable) -> Result<usize, TransformError> {
    copy_column(table, columns::HOME_TEAM, columns::HOME_TEAM_FULL)?;
    copy_column(table, columns::AWAY_TEAM, columns::AWAY_TEAM_FULL)?;
    Ok(table.rows.len())
}

fn require_column(table: &RawTable, name: &str) -> Result<usize, TransformError> {
    table
        .find_column(name)
        .ok_or_else(|| TransformError::MissingColumn {
            column: name.to_string(),
        })
}

fn copy_column(table: &mut RawTable, source: &str, dest: &str) -> Result<(), TransformError> {
    let src = table
        .column_index(source)
        .ok_or_else(|| TransformError::MissingColumn {
            column: source.to_string(),
        })?;

    match table.column_index(dest) {
        Some(dst) => {
            for row in &mut table.rows {
                let value = row.get(src).cloned().unwrap_or_default();
                if row.len() <= dst {
                    row.resize(dst + 1, String::new());
                }
                row[dst] = value;
            }
        }
        None => {
            table.headers.push(dest.to_string());
            let width = table.headers.len();
            for row in &mut table.rows {
                let value = row.get(src).cloned().unwrap_or_default();
                row.resize(width - 1, String::new());
                row.push(value);
            }
        }
    }
    Ok(())
}

fn cell(row: &[String], index: usize) -> &str {
    row.get(index).map(String::as_str).unwrap_or("")
}
