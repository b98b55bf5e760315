//! Projection of raw exports onto the frozen column universe.

use trackman_model::{ColumnUniverse, RawTable, columns};

/// Per-run switches for the normalization pass.
#[derive(Debug, Clone, Copy, Default)]
pub struct NormalizeOptions {
    /// Overwrite `AutoPitchType` with `TaggedPitchType` when a tag is
    /// present and meaningful.
    pub fix_pitch_types: bool,
}

/// How one universe column is filled from a given source file.
///
/// The plan is computed once per file; rows then only index into it.
enum ColumnPlan {
    /// Copy the value from this source column.
    Copy(usize),
    /// Full-name column: copy the team identifier, null when the file has
    /// no identifier column. A full-name column already present in the
    /// source is overwritten by the derivation.
    TeamName(Option<usize>),
    /// `AutoPitchType` with tag patching enabled.
    PitchType {
        auto: Option<usize>,
        tagged: usize,
    },
    /// Column absent from this file.
    Null,
}

fn plan_columns(
    universe: &ColumnUniverse,
    table: &RawTable,
    options: NormalizeOptions,
) -> Vec<ColumnPlan> {
    universe
        .columns()
        .iter()
        .map(|name| {
            if name == columns::HOME_NAME_FULL {
                return ColumnPlan::TeamName(table.column_index(columns::HOME_TEAM));
            }
            if name == columns::AWAY_NAME_FULL {
                return ColumnPlan::TeamName(table.column_index(columns::AWAY_TEAM));
            }
            if options.fix_pitch_types && name == columns::AUTO_PITCH_TYPE {
                if let Some(tagged) = table.column_index(columns::TAGGED_PITCH_TYPE) {
                    return ColumnPlan::PitchType {
                        auto: table.column_index(name),
                        tagged,
                    };
                }
            }
            match table.column_index(name) {
                Some(index) => ColumnPlan::Copy(index),
                None => ColumnPlan::Null,
            }
        })
        .collect()
}

/// Normalize every row of `table` onto `universe` order.
///
/// The result always holds exactly one output row per parsed data row, each
/// with exactly one field per universe column; absent fields are empty.
pub fn normalize_table(
    universe: &ColumnUniverse,
    table: &RawTable,
    options: NormalizeOptions,
) -> Vec<Vec<String>> {
    let plans = plan_columns(universe, table, options);
    table
        .rows
        .iter()
        .map(|row| {
            plans
                .iter()
                .map(|plan| match plan {
                    ColumnPlan::Copy(index) => cell(row, *index),
                    ColumnPlan::TeamName(Some(index)) => cell(row, *index),
                    ColumnPlan::TeamName(None) | ColumnPlan::Null => String::new(),
                    ColumnPlan::PitchType { auto, tagged } => {
                        let tag = cell(row, *tagged);
                        if columns::is_untagged(&tag) {
                            auto.map(|index| cell(row, index)).unwrap_or_default()
                        } else {
                            tag
                        }
                    }
                })
                .collect()
        })
        .collect()
}

fn cell(row: &[String], index: usize) -> String {
    row.get(index).cloned().unwrap_or_default()
}
