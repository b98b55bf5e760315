//! Post-combine cleanup: column drops, integer coercion, rounding.
//!
//! The column lists mirror what downstream analysis actually consumes:
//! raw trajectory polynomials, fielder positions, and vendor confidence
//! scores are dropped wholesale, count-like columns become whole numbers,
//! and physical measurements are rounded to three decimal places.

use std::collections::HashSet;

use tracing::debug;

use trackman_model::RawTable;

use crate::numeric::{format_integer, format_rounded, parse_numeric};

/// Tracking/vendor columns removed from the cleaned dataset.
pub const DROP_COLUMNS: &[&str] = &[
    "Level",
    "League",
    "System",
    "HomeTeamForeignID",
    "AwayTeamForeignID",
    "CatcherId",
    "PitcherSet",
    "DetectedShift",
    "PitcherId",
    "BatterId",
    "ZoneTime",
    "CatcherThrows",
    "GameForeignID",
    "Notes",
    "PitchLastMeasuredX",
    "PitchLastMeasuredY",
    "PitchLastMeasuredZ",
    "TaggedPitchType",
    "Stadium",
    "GameID",
    "1B_PositionAtReleaseX",
    "1B_PositionAtReleaseZ",
    "2B_PositionAtReleaseX",
    "2B_PositionAtReleaseZ",
    "3B_PositionAtReleaseX",
    "3B_PositionAtReleaseZ",
    "SS_PositionAtReleaseX",
    "SS_PositionAtReleaseZ",
    "PitchTrajectoryXc0",
    "PitchTrajectoryXc1",
    "PitchTrajectoryXc2",
    "PitchTrajectoryYc0",
    "PitchTrajectoryYc1",
    "PitchTrajectoryYc2",
    "PitchTrajectoryZc0",
    "PitchTrajectoryZc1",
    "PitchTrajectoryZc2",
    "UTCDate",
    "UTCTime",
    "LocalDateTime",
    "UTCDateTime",
    "LF_PositionAtReleaseX",
    "LF_PositionAtReleaseZ",
    "CF_PositionAtReleaseX",
    "CF_PositionAtReleaseZ",
    "RF_PositionAtReleaseX",
    "RF_PositionAtReleaseZ",
    "HitTrajectoryXc0",
    "HitTrajectoryXc1",
    "HitTrajectoryXc2",
    "HitTrajectoryXc3",
    "HitTrajectoryXc4",
    "HitTrajectoryXc5",
    "HitTrajectoryXc6",
    "HitTrajectoryXc7",
    "HitTrajectoryXc8",
    "HitTrajectoryYc0",
    "HitTrajectoryYc1",
    "HitTrajectoryYc2",
    "HitTrajectoryYc3",
    "HitTrajectoryYc4",
    "HitTrajectoryYc5",
    "HitTrajectoryYc6",
    "HitTrajectoryYc7",
    "HitTrajectoryYc8",
    "HitTrajectoryZc0",
    "HitTrajectoryZc1",
    "HitTrajectoryZc2",
    "HitTrajectoryZc3",
    "HitTrajectoryZc4",
    "HitTrajectoryZc5",
    "HitTrajectoryZc6",
    "HitTrajectoryZc7",
    "HitTrajectoryZc8",
    "pfxx",
    "pfxz",
    "x0",
    "y0",
    "z0",
    "vx0",
    "vy0",
    "vz0",
    "ax0",
    "ay0",
    "az0",
    "1B_Name",
    "1B_Id",
    "2B_Name",
    "2B_Id",
    "3B_Name",
    "3B_Id",
    "SS_Name",
    "SS_Id",
    "LF_Name",
    "LF_Id",
    "CF_Name",
    "CF_Id",
    "RF_Name",
    "RF_Id",
    "FHC",
    "PitchReleaseConfidence",
    "PitchLocationConfidence",
    "PitchMovementConfidence",
    "HitLaunchConfidence",
    "HitLandingConfidence",
    "CatcherThrowCatchConfidence",
    "CatcherThrowReleaseConfidence",
    "CatcherThrowLocationConfidence",
    "ThrowTrajectoryXc0",
    "ThrowTrajectoryXc1",
    "ThrowTrajectoryXc2",
    "ThrowTrajectoryYc0",
    "ThrowTrajectoryYc1",
    "ThrowTrajectoryYc2",
    "ThrowTrajectoryZc0",
    "ThrowTrajectoryZc1",
    "ThrowTrajectoryZc2",
    "ZoneSpeed",
    "HitSpinRate",
    "PositionAt110X",
    "PositionAt110Y",
    "PositionAt110Z",
    "LastTrackedDistance",
];

/// Count-like columns coerced to whole numbers.
pub const INT_COLUMNS: &[&str] = &[
    "PAofInning",
    "PitchofPA",
    "Inning",
    "Outs",
    "Balls",
    "Strikes",
    "OutsOnPlay",
    "RunsScored",
];

/// Measurement columns rounded to three decimal places.
pub const ROUND_COLUMNS: &[&str] = &[
    "EffectiveVelo",
    "MaxHeight",
    "MeasuredDuration",
    "SpeedDrop",
    "ContactPositionX",
    "ContactPositionY",
    "ContactPositionZ",
    "HitSpinAxis",
    "ThrowSpeed",
    "PopTime",
    "ExchangeTime",
    "TimeToBase",
    "CatchPositionX",
    "CatchPositionY",
    "CatchPositionZ",
    "ThrowPositionX",
    "ThrowPositionY",
    "ThrowPositionZ",
    "BasePositionX",
    "BasePositionY",
    "BasePositionZ",
    "RelSpeed",
    "VertRelAngle",
    "HorzRelAngle",
    "SpinRate",
    "SpinAxis",
    "Tilt",
    "RelHeight",
    "RelSide",
    "Extension",
    "VertBreak",
    "InducedVertBreak",
    "HorzBreak",
    "PlateLocHeight",
    "PlateLocSide",
    "VertApprAngle",
    "HorzApprAngle",
    "ExitSpeed",
    "Angle",
    "Direction",
    "Distance",
    "Bearing",
    "HangTime",
];

const ROUND_DECIMALS: i32 = 3;

/// What a cleanup pass changed.
#[derive(Debug, Default, Clone, Copy)]
pub struct CleanStats {
    pub columns_dropped: usize,
    /// Cells rewritten as whole numbers.
    pub cells_coerced: usize,
    /// Cells rewritten with rounded values.
    pub cells_rounded: usize,
    /// Non-empty cells that did not parse as numbers and were blanked.
    pub cells_blanked: usize,
}

/// Apply the cleanup pass in place.
///
/// Columns listed but absent from the table are ignored. Cells in numeric
/// columns that hold non-numeric text are blanked rather than kept.
pub fn clean_table(table: &mut RawTable) -> CleanStats {
    let mut stats = CleanStats::default();

    drop_columns(table, &mut stats);

    for name in INT_COLUMNS {
        if let Some(index) = table.column_index(name) {
            rewrite_column(table, index, &mut stats, |value| {
                (format_integer(value), true)
            });
        }
    }
    for name in ROUND_COLUMNS {
        if let Some(index) = table.column_index(name) {
            rewrite_column(table, index, &mut stats, |value| {
                (format_rounded(value, ROUND_DECIMALS), false)
            });
        }
    }

    debug!(
        columns_dropped = stats.columns_dropped,
        cells_coerced = stats.cells_coerced,
        cells_rounded = stats.cells_rounded,
        cells_blanked = stats.cells_blanked,
        "cleanup pass done"
    );
    stats
}

/// Remove every listed column, rebuilding rows on the surviving indices.
fn drop_columns(table: &mut RawTable, stats: &mut CleanStats) {
    let drop: HashSet<&str> = DROP_COLUMNS.iter().copied().collect();
    let keep: Vec<usize> = table
        .headers
        .iter()
        .enumerate()
        .filter(|(_, header)| !drop.contains(header.as_str()))
        .map(|(index, _)| index)
        .collect();
    if keep.len() == table.headers.len() {
        return;
    }
    stats.columns_dropped = table.headers.len() - keep.len();
    let kept_headers: Vec<String> = keep
        .iter()
        .map(|&index| table.headers[index].clone())
        .collect();
    table.headers = kept_headers;
    for row in &mut table.rows {
        let rebuilt: Vec<String> = keep
            .iter()
            .map(|&index| row.get(index).cloned().unwrap_or_default())
            .collect();
        *row = rebuilt;
    }
}

fn rewrite_column(
    table: &mut RawTable,
    index: usize,
    stats: &mut CleanStats,
    render: impl Fn(f64) -> (String, bool),
) {
    for row in &mut table.rows {
        let Some(cell) = row.get_mut(index) else {
            continue;
        };
        if cell.trim().is_empty() {
            continue;
        }
        match parse_numeric(cell) {
            Some(value) => {
                let (rendered, is_integer) = render(value);
                if is_integer {
                    stats.cells_coerced += 1;
                } else {
                    stats.cells_rounded += 1;
                }
                *cell = rendered;
            }
            None => {
                stats.cells_blanked += 1;
                cell.clear();
            }
        }
    }
}
