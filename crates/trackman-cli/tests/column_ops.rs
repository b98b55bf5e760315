//! End-to-end tests for the single-pass column subcommands.

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use trackman_cli::cli::{BackfillTeamsArgs, CleanArgs, CombineArgs, FilterTeamsArgs};
use trackman_cli::commands::{run_backfill_teams, run_clean, run_combine, run_filter_teams};

fn write_csv(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn clean_drops_coerces_and_rounds() {
    let dir = TempDir::new().unwrap();
    let input = write_csv(
        &dir,
        "combined.csv",
        "Pitcher,Stadium,Outs,RelSpeed\nCole,H,2.0,95.12345\nCole,H,x,88.1\n",
    );
    let output = dir.path().join("clean.csv");

    let report = run_clean(&CleanArgs {
        input: input.clone(),
        output: Some(output.clone()),
    })
    .unwrap();

    assert_eq!(report.rows, 2);
    assert_eq!(report.columns_dropped, 1);
    assert_eq!(report.cells_coerced, 1);
    assert_eq!(report.cells_rounded, 2);
    assert_eq!(report.cells_blanked, 1);

    let contents = fs::read_to_string(&output).unwrap();
    assert_eq!(contents, "Pitcher,Outs,RelSpeed\nCole,2,95.123\nCole,,88.1\n");
    // Input untouched when an output path is given.
    assert!(fs::read_to_string(&input).unwrap().contains("Stadium"));
}

#[test]
fn clean_rewrites_in_place_by_default() {
    let dir = TempDir::new().unwrap();
    let input = write_csv(&dir, "combined.csv", "Notes,x\nhello,1\n");

    let report = run_clean(&CleanArgs {
        input: input.clone(),
        output: None,
    })
    .unwrap();

    assert_eq!(report.output, input);
    let contents = fs::read_to_string(&input).unwrap();
    assert_eq!(contents, "x\n1\n");
}

#[test]
fn filter_teams_removes_rows_with_missing_names() {
    let dir = TempDir::new().unwrap();
    let input = write_csv(
        &dir,
        "combined.csv",
        "HomeNameFull,AwayNameFull,PitchNo\nYAN,BOS,1\n,BOS,2\nYAN,nan,3\n",
    );
    let output = dir.path().join("filtered.csv");

    let report = run_filter_teams(&FilterTeamsArgs {
        input,
        output: Some(output.clone()),
    })
    .unwrap();

    assert_eq!(report.input_rows, 3);
    assert_eq!(report.removed_rows, 2);
    assert_eq!(report.kept_rows, 1);

    let contents = fs::read_to_string(&output).unwrap();
    assert_eq!(contents, "HomeNameFull,AwayNameFull,PitchNo\nYAN,BOS,1\n");
}

#[test]
fn filter_teams_fails_without_name_columns() {
    let dir = TempDir::new().unwrap();
    let input = write_csv(&dir, "combined.csv", "x,y\n1,2\n");

    let result = run_filter_teams(&FilterTeamsArgs {
        input,
        output: None,
    });
    assert!(result.is_err());
}

#[test]
fn backfill_adds_alias_columns() {
    let dir = TempDir::new().unwrap();
    let input = write_csv(
        &dir,
        "combined.csv",
        "HomeTeam,AwayTeam\nYAN,BOS\nYAN,BOS\n",
    );

    let report = run_backfill_teams(&BackfillTeamsArgs {
        input: input.clone(),
        output: None,
    })
    .unwrap();

    assert_eq!(report.rows, 2);
    let contents = fs::read_to_string(&input).unwrap();
    assert_eq!(
        contents,
        "HomeTeam,AwayTeam,HomeTeamFull,AwayTeamFull\nYAN,BOS,YAN,BOS\nYAN,BOS,YAN,BOS\n"
    );
}

#[test]
fn combine_writes_json_report_when_asked() {
    let dir = TempDir::new().unwrap();
    let root = dir.path().join("data");
    let csv_dir = root.join("04").join("01").join("csv");
    fs::create_dir_all(&csv_dir).unwrap();
    fs::write(csv_dir.join("game.csv"), "x\n1\n").unwrap();

    let output = dir.path().join("combined.csv");
    let report_path = dir.path().join("report.json");
    let report = run_combine(&CombineArgs {
        root,
        output: Some(output),
        min_size: 0,
        exclude_token: "-bp-".to_string(),
        fix_pitch_types: false,
        report_json: Some(report_path.clone()),
    })
    .unwrap();

    assert_eq!(report.rows_written, 1);
    let raw = fs::read_to_string(&report_path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value["files_kept"], 1);
    assert_eq!(value["rows_written"], 1);
    assert_eq!(value["output_written"], true);
}
