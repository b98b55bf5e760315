//! Discovery walk and filter tests against real directory trees.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use trackman_ingest::{
    IngestError, SelectorOptions, SkipReason, select_files, unify_headers,
};

fn write_export(root: &Path, month: &str, day: &str, name: &str, contents: &[u8]) -> PathBuf {
    let dir = root.join(month).join(day).join("csv");
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path
}

fn options(min_size: u64) -> SelectorOptions {
    SelectorOptions {
        min_size_bytes: min_size,
        ..SelectorOptions::default()
    }
}

#[test]
fn walks_months_and_days_in_order() {
    let root = TempDir::new().unwrap();
    write_export(root.path(), "04", "02", "b.csv", b"x,y\n1,2\n");
    write_export(root.path(), "04", "02", "a.csv", b"x,y\n1,2\n");
    write_export(root.path(), "03", "15", "z.csv", b"x,y\n1,2\n");

    let selection = select_files(root.path(), &options(0)).unwrap();
    let names: Vec<String> = selection
        .candidates
        .iter()
        .map(|candidate| {
            candidate
                .path
                .strip_prefix(root.path())
                .unwrap()
                .display()
                .to_string()
        })
        .collect();
    assert_eq!(
        names,
        vec!["03/15/csv/z.csv", "04/02/csv/a.csv", "04/02/csv/b.csv"]
    );
    assert!(selection.skipped.is_empty());
}

#[test]
fn size_threshold_is_exclusive() {
    let root = TempDir::new().unwrap();
    write_export(root.path(), "05", "01", "at.csv", &vec![b'a'; 20]);
    write_export(root.path(), "05", "01", "over.csv", &vec![b'a'; 21]);

    let selection = select_files(root.path(), &options(20)).unwrap();
    assert_eq!(selection.candidates.len(), 1);
    assert!(
        selection.candidates[0]
            .path
            .ends_with("05/01/csv/over.csv")
    );
    assert_eq!(selection.skipped.len(), 1);
    assert_eq!(
        selection.skipped[0].reason,
        SkipReason::BelowSizeThreshold
    );
}

#[test]
fn exclusion_token_is_case_insensitive() {
    let root = TempDir::new().unwrap();
    write_export(root.path(), "06", "10", "game-BP-1.csv", b"x\n1\n");
    write_export(root.path(), "06", "10", "game-bp-2.csv", b"x\n1\n");
    write_export(root.path(), "06", "10", "game.csv", b"x\n1\n");

    let selection = select_files(root.path(), &options(0)).unwrap();
    assert_eq!(selection.candidates.len(), 1);
    assert!(selection.candidates[0].path.ends_with("06/10/csv/game.csv"));
    let excluded = selection
        .skipped
        .iter()
        .filter(|skip| skip.reason == SkipReason::ExcludedName)
        .count();
    assert_eq!(excluded, 2);
}

#[test]
fn size_filter_applies_before_name_filter() {
    let root = TempDir::new().unwrap();
    // Tiny batting-practice file: rejected for size, not for its name.
    write_export(root.path(), "06", "11", "tiny-bp-.csv", b"x\n");

    let selection = select_files(root.path(), &options(100)).unwrap();
    assert_eq!(selection.skipped.len(), 1);
    assert_eq!(
        selection.skipped[0].reason,
        SkipReason::BelowSizeThreshold
    );
}

#[test]
fn ignores_non_dated_directories_and_other_files() {
    let root = TempDir::new().unwrap();
    write_export(root.path(), "07", "04", "game.csv", b"x\n1\n");
    // Not two-digit names.
    write_export(root.path(), "2024", "04", "a.csv", b"x\n1\n");
    write_export(root.path(), "7", "04", "b.csv", b"x\n1\n");
    // Day without a csv/ subdirectory.
    fs::create_dir_all(root.path().join("07").join("05")).unwrap();
    // Non-CSV file inside a csv/ directory.
    fs::write(
        root.path().join("07").join("04").join("csv").join("notes.txt"),
        b"x\n1\n",
    )
    .unwrap();

    let selection = select_files(root.path(), &options(0)).unwrap();
    assert_eq!(selection.candidates.len(), 1);
    assert!(selection.candidates[0].path.ends_with("07/04/csv/game.csv"));
}

#[test]
fn empty_tree_yields_empty_selection() {
    let root = TempDir::new().unwrap();
    fs::create_dir_all(root.path().join("misc")).unwrap();

    let selection = select_files(root.path(), &SelectorOptions::default()).unwrap();
    assert!(selection.candidates.is_empty());
    assert!(selection.skipped.is_empty());
    assert_eq!(selection.scanned(), 0);
}

#[test]
fn missing_root_is_fatal() {
    let result = select_files(
        Path::new("/definitely/not/a/real/root"),
        &SelectorOptions::default(),
    );
    assert!(matches!(result, Err(IngestError::RootNotFound { .. })));
}

#[test]
fn unify_headers_builds_first_seen_union() {
    let root = TempDir::new().unwrap();
    write_export(root.path(), "08", "01", "a.csv", b"x,y\n1,2\n");
    write_export(root.path(), "08", "02", "b.csv", b"y,z\n3,4\n");

    let selection = select_files(root.path(), &options(0)).unwrap();
    let unified = unify_headers(selection.candidates);
    assert_eq!(
        unified.universe.columns(),
        &["x", "y", "z", "HomeNameFull", "AwayNameFull"]
    );
    assert_eq!(unified.readable.len(), 2);
    assert!(unified.skipped.is_empty());
}

#[test]
fn unify_headers_drops_unreadable_files() {
    let root = TempDir::new().unwrap();
    write_export(root.path(), "08", "03", "good.csv", b"x\n1\n");
    write_export(root.path(), "08", "03", "bad.csv", &[0xff, 0xfe, 0x41]);

    let selection = select_files(root.path(), &options(0)).unwrap();
    let unified = unify_headers(selection.candidates);
    assert_eq!(unified.readable.len(), 1);
    assert_eq!(unified.skipped.len(), 1);
    assert_eq!(unified.skipped[0].reason, SkipReason::UnreadableHeader);
    assert_eq!(
        unified.universe.columns(),
        &["x", "HomeNameFull", "AwayNameFull"]
    );
}

#[test]
fn unify_headers_with_no_readable_headers_freezes_empty() {
    let root = TempDir::new().unwrap();
    write_export(root.path(), "08", "04", "bad.csv", &[0xff, 0xfe, 0x41]);

    let selection = select_files(root.path(), &options(0)).unwrap();
    let unified = unify_headers(selection.candidates);
    assert!(unified.readable.is_empty());
    assert!(unified.universe.is_empty());
}
