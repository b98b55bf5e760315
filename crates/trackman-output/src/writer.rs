//! Incremental writer for the combined dataset.

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use csv::Writer;
use tracing::debug;

use trackman_model::{ColumnUniverse, RawTable};

/// Streams normalized batches into a single combined CSV.
///
/// The destination is created lazily: nothing is written until the first
/// non-empty batch arrives, so a run that finds no rows leaves no file
/// behind. The first batch truncates the destination and writes the header;
/// every later batch reopens it in append mode and writes rows only.
pub struct CombinedWriter {
    path: PathBuf,
    header: Vec<String>,
    files_written: usize,
    rows_written: u64,
}

impl CombinedWriter {
    pub fn new(path: &Path, universe: &ColumnUniverse) -> Self {
        Self {
            path: path.to_path_buf(),
            header: universe.columns().to_vec(),
            files_written: 0,
            rows_written: 0,
        }
    }

    /// True once at least one batch has been flushed.
    pub fn started(&self) -> bool {
        self.files_written > 0
    }

    /// Number of source files that contributed at least one row.
    pub fn files_written(&self) -> usize {
        self.files_written
    }

    /// Total data rows flushed to the destination.
    pub fn rows_written(&self) -> u64 {
        self.rows_written
    }

    /// Append all rows from one source file. An empty batch is a no-op.
    ///
    /// A failure here is fatal to the run; batches already flushed stay on
    /// disk.
    pub fn append_batch(&mut self, rows: &[Vec<String>]) -> Result<()> {
        if rows.is_empty() {
            return Ok(());
        }

        let mut writer: Writer<std::fs::File> = if self.started() {
            let file = OpenOptions::new()
                .append(true)
                .open(&self.path)
                .with_context(|| format!("open {} for append", self.path.display()))?;
            Writer::from_writer(file)
        } else {
            let mut writer = Writer::from_path(&self.path)
                .with_context(|| format!("create {}", self.path.display()))?;
            writer
                .write_record(&self.header)
                .with_context(|| format!("write header to {}", self.path.display()))?;
            writer
        };

        for row in rows {
            writer
                .write_record(row)
                .with_context(|| format!("write row to {}", self.path.display()))?;
        }
        writer
            .flush()
            .with_context(|| format!("flush {}", self.path.display()))?;

        self.files_written += 1;
        self.rows_written += rows.len() as u64;
        debug!(path = %self.path.display(), rows = rows.len(), "batch appended");
        Ok(())
    }
}

/// Write a full table in one pass.
///
/// Used by the single-pass column tools, which rewrite an already-combined
/// file. Rows are padded or truncated to the header width so the output is
/// never ragged.
pub fn write_table(path: &Path, table: &RawTable) -> Result<()> {
    let mut writer =
        Writer::from_path(path).with_context(|| format!("create {}", path.display()))?;
    writer
        .write_record(&table.headers)
        .with_context(|| format!("write header to {}", path.display()))?;
    let width = table.headers.len();
    for row in &table.rows {
        let record = (0..width).map(|index| row.get(index).map(String::as_str).unwrap_or(""));
        writer
            .write_record(record)
            .with_context(|| format!("write row to {}", path.display()))?;
    }
    writer
        .flush()
        .with_context(|| format!("flush {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;
    use trackman_model::UniverseBuilder;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| (*value).to_string()).collect()
    }

    fn universe(names: &[&str]) -> ColumnUniverse {
        let mut builder = UniverseBuilder::new();
        builder.add_header(&strings(names));
        builder.finish()
    }

    #[test]
    fn writes_header_once_across_batches() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("combined.csv");
        let universe = universe(&["a", "b", "HomeNameFull", "AwayNameFull"]);

        let mut writer = CombinedWriter::new(&path, &universe);
        writer
            .append_batch(&[strings(&["1", "2", "", ""])])
            .unwrap();
        writer
            .append_batch(&[
                strings(&["3", "4", "", ""]),
                strings(&["5", "6", "", ""]),
            ])
            .unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(
            contents,
            "a,b,HomeNameFull,AwayNameFull\n1,2,,\n3,4,,\n5,6,,\n"
        );
        assert_eq!(writer.files_written(), 2);
        assert_eq!(writer.rows_written(), 3);
    }

    #[test]
    fn no_batches_leaves_no_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("combined.csv");
        let universe = universe(&["a"]);

        let mut writer = CombinedWriter::new(&path, &universe);
        writer.append_batch(&[]).unwrap();

        assert!(!writer.started());
        assert!(!path.exists());
    }

    #[test]
    fn first_batch_truncates_stale_output() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("combined.csv");
        fs::write(&path, "stale contents\n").unwrap();
        let universe = universe(&["a"]);

        let mut writer = CombinedWriter::new(&path, &universe);
        writer
            .append_batch(&[strings(&["1", "", ""])])
            .unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.starts_with("a,HomeNameFull,AwayNameFull\n"));
        assert!(!contents.contains("stale"));
    }

    #[test]
    fn quotes_fields_only_as_needed() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("combined.csv");
        let universe = universe(&["name", "note", "HomeNameFull", "AwayNameFull"]);

        let mut writer = CombinedWriter::new(&path, &universe);
        writer
            .append_batch(&[strings(&["plain", "has, comma", "", ""])])
            .unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.contains("plain,\"has, comma\",,"));
    }

    #[test]
    fn write_table_pads_ragged_rows() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.csv");
        let table = RawTable::new(
            strings(&["a", "b", "c"]),
            vec![strings(&["1"]), strings(&["2", "3", "4", "5"])],
        );

        write_table(&path, &table).unwrap();
        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "a,b,c\n1,,\n2,3,4\n");
    }
}
