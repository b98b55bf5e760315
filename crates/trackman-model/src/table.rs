//! Raw string table produced by CSV ingestion.

/// A CSV file parsed into raw string cells.
///
/// Rows may be ragged when the source file was: consumers index cells
/// defensively and treat absent positions as empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    /// True when the table has no data rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// Exact-match column position.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|header| header == name)
    }

    /// Case-insensitive, whitespace-trimmed column lookup.
    ///
    /// Source files occasionally vary header casing (`AwaynameFull`), so
    /// tools that consume combined output match leniently.
    pub fn find_column(&self, name: &str) -> Option<usize> {
        let target = name.trim();
        self.headers
            .iter()
            .position(|header| header.trim().eq_ignore_ascii_case(target))
    }

    /// Cell value at `(row, column)`, empty when the row is short.
    pub fn cell(&self, row: usize, column: usize) -> &str {
        self.rows
            .get(row)
            .and_then(|cells| cells.get(column))
            .map(String::as_str)
            .unwrap_or("")
    }
}
