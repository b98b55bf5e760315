//! Accumulation and freezing of the combined column set.

use std::collections::HashSet;

use crate::columns::{AWAY_NAME_FULL, HOME_NAME_FULL};

/// Accumulates column names across file headers in first-seen order.
#[derive(Debug, Default)]
pub struct UniverseBuilder {
    ordered: Vec<String>,
    seen: HashSet<String>,
}

impl UniverseBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one file's header. Duplicate names keep their first position.
    pub fn add_header(&mut self, headers: &[String]) {
        for name in headers {
            if self.seen.insert(name.clone()) {
                self.ordered.push(name.clone());
            }
        }
    }

    /// True while no header has contributed any column.
    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }

    /// Freeze the accumulated set.
    ///
    /// The derived name columns land at the end unless some header already
    /// carried them verbatim. An empty builder freezes to an empty universe
    /// so that a run where every header failed to parse can be told apart
    /// from one that produced real columns.
    pub fn finish(mut self) -> ColumnUniverse {
        if self.ordered.is_empty() {
            return ColumnUniverse {
                columns: Vec::new(),
            };
        }
        for extra in [HOME_NAME_FULL, AWAY_NAME_FULL] {
            if self.seen.insert(extra.to_string()) {
                self.ordered.push(extra.to_string());
            }
        }
        ColumnUniverse {
            columns: self.ordered,
        }
    }
}

/// The frozen, ordered, de-duplicated set of column names that defines the
/// shape of every combined output row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnUniverse {
    columns: Vec<String>,
}

impl ColumnUniverse {
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|column| column == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header(names: &[&str]) -> Vec<String> {
        names.iter().map(|name| (*name).to_string()).collect()
    }

    #[test]
    fn first_seen_order_wins() {
        let mut builder = UniverseBuilder::new();
        builder.add_header(&header(&["b", "a"]));
        builder.add_header(&header(&["a", "c"]));
        let universe = builder.finish();
        assert_eq!(
            universe.columns(),
            &["b", "a", "c", "HomeNameFull", "AwayNameFull"]
        );
    }

    #[test]
    fn derived_columns_keep_existing_position() {
        let mut builder = UniverseBuilder::new();
        builder.add_header(&header(&["HomeNameFull", "x"]));
        let universe = builder.finish();
        assert_eq!(universe.columns(), &["HomeNameFull", "x", "AwayNameFull"]);
    }

    #[test]
    fn empty_builder_freezes_empty() {
        let universe = UniverseBuilder::new().finish();
        assert!(universe.is_empty());
        assert_eq!(universe.len(), 0);
    }

    #[test]
    fn position_is_exact() {
        let mut builder = UniverseBuilder::new();
        builder.add_header(&header(&["x"]));
        let universe = builder.finish();
        assert_eq!(universe.position("x"), Some(0));
        assert_eq!(universe.position("HomeNameFull"), Some(1));
        assert_eq!(universe.position("homenamefull"), None);
    }
}
