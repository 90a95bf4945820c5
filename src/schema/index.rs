//! Indexes and index columns.

use serde::{Deserialize, Serialize};

use super::attributes::AttributeMap;
use super::named::NamedObject;

/// Sort direction of an index column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortSequence {
    Ascending,
    Descending,
    #[default]
    Unknown,
}

impl SortSequence {
    /// Parse the single-letter code metadata sources report ("A"/"D").
    pub fn from_code(code: Option<&str>) -> Self {
        match code.map(str::trim) {
            Some("A") | Some("a") => SortSequence::Ascending,
            Some("D") | Some("d") => SortSequence::Descending,
            _ => SortSequence::Unknown,
        }
    }
}

/// A column participating in an index or primary key, with its position
/// within the key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexColumn {
    pub name: String,
    /// One-based position within the index.
    pub ordinal_position: u32,
    pub sort_sequence: SortSequence,
}

impl IndexColumn {
    pub fn new(name: impl Into<String>, ordinal_position: u32) -> Self {
        Self {
            name: name.into(),
            ordinal_position,
            sort_sequence: SortSequence::Ascending,
        }
    }
}

/// An index on a table.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Index {
    pub name: String,
    pub unique: bool,
    /// Source-specific index type ("c" for SQLite auto-indexes, "pk", ...).
    pub index_type: Option<String>,
    /// Columns in ordinal order.
    pub columns: Vec<IndexColumn>,
    pub cardinality: Option<i64>,
    pub pages: Option<i64>,
    pub attributes: AttributeMap,
}

impl Index {
    pub fn new(name: impl Into<String>, unique: bool) -> Self {
        Self {
            name: name.into(),
            unique,
            ..Self::default()
        }
    }

    /// Merge a column into the index, keeping ordinal order. A column seen
    /// twice (metadata endpoints overlap) keeps the first record.
    pub fn add_column(&mut self, column: IndexColumn) {
        if self.columns.iter().any(|c| c.name == column.name) {
            return;
        }
        self.columns.push(column);
        self.columns.sort_by_key(|c| c.ordinal_position);
    }

    /// Column names in ordinal order.
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }
}

impl NamedObject for Index {
    fn name(&self) -> &str {
        &self.name
    }

    fn lookup_key(&self) -> String {
        self.name.clone()
    }
}
