//! Primary and foreign keys.

use serde::{Deserialize, Serialize};

use super::attributes::AttributeMap;
use super::column::ColumnRef;
use super::index::{Index, IndexColumn};
use super::named::NamedObject;

/// A table's primary key: a named, ordered set of columns.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PrimaryKey {
    pub name: String,
    /// Columns in key-sequence order.
    pub columns: Vec<IndexColumn>,
    pub attributes: AttributeMap,
}

impl PrimaryKey {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Rebuild the primary key from a retrieved unique index, keeping the
    /// index's column order and statistics.
    pub fn from_index(index: &Index) -> Self {
        let mut attributes = index.attributes.clone();
        if let Some(cardinality) = index.cardinality {
            attributes.insert("CARDINALITY".to_string(), cardinality.into());
        }
        if let Some(pages) = index.pages {
            attributes.insert("PAGES".to_string(), pages.into());
        }
        Self {
            name: index.name.clone(),
            columns: index.columns.clone(),
            attributes,
        }
    }

    pub fn add_column(&mut self, column: IndexColumn) {
        if self.columns.iter().any(|c| c.name == column.name) {
            return;
        }
        self.columns.push(column);
        self.columns.sort_by_key(|c| c.ordinal_position);
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }
}

/// Referential action declared for update or delete on a foreign key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FkRule {
    Cascade,
    SetNull,
    SetDefault,
    Restrict,
    NoAction,
    #[default]
    Unknown,
}

impl FkRule {
    /// Parse either the numeric codes of driver metadata or the SQL
    /// keywords sources like SQLite report.
    pub fn from_metadata(value: Option<&str>) -> Self {
        match value.map(|v| v.trim().to_ascii_uppercase()).as_deref() {
            Some("0") | Some("CASCADE") => FkRule::Cascade,
            Some("1") | Some("RESTRICT") => FkRule::Restrict,
            Some("2") | Some("SET NULL") => FkRule::SetNull,
            Some("3") | Some("NO ACTION") => FkRule::NoAction,
            Some("4") | Some("SET DEFAULT") => FkRule::SetDefault,
            _ => FkRule::Unknown,
        }
    }
}

/// Whether foreign key constraint checking may be deferred.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Deferrability {
    InitiallyDeferred,
    InitiallyImmediate,
    NotDeferrable,
    #[default]
    Unknown,
}

impl Deferrability {
    pub fn from_metadata(value: Option<&str>) -> Self {
        match value.map(|v| v.trim().to_ascii_uppercase()).as_deref() {
            Some("5") | Some("INITIALLY DEFERRED") => Deferrability::InitiallyDeferred,
            Some("6") | Some("INITIALLY IMMEDIATE") => Deferrability::InitiallyImmediate,
            Some("7") | Some("NOT DEFERRABLE") => Deferrability::NotDeferrable,
            _ => Deferrability::Unknown,
        }
    }
}

/// One column mapping within a foreign key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForeignKeyColumnPair {
    /// One-based key-sequence position.
    pub key_seq: u32,
    /// The referencing (child-side) column.
    pub foreign: ColumnRef,
    /// The referenced (parent-side, usually primary key) column.
    pub primary: ColumnRef,
}

/// A foreign key constraint between two tables.
///
/// Retrieved in two halves (imported and exported keys); both merge into
/// the same object by name, so the catalog holds each constraint once.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ForeignKey {
    pub name: String,
    /// Column pairs in key-sequence order.
    pub column_pairs: Vec<ForeignKeyColumnPair>,
    pub update_rule: FkRule,
    pub delete_rule: FkRule,
    pub deferrability: Deferrability,
    pub attributes: AttributeMap,
}

impl ForeignKey {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Merge a column pair, ignoring a pair already present at the same
    /// key sequence (the imported and exported halves overlap).
    pub fn add_column_pair(&mut self, pair: ForeignKeyColumnPair) {
        if self.column_pairs.iter().any(|p| p.key_seq == pair.key_seq) {
            return;
        }
        self.column_pairs.push(pair);
        self.column_pairs.sort_by_key(|p| p.key_seq);
    }

    /// Lookup key of the referencing (child) table, if any pairs exist.
    pub fn foreign_table_key(&self) -> Option<String> {
        self.column_pairs.first().map(|p| p.foreign.table_key())
    }

    /// Lookup key of the referenced (parent) table, if any pairs exist.
    pub fn primary_table_key(&self) -> Option<String> {
        self.column_pairs.first().map(|p| p.primary.table_key())
    }
}

impl NamedObject for ForeignKey {
    fn name(&self) -> &str {
        &self.name
    }

    fn lookup_key(&self) -> String {
        self.name.clone()
    }
}
