//! Tables and views.

use serde::{Deserialize, Serialize};

use super::attributes::AttributeMap;
use super::column::Column;
use super::constraint::CheckConstraint;
use super::index::Index;
use super::keys::PrimaryKey;
use super::named::{join_key, NamedObject, NamedObjectList};
use super::privilege::Privilege;
use super::schema_ref::SchemaRef;
use super::trigger::Trigger;

/// The kind of a table-like object, as reported by the source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TableKind {
    #[default]
    Table,
    View,
    GlobalTemporary,
    LocalTemporary,
    SystemTable,
    Alias,
    Other(String),
}

impl TableKind {
    /// Parse a table-type string from metadata ("TABLE", "VIEW", ...).
    pub fn from_metadata(value: Option<&str>) -> Self {
        match value.map(|v| v.trim().to_ascii_uppercase()).as_deref() {
            Some("TABLE") | Some("BASE TABLE") | None => TableKind::Table,
            Some("VIEW") | Some("MATERIALIZED VIEW") => TableKind::View,
            Some("GLOBAL TEMPORARY") => TableKind::GlobalTemporary,
            Some("LOCAL TEMPORARY") => TableKind::LocalTemporary,
            Some("SYSTEM TABLE") => TableKind::SystemTable,
            Some("ALIAS") => TableKind::Alias,
            Some(other) => TableKind::Other(other.to_string()),
        }
    }

    pub fn is_view(&self) -> bool {
        matches!(self, TableKind::View)
    }
}

/// A table or view, with everything attached to it.
#[derive(Debug, Clone, Serialize)]
pub struct Table {
    pub name: String,
    pub schema: SchemaRef,
    pub kind: TableKind,
    pub remarks: Option<String>,
    /// View definition or source DDL, when available.
    pub definition: Option<String>,
    pub columns: NamedObjectList<Column>,
    pub primary_key: Option<PrimaryKey>,
    pub indexes: NamedObjectList<Index>,
    pub triggers: NamedObjectList<Trigger>,
    pub check_constraints: NamedObjectList<CheckConstraint>,
    pub privileges: Vec<Privilege>,
    /// Natural-order position from the dependency graph; `None` until the
    /// graph pass has run, or when it was skipped.
    pub sort_index: Option<usize>,
    pub attributes: AttributeMap,
}

impl Table {
    pub fn new(schema: SchemaRef, name: impl Into<String>, kind: TableKind) -> Self {
        Self {
            name: name.into(),
            schema,
            kind,
            remarks: None,
            definition: None,
            columns: NamedObjectList::new(),
            primary_key: None,
            indexes: NamedObjectList::new(),
            triggers: NamedObjectList::new(),
            check_constraints: NamedObjectList::new(),
            privileges: Vec::new(),
            sort_index: None,
            attributes: AttributeMap::new(),
        }
    }

    /// The table's catalog-wide lookup key.
    pub fn key(&self) -> String {
        join_key(&self.schema.key(), &self.name)
    }

    /// Fully qualified name; same as the lookup key.
    pub fn full_name(&self) -> String {
        self.key()
    }

    pub fn is_view(&self) -> bool {
        self.kind.is_view()
    }

    pub fn lookup_column(&self, name: &str) -> Option<&Column> {
        self.columns.lookup(name)
    }

    pub fn lookup_column_mut(&mut self, name: &str) -> Option<&mut Column> {
        self.columns.lookup_mut(name)
    }

    /// Columns in ordinal order (the retrieval order key is the name).
    pub fn columns_in_order(&self) -> Vec<&Column> {
        let mut columns: Vec<&Column> = self.columns.iter().collect();
        columns.sort_by_key(|c| c.ordinal_position);
        columns
    }

    /// Replace the primary key with a retrieved index of the same name and
    /// column list, picking up the index's statistics. The index itself is
    /// dropped from the index list, since it only restates the key.
    pub fn replace_primary_key(&mut self) {
        let Some(primary_key) = &self.primary_key else {
            return;
        };
        let pk_name = primary_key.name.clone();

        let same_columns = self
            .indexes
            .lookup(&pk_name)
            .is_some_and(|index| index.column_names() == primary_key.column_names());
        if !same_columns {
            return;
        }

        if let Some(index) = self.indexes.remove(&pk_name) {
            self.primary_key = Some(PrimaryKey::from_index(&index));
        }
    }
}

impl NamedObject for Table {
    fn name(&self) -> &str {
        &self.name
    }

    fn lookup_key(&self) -> String {
        self.key()
    }
}
