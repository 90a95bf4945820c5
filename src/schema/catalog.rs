//! The catalog: root of the crawled object graph.

use serde::Serialize;

use super::attributes::AttributeMap;
use super::column::ColumnRef;
use super::data_type::ColumnDataType;
use super::info::DatabaseInfo;
use super::keys::ForeignKey;
use super::named::NamedObjectList;
use super::routine::Routine;
use super::schema_ref::SchemaRef;
use super::sequence::Sequence;
use super::synonym::Synonym;
use super::table::Table;

/// Direction of a table relationship, from the point of view of a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableRelationship {
    /// Tables this table's foreign keys point at.
    Parent,
    /// Tables whose foreign keys point at this table.
    Child,
}

/// An inferred, convention-based relationship that is not backed by a
/// declared foreign key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeakAssociation {
    /// The referencing (child-side) column.
    pub foreign: ColumnRef,
    /// The referenced (parent-side) column.
    pub primary: ColumnRef,
}

/// The root of the crawled schema graph.
///
/// Objects are merged in incrementally across retrieval passes and are
/// logically final only once the whole crawl has completed.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Catalog {
    pub database_info: DatabaseInfo,
    pub schemas: NamedObjectList<SchemaRef>,
    pub tables: NamedObjectList<Table>,
    pub routines: NamedObjectList<Routine>,
    pub synonyms: NamedObjectList<Synonym>,
    pub sequences: NamedObjectList<Sequence>,
    pub data_types: NamedObjectList<ColumnDataType>,
    /// All foreign keys, deduplicated by name across the imported and
    /// exported retrieval halves.
    pub foreign_keys: NamedObjectList<ForeignKey>,
    pub weak_associations: Vec<WeakAssociation>,
    pub attributes: AttributeMap,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tables in natural order: dependency sort index first, then name.
    /// Tables without a sort index (graph pass skipped) sort last,
    /// alphabetically.
    pub fn tables_natural_order(&self) -> Vec<&Table> {
        let mut tables: Vec<&Table> = self.tables.iter().collect();
        tables.sort_by(|a, b| {
            let a_rank = a.sort_index.unwrap_or(usize::MAX);
            let b_rank = b.sort_index.unwrap_or(usize::MAX);
            a_rank.cmp(&b_rank).then_with(|| a.key().cmp(&b.key()))
        });
        tables
    }

    /// Tables belonging to one schema, in lookup-key order.
    pub fn tables_of<'a>(&'a self, schema: &'a SchemaRef) -> impl Iterator<Item = &'a Table> {
        self.tables.iter().filter(move |t| &t.schema == schema)
    }

    pub fn lookup_table(&self, schema: &SchemaRef, name: &str) -> Option<&Table> {
        self.tables
            .lookup(&super::named::join_key(&schema.key(), name))
    }

    pub fn lookup_table_mut(&mut self, schema: &SchemaRef, name: &str) -> Option<&mut Table> {
        self.tables
            .lookup_mut(&super::named::join_key(&schema.key(), name))
    }

    /// Foreign keys whose referencing (child) side is the given table.
    pub fn imported_foreign_keys(&self, table_key: &str) -> Vec<&ForeignKey> {
        self.foreign_keys
            .iter()
            .filter(|fk| fk.foreign_table_key().as_deref() == Some(table_key))
            .collect()
    }

    /// Foreign keys whose referenced (parent) side is the given table.
    pub fn exported_foreign_keys(&self, table_key: &str) -> Vec<&ForeignKey> {
        self.foreign_keys
            .iter()
            .filter(|fk| fk.primary_table_key().as_deref() == Some(table_key))
            .collect()
    }

    /// Keys of the tables related to the given table through foreign keys,
    /// in the requested direction.
    pub fn related_table_keys(&self, table_key: &str, direction: TableRelationship) -> Vec<String> {
        let mut related = Vec::new();
        for fk in self.foreign_keys.iter() {
            let (near, far) = match direction {
                TableRelationship::Parent => (fk.foreign_table_key(), fk.primary_table_key()),
                TableRelationship::Child => (fk.primary_table_key(), fk.foreign_table_key()),
            };
            if near.as_deref() == Some(table_key) {
                if let Some(far_key) = far {
                    if far_key != table_key && !related.contains(&far_key) {
                        related.push(far_key);
                    }
                }
            }
        }
        related
    }
}
