//! Table columns and references to columns in other tables.

use serde::{Deserialize, Serialize};

use super::attributes::AttributeMap;
use super::named::{join_key, NamedObject};
use super::schema_ref::SchemaRef;

/// A column of a table or view.
///
/// Built incrementally: the column retriever fills in the type facts, the
/// key retrievers flip the membership flags afterwards.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Column {
    pub name: String,
    /// One-based position within the table.
    pub ordinal_position: u32,
    /// Declared type name, as the source reports it.
    pub type_name: Option<String>,
    /// Lookup key into the catalog's data-type list, once resolved.
    pub data_type_key: Option<String>,
    pub size: Option<i64>,
    pub decimal_digits: Option<i64>,
    /// `None` when the source does not know.
    pub nullable: Option<bool>,
    pub auto_incremented: bool,
    pub generated: bool,
    pub default_value: Option<String>,
    pub remarks: Option<String>,
    pub part_of_primary_key: bool,
    pub part_of_foreign_key: bool,
    pub privileges: Vec<super::privilege::Privilege>,
    pub attributes: AttributeMap,
}

impl Column {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

impl NamedObject for Column {
    fn name(&self) -> &str {
        &self.name
    }

    // Columns live in a per-table list; the table path is implied.
    fn lookup_key(&self) -> String {
        self.name.clone()
    }
}

/// A reference to a column by path, used where edges cross the ownership
/// tree: foreign keys, weak associations, synonyms.
///
/// `partial` marks references to objects that were not crawled (outside
/// the inclusion rules, or filtered away afterwards).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColumnRef {
    pub schema: SchemaRef,
    pub table: String,
    pub column: String,
    #[serde(default)]
    pub partial: bool,
}

impl ColumnRef {
    pub fn new(schema: SchemaRef, table: impl Into<String>, column: impl Into<String>) -> Self {
        Self {
            schema,
            table: table.into(),
            column: column.into(),
            partial: false,
        }
    }

    /// Lookup key of the referenced table within the catalog.
    pub fn table_key(&self) -> String {
        join_key(&self.schema.key(), &self.table)
    }

    /// Fully qualified "schema.table.column" name.
    pub fn full_name(&self) -> String {
        join_key(&self.table_key(), &self.column)
    }
}

impl std::fmt::Display for ColumnRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.full_name())
    }
}
