//! Catalog + schema name pair.

use serde::{Deserialize, Serialize};

use super::named::NamedObject;

/// A reference to a schema: the catalog and schema name pair.
///
/// Either part may be absent. SQLite, for instance, reports attached
/// database names as catalogs and has no schema level at all.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SchemaRef {
    pub catalog: Option<String>,
    pub schema: Option<String>,
}

impl SchemaRef {
    pub fn new(catalog: Option<String>, schema: Option<String>) -> Self {
        let none_if_blank = |s: Option<String>| s.filter(|s| !s.trim().is_empty());
        Self {
            catalog: none_if_blank(catalog),
            schema: none_if_blank(schema),
        }
    }

    /// "catalog.schema", skipping absent parts.
    pub fn full_name(&self) -> String {
        match (&self.catalog, &self.schema) {
            (Some(catalog), Some(schema)) => format!("{catalog}.{schema}"),
            (Some(catalog), None) => catalog.clone(),
            (None, Some(schema)) => schema.clone(),
            (None, None) => String::new(),
        }
    }

    /// The lookup key this schema files under, and the prefix for the keys
    /// of objects that live in it.
    pub fn key(&self) -> String {
        self.full_name()
    }
}

impl NamedObject for SchemaRef {
    fn name(&self) -> &str {
        self.schema
            .as_deref()
            .or(self.catalog.as_deref())
            .unwrap_or("")
    }

    fn lookup_key(&self) -> String {
        self.key()
    }
}

impl std::fmt::Display for SchemaRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.full_name())
    }
}
