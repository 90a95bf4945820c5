//! Synonyms (aliases for other database objects).

use serde::Serialize;

use super::attributes::AttributeMap;
use super::named::{join_key, NamedObject};
use super::schema_ref::SchemaRef;

/// A synonym: a named alias pointing at another object, possibly in a
/// different schema.
#[derive(Debug, Clone, Serialize)]
pub struct Synonym {
    pub name: String,
    pub schema: SchemaRef,
    /// Fully qualified name of the referenced object; `None` when the
    /// source reports a dangling synonym.
    pub referenced_object: Option<String>,
    pub attributes: AttributeMap,
}

impl Synonym {
    pub fn new(schema: SchemaRef, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            schema,
            referenced_object: None,
            attributes: AttributeMap::new(),
        }
    }

    pub fn key(&self) -> String {
        join_key(&self.schema.key(), &self.name)
    }
}

impl NamedObject for Synonym {
    fn name(&self) -> &str {
        &self.name
    }

    fn lookup_key(&self) -> String {
        self.key()
    }
}
