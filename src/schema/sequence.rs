//! Sequences.

use serde::Serialize;

use super::attributes::AttributeMap;
use super::named::{join_key, NamedObject};
use super::schema_ref::SchemaRef;

/// A sequence generator.
#[derive(Debug, Clone, Serialize)]
pub struct Sequence {
    pub name: String,
    pub schema: SchemaRef,
    pub start_value: Option<i64>,
    pub minimum_value: Option<i64>,
    pub maximum_value: Option<i64>,
    pub increment: Option<i64>,
    pub cycle: bool,
    pub attributes: AttributeMap,
}

impl Sequence {
    pub fn new(schema: SchemaRef, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            schema,
            start_value: None,
            minimum_value: None,
            maximum_value: None,
            increment: None,
            cycle: false,
            attributes: AttributeMap::new(),
        }
    }

    pub fn key(&self) -> String {
        join_key(&self.schema.key(), &self.name)
    }
}

impl NamedObject for Sequence {
    fn name(&self) -> &str {
        &self.name
    }

    fn lookup_key(&self) -> String {
        self.key()
    }
}
