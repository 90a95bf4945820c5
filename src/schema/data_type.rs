//! Column data types, system and user-defined.

use serde::Serialize;

use super::attributes::AttributeMap;
use super::named::{join_key, NamedObject};
use super::schema_ref::SchemaRef;

/// A data type known to the database: a system type reported by the
/// type-info endpoint, or a user-defined type belonging to a schema.
#[derive(Debug, Clone, Serialize)]
pub struct ColumnDataType {
    pub name: String,
    /// `None` for system types.
    pub schema: Option<SchemaRef>,
    /// The source's numeric type code, when reported.
    pub type_code: Option<i64>,
    pub precision: Option<i64>,
    pub literal_prefix: Option<String>,
    pub literal_suffix: Option<String>,
    pub create_parameters: Option<String>,
    pub nullable: Option<bool>,
    pub case_sensitive: bool,
    pub user_defined: bool,
    /// Name of the base type for user-defined types.
    pub base_type: Option<String>,
    pub attributes: AttributeMap,
}

impl ColumnDataType {
    /// A system type, owned by the database rather than any schema.
    pub fn system(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            schema: None,
            type_code: None,
            precision: None,
            literal_prefix: None,
            literal_suffix: None,
            create_parameters: None,
            nullable: None,
            case_sensitive: false,
            user_defined: false,
            base_type: None,
            attributes: AttributeMap::new(),
        }
    }

    /// A user-defined type in the given schema.
    pub fn user_defined(schema: SchemaRef, name: impl Into<String>) -> Self {
        let mut data_type = Self::system(name);
        data_type.schema = Some(schema);
        data_type.user_defined = true;
        data_type
    }

    pub fn key(&self) -> String {
        match &self.schema {
            Some(schema) => join_key(&schema.key(), &self.name),
            None => join_key("system", &self.name),
        }
    }
}

impl NamedObject for ColumnDataType {
    fn name(&self) -> &str {
        &self.name
    }

    fn lookup_key(&self) -> String {
        self.key()
    }
}
