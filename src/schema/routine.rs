//! Stored procedures and functions.

use serde::{Deserialize, Serialize};

use super::attributes::AttributeMap;
use super::named::{join_key, NamedObject, NamedObjectList};
use super::schema_ref::SchemaRef;

/// Whether a routine is a procedure or a function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoutineKind {
    Procedure,
    Function,
}

/// What a routine returns, per the driver metadata result codes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoutineReturnKind {
    NoResult,
    ReturnsResult,
    ReturnsTable,
    #[default]
    Unknown,
}

/// Direction of a routine parameter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterMode {
    In,
    InOut,
    Out,
    Result,
    Return,
    #[default]
    Unknown,
}

impl ParameterMode {
    pub fn from_metadata(value: Option<&str>) -> Self {
        match value.map(|v| v.trim().to_ascii_uppercase()).as_deref() {
            Some("1") | Some("IN") => ParameterMode::In,
            Some("2") | Some("INOUT") => ParameterMode::InOut,
            Some("3") | Some("RESULT") => ParameterMode::Result,
            Some("4") | Some("OUT") => ParameterMode::Out,
            Some("5") | Some("RETURN") => ParameterMode::Return,
            _ => ParameterMode::Unknown,
        }
    }
}

/// A parameter of a procedure or function.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RoutineParameter {
    pub name: String,
    /// One-based position; 0 for a return value.
    pub ordinal_position: u32,
    pub mode: ParameterMode,
    pub type_name: Option<String>,
    pub size: Option<i64>,
    pub decimal_digits: Option<i64>,
    pub nullable: Option<bool>,
    pub remarks: Option<String>,
    pub attributes: AttributeMap,
}

impl RoutineParameter {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

impl NamedObject for RoutineParameter {
    fn name(&self) -> &str {
        &self.name
    }

    fn lookup_key(&self) -> String {
        self.name.clone()
    }
}

/// A stored procedure or function.
#[derive(Debug, Clone, Serialize)]
pub struct Routine {
    pub name: String,
    pub schema: SchemaRef,
    pub kind: RoutineKind,
    /// The source's overload-disambiguating name, when reported.
    pub specific_name: Option<String>,
    pub return_kind: RoutineReturnKind,
    pub definition: Option<String>,
    pub parameters: NamedObjectList<RoutineParameter>,
    pub remarks: Option<String>,
    pub attributes: AttributeMap,
}

impl Routine {
    pub fn new(schema: SchemaRef, name: impl Into<String>, kind: RoutineKind) -> Self {
        Self {
            name: name.into(),
            schema,
            kind,
            specific_name: None,
            return_kind: RoutineReturnKind::Unknown,
            definition: None,
            parameters: NamedObjectList::new(),
            remarks: None,
            attributes: AttributeMap::new(),
        }
    }

    /// Catalog-wide lookup key; the specific name disambiguates overloads.
    pub fn key(&self) -> String {
        let base = join_key(&self.schema.key(), &self.name);
        match &self.specific_name {
            Some(specific) if specific != &self.name => format!("{base}({specific})"),
            _ => base,
        }
    }

    pub fn full_name(&self) -> String {
        join_key(&self.schema.key(), &self.name)
    }
}

impl NamedObject for Routine {
    fn name(&self) -> &str {
        &self.name
    }

    fn lookup_key(&self) -> String {
        self.key()
    }
}
