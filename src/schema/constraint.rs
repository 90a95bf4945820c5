//! Check constraints.

use serde::Serialize;

use super::attributes::AttributeMap;
use super::named::NamedObject;

/// A check constraint attached to a table.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CheckConstraint {
    pub name: String,
    /// The constraint expression, when the source exposes it.
    pub definition: Option<String>,
    pub deferrable: bool,
    pub initially_deferred: bool,
    pub attributes: AttributeMap,
}

impl CheckConstraint {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

impl NamedObject for CheckConstraint {
    fn name(&self) -> &str {
        &self.name
    }

    fn lookup_key(&self) -> String {
        self.name.clone()
    }
}
