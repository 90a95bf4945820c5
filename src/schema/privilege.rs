//! Privileges granted on tables and columns.

use serde::{Deserialize, Serialize};

/// A single grant of a privilege ("SELECT", "UPDATE", ...) on an object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Privilege {
    /// The privilege type.
    pub name: String,
    pub grantor: Option<String>,
    pub grantee: Option<String>,
    pub grantable: bool,
}

impl Privilege {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            grantor: None,
            grantee: None,
            grantable: false,
        }
    }
}
