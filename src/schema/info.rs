//! Database product information.

use serde::Serialize;

use super::attributes::AttributeMap;

/// What the source reports about the database itself.
///
/// Anything beyond the product triple lands in `attributes` (driver
/// properties, connection settings, server variables).
#[derive(Debug, Clone, Default, Serialize)]
pub struct DatabaseInfo {
    pub product_name: Option<String>,
    pub product_version: Option<String>,
    pub user_name: Option<String>,
    pub attributes: AttributeMap,
}
