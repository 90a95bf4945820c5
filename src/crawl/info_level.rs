//! Schema info levels: which retrieval stages a crawl runs.

use serde::{Deserialize, Serialize};

/// Per-stage toggles, usually set through one of the presets.
///
/// Each flag gates one retrieval stage; stages that depend on earlier
/// ones (columns need tables) are simply no-ops when the prerequisite
/// stage was off.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InfoLevel {
    pub retrieve_database_info: bool,
    pub retrieve_column_data_types: bool,
    pub retrieve_user_defined_types: bool,
    pub retrieve_tables: bool,
    pub retrieve_table_columns: bool,
    pub retrieve_primary_keys: bool,
    pub retrieve_indexes: bool,
    pub retrieve_foreign_keys: bool,
    pub retrieve_routines: bool,
    pub retrieve_routine_parameters: bool,
    pub retrieve_synonyms: bool,
    pub retrieve_sequences: bool,
    pub retrieve_triggers: bool,
    pub retrieve_check_constraints: bool,
    pub retrieve_view_definitions: bool,
    pub retrieve_table_definitions: bool,
    pub retrieve_table_privileges: bool,
    pub retrieve_column_privileges: bool,
    pub infer_weak_associations: bool,
}

impl InfoLevel {
    /// Object names only: schemas, database info, table and routine
    /// names.
    pub fn minimum() -> Self {
        Self {
            retrieve_database_info: true,
            retrieve_column_data_types: false,
            retrieve_user_defined_types: false,
            retrieve_tables: true,
            retrieve_table_columns: false,
            retrieve_primary_keys: false,
            retrieve_indexes: false,
            retrieve_foreign_keys: false,
            retrieve_routines: true,
            retrieve_routine_parameters: false,
            retrieve_synonyms: false,
            retrieve_sequences: false,
            retrieve_triggers: false,
            retrieve_check_constraints: false,
            retrieve_view_definitions: false,
            retrieve_table_definitions: false,
            retrieve_table_privileges: false,
            retrieve_column_privileges: false,
            infer_weak_associations: false,
        }
    }

    /// The usual working set: minimum plus columns, keys, and indexes.
    pub fn standard() -> Self {
        Self {
            retrieve_column_data_types: true,
            retrieve_table_columns: true,
            retrieve_primary_keys: true,
            retrieve_indexes: true,
            retrieve_foreign_keys: true,
            ..Self::minimum()
        }
    }

    /// Standard plus definitions and the view-driven object kinds.
    pub fn detailed() -> Self {
        Self {
            retrieve_user_defined_types: true,
            retrieve_routine_parameters: true,
            retrieve_synonyms: true,
            retrieve_sequences: true,
            retrieve_triggers: true,
            retrieve_check_constraints: true,
            retrieve_view_definitions: true,
            retrieve_table_definitions: true,
            ..Self::standard()
        }
    }

    /// Everything, including privileges and weak association inference.
    pub fn maximum() -> Self {
        Self {
            retrieve_table_privileges: true,
            retrieve_column_privileges: true,
            infer_weak_associations: true,
            ..Self::detailed()
        }
    }
}

impl Default for InfoLevel {
    fn default() -> Self {
        Self::standard()
    }
}
