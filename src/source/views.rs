//! Cached information-schema view SQL.
//!
//! Some metadata has no dedicated endpoint and is instead pulled from
//! database-specific catalog queries. The SQL text for those lives here,
//! keyed by what it returns; sources that have no such query simply leave
//! the slot empty and the matching crawl stage is skipped.

use std::collections::HashMap;

/// The kinds of metadata an information-schema view can supply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InformationSchemaKey {
    Sequences,
    Synonyms,
    Triggers,
    CheckConstraints,
    ViewDefinitions,
    AdditionalTableAttributes,
}

/// The per-connection map from view kind to SQL text.
#[derive(Debug, Clone, Default)]
pub struct InformationSchemaViews {
    views: HashMap<InformationSchemaKey, String>,
}

impl InformationSchemaViews {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style: set the SQL for a view kind.
    pub fn with_view(mut self, key: InformationSchemaKey, sql: impl Into<String>) -> Self {
        self.views.insert(key, sql.into());
        self
    }

    pub fn set_view(&mut self, key: InformationSchemaKey, sql: impl Into<String>) {
        self.views.insert(key, sql.into());
    }

    pub fn get(&self, key: InformationSchemaKey) -> Option<&str> {
        self.views.get(&key).map(String::as_str)
    }

    pub fn has(&self, key: InformationSchemaKey) -> bool {
        self.views.contains_key(&key)
    }
}
