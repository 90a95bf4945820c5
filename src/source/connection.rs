//! The capability connection wrapper.

use super::identifiers::Identifiers;
use super::provider::MetadataSource;
use super::views::InformationSchemaViews;

/// A live metadata source plus the dictionaries cached at connect time:
/// identifier quoting rules, information-schema view SQL, and the table
/// types the source supports.
///
/// Retrievers only ever see this wrapper; the raw driver handle stays
/// behind the [`MetadataSource`] capability methods.
pub struct SourceConnection {
    source: Box<dyn MetadataSource>,
    identifiers: Identifiers,
    views: InformationSchemaViews,
    table_types: Vec<String>,
}

impl SourceConnection {
    pub fn new(source: Box<dyn MetadataSource>) -> Self {
        let identifiers = Identifiers::new(source.quote_string());
        let table_types = source.table_types();
        Self {
            source,
            identifiers,
            views: InformationSchemaViews::new(),
            table_types,
        }
    }

    /// Builder-style: attach information-schema view SQL.
    pub fn with_views(mut self, views: InformationSchemaViews) -> Self {
        self.views = views;
        self
    }

    pub fn source(&self) -> &dyn MetadataSource {
        self.source.as_ref()
    }

    pub fn identifiers(&self) -> &Identifiers {
        &self.identifiers
    }

    pub fn views(&self) -> &InformationSchemaViews {
        &self.views
    }

    pub fn table_types(&self) -> &[String] {
        &self.table_types
    }

    /// Intersect the requested table types with what the source supports,
    /// case-insensitively. `None` means all supported types.
    pub fn filter_table_types(&self, requested: Option<&[String]>) -> Vec<String> {
        match requested {
            None => self.table_types.clone(),
            Some(requested) => self
                .table_types
                .iter()
                .filter(|supported| {
                    requested
                        .iter()
                        .any(|r| r.eq_ignore_ascii_case(supported))
                })
                .cloned()
                .collect(),
        }
    }
}

impl std::fmt::Debug for SourceConnection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SourceConnection")
            .field("identifiers", &self.identifiers)
            .field("table_types", &self.table_types)
            .finish_non_exhaustive()
    }
}
