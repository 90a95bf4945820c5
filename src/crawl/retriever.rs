//! The shared retriever state and lookup-or-create helpers.

use crate::schema::{
    Catalog, ColumnDataType, NamedObjectList, SchemaRef,
};
use crate::source::{
    InformationSchemaKey, MetadataCursor, SourceConnection,
};

use super::error::{CrawlError, CrawlResult};
use super::options::CrawlOptions;

/// State threaded through every retrieval stage: the capability
/// connection, the crawl options, and the catalog being assembled.
///
/// Per-object-kind retrieval methods live in the sibling modules, all as
/// `impl Retriever` blocks; each queries one metadata endpoint and merges
/// rows into the catalog with lookup-or-create semantics.
pub(crate) struct Retriever<'a> {
    pub(crate) conn: &'a SourceConnection,
    pub(crate) options: &'a CrawlOptions,
    pub(crate) catalog: Catalog,
}

impl<'a> Retriever<'a> {
    pub(crate) fn new(conn: &'a SourceConnection, options: &'a CrawlOptions) -> Self {
        Self {
            conn,
            options,
            catalog: Catalog::new(),
        }
    }

    pub(crate) fn into_catalog(self) -> Catalog {
        self.catalog
    }

    /// The crawled schemas, cloned so retrieval loops can borrow the
    /// catalog mutably while iterating.
    pub(crate) fn schema_refs(&self) -> Vec<SchemaRef> {
        self.catalog.schemas.iter().cloned().collect()
    }

    /// Look up or register the schema for a retrieved catalog/schema name
    /// pair. Rows can name schemas the schema retriever never saw
    /// (cross-schema foreign keys, synonyms); those are merged in here.
    pub(crate) fn lookup_or_create_schema(
        &mut self,
        catalog: Option<String>,
        schema: Option<String>,
    ) -> SchemaRef {
        let schema_ref = SchemaRef::new(catalog, schema);
        self.catalog
            .schemas
            .lookup_or_create_with(&schema_ref.key(), || schema_ref.clone());
        schema_ref
    }

    /// Run an information-schema view query, when the connection has SQL
    /// for it. `Ok(None)` means the capability is absent and the stage
    /// should be skipped.
    pub(crate) async fn view_cursor(
        &self,
        key: InformationSchemaKey,
        stage: &'static str,
    ) -> CrawlResult<Option<MetadataCursor>> {
        let Some(sql) = self.conn.views().get(key) else {
            tracing::debug!(stage, "no information-schema view; skipping");
            return Ok(None);
        };
        let rows = self
            .conn
            .source()
            .query(sql)
            .await
            .map_err(|e| CrawlError::retrieval(stage, e))?;
        tracing::debug!(stage, rows = rows.len(), "information-schema view read");
        Ok(Some(MetadataCursor::new(rows)))
    }
}

/// Look up or create a data type in the given list and return its lookup
/// key. A free function over the list, not a method, so callers can hold
/// other catalog borrows at the same time.
pub(crate) fn lookup_or_create_data_type(
    data_types: &mut NamedObjectList<ColumnDataType>,
    schema: Option<SchemaRef>,
    name: &str,
    type_code: Option<i64>,
) -> String {
    let template = match schema {
        Some(schema) => ColumnDataType::user_defined(schema, name),
        None => ColumnDataType::system(name),
    };
    let key = template.key();
    let data_type = data_types.lookup_or_create_with(&key, || template);
    if data_type.type_code.is_none() {
        data_type.type_code = type_code;
    }
    key
}
