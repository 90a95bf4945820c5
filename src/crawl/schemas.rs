//! Schema retrieval.

use crate::schema::SchemaRef;
use crate::source::MetadataCursor;

use super::error::{CrawlError, CrawlResult};
use super::retriever::Retriever;

impl Retriever<'_> {
    /// Retrieve the catalog/schema pairs, applying the schema inclusion
    /// rule. A source that reports no schemas at all still gets one
    /// unnamed default schema, so later stages always have somewhere to
    /// file objects.
    pub(crate) async fn retrieve_schemas(&mut self) -> CrawlResult<()> {
        let rows = self
            .conn
            .source()
            .schemas()
            .await
            .map_err(|e| CrawlError::retrieval("schemas", e))?;

        let mut cursor = MetadataCursor::new(rows);
        while cursor.next_row() {
            let catalog = cursor.get_name("TABLE_CAT");
            let schema = cursor.get_name("TABLE_SCHEM");
            let schema_ref = SchemaRef::new(catalog, schema);

            let full_name = schema_ref.full_name();
            if !full_name.is_empty() && !self.options.schema_rule.test(&full_name) {
                tracing::trace!(schema = %full_name, "schema excluded by rule");
                continue;
            }
            self.catalog.schemas.add(schema_ref);
        }

        if self.catalog.schemas.is_empty() {
            self.catalog.schemas.add(SchemaRef::default());
        }
        tracing::debug!(schemas = self.catalog.schemas.len(), "retrieved schemas");
        Ok(())
    }
}
