//! Synonym retrieval, driven by the synonyms information-schema view.

use crate::schema::{merge_attributes, Synonym};
use crate::source::InformationSchemaKey;

use super::error::CrawlResult;
use super::retriever::Retriever;

impl Retriever<'_> {
    /// Retrieve synonyms, when the connection has a synonyms view.
    /// Expected columns: `SYNONYM_CAT`, `SYNONYM_SCHEM`, `SYNONYM_NAME`,
    /// `REFERENCED_OBJECT`.
    pub(crate) async fn retrieve_synonyms(&mut self) -> CrawlResult<()> {
        if self.options.synonym_rule.excludes_all() {
            return Ok(());
        }
        let Some(mut cursor) = self
            .view_cursor(InformationSchemaKey::Synonyms, "synonyms")
            .await?
        else {
            return Ok(());
        };

        while cursor.next_row() {
            let catalog_name = cursor.get_name("SYNONYM_CAT");
            let schema_name = cursor.get_name("SYNONYM_SCHEM");
            let Some(name) = cursor.get_name("SYNONYM_NAME") else {
                continue;
            };
            let referenced_object = cursor.get_name("REFERENCED_OBJECT");

            let schema = self.lookup_or_create_schema(catalog_name, schema_name);
            let mut template = Synonym::new(schema, &name);
            let key = template.key();
            if !self.options.synonym_rule.test(&key) {
                continue;
            }
            template.referenced_object = referenced_object.clone();

            let synonym = self.catalog.synonyms.lookup_or_create_with(&key, || template);
            if referenced_object.is_some() {
                synonym.referenced_object = referenced_object;
            }
            merge_attributes(&mut synonym.attributes, cursor.take_attributes());
        }

        tracing::debug!(synonyms = self.catalog.synonyms.len(), "retrieved synonyms");
        Ok(())
    }
}
