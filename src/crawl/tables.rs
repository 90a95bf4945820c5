//! Table retrieval.

use crate::schema::{join_key, merge_attributes, Table, TableKind};
use crate::source::MetadataCursor;

use super::error::{CrawlError, CrawlResult};
use super::retriever::Retriever;

impl Retriever<'_> {
    /// Retrieve tables and views for every crawled schema, applying the
    /// table type filter and the table inclusion rule.
    pub(crate) async fn retrieve_tables(&mut self) -> CrawlResult<()> {
        if self.options.table_rule.excludes_all() {
            tracing::info!("not retrieving tables, since this was not requested");
            return Ok(());
        }

        let types = self
            .conn
            .filter_table_types(self.options.table_types.as_deref());
        if self.options.table_types.is_some() && types.is_empty() {
            tracing::info!("none of the requested table types are supported");
            return Ok(());
        }
        tracing::debug!(types = ?types, "retrieving table types");

        for schema in self.schema_refs() {
            let rows = self
                .conn
                .source()
                .tables(
                    schema.catalog.as_deref(),
                    schema.schema.as_deref(),
                    self.options.table_name_pattern.as_deref(),
                    &types,
                )
                .await
                .map_err(|e| CrawlError::retrieval("tables", e))?;

            let mut cursor = MetadataCursor::new(rows);
            while cursor.next_row() {
                // Consume the schema columns so they stay out of the
                // attribute map; the crawled schema is authoritative.
                let _ = cursor.get_string("TABLE_CAT");
                let _ = cursor.get_string("TABLE_SCHEM");

                let Some(name) = cursor.get_name("TABLE_NAME") else {
                    continue;
                };
                let kind = TableKind::from_metadata(cursor.get_string("TABLE_TYPE").as_deref());
                let remarks = cursor.get_name("REMARKS");

                let key = join_key(&schema.key(), &name);
                if !self.options.table_rule.test(&key) {
                    tracing::trace!(table = %key, "table excluded by rule");
                    continue;
                }

                tracing::trace!(table = %key, "retrieving table");
                let table = self
                    .catalog
                    .tables
                    .lookup_or_create_with(&key, || Table::new(schema.clone(), &name, kind.clone()));
                table.kind = kind;
                if remarks.is_some() {
                    table.remarks = remarks;
                }
                merge_attributes(&mut table.attributes, cursor.take_attributes());
            }
        }

        tracing::debug!(tables = self.catalog.tables.len(), "retrieved tables");
        Ok(())
    }
}
