//! Foreign key retrieval.

use crate::schema::{
    merge_attributes, ColumnRef, Deferrability, FkRule, ForeignKey, ForeignKeyColumnPair,
    SchemaRef,
};
use crate::source::MetadataCursor;

use super::error::{CrawlError, CrawlResult};
use super::retriever::Retriever;

impl Retriever<'_> {
    /// Retrieve foreign keys for every base table, reading both the
    /// imported and the exported halves. Both merge into one constraint
    /// per foreign key name, so a relationship whose two ends are both
    /// crawled is still held once.
    pub(crate) async fn retrieve_foreign_keys(&mut self) -> CrawlResult<()> {
        for (_, schema, table_name) in self.base_table_keys() {
            let imported = self
                .conn
                .source()
                .imported_keys(schema.catalog.as_deref(), schema.schema.as_deref(), &table_name)
                .await
                .map_err(|e| CrawlError::retrieval("foreign keys", e))?;
            self.merge_foreign_key_rows(MetadataCursor::new(imported));

            let exported = self
                .conn
                .source()
                .exported_keys(schema.catalog.as_deref(), schema.schema.as_deref(), &table_name)
                .await
                .map_err(|e| CrawlError::retrieval("foreign keys", e))?;
            self.merge_foreign_key_rows(MetadataCursor::new(exported));
        }

        tracing::debug!(
            foreign_keys = self.catalog.foreign_keys.len(),
            "retrieved foreign keys"
        );
        Ok(())
    }

    fn merge_foreign_key_rows(&mut self, mut cursor: MetadataCursor) {
        while cursor.next_row() {
            let primary_schema = SchemaRef::new(
                cursor.get_name("PKTABLE_CAT"),
                cursor.get_name("PKTABLE_SCHEM"),
            );
            let foreign_schema = SchemaRef::new(
                cursor.get_name("FKTABLE_CAT"),
                cursor.get_name("FKTABLE_SCHEM"),
            );
            let (Some(primary_table), Some(foreign_table)) = (
                cursor.get_name("PKTABLE_NAME"),
                cursor.get_name("FKTABLE_NAME"),
            ) else {
                continue;
            };
            let (Some(primary_column), Some(foreign_column)) = (
                cursor.get_name("PKCOLUMN_NAME"),
                cursor.get_name("FKCOLUMN_NAME"),
            ) else {
                continue;
            };

            let fk_name = cursor
                .get_name("FK_NAME")
                .unwrap_or_else(|| format!("fk_{foreign_table}_{primary_table}"));
            let key_seq = cursor.get_int_or("KEY_SEQ", 1).max(1) as u32;
            let update_rule = FkRule::from_metadata(cursor.get_string("UPDATE_RULE").as_deref());
            let delete_rule = FkRule::from_metadata(cursor.get_string("DELETE_RULE").as_deref());
            let deferrability =
                Deferrability::from_metadata(cursor.get_string("DEFERRABILITY").as_deref());

            let mut primary = ColumnRef::new(primary_schema, primary_table, primary_column);
            let mut foreign = ColumnRef::new(foreign_schema, foreign_table, foreign_column);
            // Ends pointing outside the crawled tables stay as partial
            // references instead of failing the crawl.
            primary.partial = !self.catalog.tables.contains(&primary.table_key());
            foreign.partial = !self.catalog.tables.contains(&foreign.table_key());

            let foreign_table_key = foreign.table_key();
            let foreign_column_name = foreign.column.clone();

            let fk = self
                .catalog
                .foreign_keys
                .lookup_or_create_with(&fk_name, || ForeignKey::new(&fk_name));
            if fk.update_rule == FkRule::Unknown {
                fk.update_rule = update_rule;
            }
            if fk.delete_rule == FkRule::Unknown {
                fk.delete_rule = delete_rule;
            }
            if fk.deferrability == Deferrability::Unknown {
                fk.deferrability = deferrability;
            }
            fk.add_column_pair(ForeignKeyColumnPair {
                key_seq,
                foreign,
                primary,
            });
            merge_attributes(&mut fk.attributes, cursor.take_attributes());

            if let Some(table) = self.catalog.tables.lookup_mut(&foreign_table_key) {
                if let Some(column) = table.lookup_column_mut(&foreign_column_name) {
                    column.part_of_foreign_key = true;
                }
            }
        }
    }
}
