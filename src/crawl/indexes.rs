//! Primary key and index retrieval.

use crate::schema::{
    merge_attributes, Index, IndexColumn, PrimaryKey, SchemaRef, SortSequence,
};
use crate::source::MetadataCursor;

use super::error::{CrawlError, CrawlResult};
use super::retriever::Retriever;

impl Retriever<'_> {
    pub(crate) fn base_table_keys(&self) -> Vec<(String, SchemaRef, String)> {
        self.catalog
            .tables
            .iter()
            .filter(|table| !table.is_view())
            .map(|table| (table.key(), table.schema.clone(), table.name.clone()))
            .collect()
    }

    /// Retrieve the primary key of every base table and mark the member
    /// columns.
    pub(crate) async fn retrieve_primary_keys(&mut self) -> CrawlResult<()> {
        for (table_key, schema, table_name) in self.base_table_keys() {
            let rows = self
                .conn
                .source()
                .primary_key(schema.catalog.as_deref(), schema.schema.as_deref(), &table_name)
                .await
                .map_err(|e| CrawlError::retrieval("primary keys", e))?;

            let mut cursor = MetadataCursor::new(rows);
            while cursor.next_row() {
                let Some(column_name) = cursor.get_name("COLUMN_NAME") else {
                    continue;
                };
                let key_seq = cursor.get_int_or("KEY_SEQ", 0).max(0) as u32;
                let pk_name = cursor
                    .get_name("PK_NAME")
                    .unwrap_or_else(|| format!("pk_{table_name}"));

                let Some(table) = self.catalog.tables.lookup_mut(&table_key) else {
                    continue;
                };
                let primary_key = table
                    .primary_key
                    .get_or_insert_with(|| PrimaryKey::new(pk_name));
                primary_key.add_column(IndexColumn::new(&column_name, key_seq));
                merge_attributes(&mut primary_key.attributes, cursor.take_attributes());

                if let Some(column) = table.lookup_column_mut(&column_name) {
                    column.part_of_primary_key = true;
                }
            }
        }
        Ok(())
    }

    /// Retrieve indexes of every base table: one pass for unique indexes,
    /// one for the rest, merging by index name.
    pub(crate) async fn retrieve_indexes(&mut self, unique_only: bool) -> CrawlResult<()> {
        for (table_key, schema, table_name) in self.base_table_keys() {
            let rows = self
                .conn
                .source()
                .indexes(
                    schema.catalog.as_deref(),
                    schema.schema.as_deref(),
                    &table_name,
                    unique_only,
                )
                .await
                .map_err(|e| CrawlError::retrieval("indexes", e))?;

            let mut cursor = MetadataCursor::new(rows);
            while cursor.next_row() {
                let Some(index_name) = cursor.get_name("INDEX_NAME") else {
                    continue;
                };
                let unique = !cursor.get_bool("NON_UNIQUE");
                let index_type = cursor.get_name("TYPE");
                let ordinal_position = cursor.get_int_or("ORDINAL_POSITION", 0).max(0) as u32;
                let column_name = cursor.get_name("COLUMN_NAME");
                let sort_sequence =
                    SortSequence::from_code(cursor.get_string("ASC_OR_DESC").as_deref());
                let cardinality = cursor.get_int("CARDINALITY");
                let pages = cursor.get_int("PAGES");

                let Some(table) = self.catalog.tables.lookup_mut(&table_key) else {
                    continue;
                };
                let index = table
                    .indexes
                    .lookup_or_create_with(&index_name, || Index::new(&index_name, unique));
                index.unique = unique;
                if index_type.is_some() {
                    index.index_type = index_type;
                }
                if cardinality.is_some() {
                    index.cardinality = cardinality;
                }
                if pages.is_some() {
                    index.pages = pages;
                }
                if let Some(column_name) = column_name {
                    let mut index_column = IndexColumn::new(&column_name, ordinal_position);
                    index_column.sort_sequence = sort_sequence;
                    index.add_column(index_column);
                }
                merge_attributes(&mut index.attributes, cursor.take_attributes());
            }
        }
        Ok(())
    }

    /// Replace primary keys that are restated by a retrieved unique
    /// index, table by table.
    pub(crate) fn replace_primary_keys(&mut self) {
        for table in self.catalog.tables.iter_mut() {
            table.replace_primary_key();
        }
    }
}
