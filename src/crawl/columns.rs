//! Table column retrieval.

use crate::schema::{join_key, merge_attributes, Column};
use crate::source::MetadataCursor;

use super::error::{CrawlError, CrawlResult};
use super::retriever::{lookup_or_create_data_type, Retriever};

impl Retriever<'_> {
    /// Retrieve the columns of every crawled table.
    ///
    /// Table name patterns treat `_` as a wildcard on most sources, so
    /// rows for a like-named table can come back here; each row is
    /// re-checked against the owning table before merging.
    pub(crate) async fn retrieve_columns(&mut self) -> CrawlResult<()> {
        if self.options.column_rule.excludes_all() {
            tracing::info!("not retrieving columns, since this was not requested");
            return Ok(());
        }

        let table_keys: Vec<(String, crate::schema::SchemaRef, String)> = self
            .catalog
            .tables
            .iter()
            .map(|table| (table.key(), table.schema.clone(), table.name.clone()))
            .collect();

        // Fetch the per-table column queries in parallel, then merge the
        // results serially into the catalog.
        let source = self.conn.source();
        let fetches: Vec<_> = table_keys
            .iter()
            .map(|(_, schema, table_name)| {
                source.columns(schema.catalog.as_deref(), schema.schema.as_deref(), table_name)
            })
            .collect();
        let results = futures::future::join_all(fetches).await;

        for ((table_key, _, table_name), rows) in table_keys.iter().zip(results) {
            let rows = rows.map_err(|e| CrawlError::retrieval("columns", e))?;

            let mut cursor = MetadataCursor::new(rows);
            while cursor.next_row() {
                // Read the default first; some drivers will not hand it
                // out once other columns of the row were touched.
                let default_value = cursor.get_string("COLUMN_DEF");

                let _ = cursor.get_string("TABLE_CAT");
                let _ = cursor.get_string("TABLE_SCHEM");
                let returned_table = cursor.get_name("TABLE_NAME");
                if returned_table.as_deref().is_some_and(|t| t != table_name.as_str()) {
                    continue;
                }

                let Some(column_name) = cursor.get_name("COLUMN_NAME") else {
                    continue;
                };
                if !self
                    .options
                    .column_rule
                    .test(&join_key(table_key, &column_name))
                {
                    continue;
                }
                tracing::trace!(table = %table_key, column = %column_name, "retrieving column");

                let ordinal_position = cursor.get_int_or("ORDINAL_POSITION", 0).max(0) as u32;
                let type_name = cursor.get_name("TYPE_NAME");
                let type_code = cursor.get_int("DATA_TYPE");
                let size = cursor.get_int("COLUMN_SIZE");
                let decimal_digits = cursor.get_int("DECIMAL_DIGITS");
                let nullable = match cursor.get_string("NULLABLE").as_deref().map(str::trim) {
                    Some("YES") | Some("yes") | Some("1") => Some(true),
                    Some("NO") | Some("no") | Some("0") => Some(false),
                    _ => None,
                };
                let auto_incremented = cursor.get_bool("IS_AUTOINCREMENT");
                let generated = cursor.get_bool("IS_GENERATEDCOLUMN");
                let remarks = cursor.get_name("REMARKS");

                let data_type_key = type_name.as_deref().map(|type_name| {
                    lookup_or_create_data_type(
                        &mut self.catalog.data_types,
                        None,
                        type_name,
                        type_code,
                    )
                });

                let Some(table) = self.catalog.tables.lookup_mut(table_key) else {
                    continue;
                };
                let column = table
                    .columns
                    .lookup_or_create_with(&column_name, || Column::new(&column_name));
                column.ordinal_position = ordinal_position;
                column.type_name = type_name;
                column.data_type_key = data_type_key;
                column.size = size;
                column.decimal_digits = decimal_digits;
                column.nullable = nullable;
                column.auto_incremented = auto_incremented;
                column.generated = generated;
                column.remarks = remarks;
                if default_value.is_some() {
                    column.default_value = default_value;
                }
                merge_attributes(&mut column.attributes, cursor.take_attributes());
            }
        }
        Ok(())
    }
}
