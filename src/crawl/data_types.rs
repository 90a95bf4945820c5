//! Data type retrieval: system types and per-schema user-defined types.

use crate::schema::{merge_attributes, ColumnDataType};
use crate::source::MetadataCursor;

use super::error::{CrawlError, CrawlResult};
use super::retriever::Retriever;

impl Retriever<'_> {
    /// Retrieve the system data types from the type-info endpoint.
    pub(crate) async fn retrieve_system_data_types(&mut self) -> CrawlResult<()> {
        let rows = self
            .conn
            .source()
            .type_info()
            .await
            .map_err(|e| CrawlError::retrieval("data types", e))?;

        let mut cursor = MetadataCursor::new(rows);
        while cursor.next_row() {
            let Some(name) = cursor.get_name("TYPE_NAME") else {
                continue;
            };
            let type_code = cursor.get_int("DATA_TYPE");
            let precision = cursor.get_int("PRECISION");
            let literal_prefix = cursor.get_name("LITERAL_PREFIX");
            let literal_suffix = cursor.get_name("LITERAL_SUFFIX");
            let create_parameters = cursor.get_name("CREATE_PARAMS");
            let nullable = cursor.get_string("NULLABLE").map(|v| {
                v.eq_ignore_ascii_case("yes") || v == "1"
            });
            let case_sensitive = cursor.get_bool("CASE_SENSITIVE");

            let key = ColumnDataType::system(&name).key();
            let data_type = self
                .catalog
                .data_types
                .lookup_or_create_with(&key, || ColumnDataType::system(&name));
            data_type.type_code = data_type.type_code.or(type_code);
            data_type.precision = precision;
            data_type.literal_prefix = literal_prefix;
            data_type.literal_suffix = literal_suffix;
            data_type.create_parameters = create_parameters;
            data_type.nullable = nullable;
            data_type.case_sensitive = case_sensitive;
            merge_attributes(&mut data_type.attributes, cursor.take_attributes());
        }
        tracing::debug!(
            data_types = self.catalog.data_types.len(),
            "retrieved system data types"
        );
        Ok(())
    }

    /// Retrieve user-defined types, schema by schema.
    pub(crate) async fn retrieve_user_defined_types(&mut self) -> CrawlResult<()> {
        for schema in self.schema_refs() {
            let rows = self
                .conn
                .source()
                .user_defined_types(schema.catalog.as_deref(), schema.schema.as_deref())
                .await
                .map_err(|e| CrawlError::retrieval("user-defined types", e))?;

            let mut cursor = MetadataCursor::new(rows);
            while cursor.next_row() {
                let Some(name) = cursor.get_name("TYPE_NAME") else {
                    continue;
                };
                let type_code = cursor.get_int("DATA_TYPE");
                let base_type = cursor.get_name("BASE_TYPE_NAME");
                let remarks = cursor.get_name("REMARKS");

                let key = ColumnDataType::user_defined(schema.clone(), &name).key();
                let data_type = self.catalog.data_types.lookup_or_create_with(&key, || {
                    ColumnDataType::user_defined(schema.clone(), &name)
                });
                data_type.type_code = data_type.type_code.or(type_code);
                data_type.base_type = base_type;
                if let Some(remarks) = remarks {
                    data_type
                        .attributes
                        .entry("REMARKS".to_string())
                        .or_insert_with(|| serde_json::Value::String(remarks));
                }
                merge_attributes(&mut data_type.attributes, cursor.take_attributes());
            }
        }
        Ok(())
    }
}
