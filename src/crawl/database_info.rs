//! Database information retrieval.

use crate::schema::merge_attributes;
use crate::source::MetadataCursor;

use super::error::{CrawlError, CrawlResult};
use super::retriever::Retriever;

impl Retriever<'_> {
    /// Retrieve the database product facts. Columns beyond the product
    /// triple become catalog-level attributes.
    pub(crate) async fn retrieve_database_info(&mut self) -> CrawlResult<()> {
        let rows = self
            .conn
            .source()
            .database_info()
            .await
            .map_err(|e| CrawlError::retrieval("database info", e))?;

        let mut cursor = MetadataCursor::new(rows);
        if cursor.next_row() {
            let info = &mut self.catalog.database_info;
            info.product_name = cursor.get_name("PRODUCT_NAME");
            info.product_version = cursor.get_name("PRODUCT_VERSION");
            info.user_name = cursor.get_name("USER_NAME");
            merge_attributes(&mut info.attributes, cursor.take_attributes());

            tracing::debug!(
                product = info.product_name.as_deref().unwrap_or("unknown"),
                version = info.product_version.as_deref().unwrap_or("unknown"),
                "retrieved database info"
            );
        }
        Ok(())
    }
}
