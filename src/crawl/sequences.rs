//! Sequence retrieval, driven by the sequences information-schema view.

use crate::schema::{merge_attributes, Sequence};
use crate::source::InformationSchemaKey;

use super::error::CrawlResult;
use super::retriever::Retriever;

impl Retriever<'_> {
    /// Retrieve sequences, when the connection has a sequences view.
    /// Expected columns: `SEQUENCE_CAT`, `SEQUENCE_SCHEM`,
    /// `SEQUENCE_NAME`, `START_VALUE`, `MINIMUM_VALUE`, `MAXIMUM_VALUE`,
    /// `INCREMENT`, `CYCLE_OPTION`.
    pub(crate) async fn retrieve_sequences(&mut self) -> CrawlResult<()> {
        if self.options.sequence_rule.excludes_all() {
            return Ok(());
        }
        let Some(mut cursor) = self
            .view_cursor(InformationSchemaKey::Sequences, "sequences")
            .await?
        else {
            return Ok(());
        };

        while cursor.next_row() {
            let catalog_name = cursor.get_name("SEQUENCE_CAT");
            let schema_name = cursor.get_name("SEQUENCE_SCHEM");
            let Some(name) = cursor.get_name("SEQUENCE_NAME") else {
                continue;
            };

            let schema = self.lookup_or_create_schema(catalog_name, schema_name);
            let template = Sequence::new(schema, &name);
            let key = template.key();
            if !self.options.sequence_rule.test(&key) {
                continue;
            }

            let start_value = cursor.get_int("START_VALUE");
            let minimum_value = cursor.get_int("MINIMUM_VALUE");
            let maximum_value = cursor.get_int("MAXIMUM_VALUE");
            let increment = cursor.get_int("INCREMENT");
            let cycle = cursor.get_bool("CYCLE_OPTION");

            let sequence = self
                .catalog
                .sequences
                .lookup_or_create_with(&key, || template);
            sequence.start_value = start_value;
            sequence.minimum_value = minimum_value;
            sequence.maximum_value = maximum_value;
            sequence.increment = increment;
            sequence.cycle = cycle;
            merge_attributes(&mut sequence.attributes, cursor.take_attributes());
        }

        tracing::debug!(sequences = self.catalog.sequences.len(), "retrieved sequences");
        Ok(())
    }
}
