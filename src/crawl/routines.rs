//! Routine and routine-parameter retrieval.

use crate::schema::{
    join_key, merge_attributes, ParameterMode, Routine, RoutineKind, RoutineParameter,
    RoutineReturnKind, SchemaRef,
};
use crate::source::MetadataCursor;

use super::error::{CrawlError, CrawlResult};
use super::retriever::Retriever;

fn routine_kind(type_string: Option<&str>) -> Option<RoutineKind> {
    match type_string.map(|v| v.trim().to_ascii_uppercase()).as_deref() {
        Some("PROCEDURE") => Some(RoutineKind::Procedure),
        Some("FUNCTION") => Some(RoutineKind::Function),
        _ => None,
    }
}

fn return_kind(value: Option<&str>) -> RoutineReturnKind {
    match value.map(|v| v.trim().to_ascii_uppercase()).as_deref() {
        Some("NO RESULT") | Some("1") => RoutineReturnKind::NoResult,
        Some("RESULT") | Some("2") => RoutineReturnKind::ReturnsResult,
        Some("TABLE") => RoutineReturnKind::ReturnsTable,
        _ => RoutineReturnKind::Unknown,
    }
}

impl Retriever<'_> {
    /// Retrieve procedures and functions for every crawled schema,
    /// restricted to the requested routine kinds and inclusion rule.
    pub(crate) async fn retrieve_routines(&mut self) -> CrawlResult<()> {
        if self.options.routine_rule.excludes_all() || self.options.routine_kinds.is_empty() {
            tracing::info!("not retrieving routines, since this was not requested");
            return Ok(());
        }

        for schema in self.schema_refs() {
            let rows = self
                .conn
                .source()
                .routines(schema.catalog.as_deref(), schema.schema.as_deref(), None)
                .await
                .map_err(|e| CrawlError::retrieval("routines", e))?;

            let mut cursor = MetadataCursor::new(rows);
            while cursor.next_row() {
                let Some(name) = cursor.get_name("ROUTINE_NAME") else {
                    continue;
                };
                let Some(kind) = routine_kind(cursor.get_string("ROUTINE_TYPE").as_deref())
                else {
                    continue;
                };
                if !self.options.routine_kinds.contains(&kind) {
                    continue;
                }
                let full_name = join_key(&schema.key(), &name);
                if !self.options.routine_rule.test(&full_name) {
                    tracing::trace!(routine = %full_name, "routine excluded by rule");
                    continue;
                }

                let specific_name = cursor.get_name("SPECIFIC_NAME");
                let returns = return_kind(cursor.get_string("RETURN_KIND").as_deref());
                let remarks = cursor.get_name("REMARKS");

                let mut template = Routine::new(schema.clone(), &name, kind);
                template.specific_name = specific_name.clone();
                let key = template.key();

                let routine = self
                    .catalog
                    .routines
                    .lookup_or_create_with(&key, || template);
                routine.return_kind = returns;
                if remarks.is_some() {
                    routine.remarks = remarks;
                }
                merge_attributes(&mut routine.attributes, cursor.take_attributes());
            }
        }

        tracing::debug!(routines = self.catalog.routines.len(), "retrieved routines");
        Ok(())
    }

    /// Retrieve the parameters of every crawled routine.
    pub(crate) async fn retrieve_routine_parameters(&mut self) -> CrawlResult<()> {
        let routine_keys: Vec<(String, SchemaRef, String)> = self
            .catalog
            .routines
            .iter()
            .map(|routine| (routine.key(), routine.schema.clone(), routine.name.clone()))
            .collect();

        for (routine_key, schema, routine_name) in routine_keys {
            let rows = self
                .conn
                .source()
                .routine_parameters(
                    schema.catalog.as_deref(),
                    schema.schema.as_deref(),
                    &routine_name,
                )
                .await
                .map_err(|e| CrawlError::retrieval("routine parameters", e))?;

            let mut cursor = MetadataCursor::new(rows);
            while cursor.next_row() {
                let Some(parameter_name) = cursor.get_name("PARAMETER_NAME") else {
                    continue;
                };
                let qualified = join_key(
                    &join_key(&schema.key(), &routine_name),
                    &parameter_name,
                );
                if !self.options.routine_parameter_rule.test(&qualified) {
                    continue;
                }

                let ordinal_position = cursor.get_int_or("ORDINAL_POSITION", 0).max(0) as u32;
                let mode = ParameterMode::from_metadata(
                    cursor.get_string("PARAMETER_MODE").as_deref(),
                );
                let type_name = cursor.get_name("TYPE_NAME");
                let size = cursor.get_int("LENGTH");
                let decimal_digits = cursor.get_int("SCALE");
                let nullable = cursor.get_string("NULLABLE").map(|v| {
                    v.eq_ignore_ascii_case("yes") || v == "1"
                });
                let remarks = cursor.get_name("REMARKS");

                let Some(routine) = self.catalog.routines.lookup_mut(&routine_key) else {
                    continue;
                };
                let parameter = routine
                    .parameters
                    .lookup_or_create_with(&parameter_name, || {
                        RoutineParameter::new(&parameter_name)
                    });
                parameter.ordinal_position = ordinal_position;
                parameter.mode = mode;
                parameter.type_name = type_name;
                parameter.size = size;
                parameter.decimal_digits = decimal_digits;
                parameter.nullable = nullable;
                parameter.remarks = remarks;
                merge_attributes(&mut parameter.attributes, cursor.take_attributes());
            }
        }
        Ok(())
    }
}
