//! Extended retrieval: triggers, check constraints, definitions, and
//! privileges. All of these decorate tables that are already crawled.

use crate::schema::{
    join_key, merge_attributes, ActionOrientation, CheckConstraint, ConditionTiming, Privilege,
    SchemaRef, Trigger, TriggerEvent,
};
use crate::source::{InformationSchemaKey, MetadataCursor};

use super::error::{CrawlError, CrawlResult};
use super::retriever::Retriever;

impl Retriever<'_> {
    /// Find a crawled table by an optionally qualified name. Rows from
    /// information-schema views often omit the catalog/schema parts; an
    /// unqualified name matches by bare table name.
    fn find_table_key(
        &self,
        catalog_name: Option<String>,
        schema_name: Option<String>,
        table_name: &str,
    ) -> Option<String> {
        let schema = SchemaRef::new(catalog_name, schema_name);
        if !schema.full_name().is_empty() {
            let key = join_key(&schema.key(), table_name);
            return self.catalog.tables.contains(&key).then_some(key);
        }
        self.catalog
            .tables
            .iter()
            .find(|table| table.name == table_name)
            .map(|table| table.key())
    }

    /// Retrieve triggers from the triggers view and attach them to their
    /// tables.
    pub(crate) async fn retrieve_triggers(&mut self) -> CrawlResult<()> {
        let Some(mut cursor) = self
            .view_cursor(InformationSchemaKey::Triggers, "triggers")
            .await?
        else {
            return Ok(());
        };

        while cursor.next_row() {
            let catalog_name = cursor.get_name("TRIGGER_CAT");
            let schema_name = cursor.get_name("TRIGGER_SCHEM");
            let Some(trigger_name) = cursor.get_name("TRIGGER_NAME") else {
                continue;
            };
            let Some(table_name) = cursor.get_name("TABLE_NAME") else {
                continue;
            };

            let event = TriggerEvent::from_metadata(
                cursor.get_string("EVENT_MANIPULATION").as_deref(),
            );
            let condition_timing = ConditionTiming::from_metadata(
                cursor.get_string("CONDITION_TIMING").as_deref(),
            );
            let action_orientation = ActionOrientation::from_metadata(
                cursor.get_string("ACTION_ORIENTATION").as_deref(),
            );
            let action_condition = cursor.get_name("ACTION_CONDITION");
            let action_statement = cursor.get_name("ACTION_STATEMENT");
            let action_order = cursor.get_int("ACTION_ORDER");

            let Some(table_key) = self.find_table_key(catalog_name, schema_name, &table_name)
            else {
                tracing::trace!(trigger = %trigger_name, table = %table_name, "trigger for unknown table");
                continue;
            };
            let Some(table) = self.catalog.tables.lookup_mut(&table_key) else {
                continue;
            };
            let trigger = table
                .triggers
                .lookup_or_create_with(&trigger_name, || Trigger::new(&trigger_name));
            trigger.event = event;
            trigger.condition_timing = condition_timing;
            trigger.action_orientation = action_orientation;
            trigger.action_condition = action_condition;
            trigger.action_statement = action_statement;
            trigger.action_order = action_order;
            merge_attributes(&mut trigger.attributes, cursor.take_attributes());
        }
        Ok(())
    }

    /// Retrieve check constraints from the check-constraints view.
    /// Expected columns: `CONSTRAINT_NAME`, `TABLE_NAME`, `CHECK_CLAUSE`.
    pub(crate) async fn retrieve_check_constraints(&mut self) -> CrawlResult<()> {
        let Some(mut cursor) = self
            .view_cursor(InformationSchemaKey::CheckConstraints, "check constraints")
            .await?
        else {
            return Ok(());
        };

        while cursor.next_row() {
            let catalog_name = cursor.get_name("CONSTRAINT_CAT");
            let schema_name = cursor.get_name("CONSTRAINT_SCHEM");
            let Some(constraint_name) = cursor.get_name("CONSTRAINT_NAME") else {
                continue;
            };
            let Some(table_name) = cursor.get_name("TABLE_NAME") else {
                continue;
            };
            let definition = cursor.get_name("CHECK_CLAUSE");

            let Some(table_key) = self.find_table_key(catalog_name, schema_name, &table_name)
            else {
                continue;
            };
            let Some(table) = self.catalog.tables.lookup_mut(&table_key) else {
                continue;
            };
            let constraint = table
                .check_constraints
                .lookup_or_create_with(&constraint_name, || {
                    CheckConstraint::new(&constraint_name)
                });
            if definition.is_some() {
                constraint.definition = definition;
            }
            merge_attributes(&mut constraint.attributes, cursor.take_attributes());
        }
        Ok(())
    }

    /// Retrieve view definition text for crawled views.
    pub(crate) async fn retrieve_view_definitions(&mut self) -> CrawlResult<()> {
        let Some(mut cursor) = self
            .view_cursor(InformationSchemaKey::ViewDefinitions, "view definitions")
            .await?
        else {
            return Ok(());
        };

        while cursor.next_row() {
            let catalog_name = cursor.get_name("TABLE_CAT");
            let schema_name = cursor.get_name("TABLE_SCHEM");
            let Some(table_name) = cursor.get_name("TABLE_NAME") else {
                continue;
            };
            let Some(definition) = cursor.get_name("VIEW_DEFINITION") else {
                continue;
            };

            let Some(table_key) = self.find_table_key(catalog_name, schema_name, &table_name)
            else {
                continue;
            };
            let Some(table) = self.catalog.tables.lookup_mut(&table_key) else {
                continue;
            };
            if table.is_view() {
                table.definition = Some(definition);
                merge_attributes(&mut table.attributes, cursor.take_attributes());
            }
        }
        Ok(())
    }

    /// Retrieve source DDL and any additional attributes for base tables.
    pub(crate) async fn retrieve_table_definitions(&mut self) -> CrawlResult<()> {
        let Some(mut cursor) = self
            .view_cursor(
                InformationSchemaKey::AdditionalTableAttributes,
                "table definitions",
            )
            .await?
        else {
            return Ok(());
        };

        while cursor.next_row() {
            let catalog_name = cursor.get_name("TABLE_CAT");
            let schema_name = cursor.get_name("TABLE_SCHEM");
            let Some(table_name) = cursor.get_name("TABLE_NAME") else {
                continue;
            };
            let definition = cursor.get_name("TABLE_DEFINITION");

            let Some(table_key) = self.find_table_key(catalog_name, schema_name, &table_name)
            else {
                continue;
            };
            let Some(table) = self.catalog.tables.lookup_mut(&table_key) else {
                continue;
            };
            if !table.is_view() && definition.is_some() {
                table.definition = definition;
            }
            merge_attributes(&mut table.attributes, cursor.take_attributes());
        }
        Ok(())
    }

    /// Retrieve table-level privileges through the capability endpoint.
    pub(crate) async fn retrieve_table_privileges(&mut self) -> CrawlResult<()> {
        for (table_key, schema, table_name) in self.base_table_keys() {
            let rows = self
                .conn
                .source()
                .table_privileges(schema.catalog.as_deref(), schema.schema.as_deref(), &table_name)
                .await
                .map_err(|e| CrawlError::retrieval("table privileges", e))?;

            let mut cursor = MetadataCursor::new(rows);
            while cursor.next_row() {
                let Some(privilege) = read_privilege(&mut cursor) else {
                    continue;
                };
                let Some(table) = self.catalog.tables.lookup_mut(&table_key) else {
                    continue;
                };
                if !table.privileges.contains(&privilege) {
                    table.privileges.push(privilege);
                }
            }
        }
        Ok(())
    }

    /// Retrieve column-level privileges through the capability endpoint.
    pub(crate) async fn retrieve_column_privileges(&mut self) -> CrawlResult<()> {
        for (table_key, schema, table_name) in self.base_table_keys() {
            let rows = self
                .conn
                .source()
                .column_privileges(schema.catalog.as_deref(), schema.schema.as_deref(), &table_name)
                .await
                .map_err(|e| CrawlError::retrieval("column privileges", e))?;

            let mut cursor = MetadataCursor::new(rows);
            while cursor.next_row() {
                let column_name = cursor.get_name("COLUMN_NAME");
                let Some(privilege) = read_privilege(&mut cursor) else {
                    continue;
                };
                let Some(column_name) = column_name else {
                    continue;
                };
                let Some(table) = self.catalog.tables.lookup_mut(&table_key) else {
                    continue;
                };
                let Some(column) = table.lookup_column_mut(&column_name) else {
                    continue;
                };
                if !column.privileges.contains(&privilege) {
                    column.privileges.push(privilege);
                }
            }
        }
        Ok(())
    }
}

fn read_privilege(cursor: &mut MetadataCursor) -> Option<Privilege> {
    let name = cursor.get_name("PRIVILEGE")?;
    let mut privilege = Privilege::new(name);
    privilege.grantor = cursor.get_name("GRANTOR");
    privilege.grantee = cursor.get_name("GRANTEE");
    privilege.grantable = cursor.get_bool("IS_GRANTABLE");
    Some(privilege)
}
