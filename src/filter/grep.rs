//! Content-based "grep" filtering.
//!
//! Where inclusion rules match object names, grep options match what is
//! *inside* an object: its column names, its routine parameter names, or
//! its definition text. A table survives the grep when any of its
//! contents match.

use crate::schema::{join_key, Routine, Table};

use super::inclusion::InclusionRule;

/// Content-matching options applied during reduction.
#[derive(Debug, Clone, Default)]
pub struct GrepOptions {
    /// Match against qualified column names.
    pub column_rule: Option<InclusionRule>,
    /// Match against qualified routine parameter names.
    pub routine_parameter_rule: Option<InclusionRule>,
    /// Match against definition text and remarks.
    pub definition_rule: Option<InclusionRule>,
    /// Flip the grep verdict (names rules are unaffected).
    pub invert_match: bool,
    /// Keep only the matching objects themselves, not their related
    /// tables; reducers use this to decide how hard to prune foreign keys.
    pub only_matching: bool,
}

impl GrepOptions {
    /// Whether any grep criterion is configured at all.
    pub fn is_active(&self) -> bool {
        self.column_rule.is_some()
            || self.routine_parameter_rule.is_some()
            || self.definition_rule.is_some()
    }

    /// Grep verdict for a table. Tables pass when no grep is configured.
    pub fn table_matches(&self, table: &Table) -> bool {
        if !self.is_active() {
            return true;
        }

        let mut matched = false;
        if let Some(rule) = &self.column_rule {
            let table_key = table.key();
            matched = table
                .columns
                .iter()
                .any(|column| rule.test(&join_key(&table_key, &column.name)));
        }
        if !matched {
            if let Some(rule) = &self.definition_rule {
                matched = definition_matches(rule, table.remarks.as_deref())
                    || definition_matches(rule, table.definition.as_deref())
                    || table
                        .triggers
                        .iter()
                        .any(|t| definition_matches(rule, t.action_statement.as_deref()));
            }
        }

        matched != self.invert_match
    }

    /// Grep verdict for a routine.
    pub fn routine_matches(&self, routine: &Routine) -> bool {
        if self.routine_parameter_rule.is_none() && self.definition_rule.is_none() {
            return true;
        }

        let mut matched = false;
        if let Some(rule) = &self.routine_parameter_rule {
            let routine_key = routine.full_name();
            matched = routine
                .parameters
                .iter()
                .any(|parameter| rule.test(&join_key(&routine_key, &parameter.name)));
        }
        if !matched {
            if let Some(rule) = &self.definition_rule {
                matched = definition_matches(rule, routine.remarks.as_deref())
                    || definition_matches(rule, routine.definition.as_deref());
            }
        }

        matched != self.invert_match
    }
}

fn definition_matches(rule: &InclusionRule, text: Option<&str>) -> bool {
    text.is_some_and(|text| rule.test(text))
}
