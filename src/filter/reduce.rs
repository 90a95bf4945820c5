//! Reducers: post-hoc pruning of the assembled graph.
//!
//! Retrievers only ever add objects; reducers are the one place objects
//! are removed. They run against the fully assembled catalog, so grep
//! predicates can see columns, definitions, and relationships that did
//! not exist yet while retrieval was still in flight.

use std::collections::BTreeSet;

use serde_json::Value;

use crate::schema::{Catalog, TableRelationship};

use super::grep::GrepOptions;
use super::inclusion::InclusionRule;

/// Reduce the table list to the requested subset: tables passing the name
/// rule and the grep predicates, plus related tables within the given
/// parent/child depths. Foreign keys pointing out of the kept set are
/// flagged and their far-side references marked partial.
pub fn reduce_tables(
    catalog: &mut Catalog,
    table_rule: &InclusionRule,
    grep: &GrepOptions,
    parent_depth: usize,
    child_depth: usize,
) {
    let mut kept: BTreeSet<String> = catalog
        .tables
        .iter()
        .filter(|table| table_rule.test(&table.key()) && grep.table_matches(table))
        .map(|table| table.key())
        .collect();

    // Related tables stay reachable up to the requested depths, unless
    // the grep asks for only the matching tables themselves.
    if !grep.only_matching {
        expand_related(catalog, &mut kept, TableRelationship::Child, child_depth);
        expand_related(catalog, &mut kept, TableRelationship::Parent, parent_depth);
    }

    let dropped = catalog.tables.len() - kept.len();
    if dropped > 0 {
        tracing::debug!(dropped, kept = kept.len(), "reduced tables");
    }

    catalog.tables.retain(|table| kept.contains(&table.key()));

    // Fix up edges that now dangle.
    let mut dead_fks = Vec::new();
    for fk in catalog.foreign_keys.iter_mut() {
        let mut filtered = false;
        let mut any_side_kept = false;
        for pair in &mut fk.column_pairs {
            if kept.contains(&pair.foreign.table_key()) {
                any_side_kept = true;
            } else {
                pair.foreign.partial = true;
                filtered = true;
            }
            if kept.contains(&pair.primary.table_key()) {
                any_side_kept = true;
            } else {
                pair.primary.partial = true;
                filtered = true;
            }
        }
        if !any_side_kept {
            dead_fks.push(fk.name.clone());
        } else if filtered {
            fk.attributes
                .insert("filtered".to_string(), Value::Bool(true));
        }
    }
    for name in dead_fks {
        catalog.foreign_keys.remove(&name);
    }

    catalog.weak_associations.retain(|assoc| {
        kept.contains(&assoc.foreign.table_key()) && kept.contains(&assoc.primary.table_key())
    });
}

fn expand_related(
    catalog: &Catalog,
    kept: &mut BTreeSet<String>,
    direction: TableRelationship,
    depth: usize,
) {
    for _ in 0..depth {
        let frontier: Vec<String> = kept
            .iter()
            .flat_map(|key| catalog.related_table_keys(key, direction))
            .filter(|key| catalog.tables.contains(key))
            .collect();
        let before = kept.len();
        kept.extend(frontier);
        if kept.len() == before {
            break;
        }
    }
}

/// Reduce routines by the name rule and parameter/definition grep.
pub fn reduce_routines(catalog: &mut Catalog, routine_rule: &InclusionRule, grep: &GrepOptions) {
    catalog
        .routines
        .retain(|routine| routine_rule.test(&routine.full_name()) && grep.routine_matches(routine));
}

/// Drop schemas outside the rule. Objects of dropped schemas are expected
/// to have been excluded at retrieval time already.
pub fn reduce_schemas(catalog: &mut Catalog, schema_rule: &InclusionRule) {
    catalog.schemas.retain(|schema| {
        let name = schema.full_name();
        // An unnamed default schema is never reduced away.
        name.is_empty() || schema_rule.test(&name)
    });
}

pub fn reduce_synonyms(catalog: &mut Catalog, synonym_rule: &InclusionRule) {
    catalog
        .synonyms
        .retain(|synonym| synonym_rule.test(&synonym.key()));
}

pub fn reduce_sequences(catalog: &mut Catalog, sequence_rule: &InclusionRule) {
    catalog
        .sequences
        .retain(|sequence| sequence_rule.test(&sequence.key()));
}
