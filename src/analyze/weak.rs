//! Weak association inference.
//!
//! Finds plausible FK-like relationships that were never declared, from
//! column naming conventions: `orders.customer_id` pointing at
//! `customers.id`. Inference is deliberately narrow: the referenced
//! column must be the whole (single-column) primary key of the target
//! table, and pairs already covered by a declared foreign key are never
//! repeated.

use std::collections::{BTreeSet, HashMap};

use crate::schema::{Catalog, ColumnRef, WeakAssociation};

/// Singular-to-plural for table-name matching: customer -> customers,
/// category -> categories, status -> statuses.
fn pluralize(word: &str) -> String {
    if word.ends_with('s') || word.ends_with('x') || word.ends_with('z') {
        format!("{word}es")
    } else if let Some(stem) = word.strip_suffix('y') {
        if stem.chars().last().is_some_and(|c| !"aeiou".contains(c)) {
            format!("{stem}ies")
        } else {
            format!("{word}s")
        }
    } else {
        format!("{word}s")
    }
}

/// Infer weak associations across the catalog's tables and record them on
/// the catalog.
pub fn infer_weak_associations(catalog: &mut Catalog) {
    // Tables by lower-cased bare name, with their single-column primary
    // key, where they have one.
    let mut pk_by_table_name: HashMap<String, (ColumnRef, String)> = HashMap::new();
    for table in &catalog.tables {
        let Some(primary_key) = &table.primary_key else {
            continue;
        };
        if primary_key.columns.len() != 1 {
            continue;
        }
        let pk_column = &primary_key.columns[0].name;
        pk_by_table_name.insert(
            table.name.to_lowercase(),
            (
                ColumnRef::new(table.schema.clone(), table.name.clone(), pk_column.clone()),
                table.key(),
            ),
        );
    }

    // Column pairs already covered by declared foreign keys.
    let covered: BTreeSet<(String, String)> = catalog
        .foreign_keys
        .iter()
        .flat_map(|fk| {
            fk.column_pairs
                .iter()
                .map(|pair| (pair.foreign.full_name(), pair.primary.full_name()))
        })
        .collect();

    let mut found: Vec<WeakAssociation> = Vec::new();
    for table in &catalog.tables {
        let table_key = table.key();
        for column in &table.columns {
            if column.part_of_foreign_key {
                continue;
            }
            let column_lower = column.name.to_lowercase();
            let Some(base) = column_lower.strip_suffix("_id") else {
                continue;
            };
            if base.is_empty() {
                continue;
            }

            // Plural table name first (customer_id -> customers), then
            // the literal base (customer_id -> customer).
            let target = [pluralize(base), base.to_string()]
                .into_iter()
                .find_map(|candidate| pk_by_table_name.get(&candidate));

            let Some((pk_ref, target_key)) = target else {
                continue;
            };
            if *target_key == table_key {
                continue;
            }

            let foreign = ColumnRef::new(table.schema.clone(), table.name.clone(), &column.name);
            if covered.contains(&(foreign.full_name(), pk_ref.full_name())) {
                continue;
            }

            let association = WeakAssociation {
                foreign,
                primary: pk_ref.clone(),
            };
            if !found.contains(&association) {
                tracing::debug!(
                    foreign = %association.foreign,
                    primary = %association.primary,
                    "inferred weak association"
                );
                found.push(association);
            }
        }
    }

    catalog.weak_associations.extend(found);
}
