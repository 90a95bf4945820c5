//! The table dependency graph.
//!
//! A directed graph over the crawled tables with an edge from each
//! referenced (parent) table to each referencing (child) table, built
//! from the foreign keys. Topologically sorting it yields the natural
//! display order: parents before the tables that depend on them.

use std::collections::HashMap;

use petgraph::algo::is_cyclic_directed;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::Direction;

use crate::schema::Catalog;

/// Foreign-key dependency graph over table lookup keys.
#[derive(Debug)]
pub struct TableGraph {
    graph: DiGraph<String, ()>,
    node_index: HashMap<String, NodeIndex>,
}

impl TableGraph {
    /// Build the graph from the catalog's tables and foreign keys.
    /// Self-references are skipped; they say nothing about ordering.
    pub fn from_catalog(catalog: &Catalog) -> Self {
        let mut graph = DiGraph::new();
        let mut node_index = HashMap::new();

        for key in catalog.tables.keys() {
            let index = graph.add_node(key.clone());
            node_index.insert(key.clone(), index);
        }

        for fk in &catalog.foreign_keys {
            let (Some(parent), Some(child)) = (fk.primary_table_key(), fk.foreign_table_key())
            else {
                continue;
            };
            if parent == child {
                continue;
            }
            if let (Some(&from), Some(&to)) = (node_index.get(&parent), node_index.get(&child)) {
                if !graph.contains_edge(from, to) {
                    graph.add_edge(from, to, ());
                }
            }
        }

        Self { graph, node_index }
    }

    pub fn is_cyclic(&self) -> bool {
        is_cyclic_directed(&self.graph)
    }

    pub fn contains(&self, table_key: &str) -> bool {
        self.node_index.contains_key(table_key)
    }

    /// Table keys in natural order: a level-by-level topological sort,
    /// alphabetical within each level. `None` when the graph is cyclic.
    pub fn natural_order(&self) -> Option<Vec<String>> {
        if self.is_cyclic() {
            return None;
        }

        let mut indegree: HashMap<NodeIndex, usize> = self
            .graph
            .node_indices()
            .map(|node| {
                (
                    node,
                    self.graph.edges_directed(node, Direction::Incoming).count(),
                )
            })
            .collect();

        let mut order = Vec::with_capacity(indegree.len());
        while !indegree.is_empty() {
            let mut level: Vec<NodeIndex> = indegree
                .iter()
                .filter(|(_, degree)| **degree == 0)
                .map(|(node, _)| *node)
                .collect();
            if level.is_empty() {
                // Cannot happen after the cycle check.
                return None;
            }
            level.sort_by(|a, b| self.graph[*a].cmp(&self.graph[*b]));

            for node in level {
                indegree.remove(&node);
                for neighbor in self.graph.neighbors_directed(node, Direction::Outgoing) {
                    if let Some(degree) = indegree.get_mut(&neighbor) {
                        *degree = degree.saturating_sub(1);
                    }
                }
                order.push(self.graph[node].clone());
            }
        }
        Some(order)
    }
}

/// Assign natural-order sort indices to the catalog's tables.
///
/// On a cyclic foreign-key graph this logs a warning and leaves the sort
/// indices unset, so tables keep their alphabetical order.
pub fn assign_natural_sort_order(catalog: &mut Catalog) {
    let graph = TableGraph::from_catalog(catalog);
    let Some(order) = graph.natural_order() else {
        tracing::warn!("foreign keys form a cycle; keeping alphabetical table order");
        return;
    };

    for (position, table_key) in order.iter().enumerate() {
        if let Some(table) = catalog.tables.lookup_mut(table_key) {
            table.sort_index = Some(position);
        }
    }
}
