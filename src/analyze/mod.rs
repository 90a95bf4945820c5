//! Cross-reference analysis over the assembled graph: table dependency
//! ordering and weak association inference.

mod graph;
mod weak;

pub use graph::{assign_natural_sort_order, TableGraph};
pub use weak::infer_weak_associations;
