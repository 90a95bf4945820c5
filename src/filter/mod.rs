//! Inclusion rules, grep matching, and graph reducers.
//!
//! Two layers of filtering: name-pattern [`InclusionRule`]s applied while
//! retrieving, and reducers that prune the finished graph afterwards
//! (content grep, related-table expansion, dangling-edge cleanup).

mod grep;
mod inclusion;
mod reduce;

pub use grep::GrepOptions;
pub use inclusion::InclusionRule;
pub use reduce::{
    reduce_routines, reduce_schemas, reduce_sequences, reduce_synonyms, reduce_tables,
};
