//! Crawl options: what to retrieve and what to keep.

use crate::filter::{GrepOptions, InclusionRule};
use crate::schema::RoutineKind;

use super::info_level::InfoLevel;

/// Options controlling a crawl: the info level, per-kind inclusion
/// rules, table/routine type selection, grep criteria, and related-table
/// expansion depths for the reducers.
#[derive(Debug, Clone)]
pub struct CrawlOptions {
    pub info_level: InfoLevel,

    pub schema_rule: InclusionRule,
    pub table_rule: InclusionRule,
    pub column_rule: InclusionRule,
    pub routine_rule: InclusionRule,
    pub routine_parameter_rule: InclusionRule,
    pub synonym_rule: InclusionRule,
    pub sequence_rule: InclusionRule,

    /// Restrict to these table types ("TABLE", "VIEW", ...); `None` means
    /// everything the source supports.
    pub table_types: Option<Vec<String>>,
    /// SQL LIKE pattern passed through to the table endpoint.
    pub table_name_pattern: Option<String>,
    /// Which routine kinds to retrieve.
    pub routine_kinds: Vec<RoutineKind>,

    pub grep: GrepOptions,

    /// How many levels of referenced (parent) tables to keep around
    /// grep-matched tables.
    pub parent_table_depth: usize,
    /// How many levels of referencing (child) tables to keep.
    pub child_table_depth: usize,
}

impl Default for CrawlOptions {
    fn default() -> Self {
        Self {
            info_level: InfoLevel::default(),
            schema_rule: InclusionRule::default(),
            table_rule: InclusionRule::default(),
            column_rule: InclusionRule::default(),
            routine_rule: InclusionRule::default(),
            routine_parameter_rule: InclusionRule::default(),
            synonym_rule: InclusionRule::default(),
            sequence_rule: InclusionRule::default(),
            table_types: None,
            table_name_pattern: None,
            routine_kinds: vec![RoutineKind::Procedure, RoutineKind::Function],
            grep: GrepOptions::default(),
            parent_table_depth: 0,
            child_table_depth: 0,
        }
    }
}

impl CrawlOptions {
    /// Options with the given info level and everything else default.
    pub fn with_info_level(info_level: InfoLevel) -> Self {
        Self {
            info_level,
            ..Self::default()
        }
    }
}
