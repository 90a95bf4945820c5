//! Name-based inclusion rules.

use regex::Regex;

/// A predicate over object names: include everything, exclude everything,
/// or a regular-expression include/exclude pair where exclusion wins.
///
/// Rules test fully qualified names ("schema.table", "schema.table.column"),
/// so patterns can anchor on any part of the path.
#[derive(Debug, Clone, Default)]
pub enum InclusionRule {
    /// Include every name. The default.
    #[default]
    IncludeAll,
    /// Exclude every name; used to switch a whole object kind off.
    ExcludeAll,
    /// Include names matching `include` (or all, when `None`), then drop
    /// names matching `exclude`.
    Patterns {
        include: Option<Regex>,
        exclude: Option<Regex>,
    },
}

impl InclusionRule {
    /// Build a rule from optional include and exclude pattern strings.
    pub fn from_patterns(
        include: Option<&str>,
        exclude: Option<&str>,
    ) -> Result<Self, regex::Error> {
        if include.is_none() && exclude.is_none() {
            return Ok(InclusionRule::IncludeAll);
        }
        Ok(InclusionRule::Patterns {
            include: include.map(Regex::new).transpose()?,
            exclude: exclude.map(Regex::new).transpose()?,
        })
    }

    /// Shorthand for an include-only rule.
    pub fn include(pattern: &str) -> Result<Self, regex::Error> {
        Self::from_patterns(Some(pattern), None)
    }

    /// Whether the given qualified name passes the rule.
    pub fn test(&self, name: &str) -> bool {
        if name.is_empty() {
            return false;
        }
        match self {
            InclusionRule::IncludeAll => true,
            InclusionRule::ExcludeAll => false,
            InclusionRule::Patterns { include, exclude } => {
                let included = include.as_ref().map_or(true, |re| re.is_match(name));
                let excluded = exclude.as_ref().is_some_and(|re| re.is_match(name));
                included && !excluded
            }
        }
    }

    /// Whether this rule can never include anything, which lets a
    /// retriever skip its metadata query entirely.
    pub fn excludes_all(&self) -> bool {
        matches!(self, InclusionRule::ExcludeAll)
    }
}
