//! Open attribute maps carried by every schema object.
//!
//! Metadata queries routinely return more columns than the object model
//! maps explicitly. Whatever a retriever does not consume through the
//! typed cursor accessors lands here, keyed by the upper-cased column
//! name.

use std::collections::BTreeMap;

use serde_json::Value;

/// String-keyed, loosely typed attributes.
pub type AttributeMap = BTreeMap<String, Value>;

/// Merge `extra` into `attributes`, skipping nulls and keeping existing
/// entries on key collisions.
pub fn merge_attributes(attributes: &mut AttributeMap, extra: AttributeMap) {
    for (key, value) in extra {
        if value.is_null() {
            continue;
        }
        attributes.entry(key).or_insert(value);
    }
}
