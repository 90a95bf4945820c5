//! Tabular metadata results and the typed cursor over them.
//!
//! Metadata endpoints return loosely typed tables: named columns, one row
//! per object. [`MetadataCursor`] gives retrievers type-safe access while
//! tracking which columns they consumed, so the unread remainder of each
//! row can be harvested as generic attributes instead of being lost.

use std::collections::HashSet;

use serde_json::Value;

use crate::schema::AttributeMap;

/// A metadata query result: named columns and loosely typed rows.
///
/// Column names are normalized to upper case, the shared vocabulary the
/// retrievers match on (`TABLE_NAME`, `COLUMN_NAME`, ...).
#[derive(Debug, Clone, Default)]
pub struct MetadataRows {
    columns: Vec<String>,
    rows: Vec<Vec<Value>>,
}

impl MetadataRows {
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            columns: columns
                .into_iter()
                .map(|c| c.as_ref().to_ascii_uppercase())
                .collect(),
            rows: Vec::new(),
        }
    }

    /// A result with no columns and no rows, for absent capabilities.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Append a row. Rows shorter than the column list are padded with
    /// nulls; longer rows are truncated.
    pub fn push_row(&mut self, mut values: Vec<Value>) {
        values.resize(self.columns.len(), Value::Null);
        self.rows.push(values);
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn column_index(&self, name: &str) -> Option<usize> {
        let name = name.to_ascii_uppercase();
        self.columns.iter().position(|c| *c == name)
    }
}

/// Typed, consumption-tracking access over one [`MetadataRows`].
///
/// Accessors are lenient the way metadata results demand: missing columns
/// and nulls read as `None`, numbers arrive as strings and vice versa,
/// and booleans accept the whole "YES"/"true"/1 family.
#[derive(Debug)]
pub struct MetadataCursor {
    rows: MetadataRows,
    /// Index of the current row; `None` before the first `next_row`.
    current: Option<usize>,
    /// Columns consumed from the current row via typed accessors.
    read: HashSet<String>,
}

impl MetadataCursor {
    pub fn new(rows: MetadataRows) -> Self {
        Self {
            rows,
            current: None,
            read: HashSet::new(),
        }
    }

    /// Advance to the next row, clearing the consumed-column tracking.
    /// Returns false when the rows are exhausted.
    pub fn next_row(&mut self) -> bool {
        let next = match self.current {
            None => 0,
            Some(i) => i + 1,
        };
        if next >= self.rows.len() {
            self.current = Some(self.rows.len());
            return false;
        }
        self.current = Some(next);
        self.read.clear();
        true
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    fn value(&self, column: &str) -> Option<&Value> {
        let row = self.rows.rows.get(self.current?)?;
        let index = self.rows.column_index(column)?;
        row.get(index)
    }

    fn mark_read(&mut self, column: &str) {
        if self.rows.column_index(column).is_some() {
            self.read.insert(column.to_ascii_uppercase());
        }
    }

    /// Read a string column. Nulls and missing columns are `None`; numeric
    /// values are rendered as strings.
    pub fn get_string(&mut self, column: &str) -> Option<String> {
        self.mark_read(column);
        match self.value(column)? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }

    /// Like [`get_string`](Self::get_string), but blank strings are `None`.
    pub fn get_name(&mut self, column: &str) -> Option<String> {
        self.get_string(column)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
    }

    /// Read an integer column, accepting numeric strings. Unparseable
    /// values read as `None` with a logged warning.
    pub fn get_int(&mut self, column: &str) -> Option<i64> {
        self.mark_read(column);
        match self.value(column)? {
            Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
            Value::String(s) => {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    return None;
                }
                match trimmed.parse::<i64>() {
                    Ok(value) => Some(value),
                    Err(_) => {
                        tracing::warn!(column, value = %s, "could not parse integer value");
                        None
                    }
                }
            }
            Value::Bool(b) => Some(i64::from(*b)),
            _ => None,
        }
    }

    pub fn get_int_or(&mut self, column: &str, default: i64) -> i64 {
        self.get_int(column).unwrap_or(default)
    }

    /// Whether the column value evaluates to true: "YES", "true", or a
    /// non-zero number. Missing columns and anything else are false.
    pub fn get_bool(&mut self, column: &str) -> bool {
        self.mark_read(column);
        match self.value(column) {
            Some(Value::Bool(b)) => *b,
            Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0),
            Some(Value::String(s)) => {
                let s = s.trim();
                s.eq_ignore_ascii_case("yes")
                    || s.eq_ignore_ascii_case("true")
                    || s.parse::<f64>().is_ok_and(|f| f != 0.0)
            }
            _ => false,
        }
    }

    /// Harvest the unread, non-null columns of the current row as generic
    /// attributes. Columns consumed through typed accessors are excluded.
    pub fn take_attributes(&mut self) -> AttributeMap {
        let mut attributes = AttributeMap::new();
        let Some(current) = self.current else {
            return attributes;
        };
        let Some(row) = self.rows.rows.get(current) else {
            return attributes;
        };
        for (index, column) in self.rows.columns.iter().enumerate() {
            if self.read.contains(column) {
                continue;
            }
            if let Some(value) = row.get(index) {
                if !value.is_null() {
                    attributes.insert(column.clone(), value.clone());
                }
            }
        }
        attributes
    }
}
