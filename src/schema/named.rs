//! Named-object identity and associative collections.
//!
//! Every schema object is identified by its name plus the lookup key of its
//! parent path ("catalog.schema.table.column"). That identity is what makes
//! the lookup-or-create merge pattern safe: a retriever pass that sees the
//! same object again lands on the same entry instead of creating a
//! duplicate.

use std::collections::BTreeMap;

use serde::Serialize;

/// A schema object that can be stored in a [`NamedObjectList`].
pub trait NamedObject {
    /// The bare object name.
    fn name(&self) -> &str;

    /// The key this object is filed under, unique within its owning list.
    ///
    /// Top-level objects (tables, routines) qualify the key with their
    /// schema; objects owned by a parent (columns, indexes) use the bare
    /// name, since the parent path is implied by the owning list.
    fn lookup_key(&self) -> String;
}

/// Join a parent lookup key and a child name into a child lookup key.
///
/// Empty parent keys are skipped, so objects without a catalog or schema
/// still get stable keys.
pub fn join_key(parent: &str, name: &str) -> String {
    if parent.is_empty() {
        name.to_string()
    } else {
        format!("{parent}.{name}")
    }
}

/// Ordered list of named objects that can be searched associatively.
///
/// Backed by a `BTreeMap` keyed on [`NamedObject::lookup_key`], so
/// iteration order is deterministic and lookups across retrieval passes
/// merge into existing entries.
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct NamedObjectList<T: NamedObject> {
    objects: BTreeMap<String, T>,
}

impl<T: NamedObject> NamedObjectList<T> {
    pub fn new() -> Self {
        Self {
            objects: BTreeMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Add an object, replacing any existing entry with the same key.
    pub fn add(&mut self, object: T) {
        self.objects.insert(object.lookup_key(), object);
    }

    pub fn contains(&self, key: &str) -> bool {
        self.objects.contains_key(key)
    }

    pub fn lookup(&self, key: &str) -> Option<&T> {
        self.objects.get(key)
    }

    pub fn lookup_mut(&mut self, key: &str) -> Option<&mut T> {
        self.objects.get_mut(key)
    }

    /// The lookup-or-create merge: returns the existing object for `key`,
    /// or inserts the one built by `create` and returns that.
    pub fn lookup_or_create_with(&mut self, key: &str, create: impl FnOnce() -> T) -> &mut T {
        self.objects.entry(key.to_string()).or_insert_with(create)
    }

    pub fn remove(&mut self, key: &str) -> Option<T> {
        self.objects.remove(key)
    }

    /// Keep only the objects for which the predicate holds.
    pub fn retain(&mut self, mut keep: impl FnMut(&T) -> bool) {
        self.objects.retain(|_, object| keep(object));
    }

    /// Iterate objects in lookup-key order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.objects.values()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.objects.values_mut()
    }

    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.objects.keys()
    }
}

impl<T: NamedObject> Default for NamedObjectList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T: NamedObject> IntoIterator for &'a NamedObjectList<T> {
    type Item = &'a T;
    type IntoIter = std::collections::btree_map::Values<'a, String, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.objects.values()
    }
}
