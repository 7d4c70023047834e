//! Read-side outputs: whole-form snapshots and ordered payloads.

use indexmap::IndexMap;
use serde::Serialize;

use crate::FieldName;

/// Accumulates ordered key/value pairs for transmission.
///
/// The container format is the caller's business (multipart bodies,
/// url-encoded strings, a toolkit's own form-data object). Implementations
/// must keep insertion order and must accept duplicate keys.
pub trait PayloadSink {
    fn append_pair(&mut self, name: &str, value: &str);
}

impl PayloadSink for Vec<(String, String)> {
    fn append_pair(&mut self, name: &str, value: &str) {
        self.push((name.to_string(), value.to_string()));
    }
}

impl<T: PayloadSink + ?Sized> PayloadSink for &mut T {
    fn append_pair(&mut self, name: &str, value: &str) {
        (**self).append_pair(name, value)
    }
}

/// A snapshot of every field's logical value, in declared field order.
///
/// Serializes as a map whose key order matches the field set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldValues {
    values: IndexMap<FieldName, String>,
}

impl FieldValues {
    pub(crate) fn with_capacity(n: usize) -> Self {
        Self {
            values: IndexMap::with_capacity(n),
        }
    }

    pub(crate) fn insert(&mut self, name: FieldName, value: String) {
        self.values.insert(name, value);
    }

    /// The value of one field.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate in declared field order.
    pub fn iter(&self) -> impl Iterator<Item = (&FieldName, &str)> {
        self.values.iter().map(|(k, v)| (k, v.as_str()))
    }

    pub fn into_inner(self) -> IndexMap<FieldName, String> {
        self.values
    }
}

impl<'a> IntoIterator for &'a FieldValues {
    type Item = (&'a FieldName, &'a String);
    type IntoIter = indexmap::map::Iter<'a, FieldName, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}
