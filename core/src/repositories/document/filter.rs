//! Exact-match filters
//!
//! A filter is a set of `field == value` predicates ANDed together. Nothing
//! else (ranges, regexes, operators) is supported by either backend.

use bson::{oid::ObjectId, Bson, Document};

/// Equality filter over top-level document fields
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Filter(Document);

impl Filter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a `field == value` predicate
    pub fn equals(mut self, field: impl Into<String>, value: impl Into<Bson>) -> Self {
        self.0.insert(field.into(), value.into());
        self
    }

    /// Filter on the identity field
    pub fn by_id(id: &ObjectId) -> Self {
        Self::new().equals("_id", *id)
    }

    /// Check a document against every predicate.
    ///
    /// A field absent from the document compares as `Null`, matching the
    /// real backend's treatment of `{field: null}`. Numbers compare by value
    /// across `Int32`, `Int64` and `Double`.
    pub fn matches(&self, document: &Document) -> bool {
        self.0.iter().all(|(field, expected)| {
            values_equal(document.get(field).unwrap_or(&Bson::Null), expected)
        })
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_document(&self) -> &Document {
        &self.0
    }

    pub fn into_document(self) -> Document {
        self.0
    }
}

fn as_integer(value: &Bson) -> Option<i64> {
    match value {
        Bson::Int32(v) => Some(i64::from(*v)),
        Bson::Int64(v) => Some(*v),
        _ => None,
    }
}

fn as_float(value: &Bson) -> Option<f64> {
    match value {
        Bson::Double(v) => Some(*v),
        Bson::Int32(v) => Some(f64::from(*v)),
        Bson::Int64(v) => Some(*v as f64),
        _ => None,
    }
}

fn values_equal(actual: &Bson, expected: &Bson) -> bool {
    if let (Some(a), Some(b)) = (as_integer(actual), as_integer(expected)) {
        return a == b;
    }
    if let (Some(a), Some(b)) = (as_float(actual), as_float(expected)) {
        return a == b;
    }
    actual == expected
}

impl From<Document> for Filter {
    fn from(document: Document) -> Self {
        Self(document)
    }
}
