use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::collection::Document;

/// The full contents of a backing file: collection names mapped to their
/// documents, in collection order.
///
/// Serializes as one JSON object whose values are arrays of document objects.
/// Collection order and document order are both preserved.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Database {
    collections: IndexMap<String, Vec<Document>>,
}

impl Database {
    /// Creates a database with no collections.
    pub fn new() -> Self {
        Database::default()
    }

    /// Creates a database with the given collections present and empty.
    pub fn with_collections<S: AsRef<str>>(names: &[S]) -> Self {
        let mut database = Database::new();
        for name in names {
            database.collection_mut(name.as_ref());
        }
        database
    }

    /// Returns the documents of a collection, if it exists.
    pub fn collection(&self, name: &str) -> Option<&Vec<Document>> {
        self.collections.get(name)
    }

    /// Returns the documents of a collection, creating it empty if needed.
    pub fn collection_mut(&mut self, name: &str) -> &mut Vec<Document> {
        self.collections.entry(name.to_string()).or_default()
    }

    /// Returns the documents of a collection without creating it.
    pub fn existing_collection_mut(&mut self, name: &str) -> Option<&mut Vec<Document>> {
        self.collections.get_mut(name)
    }

    /// Consumes the database, returning the documents of one collection.
    pub fn take_collection(mut self, name: &str) -> Vec<Document> {
        self.collections.swap_remove(name).unwrap_or_default()
    }

    pub fn has_collection(&self, name: &str) -> bool {
        self.collections.contains_key(name)
    }

    /// Returns the collection names in file order.
    pub fn collection_names(&self) -> Vec<String> {
        self.collections.keys().cloned().collect()
    }

    pub fn is_empty(&self) -> bool {
        self.collections.is_empty()
    }

    /// Returns the number of collections.
    pub fn len(&self) -> usize {
        self.collections.len()
    }
}
