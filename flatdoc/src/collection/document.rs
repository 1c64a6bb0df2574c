use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt::{Debug, Display};

use crate::common::{value_to_id_string, DOC_ID};
use crate::errors::{ErrorKind, FlatDocError, FlatDocResult};

/// A schemaless record stored in a collection.
///
/// A document maps field names to dynamically typed JSON values: strings,
/// numbers, booleans, null, nested objects or arrays of any of these. Field
/// order is preserved from insertion through the backing file and back.
///
/// Every stored document carries a unique `_id` field. If a document is
/// inserted without one, the store assigns a generated identifier; see
/// [`crate::collection::Collection::insert_one`].
///
/// # Examples
///
/// ```rust,ignore
/// use flatdoc::doc;
///
/// let mut user = doc!{ "email": "a@x.com", "role": "student" };
/// user.put("name", "Alice");
/// assert_eq!(user.get_str("name"), Some("Alice"));
/// ```
#[derive(Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Document {
    data: Map<String, Value>,
}

impl Document {
    /// Creates a new empty document.
    pub fn new() -> Self {
        Document { data: Map::new() }
    }

    /// Returns `true` if the document has no fields.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the number of top-level fields.
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// Sets `key` to `value`, returning the previous value if the field existed.
    ///
    /// Existing fields keep their position; new fields are appended.
    pub fn put(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.data.insert(key.into(), value.into())
    }

    /// Returns the value of a top-level field.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.data.get(key)
    }

    /// Returns the value of a field if it is a string.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.data.get(key).and_then(Value::as_str)
    }

    /// Returns the value of a field, treating an absent field as `null`.
    pub fn get_or_null(&self, key: &str) -> &Value {
        self.data.get(key).unwrap_or(&Value::Null)
    }

    /// Returns `true` if the document has a field named `key`.
    pub fn contains_key(&self, key: &str) -> bool {
        self.data.contains_key(key)
    }

    /// Removes a field, returning its value. Later fields keep their order.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.data.shift_remove(key)
    }

    /// Returns the raw `_id` value, if present.
    pub fn id(&self) -> Option<&Value> {
        self.data.get(DOC_ID)
    }

    /// Returns the `_id` in string form, if present.
    pub fn id_string(&self) -> Option<String> {
        self.id().map(value_to_id_string)
    }

    /// Returns `true` if the document carries an `_id` field.
    pub fn has_id(&self) -> bool {
        self.data.contains_key(DOC_ID)
    }

    /// Iterates over the fields in order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.data.iter()
    }

    /// Returns the field names in order.
    pub fn fields(&self) -> Vec<String> {
        self.data.keys().cloned().collect()
    }

    pub(crate) fn set_id(&mut self, id: String) {
        self.data.insert(DOC_ID.to_string(), Value::String(id));
    }
}

impl From<Map<String, Value>> for Document {
    fn from(data: Map<String, Value>) -> Self {
        Document { data }
    }
}

impl TryFrom<Value> for Document {
    type Error = FlatDocError;

    fn try_from(value: Value) -> FlatDocResult<Self> {
        match value {
            Value::Object(data) => Ok(Document { data }),
            other => {
                log::error!("Cannot create a document from a non-object value {}", other);
                Err(FlatDocError::new(
                    "A document can only be created from a JSON object",
                    ErrorKind::InvalidOperation,
                ))
            }
        }
    }
}

impl From<Document> for Value {
    fn from(document: Document) -> Self {
        Value::Object(document.data)
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Document {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Document {
            data: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

impl IntoIterator for Document {
    type Item = (String, Value);
    type IntoIter = serde_json::map::IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl Display for Document {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", Value::Object(self.data.clone()))
    }
}

impl Debug for Document {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Document({})", self)
    }
}

/// Creates a [`Document`] from JSON-like key/value pairs.
///
/// Keys are string literals (or expressions yielding strings); values follow
/// `serde_json::json!` syntax, so nested objects and arrays work as expected.
///
/// ```rust,ignore
/// use flatdoc::doc;
///
/// let empty = doc!{};
/// let report = doc!{
///     "student_id": "s-1",
///     "score": 87,
///     "strengths": ["clarity", "depth"],
///     "meta": { "date": "Today" }
/// };
/// ```
#[macro_export]
macro_rules! doc {
    () => {
        $crate::collection::Document::new()
    };

    ($($body:tt)+) => {
        match $crate::serde_json::json!({ $($body)+ }) {
            $crate::serde_json::Value::Object(map) => $crate::collection::Document::from(map),
            _ => unreachable!("json! object literal always yields an object"),
        }
    };
}
