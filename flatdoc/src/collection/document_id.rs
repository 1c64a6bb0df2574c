use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt::{Debug, Display};
use uuid::Uuid;

/// The identifier of a stored document.
///
/// Identifiers are stored as strings in the `_id` field. Generated ones are
/// random (v4) UUIDs in their hyphenated form, which makes collisions
/// negligible without any coordination between writers.
///
/// # Examples
///
/// ```rust,ignore
/// use flatdoc::collection::DocumentId;
/// use flatdoc::filter::by_id;
///
/// let id = users.insert_one(doc!{ "email": "a@x.com" })?;
/// let user = users.find_one(by_id(&id))?;
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentId {
    value: String,
}

impl DocumentId {
    /// Generates a new globally unique identifier.
    pub fn new() -> Self {
        DocumentId {
            value: Uuid::new_v4().to_string(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    pub fn into_string(self) -> String {
        self.value
    }
}

impl Default for DocumentId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<String> for DocumentId {
    fn from(value: String) -> Self {
        DocumentId { value }
    }
}

impl From<&str> for DocumentId {
    fn from(value: &str) -> Self {
        DocumentId {
            value: value.to_string(),
        }
    }
}

impl From<DocumentId> for Value {
    fn from(id: DocumentId) -> Self {
        Value::String(id.value)
    }
}

impl AsRef<str> for DocumentId {
    fn as_ref(&self) -> &str {
        &self.value
    }
}

impl PartialEq<str> for DocumentId {
    fn eq(&self, other: &str) -> bool {
        self.value == other
    }
}

impl PartialEq<&str> for DocumentId {
    fn eq(&self, other: &&str) -> bool {
        self.value == *other
    }
}

impl Display for DocumentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl Debug for DocumentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "DocumentId({})", self.value)
    }
}
