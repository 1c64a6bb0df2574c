use serde_json::Value;
use std::fmt::Display;

use crate::collection::Document;
use crate::common::{value_to_id_string, values_equal, DOC_ID};

/// A conjunction of field equality conditions.
///
/// A document matches a filter when, for every condition, the document's field
/// equals the expected value. A field missing from the document compares as
/// `null`. The empty filter matches every document.
///
/// Filters are usually built with [`super::field`], [`super::by_id`] and
/// [`super::all`], or converted from a query [`Document`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Filter {
    conditions: Vec<(String, Value)>,
}

impl Filter {
    /// Creates a filter that matches every document.
    pub fn all() -> Self {
        Filter { conditions: Vec::new() }
    }

    /// Returns `true` if the filter has no conditions.
    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    /// Returns the conditions in the order they were added.
    pub fn conditions(&self) -> &[(String, Value)] {
        &self.conditions
    }

    /// Combines two filters; the result matches documents matching both.
    pub fn and(mut self, other: Filter) -> Self {
        self.conditions.extend(other.conditions);
        self
    }

    /// Adds one equality condition.
    pub fn with_condition(mut self, field_name: &str, value: impl Into<Value>) -> Self {
        self.conditions.push((field_name.to_string(), value.into()));
        self
    }

    /// Tests a document against every condition using value equality.
    pub fn matches(&self, document: &Document) -> bool {
        self.conditions
            .iter()
            .all(|(field, expected)| values_equal(document.get_or_null(field), expected))
    }

    /// Like [`Filter::matches`], except that an `_id` condition compares the
    /// string forms of both sides. This lets a lookup pass an identifier as a
    /// string, a number or any wrapper that was stringified.
    pub fn matches_id_as_string(&self, document: &Document) -> bool {
        self.conditions.iter().all(|(field, expected)| {
            let actual = document.get_or_null(field);
            if field == DOC_ID {
                value_to_id_string(actual) == value_to_id_string(expected)
            } else {
                values_equal(actual, expected)
            }
        })
    }
}

impl From<Document> for Filter {
    fn from(document: Document) -> Self {
        Filter {
            conditions: document.into_iter().collect(),
        }
    }
}

impl From<&Document> for Filter {
    fn from(document: &Document) -> Self {
        Filter {
            conditions: document
                .iter()
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect(),
        }
    }
}

impl From<Option<Document>> for Filter {
    fn from(document: Option<Document>) -> Self {
        document.map(Filter::from).unwrap_or_default()
    }
}

impl Display for Filter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.conditions.is_empty() {
            return write!(f, "(all)");
        }

        let parts: Vec<String> = self
            .conditions
            .iter()
            .map(|(field, value)| format!("{} == {}", field, value))
            .collect();
        write!(f, "({})", parts.join(" && "))
    }
}
