use serde_json::{Map, Value};

use crate::collection::Document;
use crate::common::{DOC_ID, SET_OPERATOR};

/// The recognised operators of an update document.
///
/// Only `$set` is applied. Any other top-level key (an operator such as
/// `$inc`/`$unset`, or a bare field) is ignored and logged.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UpdateOperators {
    set: Option<Map<String, Value>>,
    ignored: Vec<String>,
}

impl UpdateOperators {
    /// Parses an update document such as `{"$set": {"name": "B"}}`.
    pub fn parse(update: &Document) -> Self {
        let mut operators = UpdateOperators::default();

        for (key, value) in update.iter() {
            if key == SET_OPERATOR {
                match value {
                    Value::Object(fields) => operators.set = Some(fields.clone()),
                    other => {
                        log::warn!("Ignoring {} with non-object argument {}", SET_OPERATOR, other);
                        operators.ignored.push(key.clone());
                    }
                }
            } else {
                log::warn!("Ignoring unsupported update operator {}", key);
                operators.ignored.push(key.clone());
            }
        }

        operators
    }

    /// Returns the `$set` fields, if any.
    pub fn set_fields(&self) -> Option<&Map<String, Value>> {
        self.set.as_ref()
    }

    /// Returns the top-level keys that will not be applied.
    pub fn ignored(&self) -> &[String] {
        &self.ignored
    }

    /// Applies the update to a document in place.
    ///
    /// Each `$set` field overwrites or creates the field of the same name and
    /// leaves every other field untouched. The `_id` field is never rewritten.
    pub fn apply(&self, document: &mut Document) {
        let Some(fields) = &self.set else {
            return;
        };

        for (key, value) in fields {
            if key == DOC_ID {
                log::warn!("Ignoring {} of the document identifier", SET_OPERATOR);
                continue;
            }
            document.put(key.clone(), value.clone());
        }
    }
}
