use serde_json::Value;
use std::fmt::Display;

use super::Filter;
use crate::common::DOC_ID;

/// Creates a fluent filter builder for the specified field name.
pub fn field(field_name: &str) -> FluentFilter {
    FluentFilter {
        field_name: field_name.to_string(),
    }
}

/// Creates a filter that matches every document.
pub fn all() -> Filter {
    Filter::all()
}

/// Creates a filter that matches the document with the given identifier.
///
/// Anything that can be displayed is accepted; the identifier is compared in
/// its string form.
pub fn by_id(id: impl Display) -> Filter {
    Filter::all().with_condition(DOC_ID, Value::String(id.to_string()))
}

/// A fluent builder for a single field condition.
pub struct FluentFilter {
    field_name: String,
}

impl FluentFilter {
    /// Creates a filter that matches documents where the field equals `value`.
    #[inline]
    pub fn eq<T: Into<Value>>(self, value: T) -> Filter {
        Filter::all().with_condition(&self.field_name, value.into())
    }

    /// Creates a filter that matches documents where the field is `null` or absent.
    #[inline]
    pub fn is_null(self) -> Filter {
        self.eq(Value::Null)
    }
}
