use crate::collection::Document;
use crate::common::{compare_values, SortOrder};

/// Options for ordering and paginating the results of a find.
///
/// Sorting is stable: documents that compare equal on the sort field keep
/// their collection order. Skip and limit apply after sorting.
///
/// # Examples
///
/// ```rust,ignore
/// use flatdoc::collection::{order_by, FindOptions};
/// use flatdoc::common::SortOrder;
///
/// // highest score first
/// let options = order_by("score", SortOrder::Descending);
///
/// // second page of ten
/// let options = FindOptions::new().skip(10).limit(10);
/// ```
#[derive(Clone, Debug, Default)]
pub struct FindOptions {
    pub(crate) sort_by: Option<(String, SortOrder)>,
    pub(crate) skip: Option<usize>,
    pub(crate) limit: Option<usize>,
}

/// Creates `FindOptions` sorted by a field.
pub fn order_by(field_name: &str, sort_order: SortOrder) -> FindOptions {
    FindOptions::new().sort_by(field_name, sort_order)
}

/// Creates `FindOptions` that skips the first `skip` results.
pub fn skip_by(skip: usize) -> FindOptions {
    FindOptions::new().skip(skip)
}

/// Creates `FindOptions` that returns at most `limit` results.
pub fn limit_to(limit: usize) -> FindOptions {
    FindOptions::new().limit(limit)
}

impl FindOptions {
    pub fn new() -> Self {
        FindOptions::default()
    }

    pub fn sort_by(mut self, field_name: &str, sort_order: SortOrder) -> Self {
        self.sort_by = Some((field_name.to_string(), sort_order));
        self
    }

    pub fn skip(mut self, skip: usize) -> Self {
        self.skip = Some(skip);
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Applies sorting, skip and limit to an already filtered result set.
    pub(crate) fn apply(&self, mut documents: Vec<Document>) -> Vec<Document> {
        if let Some((field, order)) = &self.sort_by {
            documents.sort_by(|a, b| {
                let ordering = compare_values(a.get_or_null(field), b.get_or_null(field));
                match order {
                    SortOrder::Ascending => ordering,
                    SortOrder::Descending => ordering.reverse(),
                }
            });
        }

        let skip = self.skip.unwrap_or(0);
        let limit = self.limit.unwrap_or(usize::MAX);
        documents.into_iter().skip(skip).take(limit).collect()
    }
}
