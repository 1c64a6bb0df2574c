/// Specifies the direction for sorting documents.
///
/// Used with [`crate::collection::FindOptions`] to control result ordering:
/// ```text
/// let options = order_by("score", SortOrder::Descending);
/// let reports = collection.find_with_options(Filter::all(), &options)?;
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    /// Sort in ascending order (smallest to largest, A-Z, oldest to newest)
    Ascending,
    /// Sort in descending order (largest to smallest, Z-A, newest to oldest)
    Descending,
}
