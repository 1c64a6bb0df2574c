use crate::collection::{Document, DocumentId, FindOptions, UpdateOperators};
use crate::common::value_to_id_string;
use crate::errors::FlatDocResult;
use crate::filter::Filter;
use crate::DocumentStore;

/// A named, ordered sequence of documents within a [`DocumentStore`].
///
/// A `Collection` holds only its store and its name. It owns no documents:
/// every call reloads the database, so a handle never goes stale and is
/// cheap to create, clone and send to other threads.
///
/// Queries are conjunctions of field equality conditions (see [`Filter`]).
/// Anything convertible into a `Filter` is accepted, including a query
/// [`Document`] and `None` for "everything".
///
/// Absence is never an error: a lookup that finds nothing returns `None`, an
/// empty `Vec`, `false` or `0`.
#[derive(Clone)]
pub struct Collection {
    store: DocumentStore,
    name: String,
}

impl Collection {
    pub(crate) fn new(store: DocumentStore, name: &str) -> Self {
        Collection {
            store,
            name: name.to_string(),
        }
    }

    /// Returns the name of this collection.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the first document, in collection order, matching the filter.
    ///
    /// An `_id` condition is compared on the string forms of both sides, so
    /// an identifier matches whether it is passed as a string, a number or a
    /// stringified wrapper.
    pub fn find_one(&self, filter: impl Into<Filter>) -> FlatDocResult<Option<Document>> {
        let filter = filter.into();
        let documents = self.documents()?;
        Ok(documents
            .into_iter()
            .find(|document| filter.matches_id_as_string(document)))
    }

    /// Returns every matching document in collection order.
    ///
    /// An empty filter returns the whole collection.
    pub fn find(&self, filter: impl Into<Filter>) -> FlatDocResult<Vec<Document>> {
        let filter = filter.into();
        let documents = self.documents()?;
        if filter.is_empty() {
            return Ok(documents);
        }

        Ok(documents
            .into_iter()
            .filter(|document| filter.matches(document))
            .collect())
    }

    /// Returns matching documents, sorted and paginated by `find_options`.
    pub fn find_with_options(
        &self,
        filter: impl Into<Filter>,
        find_options: &FindOptions,
    ) -> FlatDocResult<Vec<Document>> {
        let documents = self.find(filter)?;
        Ok(find_options.apply(documents))
    }

    /// Appends a document to the collection and persists the database.
    ///
    /// A document without an `_id` is given a newly generated one. The
    /// collection is created if it does not exist yet.
    ///
    /// # Returns
    ///
    /// The identifier of the stored document.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be persisted; nothing is
    /// stored in that case.
    pub fn insert_one(&self, mut document: Document) -> FlatDocResult<DocumentId> {
        let id = match document.id() {
            Some(id) => DocumentId::from(value_to_id_string(id)),
            None => {
                let id = DocumentId::new();
                document.set_id(id.to_string());
                id
            }
        };

        self.store.mutate(|database| {
            database.collection_mut(&self.name).push(document);
            ((), true)
        })?;

        log::debug!("Inserted document {} into {}", id, self.name);
        Ok(id)
    }

    /// Applies `update` to the first document matching the filter.
    ///
    /// Only the `$set` operator is applied: each named field is overwritten or
    /// created and every other field is left as it was. Other operators are
    /// ignored. The database is persisted only when a document matched.
    ///
    /// # Returns
    ///
    /// `true` if a document matched, `false` otherwise.
    pub fn update_one(&self, filter: impl Into<Filter>, update: &Document) -> FlatDocResult<bool> {
        let filter = filter.into();
        let operators = UpdateOperators::parse(update);

        let updated = self.store.mutate(|database| {
            let Some(documents) = database.existing_collection_mut(&self.name) else {
                return (false, false);
            };

            match documents.iter_mut().find(|document| filter.matches(document)) {
                Some(document) => {
                    operators.apply(document);
                    (true, true)
                }
                None => (false, false),
            }
        })?;

        log::debug!("Update of {} matching {} applied: {}", self.name, filter, updated);
        Ok(updated)
    }

    /// Removes every document matching the filter, keeping the order of the rest.
    ///
    /// The database is persisted only when something was removed.
    ///
    /// # Returns
    ///
    /// The number of removed documents.
    pub fn delete_many(&self, filter: impl Into<Filter>) -> FlatDocResult<usize> {
        let filter = filter.into();

        let removed = self.store.mutate(|database| {
            let Some(documents) = database.existing_collection_mut(&self.name) else {
                return (0, false);
            };

            let before = documents.len();
            documents.retain(|document| !filter.matches(document));
            let removed = before - documents.len();
            (removed, removed > 0)
        })?;

        log::debug!("Deleted {} documents from {} matching {}", removed, self.name, filter);
        Ok(removed)
    }

    fn documents(&self) -> FlatDocResult<Vec<Document>> {
        Ok(self.store.read()?.take_collection(&self.name))
    }
}
