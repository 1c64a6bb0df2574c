use once_cell::sync::OnceCell;
use std::path::Path;
use std::sync::Arc;

use crate::collection::Collection;
use crate::common::LockHandle;
use crate::errors::FlatDocResult;
use crate::store::{Database, FileStore};
use crate::store_builder::DocumentStoreBuilder;
use crate::store_config::StoreConfig;
use crate::FILE_LOCKS;

/// An embedded document store backed by a single JSON file.
///
/// `DocumentStore` owns the backing file and hands out [`Collection`]
/// handles by name. Every read loads a fresh snapshot of the file; every
/// mutation runs a full load-modify-save cycle while holding the lock of
/// its backing file, and saves by atomic replacement.
///
/// Clones share the same state. Stores opened on the same file within one
/// process share the same lock as well, so their mutations never interleave.
///
/// # Examples
///
/// ```rust,ignore
/// use flatdoc::{doc, DocumentStore};
/// use flatdoc::filter::field;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let store = DocumentStore::builder().file_path("app.json").open()?;
///
/// let users = store.collection("users");
/// let id = users.insert_one(doc!{ "email": "a@x.com", "role": "student" })?;
///
/// let students = users.find(field("role").eq("student"))?;
/// assert_eq!(students.len(), 1);
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct DocumentStore {
    inner: Arc<DocumentStoreInner>,
}

impl DocumentStore {
    /// Creates a builder for configuring and opening a store.
    pub fn builder() -> DocumentStoreBuilder {
        DocumentStoreBuilder::new()
    }

    /// Opens a store on `file_path` with the default settings.
    pub fn open(file_path: impl AsRef<Path>) -> FlatDocResult<DocumentStore> {
        DocumentStoreBuilder::new()
            .file_path(file_path.as_ref())
            .open()
    }

    /// Binds a store to its configuration without touching the disk.
    pub(crate) fn new(config: StoreConfig) -> Self {
        DocumentStore {
            inner: Arc::new(DocumentStoreInner::new(config)),
        }
    }

    /// Creates the backing file if it does not exist yet.
    pub(crate) fn initialize(&self) -> FlatDocResult<()> {
        if self.inner.file_store.exists() {
            return Ok(());
        }
        let _guard = self.inner.file_lock()?.lock();
        self.inner.load_or_create().map(|_| ())
    }

    /// Returns a handle to the named collection.
    ///
    /// Any name is valid. The collection springs into existence in the file on
    /// its first insert; until then it reads as empty.
    pub fn collection(&self, name: &str) -> Collection {
        Collection::new(self.clone(), name)
    }

    /// Loads the entire database from the backing file.
    ///
    /// If the file is absent it is first created with the default collections.
    /// If it cannot be parsed an empty database is returned instead.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or created.
    pub fn read(&self) -> FlatDocResult<Database> {
        if let Some(database) = self.inner.file_store.load()? {
            return Ok(database);
        }

        // re-checked under the lock, another writer may have created it
        let _guard = self.inner.file_lock()?.lock();
        self.inner.load_or_create()
    }

    /// Replaces the backing file with `database`.
    ///
    /// # Errors
    ///
    /// Returns an error if serializing or writing fails; the previous file
    /// contents are left intact in that case.
    pub fn write(&self, database: &Database) -> FlatDocResult<()> {
        let _guard = self.inner.file_lock()?.lock();
        self.inner.file_store.save(database)
    }

    /// Returns the names of all collections present in the file.
    pub fn collection_names(&self) -> FlatDocResult<Vec<String>> {
        Ok(self.read()?.collection_names())
    }

    /// Checks if a collection is present in the file.
    pub fn has_collection(&self, name: &str) -> FlatDocResult<bool> {
        Ok(self.read()?.has_collection(name))
    }

    pub fn file_path(&self) -> &Path {
        self.inner.file_store.path()
    }

    pub fn config(&self) -> &StoreConfig {
        &self.inner.config
    }

    /// Runs one read-modify-write cycle under the file lock.
    ///
    /// `mutation` returns its result and whether the database changed; the
    /// file is rewritten only in the latter case.
    pub(crate) fn mutate<R>(
        &self,
        mutation: impl FnOnce(&mut Database) -> (R, bool),
    ) -> FlatDocResult<R> {
        let _guard = self.inner.file_lock()?.lock();
        let mut database = self.inner.load_or_create()?;
        let (result, changed) = mutation(&mut database);
        if changed {
            self.inner.file_store.save(&database)?;
        }
        Ok(result)
    }
}

struct DocumentStoreInner {
    config: StoreConfig,
    file_store: FileStore,
    lock: OnceCell<LockHandle>,
}

impl DocumentStoreInner {
    fn new(config: StoreConfig) -> Self {
        let file_store = FileStore::new(config.file_path(), config.pretty_print());
        DocumentStoreInner {
            config,
            file_store,
            lock: OnceCell::new(),
        }
    }

    // resolved on first use, the parent directory may not exist before that
    fn file_lock(&self) -> FlatDocResult<&LockHandle> {
        self.lock
            .get_or_try_init(|| FILE_LOCKS.get_lock(self.config.file_path()))
    }

    // caller holds the file lock
    fn load_or_create(&self) -> FlatDocResult<Database> {
        if let Some(database) = self.file_store.load()? {
            return Ok(database);
        }

        let database = Database::with_collections(self.config.default_collections());
        self.file_store.save(&database)?;
        log::info!(
            "Created database file {} with collections {:?}",
            self.file_store.path().display(),
            self.config.default_collections()
        );
        Ok(database)
    }
}
