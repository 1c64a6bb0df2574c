use std::path::PathBuf;

use crate::errors::{FlatDocError, FlatDocResult};
use crate::store_config::StoreConfig;
use crate::DocumentStore;

/// Builder for opening a [`DocumentStore`].
///
/// Configuration errors are captured as they happen and returned from
/// [`DocumentStoreBuilder::open`], so the chain itself never fails.
///
/// # Examples
///
/// ```rust,ignore
/// use flatdoc::DocumentStore;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let store = DocumentStore::builder()
///     .file_path("data/app.json")
///     .default_collections(&["users", "job_roles", "reports"])
///     .open()?;
/// # Ok(())
/// # }
/// ```
#[derive(Default)]
pub struct DocumentStoreBuilder {
    error: Option<FlatDocError>,
    config: StoreConfig,
}

impl DocumentStoreBuilder {
    /// Creates a builder with the default configuration.
    pub fn new() -> Self {
        DocumentStoreBuilder {
            error: None,
            config: StoreConfig::new(),
        }
    }

    /// Sets the backing file path. An empty path is reported by `open()`.
    pub fn file_path(mut self, file_path: impl Into<PathBuf>) -> Self {
        if self.error.is_none() {
            if let Err(e) = self.config.set_file_path(file_path) {
                self.error = Some(e);
            }
        }
        self
    }

    /// Sets the collections created empty along with a new backing file.
    pub fn default_collections<S: AsRef<str>>(mut self, names: &[S]) -> Self {
        self.config.set_default_collections(names);
        self
    }

    /// Chooses indented (`true`, the default) or compact output.
    pub fn pretty_print(mut self, pretty_print: bool) -> Self {
        self.config.set_pretty_print(pretty_print);
        self
    }

    /// Returns the configuration collected so far.
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Opens the store, creating the backing file if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns the first configuration error, or the I/O error raised while
    /// creating the backing file.
    pub fn open(self) -> FlatDocResult<DocumentStore> {
        if let Some(error) = self.error {
            return Err(error);
        }
        let store = DocumentStore::new(self.config);
        store.initialize()?;
        Ok(store)
    }
}
