//! Configuration for a document store.

use std::path::{Path, PathBuf};

use crate::common::{DEFAULT_COLLECTIONS, DEFAULT_FILE_PATH};
use crate::errors::{ErrorKind, FlatDocError, FlatDocResult};

/// Settings of a [`crate::DocumentStore`].
///
/// The backing file path is the only setting an application normally changes.
/// The defaults match a fresh store: `database.json` in the working
/// directory, `users` and `job_roles` pre-declared, pretty-printed output.
#[derive(Clone, Debug)]
pub struct StoreConfig {
    file_path: PathBuf,
    default_collections: Vec<String>,
    pretty_print: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl StoreConfig {
    /// Creates a configuration with default values.
    pub fn new() -> Self {
        StoreConfig {
            file_path: PathBuf::from(DEFAULT_FILE_PATH),
            default_collections: DEFAULT_COLLECTIONS.iter().map(|s| s.to_string()).collect(),
            pretty_print: true,
        }
    }

    /// Path of the backing file.
    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    /// Collections created empty along with a new backing file.
    pub fn default_collections(&self) -> &[String] {
        &self.default_collections
    }

    /// Whether the backing file is written indented.
    pub fn pretty_print(&self) -> bool {
        self.pretty_print
    }

    /// Sets the backing file path.
    ///
    /// # Errors
    ///
    /// Returns error if the path is empty.
    pub fn set_file_path(&mut self, file_path: impl Into<PathBuf>) -> FlatDocResult<()> {
        let file_path = file_path.into();
        if file_path.as_os_str().is_empty() {
            log::error!("Backing file path cannot be empty");
            return Err(FlatDocError::new(
                "Backing file path cannot be empty",
                ErrorKind::ValidationError,
            ));
        }
        self.file_path = file_path;
        Ok(())
    }

    /// Sets the collections created along with a new backing file.
    pub fn set_default_collections<S: AsRef<str>>(&mut self, names: &[S]) {
        self.default_collections = names.iter().map(|s| s.as_ref().to_string()).collect();
    }

    pub fn set_pretty_print(&mut self, pretty_print: bool) {
        self.pretty_print = pretty_print;
    }
}
