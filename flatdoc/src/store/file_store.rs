use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{ErrorKind as IoErrorKind, Write};
use std::path::{Path, PathBuf};

use crate::common::TEMP_FILE_EXTENSION;
use crate::errors::{ErrorKind, FlatDocError, FlatDocResult};
use crate::store::Database;

/// Loads and saves a [`Database`] as one JSON file.
///
/// Saves never modify the target in place: the new contents go to a sibling
/// temporary file which is flushed to disk and then renamed over the target,
/// so a reader sees either the old or the new file, never a partial one. On
/// unix the parent directory is synced after the rename, so a saved database
/// survives a crash.
#[derive(Clone, Debug)]
pub struct FileStore {
    path: PathBuf,
    pretty_print: bool,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>, pretty_print: bool) -> Self {
        FileStore {
            path: path.into(),
            pretty_print,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    /// Loads the database from disk.
    ///
    /// Returns `Ok(None)` when the file does not exist. A file that exists but
    /// cannot be parsed yields an empty database; other read failures are
    /// returned as errors.
    pub fn load(&self) -> FlatDocResult<Option<Database>> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == IoErrorKind::NotFound => return Ok(None),
            Err(err) => {
                log::error!("Failed to read database file {}: {}", self.path.display(), err);
                return Err(err.into());
            }
        };

        match serde_json::from_slice::<Database>(&bytes) {
            Ok(database) => Ok(Some(database)),
            Err(err) => {
                log::error!(
                    "Database file {} is malformed ({}), using an empty database",
                    self.path.display(),
                    err
                );
                Ok(Some(Database::new()))
            }
        }
    }

    /// Replaces the file contents with the serialized database.
    pub fn save(&self, database: &Database) -> FlatDocResult<()> {
        let bytes = if self.pretty_print {
            serde_json::to_vec_pretty(database)?
        } else {
            serde_json::to_vec(database)?
        };

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let temp_path = self.temp_path()?;
        if let Err(err) = write_synced(&temp_path, &bytes) {
            let _ = fs::remove_file(&temp_path);
            log::error!("Failed to write {}: {}", temp_path.display(), err);
            return Err(FlatDocError::new_with_cause(
                &format!("Failed to persist database to {}", self.path.display()),
                err.kind().clone(),
                err,
            ));
        }

        if let Err(err) = fs::rename(&temp_path, &self.path) {
            let _ = fs::remove_file(&temp_path);
            log::error!("Failed to replace {}: {}", self.path.display(), err);
            let cause = FlatDocError::from(err);
            return Err(FlatDocError::new_with_cause(
                &format!("Failed to persist database to {}", self.path.display()),
                cause.kind().clone(),
                cause,
            ));
        }

        // the rename itself is durable only once the directory entry is synced
        if let Err(err) = self.sync_parent_dir() {
            log::error!("Failed to sync directory of {}: {}", self.path.display(), err);
            return Err(err);
        }
        Ok(())
    }

    #[cfg(unix)]
    fn sync_parent_dir(&self) -> FlatDocResult<()> {
        let parent = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        File::open(parent)?.sync_all()?;
        Ok(())
    }

    // directories cannot be opened for syncing on other platforms
    #[cfg(not(unix))]
    fn sync_parent_dir(&self) -> FlatDocResult<()> {
        Ok(())
    }

    fn temp_path(&self) -> FlatDocResult<PathBuf> {
        let file_name = self.path.file_name().ok_or_else(|| {
            log::error!("Database path {} has no file name", self.path.display());
            FlatDocError::new("Database path must name a file", ErrorKind::ValidationError)
        })?;

        let mut temp_name = OsString::from(file_name);
        temp_name.push(".");
        temp_name.push(TEMP_FILE_EXTENSION);
        Ok(self.path.with_file_name(temp_name))
    }
}

fn write_synced(path: &Path, bytes: &[u8]) -> FlatDocResult<()> {
    let mut file = File::create(path)?;
    file.write_all(bytes)?;
    file.sync_all()?;
    Ok(())
}
