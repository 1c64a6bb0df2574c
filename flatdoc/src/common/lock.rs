use parking_lot::{Mutex, MutexGuard, RwLock};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::errors::{ErrorKind, FlatDocError, FlatDocResult};

/// A handle to a mutex guarding one backing file.
///
/// Clones share the same mutex, so every holder of a handle for the same file
/// serializes against every other.
#[derive(Clone)]
pub struct LockHandle {
    lock: Arc<Mutex<()>>,
}

impl LockHandle {
    /// Creates a new, unshared lock handle.
    pub fn new() -> Self {
        LockHandle {
            lock: Arc::new(Mutex::new(())),
        }
    }

    /// Acquires the lock, blocking until it is available.
    pub fn lock(&self) -> MutexGuard<'_, ()> {
        self.lock.lock()
    }

    /// Returns `true` if both handles guard the same mutex.
    pub fn same_lock(&self, other: &LockHandle) -> bool {
        Arc::ptr_eq(&self.lock, &other.lock)
    }
}

impl Default for LockHandle {
    fn default() -> Self {
        Self::new()
    }
}

/// Registry of file locks keyed by canonical path.
///
/// Every [`crate::DocumentStore`] bound to the same backing file obtains the
/// same [`LockHandle`] from here, which keeps read-modify-write cycles
/// exclusive even when several store instances in one process point at one
/// file through different spellings of its path (`./db.json`, `data/../db.json`,
/// a symlinked directory).
///
/// # Examples
///
/// ```
/// use flatdoc::common::LockRegistry;
/// let registry = LockRegistry::new();
/// let dir = std::env::temp_dir();
/// let first = registry.get_lock(dir.join("db.json")).unwrap();
/// let second = registry.get_lock(dir.join(".").join("db.json")).unwrap();
/// assert!(first.same_lock(&second));
/// {
///     let _guard = first.lock();
/// } // lock is held while _guard is in scope
/// ```
#[derive(Clone, Default)]
pub struct LockRegistry {
    locks: Arc<RwLock<HashMap<PathBuf, LockHandle>>>,
}

impl LockRegistry {
    /// Creates a new empty lock registry.
    pub fn new() -> Self {
        LockRegistry {
            locks: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Gets the lock for the given file, creating it on first request.
    ///
    /// The parent directory is created if missing and then canonicalized, so
    /// every path that reaches the same file yields the same lock. The file
    /// itself need not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the path names no file or its directory cannot be
    /// created or resolved.
    pub fn get_lock(&self, path: impl AsRef<Path>) -> FlatDocResult<LockHandle> {
        let key = lock_key(path.as_ref())?;
        if let Some(handle) = self.locks.read().get(&key) {
            return Ok(handle.clone());
        }

        let mut locks = self.locks.write();
        Ok(locks.entry(key).or_default().clone())
    }

    /// Returns the number of files with a registered lock.
    pub fn len(&self) -> usize {
        self.locks.read().len()
    }

    /// Returns `true` if no lock has been registered yet.
    pub fn is_empty(&self) -> bool {
        self.locks.read().is_empty()
    }
}

fn lock_key(path: &Path) -> FlatDocResult<PathBuf> {
    let file_name = path.file_name().ok_or_else(|| {
        log::error!("Database path {} has no file name", path.display());
        FlatDocError::new("Database path must name a file", ErrorKind::ValidationError)
    })?;

    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent)?;
    Ok(fs::canonicalize(parent)?.join(file_name))
}
