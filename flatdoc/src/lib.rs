//! # flatdoc - Embedded JSON Document Store
//!
//! flatdoc is an in-process document store that keeps all of its data in one
//! JSON file. It offers a collection-oriented API in the style of a document
//! database without running a database server.
//!
//! ## Key Features
//!
//! - **Embedded**: No separate server process, no network protocol
//! - **Schemaless**: Documents are loosely typed JSON objects
//! - **Document-database vocabulary**: equality queries, `$set` updates,
//!   generated `_id` identifiers
//! - **Durable writes**: every mutation atomically replaces the backing file
//! - **Thread-safe**: mutations are serialized per backing file
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use flatdoc::doc;
//! use flatdoc::filter::{by_id, field};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // The process-wide store, backed by `database.json`
//! let store = flatdoc::get_store();
//!
//! let users = store.collection("users");
//! let id = users.insert_one(doc!{ "email": "a@x.com", "role": "student" })?;
//!
//! users.update_one(field("email").eq("a@x.com"), &doc!{ "$set": { "name": "Alice" } })?;
//! let alice = users.find_one(by_id(&id))?;
//!
//! let removed = users.delete_many(doc!{ "role": "student" })?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Module Organization
//!
//! - [`collection`] - Documents, identifiers and collection operations
//! - [`common`] - Shared constants, locks and value helpers
//! - [`errors`] - Error types and result definitions
//! - [`filter`] - Equality query filters
//! - [`store`] - The backing file and its in-memory form

use once_cell::sync::{Lazy, OnceCell};

pub mod collection;
pub mod common;
mod document_store;
pub mod errors;
pub mod filter;
pub mod store;
mod store_builder;
mod store_config;

pub use document_store::DocumentStore;
pub use serde_json;
pub use store_builder::DocumentStoreBuilder;
pub use store_config::StoreConfig;

use crate::common::LockRegistry;
use crate::errors::{ErrorKind, FlatDocError, FlatDocResult};

pub(crate) static FILE_LOCKS: Lazy<LockRegistry> = Lazy::new(LockRegistry::new);

static STORE: OnceCell<DocumentStore> = OnceCell::new();

/// Returns the process-wide store.
///
/// The store is created on first call with the default configuration
/// (`database.json` in the working directory) unless [`init_store`] installed
/// a different one first. It lives for the rest of the process. The backing
/// file is created on first use.
pub fn get_store() -> DocumentStore {
    STORE
        .get_or_init(|| DocumentStore::new(StoreConfig::default()))
        .clone()
}

/// Opens a store from `builder` and installs it as the process-wide store.
///
/// # Errors
///
/// Returns `StoreAlreadyInitialized` if the process-wide store already exists,
/// or the error raised while opening the store.
pub fn init_store(builder: DocumentStoreBuilder) -> FlatDocResult<DocumentStore> {
    if STORE.get().is_some() {
        return Err(already_initialized());
    }

    let store = builder.open()?;
    STORE
        .set(store.clone())
        .map_err(|_| already_initialized())?;
    log::info!("Process-wide store bound to {}", store.file_path().display());
    Ok(store)
}

fn already_initialized() -> FlatDocError {
    log::error!("The process-wide store is already initialized");
    FlatDocError::new(
        "The process-wide store is already initialized",
        ErrorKind::StoreAlreadyInitialized,
    )
}
