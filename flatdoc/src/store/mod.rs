//! File-backed persistence.
//!
//! The whole database lives in one JSON file: an object whose keys are
//! collection names and whose values are arrays of documents. [`FileStore`]
//! loads and atomically replaces that file; [`Database`] is its in-memory form.
//!
//! Locking is not handled here. [`crate::DocumentStore`] serializes
//! read-modify-write cycles around these calls.

mod database;
mod file_store;

pub use database::*;
pub use file_store::*;
