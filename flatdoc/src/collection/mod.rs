//! Collections and documents.
//!
//! A [`Document`] is an ordered map of field names to JSON values. A
//! [`Collection`] is a named handle onto one array of documents in the
//! backing file; it supports `find_one`, `find`, `insert_one`, `update_one`
//! and `delete_many`.
//!
//! ```rust,ignore
//! use flatdoc::doc;
//! use flatdoc::filter::by_id;
//!
//! let users = store.collection("users");
//!
//! let id = users.insert_one(doc!{ "email": "a@x.com", "role": "student" })?;
//! users.update_one(doc!{ "email": "a@x.com" }, &doc!{ "$set": { "name": "Alice" } })?;
//!
//! let alice = users.find_one(by_id(&id))?;
//! let removed = users.delete_many(doc!{ "role": "student" })?;
//! ```
//!
//! # Document IDs
//!
//! Every stored document has a string `_id` field. If a document is inserted
//! without one, a random UUID is assigned. Identifiers are never changed
//! after insertion; `$set` of `_id` is ignored.

mod collection;
mod document;
mod document_id;
mod find_options;
mod update_operators;

pub use collection::*;
pub use document::*;
pub use document_id::*;
pub use find_options::*;
pub use update_operators::*;
