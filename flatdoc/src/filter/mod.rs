//! Query filters for selecting documents from collections.
//!
//! A filter is a conjunction of field equality conditions: a document matches
//! when every named field equals the expected value. There are no comparison,
//! pattern or nested-field operators.
//!
//! # Creating Filters
//!
//! - `field("role").eq("hr")` - one equality condition
//! - `field("role").eq("hr").and(field("active").eq(true))` - conjunction
//! - `by_id(id)` - match by document identifier
//! - `all()` - match every document
//! - `Filter::from(doc!{ "role": "hr" })` - a query document, as callers of a
//!   document database usually write it
//!
//! # Examples
//!
//! ```rust,ignore
//! use flatdoc::doc;
//! use flatdoc::filter::{all, field};
//!
//! let hr = users.find(field("role").eq("hr"))?;
//! let same = users.find(doc!{ "role": "hr" })?;
//! let everyone = users.find(all())?;
//! ```

mod filter;
mod fluent;

pub use filter::*;
pub use fluent::*;
