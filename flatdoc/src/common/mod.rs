//! Shared types and helpers used across the store.

mod constants;
mod lock;
mod sort_order;
mod type_utils;
mod value_utils;

pub use constants::*;
pub use lock::*;
pub use sort_order::*;
pub use type_utils::*;
pub use value_utils::*;
