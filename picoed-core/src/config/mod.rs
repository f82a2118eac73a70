//! Configuration types
//!
//! Board-agnostic configuration structures, optionally persisted as
//! postcard binary data.

pub mod types;

pub use types::*;
