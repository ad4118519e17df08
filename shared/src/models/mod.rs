//! Data models
//!
//! Catalog entries are immutable once loaded; the cart only ever holds
//! shared references to them.

pub mod product;

// Re-exports
pub use product::*;
