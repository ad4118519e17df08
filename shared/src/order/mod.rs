//! Cart and order view types
//!
//! - Snapshots: the computed cart state handed to view renderers after
//!   every mutation
//! - Receipts: the record produced when a non-empty cart is checked out

pub mod snapshot;
pub mod types;

// Re-exports
pub use snapshot::{CartLineView, CartSnapshot, CartTotals};
pub use types::OrderReceipt;
