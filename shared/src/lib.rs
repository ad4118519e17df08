//! Shared types for the storefront
//!
//! Types that cross the boundary between the cart engine and whatever
//! presents it: the product model, the cart snapshot handed to view
//! renderers, order receipts and user-facing notices.

pub mod message;
pub mod models;
pub mod order;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use message::{Notice, Severity};
pub use models::Product;
pub use order::{CartLineView, CartSnapshot, CartTotals, OrderReceipt};
