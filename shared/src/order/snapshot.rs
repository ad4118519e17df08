//! Cart snapshot - computed state handed to view renderers
//!
//! A snapshot is a plain value: renderers may keep it, serialize it or
//! drop it without touching the cart it came from.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The four derived cart amounts
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct CartTotals {
    /// Sum of line totals (on-sale pricing included)
    pub subtotal: Decimal,
    /// Session-wide cart discount
    pub discount: Decimal,
    /// Shipping fee (zero above the free-shipping threshold)
    pub shipping: Decimal,
    /// subtotal - discount + shipping
    pub total: Decimal,
}

/// One cart line as displayed
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CartLineView {
    pub product_id: String,
    pub name: String,
    pub image: String,
    /// Effective unit price (after on-sale discount)
    pub unit_price: Decimal,
    pub quantity: u32,
    /// unit_price * quantity
    pub line_total: Decimal,
}

/// Cart snapshot
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct CartSnapshot {
    /// Lines in insertion order
    pub lines: Vec<CartLineView>,
    /// Sum of quantities across all lines
    pub item_count: u32,
    /// Whether the session-wide discount is active
    pub discount_applied: bool,
    pub totals: CartTotals,
}

impl CartSnapshot {
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn line(&self, product_id: &str) -> Option<&CartLineView> {
        self.lines.iter().find(|l| l.product_id == product_id)
    }
}
