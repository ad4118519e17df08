//! Order receipt

use super::snapshot::{CartLineView, CartTotals};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Record of a placed order
///
/// Built from the cart at checkout time; the cart itself is cleared
/// shortly afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderReceipt {
    pub order_id: Uuid,
    pub placed_at: DateTime<Utc>,
    pub lines: Vec<CartLineView>,
    pub item_count: u32,
    pub totals: CartTotals,
}

impl OrderReceipt {
    pub fn new(lines: Vec<CartLineView>, item_count: u32, totals: CartTotals) -> Self {
        Self {
            order_id: Uuid::new_v4(),
            placed_at: Utc::now(),
            lines,
            item_count,
            totals,
        }
    }
}
