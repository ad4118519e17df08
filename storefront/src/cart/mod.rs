//! Shopping cart
//!
//! Holds `(product, quantity)` lines keyed by product id and the
//! session-wide discount flag. Every mutation ends with a view refresh;
//! add, remove, clear and discount activation also post a notice.
//!
//! Totals are derived on demand from the lines:
//!
//! ```text
//! subtotal = Σ sale_price × quantity
//! discount = subtotal × 15%            (only once the discount is applied)
//! shipping = 0 if subtotal > 50 else 5
//! total    = subtotal - discount + shipping
//! ```

pub mod money;

#[cfg(test)]
mod tests;

use rust_decimal::Decimal;
use shared::{CartLineView, CartSnapshot, CartTotals, Product, Severity};
use std::sync::Arc;

use crate::view::{Notifier, ViewRenderer};
use money::{CART_DISCOUNT_PERCENT, percent_of, shipping_for};

pub const DISCOUNT_APPLIED_MESSAGE: &str = "Discount applied! 15% off your purchase";
pub const CART_CLEARED_MESSAGE: &str = "Cart cleared";

/// One product in the cart
///
/// `quantity` is always at least 1; a line that would drop to zero is
/// removed instead.
#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    product: Arc<Product>,
    quantity: u32,
}

impl CartLine {
    pub fn product(&self) -> &Arc<Product> {
        &self.product
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Effective unit price (on-sale discount included)
    pub fn unit_price(&self) -> Decimal {
        self.product.sale_price()
    }

    /// Saturates at `Decimal::MAX`
    pub fn line_total(&self) -> Decimal {
        self.unit_price().saturating_mul(Decimal::from(self.quantity))
    }

    fn to_view(&self) -> CartLineView {
        CartLineView {
            product_id: self.product.id().to_string(),
            name: self.product.name().to_string(),
            image: self.product.image().to_string(),
            unit_price: self.unit_price(),
            quantity: self.quantity,
            line_total: self.line_total(),
        }
    }
}

/// Shopping cart bound to a view renderer and a notifier
pub struct Cart<V, N> {
    /// Insertion order is kept for display
    lines: Vec<CartLine>,
    discount_applied: bool,
    view: V,
    notifier: N,
}

impl<V: ViewRenderer, N: Notifier> Cart<V, N> {
    pub fn new(view: V, notifier: N) -> Self {
        Self {
            lines: Vec::new(),
            discount_applied: false,
            view,
            notifier,
        }
    }

    // ========== Mutations ==========

    /// Add `quantity` units, merging into an existing line
    pub fn add_product(&mut self, product: Arc<Product>, quantity: u32) {
        if quantity == 0 {
            tracing::debug!(product_id = %product.id(), "Ignoring add with zero quantity");
            return;
        }

        let message = format!("{} added to cart", product.name());
        match self.position(product.id()) {
            Some(idx) => {
                let line = &mut self.lines[idx];
                line.quantity = line.quantity.saturating_add(quantity);
                tracing::debug!(product_id = %product.id(), quantity = line.quantity, "Cart line incremented");
            }
            None => {
                tracing::debug!(product_id = %product.id(), quantity, "Cart line added");
                self.lines.push(CartLine { product, quantity });
            }
        }

        self.refresh();
        self.notifier.notify(&message, Severity::Success);
    }

    /// Remove the line for `id`; unknown ids are ignored
    pub fn remove_product(&mut self, id: &str) {
        let Some(idx) = self.position(id) else {
            tracing::debug!(product_id = %id, "Remove ignored, product not in cart");
            return;
        };

        let line = self.lines.remove(idx);
        tracing::debug!(product_id = %id, "Cart line removed");
        self.refresh();
        self.notifier.notify(
            &format!("{} removed from cart", line.product.name()),
            Severity::Error,
        );
    }

    /// Set the quantity of a line to exactly `new_quantity`
    ///
    /// Zero or negative removes the line. Unknown ids are ignored.
    pub fn update_quantity(&mut self, id: &str, new_quantity: i64) {
        if new_quantity <= 0 {
            self.remove_product(id);
            return;
        }

        let Some(idx) = self.position(id) else {
            tracing::debug!(product_id = %id, "Quantity update ignored, product not in cart");
            return;
        };

        let quantity = u32::try_from(new_quantity).unwrap_or(u32::MAX);
        self.lines[idx].quantity = quantity;
        tracing::debug!(product_id = %id, quantity, "Cart line quantity set");
        self.refresh();
    }

    /// One more unit of an existing line
    pub fn increase(&mut self, id: &str) {
        if let Some(q) = self.quantity_of(id) {
            self.update_quantity(id, i64::from(q) + 1);
        }
    }

    /// One unit less; the line goes away when it reaches zero
    pub fn decrease(&mut self, id: &str) {
        if let Some(q) = self.quantity_of(id) {
            self.update_quantity(id, i64::from(q) - 1);
        }
    }

    /// Empty the cart and reset the discount
    pub fn clear(&mut self) {
        self.lines.clear();
        self.discount_applied = false;
        tracing::info!("Cart cleared");
        self.refresh();
        self.notifier.notify(CART_CLEARED_MESSAGE, Severity::Error);
    }

    /// Activate the session-wide discount (idempotent)
    pub fn apply_discount(&mut self) {
        self.discount_applied = true;
        tracing::info!("Cart discount applied");
        self.refresh();
        self.notifier.notify(DISCOUNT_APPLIED_MESSAGE, Severity::Success);
    }

    /// Push the current state to the view
    pub fn refresh(&mut self) {
        let snapshot = self.snapshot();
        self.view.refresh(&snapshot);
    }

    // ========== Derived amounts ==========

    /// Σ effective unit price × quantity
    ///
    /// Independent of the cart discount flag.
    pub fn subtotal(&self) -> Decimal {
        self.lines
            .iter()
            .map(CartLine::line_total)
            .fold(Decimal::ZERO, Decimal::saturating_add)
    }

    /// 15% of the subtotal once the discount is applied, zero before
    ///
    /// Stacks on top of on-sale pricing already in the subtotal.
    pub fn cart_discount(&self) -> Decimal {
        if !self.discount_applied {
            return Decimal::ZERO;
        }
        percent_of(self.subtotal(), CART_DISCOUNT_PERCENT)
    }

    pub fn shipping_cost(&self) -> Decimal {
        shipping_for(self.subtotal())
    }

    pub fn total(&self) -> Decimal {
        self.totals().total
    }

    pub fn totals(&self) -> CartTotals {
        let subtotal = self.subtotal();
        let discount = self.cart_discount();
        let shipping = self.shipping_cost();
        CartTotals {
            subtotal,
            discount,
            shipping,
            total: subtotal.saturating_sub(discount).saturating_add(shipping),
        }
    }

    // ========== Read-only access ==========

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn line(&self, id: &str) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.product.id() == id)
    }

    pub fn quantity_of(&self, id: &str) -> Option<u32> {
        self.line(id).map(CartLine::quantity)
    }

    /// Total number of units across all lines
    pub fn item_count(&self) -> u32 {
        self.lines
            .iter()
            .fold(0u32, |acc, l| acc.saturating_add(l.quantity))
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn discount_applied(&self) -> bool {
        self.discount_applied
    }

    pub fn snapshot(&self) -> CartSnapshot {
        CartSnapshot {
            lines: self.lines.iter().map(CartLine::to_view).collect(),
            item_count: self.item_count(),
            discount_applied: self.discount_applied,
            totals: self.totals(),
        }
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn notifier_mut(&mut self) -> &mut N {
        &mut self.notifier
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.lines.iter().position(|l| l.product.id() == id)
    }
}
