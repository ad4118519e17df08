//! Checkout flow
//!
//! Placing an order is immediate; the follow-up steps (a "processing"
//! notice, then emptying the cart) are deferred and driven by the session.

use shared::{OrderReceipt, Severity};

use crate::cart::Cart;
use crate::view::{Notifier, ViewRenderer};

pub const ORDER_PLACED_MESSAGE: &str = "Order placed successfully! We will contact you soon.";
pub const ORDER_PROCESSING_MESSAGE: &str = "Your order is being processed...";
pub const EMPTY_CART_MESSAGE: &str = "Your cart is empty";

#[derive(Debug, Clone, PartialEq)]
pub enum CheckoutOutcome {
    /// Order accepted; follow-ups should be scheduled
    Placed(OrderReceipt),
    /// Nothing to order
    EmptyCart,
}

/// Place an order for the current cart contents
///
/// The cart is left untouched; clearing it is one of the deferred steps.
pub fn place_order<V: ViewRenderer, N: Notifier>(cart: &mut Cart<V, N>) -> CheckoutOutcome {
    if cart.is_empty() {
        tracing::info!("Checkout rejected, cart is empty");
        cart.notifier_mut().notify(EMPTY_CART_MESSAGE, Severity::Error);
        return CheckoutOutcome::EmptyCart;
    }

    let snapshot = cart.snapshot();
    let receipt = OrderReceipt::new(snapshot.lines, snapshot.item_count, snapshot.totals);
    tracing::info!(
        order_id = %receipt.order_id,
        items = receipt.item_count,
        total = %receipt.totals.total,
        "Order placed"
    );

    cart.view_mut().show_receipt(&receipt);
    cart.notifier_mut().notify(ORDER_PLACED_MESSAGE, Severity::Success);
    CheckoutOutcome::Placed(receipt)
}

/// First deferred step: tell the customer the order is moving
pub fn announce_processing<V: ViewRenderer, N: Notifier>(cart: &mut Cart<V, N>) {
    cart.notifier_mut().notify(ORDER_PROCESSING_MESSAGE, Severity::Success);
}

/// Final deferred step: empty the cart
pub fn complete<V: ViewRenderer, N: Notifier>(cart: &mut Cart<V, N>) {
    cart.clear();
}
