use super::*;
use crate::view::{MemoryNotifier, MemoryView};
use shared::Notice;

type TestCart = Cart<MemoryView, MemoryNotifier>;

fn new_cart() -> TestCart {
    Cart::new(MemoryView::new(), MemoryNotifier::new())
}

/// Price given in cents
fn product(id: &str, name: &str, cents: i64, on_sale: bool) -> Arc<Product> {
    Arc::new(Product::new(
        id,
        name,
        Decimal::new(cents, 2),
        "beans",
        format!("{}.jpg", id),
        "",
        on_sale,
    ))
}

fn money(cents: i64) -> Decimal {
    Decimal::new(cents, 2)
}

// ========================================================================
// Scenarios
// ========================================================================

#[test]
fn test_regular_product_over_threshold_then_discount() {
    let mut cart = new_cart();
    let a = product("a", "Grinder", 3000, false);

    cart.add_product(a, 2);
    assert_eq!(cart.subtotal(), money(6000));
    assert_eq!(cart.shipping_cost(), Decimal::ZERO);
    assert_eq!(cart.cart_discount(), Decimal::ZERO);
    assert_eq!(cart.total(), money(6000));

    cart.apply_discount();
    assert_eq!(cart.cart_discount(), money(900));
    assert_eq!(cart.total(), money(5100));
}

#[test]
fn test_empty_cart_still_pays_shipping() {
    let cart = new_cart();
    assert_eq!(cart.subtotal(), Decimal::ZERO);
    assert_eq!(cart.shipping_cost(), money(500));
    assert_eq!(cart.total(), money(500));
    assert_eq!(cart.item_count(), 0);
    assert!(cart.is_empty());
}

#[test]
fn test_on_sale_product_uses_sale_price() {
    let mut cart = new_cart();
    cart.add_product(product("b", "Blend", 1000, true), 1);

    let line = cart.line("b").unwrap();
    assert_eq!(line.unit_price(), money(850));
    assert_eq!(cart.subtotal(), money(850));
    assert_eq!(cart.total(), money(1350));
}

#[test]
fn test_sale_and_cart_discounts_stack() {
    let mut cart = new_cart();
    cart.add_product(product("b", "Blend", 10000, true), 1);
    cart.apply_discount();

    // 100 -> 85 on sale, then 15% of 85 off the cart
    assert_eq!(cart.subtotal(), money(8500));
    assert_eq!(cart.cart_discount(), Decimal::new(1275, 2));
    assert_eq!(cart.total(), Decimal::new(7225, 2));
}

// ========================================================================
// Quantity aggregation
// ========================================================================

#[test]
fn test_repeated_adds_sum_quantities() {
    let mut cart = new_cart();
    let p = product("p", "Mug", 1550, false);

    for q in [1, 3, 2, 5] {
        cart.add_product(Arc::clone(&p), q);
    }

    assert_eq!(cart.lines().len(), 1);
    assert_eq!(cart.quantity_of("p"), Some(11));
    assert_eq!(cart.item_count(), 11);
}

#[test]
fn test_add_order_does_not_change_quantities() {
    let a = product("a", "A", 100, false);
    let b = product("b", "B", 200, false);

    let mut first = new_cart();
    first.add_product(Arc::clone(&a), 2);
    first.add_product(Arc::clone(&b), 1);
    first.add_product(Arc::clone(&a), 3);

    let mut second = new_cart();
    second.add_product(Arc::clone(&b), 1);
    second.add_product(Arc::clone(&a), 3);
    second.add_product(Arc::clone(&a), 2);

    assert_eq!(first.quantity_of("a"), second.quantity_of("a"));
    assert_eq!(first.quantity_of("b"), second.quantity_of("b"));
    assert_eq!(first.subtotal(), second.subtotal());
}

#[test]
fn test_lines_keep_insertion_order() {
    let mut cart = new_cart();
    cart.add_product(product("3", "C", 100, false), 1);
    cart.add_product(product("1", "A", 100, false), 1);
    cart.add_product(product("2", "B", 100, false), 1);
    cart.add_product(product("1", "A", 100, false), 1);

    let ids: Vec<&str> = cart.lines().iter().map(|l| l.product().id()).collect();
    assert_eq!(ids, vec!["3", "1", "2"]);
}

#[test]
fn test_add_zero_quantity_is_ignored() {
    let mut cart = new_cart();
    cart.add_product(product("p", "Mug", 1550, false), 0);

    assert!(cart.is_empty());
    assert_eq!(cart.view().refreshes(), 0);
    assert!(cart.notifier().notices().is_empty());
}

#[test]
fn test_cart_shares_product_with_catalog() {
    let mut cart = new_cart();
    let p = product("p", "Mug", 1550, false);
    cart.add_product(Arc::clone(&p), 1);
    assert!(Arc::ptr_eq(cart.line("p").unwrap().product(), &p));
}

// ========================================================================
// update_quantity / remove_product
// ========================================================================

#[test]
fn test_update_quantity_sets_absolute_value() {
    let mut cart = new_cart();
    cart.add_product(product("p", "Mug", 1000, false), 4);

    cart.update_quantity("p", 2);
    assert_eq!(cart.quantity_of("p"), Some(2));
    assert_eq!(cart.subtotal(), money(2000));
}

#[test]
fn test_update_quantity_non_positive_equals_remove() {
    for n in [0, -1, -50] {
        let mut updated = new_cart();
        updated.add_product(product("p", "Mug", 1000, false), 3);
        updated.add_product(product("q", "Cup", 500, false), 1);
        updated.update_quantity("p", n);

        let mut removed = new_cart();
        removed.add_product(product("p", "Mug", 1000, false), 3);
        removed.add_product(product("q", "Cup", 500, false), 1);
        removed.remove_product("p");

        assert!(updated.line("p").is_none(), "n = {}", n);
        assert_eq!(updated.snapshot(), removed.snapshot());
        assert_eq!(updated.notifier().notices(), removed.notifier().notices());
    }
}

#[test]
fn test_update_quantity_without_notice() {
    let mut cart = new_cart();
    cart.add_product(product("p", "Mug", 1000, false), 1);
    let notices_before = cart.notifier().notices().len();
    let refreshes_before = cart.view().refreshes();

    cart.update_quantity("p", 7);

    assert_eq!(cart.notifier().notices().len(), notices_before);
    assert_eq!(cart.view().refreshes(), refreshes_before + 1);
    assert_eq!(cart.view().last().unwrap().item_count, 7);
}

#[test]
fn test_remove_product_notifies_with_error_style() {
    let mut cart = new_cart();
    cart.add_product(product("p", "Mug", 1000, false), 1);
    cart.remove_product("p");

    assert!(cart.is_empty());
    assert_eq!(
        cart.notifier().last(),
        Some(&Notice::error("Mug removed from cart"))
    );
    assert!(cart.view().last().unwrap().is_empty());
}

#[test]
fn test_increase_and_decrease() {
    let mut cart = new_cart();
    cart.add_product(product("p", "Mug", 1000, false), 1);

    cart.increase("p");
    cart.increase("p");
    assert_eq!(cart.quantity_of("p"), Some(3));

    cart.decrease("p");
    assert_eq!(cart.quantity_of("p"), Some(2));

    cart.decrease("p");
    cart.decrease("p");
    assert!(cart.line("p").is_none());
    assert_eq!(cart.notifier().last(), Some(&Notice::error("Mug removed from cart")));
}

// ========================================================================
// Unknown ids are silent no-ops
// ========================================================================

#[test]
fn test_unknown_id_operations_are_noops() {
    let mut cart = new_cart();
    cart.add_product(product("p", "Mug", 1000, false), 2);
    let before = cart.snapshot();
    let refreshes = cart.view().refreshes();
    let notices = cart.notifier().notices().len();

    cart.remove_product("missing");
    cart.update_quantity("missing", 5);
    cart.update_quantity("missing", 0);
    cart.increase("missing");
    cart.decrease("missing");

    assert_eq!(cart.snapshot(), before);
    assert_eq!(cart.view().refreshes(), refreshes);
    assert_eq!(cart.notifier().notices().len(), notices);
}

#[test]
fn test_operations_on_empty_cart_do_not_panic() {
    let mut cart = new_cart();
    cart.remove_product("x");
    cart.update_quantity("x", -3);
    cart.decrease("x");
    assert!(cart.is_empty());
}

// ========================================================================
// Discount and clear
// ========================================================================

#[test]
fn test_discount_is_zero_until_applied() {
    let mut cart = new_cart();
    cart.add_product(product("a", "A", 1234, false), 3);
    cart.add_product(product("b", "B", 999, true), 2);
    assert_eq!(cart.cart_discount(), Decimal::ZERO);

    cart.apply_discount();
    assert_eq!(cart.cart_discount(), cart.subtotal() * Decimal::new(15, 2));

    // Still exactly 15% after further changes
    cart.update_quantity("a", 1);
    cart.remove_product("b");
    assert_eq!(cart.cart_discount(), cart.subtotal() * Decimal::new(15, 2));
}

#[test]
fn test_apply_discount_is_idempotent() {
    let mut cart = new_cart();
    cart.add_product(product("a", "A", 6000, false), 1);
    cart.apply_discount();
    let total = cart.total();
    cart.apply_discount();

    assert!(cart.discount_applied());
    assert_eq!(cart.total(), total);
    assert_eq!(
        cart.notifier().last(),
        Some(&Notice::success(DISCOUNT_APPLIED_MESSAGE))
    );
}

#[test]
fn test_clear_resets_lines_and_discount() {
    let mut cart = new_cart();
    cart.add_product(product("a", "A", 3000, false), 2);
    cart.apply_discount();

    cart.clear();

    assert!(cart.is_empty());
    assert!(!cart.discount_applied());
    assert_eq!(cart.subtotal(), Decimal::ZERO);
    assert_eq!(cart.cart_discount(), Decimal::ZERO);
    assert_eq!(cart.item_count(), 0);
    assert_eq!(cart.total(), money(500));
    assert_eq!(cart.notifier().last(), Some(&Notice::error(CART_CLEARED_MESSAGE)));

    let snapshot = cart.view().last().unwrap();
    assert!(snapshot.is_empty());
    assert!(!snapshot.discount_applied);
}

// ========================================================================
// Shipping threshold
// ========================================================================

#[test]
fn test_shipping_at_exactly_fifty_is_charged() {
    let mut cart = new_cart();
    cart.add_product(product("a", "A", 2500, false), 2);
    assert_eq!(cart.subtotal(), money(5000));
    assert_eq!(cart.shipping_cost(), money(500));
    assert_eq!(cart.total(), money(5500));
}

#[test]
fn test_shipping_just_above_fifty_is_free() {
    let mut cart = new_cart();
    cart.add_product(product("a", "A", 5001, false), 1);
    assert_eq!(cart.shipping_cost(), Decimal::ZERO);
}

#[test]
fn test_shipping_uses_pre_discount_subtotal() {
    let mut cart = new_cart();
    cart.add_product(product("a", "A", 5500, false), 1);
    cart.apply_discount();

    // 55 - 8.25 = 46.75 to pay, but shipping follows the subtotal
    assert_eq!(cart.shipping_cost(), Decimal::ZERO);
    assert_eq!(cart.total(), Decimal::new(4675, 2));
}

// ========================================================================
// View refresh contract
// ========================================================================

#[test]
fn test_every_mutation_refreshes_view() {
    let mut cart = new_cart();
    let p = product("p", "Mug", 1000, true);

    cart.add_product(Arc::clone(&p), 1);
    assert_eq!(cart.view().refreshes(), 1);
    cart.add_product(Arc::clone(&p), 1);
    assert_eq!(cart.view().refreshes(), 2);
    cart.update_quantity("p", 5);
    assert_eq!(cart.view().refreshes(), 3);
    cart.apply_discount();
    assert_eq!(cart.view().refreshes(), 4);
    cart.remove_product("p");
    assert_eq!(cart.view().refreshes(), 5);
    cart.clear();
    assert_eq!(cart.view().refreshes(), 6);
}

#[test]
fn test_snapshot_carries_lines_and_totals() {
    let mut cart = new_cart();
    cart.add_product(product("b", "Blend", 1000, true), 2);
    cart.add_product(product("m", "Mug", 1550, false), 1);

    let snapshot = cart.view().last().unwrap().clone();
    assert_eq!(snapshot, cart.snapshot());
    assert_eq!(snapshot.item_count, 3);

    let blend = snapshot.line("b").unwrap();
    assert_eq!(blend.name, "Blend");
    assert_eq!(blend.image, "b.jpg");
    assert_eq!(blend.unit_price, money(850));
    assert_eq!(blend.line_total, money(1700));

    assert_eq!(snapshot.totals.subtotal, money(3250));
    assert_eq!(snapshot.totals.discount, Decimal::ZERO);
    assert_eq!(snapshot.totals.shipping, money(500));
    assert_eq!(snapshot.totals.total, money(3750));
}

#[test]
fn test_add_notifies_success_with_product_name() {
    let mut cart = new_cart();
    cart.add_product(product("p", "Tambo Mug", 1000, false), 1);
    assert_eq!(
        cart.notifier().notices(),
        &[Notice::success("Tambo Mug added to cart")]
    );
}

#[test]
fn test_subtotal_matches_line_sum() {
    let mut cart = new_cart();
    let items = [("a", 2499, true, 3), ("b", 1999, false, 1), ("c", 4500, false, 2)];
    for (id, cents, on_sale, qty) in items {
        cart.add_product(product(id, id, cents, on_sale), qty);
    }

    let expected: Decimal = cart
        .lines()
        .iter()
        .map(|l| l.product().effective_price(Decimal::from(15)) * Decimal::from(l.quantity()))
        .sum();
    assert_eq!(cart.subtotal(), expected);
    assert!(cart.subtotal() >= Decimal::ZERO);
}

#[test]
fn test_many_cent_lines_sum_exactly() {
    let mut cart = new_cart();
    for i in 0..1000 {
        cart.add_product(product(&format!("p{}", i), "Sample", 1, false), 1);
    }
    assert_eq!(cart.item_count(), 1000);
    assert_eq!(cart.subtotal(), Decimal::from(10));
    assert_eq!(cart.shipping_cost(), money(500));
    assert_eq!(cart.total(), Decimal::from(15));
}

// ========================================================================
// Overflow
// ========================================================================

#[test]
fn test_huge_price_saturates_instead_of_panicking() {
    let mut cart = new_cart();
    let p = Arc::new(Product::new(
        "x",
        "Gold",
        Decimal::from_str_exact("10000000000000000000000000000").unwrap(),
        "beans",
        "x.jpg",
        "",
        false,
    ));

    cart.add_product(Arc::clone(&p), 10);
    cart.add_product(product("y", "Filter", 1000, false), 1);
    assert_eq!(cart.line("x").unwrap().line_total(), Decimal::MAX);
    assert_eq!(cart.subtotal(), Decimal::MAX);
    assert_eq!(cart.shipping_cost(), Decimal::ZERO);

    cart.apply_discount();
    assert!(cart.cart_discount() > Decimal::ZERO);
    assert_eq!(cart.total(), cart.subtotal() - cart.cart_discount());
    assert_eq!(cart.snapshot().totals.subtotal, Decimal::MAX);
    assert_eq!(cart.view().refreshes(), 3);
}

#[test]
fn test_repeated_add_saturates_quantity() {
    let mut cart = new_cart();
    let a = product("a", "Beans", 100, false);

    cart.add_product(Arc::clone(&a), u32::MAX);
    cart.add_product(a, 5);
    assert_eq!(cart.quantity_of("a"), Some(u32::MAX));
    assert_eq!(cart.lines().len(), 1);
}

#[test]
fn test_update_quantity_clamps_to_u32_max() {
    let mut cart = new_cart();
    cart.add_product(product("a", "Beans", 100, false), 1);

    cart.update_quantity("a", i64::from(u32::MAX) + 1);
    assert_eq!(cart.quantity_of("a"), Some(u32::MAX));

    cart.update_quantity("a", i64::MAX);
    assert_eq!(cart.quantity_of("a"), Some(u32::MAX));
}

#[test]
fn test_item_count_saturates_across_lines() {
    let mut cart = new_cart();
    cart.add_product(product("a", "Beans", 100, false), u32::MAX);
    cart.add_product(product("b", "Mug", 100, false), 7);
    assert_eq!(cart.item_count(), u32::MAX);
    assert_eq!(cart.snapshot().item_count, u32::MAX);
}
