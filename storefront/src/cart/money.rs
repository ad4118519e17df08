//! Money calculation utilities using rust_decimal for precision
//!
//! All cart arithmetic is done on exact `Decimal` values. Rounding to
//! cents only happens when an amount is presented. Products and sums
//! saturate at `Decimal::MAX` instead of overflowing.

use rust_decimal::prelude::*;

/// Rounding strategy for monetary values (2 decimal places, half-up)
const DECIMAL_PLACES: u32 = 2;

/// Session-wide cart discount (15%)
pub const CART_DISCOUNT_PERCENT: Decimal = Decimal::from_parts(15, 0, 0, false, 0);

/// Subtotal above which shipping is free (exclusive: exactly 50 still pays)
pub const FREE_SHIPPING_THRESHOLD: Decimal = Decimal::from_parts(50, 0, 0, false, 0);

/// Flat shipping fee charged at or below the threshold
pub const FLAT_SHIPPING_FEE: Decimal = Decimal::from_parts(5, 0, 0, false, 0);

/// `percent`% of `amount`
///
/// Divides first when the exact product does not fit.
#[inline]
pub fn percent_of(amount: Decimal, percent: Decimal) -> Decimal {
    match amount.checked_mul(percent) {
        Some(scaled) => scaled / Decimal::ONE_HUNDRED,
        None => (amount / Decimal::ONE_HUNDRED).saturating_mul(percent),
    }
}

/// Shipping cost for a given subtotal
pub fn shipping_for(subtotal: Decimal) -> Decimal {
    if subtotal > FREE_SHIPPING_THRESHOLD {
        Decimal::ZERO
    } else {
        FLAT_SHIPPING_FEE
    }
}

/// Round to cents, half away from zero
#[inline]
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// Format as `$12.34`
pub fn format_money(value: Decimal) -> String {
    format!("${:.2}", round_money(value))
}

/// Build a calculator that adds `rate_percent`% tax to a subtotal
///
/// Formula: subtotal * (1 + rate/100)
pub fn tax_calculator(rate_percent: Decimal) -> impl Fn(Decimal) -> Decimal {
    let factor = Decimal::ONE + rate_percent / Decimal::ONE_HUNDRED;
    move |subtotal| subtotal.saturating_mul(factor)
}
