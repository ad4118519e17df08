//! Product Model

use rust_decimal::prelude::*;
use serde::{Deserialize, Serialize};

/// Percentage taken off an on-sale product's base price
pub const DEFAULT_SALE_DISCOUNT_PERCENT: Decimal = Decimal::from_parts(15, 0, 0, false, 0);

/// Product entity
///
/// Fields are private; the catalog builds products once and nothing
/// mutates them afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    id: String,
    name: String,
    /// Base (pre-discount) unit price
    price: Decimal,
    category: String,
    /// Opaque reference to the display asset
    image: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    on_sale: bool,
}

impl Product {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        price: Decimal,
        category: impl Into<String>,
        image: impl Into<String>,
        description: impl Into<String>,
        on_sale: bool,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            category: category.into(),
            image: image.into(),
            description: description.into(),
            on_sale,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Decimal {
        self.price
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn image(&self) -> &str {
        &self.image
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn on_sale(&self) -> bool {
        self.on_sale
    }

    /// Unit price after the on-sale discount
    ///
    /// Formula: price * (1 - discount_percent/100) when on sale, price otherwise.
    /// The result is exact; rounding is left to presentation.
    pub fn effective_price(&self, discount_percent: Decimal) -> Decimal {
        if self.on_sale {
            self.price
                .saturating_mul(Decimal::ONE - discount_percent / Decimal::ONE_HUNDRED)
        } else {
            self.price
        }
    }

    /// Unit price with the standard 15% sale discount
    pub fn sale_price(&self) -> Decimal {
        self.effective_price(DEFAULT_SALE_DISCOUNT_PERCENT)
    }

    /// Short "name - $price" label using the base price
    pub fn display_info(&self) -> String {
        let price = self
            .price
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        format!("{} - ${:.2}", self.name, price)
    }
}
