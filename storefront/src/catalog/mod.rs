//! Product catalog
//!
//! Built once at start-up and immutable afterwards. Products are kept in
//! catalog order alongside an id index; both hand out shared `Arc`
//! references so cart lines never own or copy a product.

mod error;


pub use error::{CatalogError, CatalogResult};

use rust_decimal::Decimal;
use shared::Product;
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

/// Category value that matches every product
pub const ALL_CATEGORIES: &str = "all";

/// Highest accepted unit price
pub const MAX_UNIT_PRICE: Decimal = Decimal::from_parts(1_000_000, 0, 0, false, 0);

/// Built-in coffee shop catalog
const SEED_CATALOG: &str = include_str!("../../data/catalog.json");

#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Arc<Product>>,
    index: HashMap<String, Arc<Product>>,
}

impl Catalog {
    /// Build a catalog, rejecting out-of-range prices and duplicate ids
    pub fn new(products: Vec<Product>) -> CatalogResult<Self> {
        let mut index = HashMap::with_capacity(products.len());
        let mut ordered = Vec::with_capacity(products.len());

        for product in products {
            if product.price() < Decimal::ZERO {
                return Err(CatalogError::NegativePrice {
                    id: product.id().to_string(),
                    price: product.price(),
                });
            }
            if product.price() > MAX_UNIT_PRICE {
                return Err(CatalogError::PriceTooHigh {
                    id: product.id().to_string(),
                    price: product.price(),
                    max: MAX_UNIT_PRICE,
                });
            }
            if index.contains_key(product.id()) {
                return Err(CatalogError::DuplicateId(product.id().to_string()));
            }
            let product = Arc::new(product);
            index.insert(product.id().to_string(), Arc::clone(&product));
            ordered.push(product);
        }

        tracing::debug!(products = ordered.len(), "Catalog built");
        Ok(Self {
            products: ordered,
            index,
        })
    }

    /// Parse a JSON array of products
    pub fn from_json(json: &str) -> CatalogResult<Self> {
        let products: Vec<Product> = serde_json::from_str(json)?;
        Self::new(products)
    }

    /// Load a JSON catalog file
    pub fn load(path: impl AsRef<Path>) -> CatalogResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_json(&json)?;
        tracing::info!(path = %path.display(), products = catalog.len(), "Catalog loaded");
        Ok(catalog)
    }

    /// The built-in catalog
    pub fn seeded() -> CatalogResult<Self> {
        Self::from_json(SEED_CATALOG)
    }

    /// Indexed lookup, O(1) on average
    pub fn lookup(&self, id: &str) -> Option<&Arc<Product>> {
        self.index.get(id)
    }

    /// Same result as [`Catalog::lookup`], found by walking the product
    /// sequence head first
    pub fn find_by_id_recursive(&self, id: &str) -> Option<&Arc<Product>> {
        find_in(&self.products, id)
    }

    /// Products in `category`, in catalog order
    ///
    /// [`ALL_CATEGORIES`] returns the whole catalog.
    pub fn filter(&self, category: &str) -> Vec<Arc<Product>> {
        if category == ALL_CATEGORIES {
            return self.products.clone();
        }
        self.products
            .iter()
            .filter(|p| p.category() == category)
            .cloned()
            .collect()
    }

    /// Distinct categories in order of first appearance
    pub fn categories(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for p in &self.products {
            if !seen.contains(&p.category()) {
                seen.push(p.category());
            }
        }
        seen
    }

    pub fn products(&self) -> &[Arc<Product>] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

fn find_in<'a>(products: &'a [Arc<Product>], id: &str) -> Option<&'a Arc<Product>> {
    match products {
        [] => None,
        [head, rest @ ..] => {
            if head.id() == id {
                Some(head)
            } else {
                find_in(rest, id)
            }
        }
    }
}
