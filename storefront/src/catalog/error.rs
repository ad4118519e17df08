use rust_decimal::Decimal;
use std::path::PathBuf;
use thiserror::Error;

/// Catalog construction errors
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Duplicate product id: {0}")]
    DuplicateId(String),

    #[error("Product {id} has a negative price: {price}")]
    NegativePrice { id: String, price: Decimal },

    #[error("Product {id} price {price} exceeds the maximum of {max}")]
    PriceTooHigh {
        id: String,
        price: Decimal,
        max: Decimal,
    },
}

pub type CatalogResult<T> = Result<T, CatalogError>;
