//! JSON persistence for the product collection.
//!
//! The collection is stored as a pretty-printed JSON array of records in the
//! legacy field shape (`Product`, `Brand`, `Category`, `MSRP`, `Sale Price`).
//! The same shape is read back in sample mode, so a previous run's output is
//! valid sample input.

use crate::models::ProductRecord;
use std::error::Error;
use tokio::fs;
use tracing::{info, instrument};

/// Write the product collection to `path` as a pretty JSON array.
#[instrument(level = "info", skip(products))]
pub async fn save_products(
    products: &[ProductRecord],
    path: &str,
) -> Result<(), Box<dyn Error>> {
    let json = serde_json::to_string_pretty(products)?;
    fs::write(path, json).await?;
    info!(path, count = products.len(), "wrote product collection");
    Ok(())
}

/// Read a product collection from a JSON array at `path`.
///
/// The caller decides how to degrade on error; a missing sample file is a
/// diagnostic, not a failed run.
#[instrument(level = "info")]
pub async fn load_products(path: &str) -> Result<Vec<ProductRecord>, Box<dyn Error>> {
    let raw = fs::read_to_string(path).await?;
    let products: Vec<ProductRecord> = serde_json::from_str(&raw)?;
    info!(path, count = products.len(), "loaded products");
    Ok(products)
}
