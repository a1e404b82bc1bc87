//! Request DTOs for the catalog API
//!
//! Defines the structure of incoming HTTP request bodies.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::Result;
use crate::models::Product;

/// Request body for creating (POST /api/product) or updating
/// (PUT /api/product/:id) a product.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductInput {
    pub name: String,
    pub stock: i32,
    pub value: Decimal,
}

impl ProductInput {
    pub fn new(name: impl Into<String>, stock: i32, value: Decimal) -> Self {
        Self {
            name: name.into(),
            stock,
            value,
        }
    }

    /// Builds an unpersisted product, failing on the first invalid field.
    pub fn into_product(self) -> Result<Product> {
        Product::new(self.name, self.stock, self.value)
    }
}
