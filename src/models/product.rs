//! Product entity
//!
//! Every mutation goes through a validating setter so a `Product` never
//! holds an empty name, negative stock or a negative value.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use crate::error::{CatalogError, Result};

// == Entity Metadata ==
/// Identity and timestamps shared by persisted entities.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityMeta {
    /// Store-assigned identifier, 0 until persisted
    pub id: i64,
    pub created_at: DateTime<Utc>,
    pub modified_at: DateTime<Utc>,
}

impl EntityMeta {
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            id: 0,
            created_at: now,
            modified_at: now,
        }
    }

    /// Stamps a new modification time.
    pub fn touch(&mut self) {
        self.modified_at = Utc::now();
    }
}

impl Default for EntityMeta {
    fn default() -> Self {
        Self::new()
    }
}

// == Product ==
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    pub meta: EntityMeta,
    name: String,
    stock: i32,
    value: Decimal,
}

impl Product {
    // == Constructor ==
    /// Creates an unpersisted product, validating every field.
    pub fn new(name: impl Into<String>, stock: i32, value: Decimal) -> Result<Self> {
        let mut product = Self {
            meta: EntityMeta::new(),
            name: String::new(),
            stock: 0,
            value: Decimal::ZERO,
        };
        product.set_name(name)?;
        product.set_stock(stock)?;
        product.set_value(value)?;
        Ok(product)
    }

    pub fn id(&self) -> i64 {
        self.meta.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn stock(&self) -> i32 {
        self.stock
    }

    pub fn value(&self) -> Decimal {
        self.value
    }

    /// Records the identifier handed out by the store.
    pub fn assign_id(&mut self, id: i64) {
        self.meta.id = id;
    }

    // == Setters ==
    pub fn set_name(&mut self, name: impl Into<String>) -> Result<()> {
        let name = name.into();
        if name.is_empty() {
            return Err(CatalogError::Validation(
                "product name cannot be empty".to_string(),
            ));
        }
        self.name = name;
        Ok(())
    }

    pub fn set_stock(&mut self, stock: i32) -> Result<()> {
        if stock < 0 {
            return Err(CatalogError::Validation(
                "product stock cannot be negative".to_string(),
            ));
        }
        self.stock = stock;
        Ok(())
    }

    pub fn set_value(&mut self, value: Decimal) -> Result<()> {
        if value < Decimal::ZERO {
            return Err(CatalogError::Validation(
                "product value cannot be negative".to_string(),
            ));
        }
        self.value = value;
        Ok(())
    }

    pub fn touch(&mut self) {
        self.meta.touch();
    }
}
