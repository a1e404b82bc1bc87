//! Sortable product fields

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::error::CatalogError;
use crate::models::Product;

/// Closed set of fields a product listing can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Name,
    Stock,
    Value,
}

impl SortField {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::Name => "name",
            SortField::Stock => "stock",
            SortField::Value => "value",
        }
    }

    /// Ascending comparison of two products by this field.
    pub fn compare(&self, a: &Product, b: &Product) -> Ordering {
        match self {
            SortField::Name => a.name().cmp(b.name()),
            SortField::Stock => a.stock().cmp(&b.stock()),
            SortField::Value => a.value().cmp(&b.value()),
        }
    }

    /// Stable ascending sort in place.
    pub fn sort(&self, products: &mut [Product]) {
        products.sort_by(|a, b| self.compare(a, b));
    }
}

impl FromStr for SortField {
    type Err = CatalogError;

    /// Case-insensitive, exact match only.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "name" => Ok(SortField::Name),
            "stock" => Ok(SortField::Stock),
            "value" => Ok(SortField::Value),
            _ => Err(CatalogError::Validation(format!(
                "cannot order products by '{}': expected one of name, stock, value",
                s
            ))),
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
