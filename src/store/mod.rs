//! Store Module
//!
//! The persistence seam for products. The cache and the catalog service only
//! talk to storage through [`ProductStore`].

mod in_memory;

#[cfg(test)]
pub(crate) mod testing;

use async_trait::async_trait;

use crate::error::Result;
use crate::models::{Product, SortField};

pub use in_memory::InMemoryProductStore;

/// Durable CRUD and ordered listing over product records.
///
/// Absence is reported as `Ok(None)` or an affected count of 0; `Err` is
/// reserved for I/O failures.
#[async_trait]
pub trait ProductStore: Send + Sync + 'static {
    async fn list_all(&self) -> Result<Vec<Product>>;

    async fn get_by_id(&self, id: i64) -> Result<Option<Product>>;

    async fn get_by_name(&self, name: &str) -> Result<Option<Product>>;

    async fn list_ordered_by(&self, field: SortField) -> Result<Vec<Product>>;

    /// Persists a new product and returns it with its assigned id.
    async fn create(&self, product: Product) -> Result<Product>;

    /// Overwrites the stored product, returning the number of rows affected.
    async fn update(&self, id: i64, product: Product) -> Result<u64>;

    /// Removes the product, returning the number of rows affected.
    async fn delete(&self, id: i64) -> Result<u64>;
}
