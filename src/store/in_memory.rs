//! In-memory store adapter
//!
//! BTreeMap keyed by id behind an async RwLock. Ids are handed out from a
//! monotonically increasing counter and never reused.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::Result;
use crate::models::{Product, SortField};
use crate::store::ProductStore;

#[derive(Debug)]
struct Inner {
    products: BTreeMap<i64, Product>,
    next_id: i64,
}

impl Inner {
    fn insert(&mut self, mut product: Product) -> Product {
        self.next_id += 1;
        product.assign_id(self.next_id);
        self.products.insert(self.next_id, product.clone());
        product
    }
}

// == In-Memory Product Store ==
#[derive(Debug)]
pub struct InMemoryProductStore {
    inner: RwLock<Inner>,
}

impl InMemoryProductStore {
    pub fn new() -> Self {
        Self::with_products(Vec::new())
    }

    /// Creates a store pre-populated with the given products, assigning ids
    /// in iteration order.
    pub fn with_products(products: impl IntoIterator<Item = Product>) -> Self {
        let mut inner = Inner {
            products: BTreeMap::new(),
            next_id: 0,
        };
        for product in products {
            inner.insert(product);
        }
        Self {
            inner: RwLock::new(inner),
        }
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.products.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

impl Default for InMemoryProductStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProductStore for InMemoryProductStore {
    async fn list_all(&self) -> Result<Vec<Product>> {
        let inner = self.inner.read().await;
        Ok(inner.products.values().cloned().collect())
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<Product>> {
        let inner = self.inner.read().await;
        Ok(inner.products.get(&id).cloned())
    }

    async fn get_by_name(&self, name: &str) -> Result<Option<Product>> {
        let inner = self.inner.read().await;
        Ok(inner
            .products
            .values()
            .find(|product| product.name() == name)
            .cloned())
    }

    async fn list_ordered_by(&self, field: SortField) -> Result<Vec<Product>> {
        let mut products = self.list_all().await?;
        field.sort(&mut products);
        Ok(products)
    }

    async fn create(&self, product: Product) -> Result<Product> {
        let mut inner = self.inner.write().await;
        Ok(inner.insert(product))
    }

    async fn update(&self, id: i64, mut product: Product) -> Result<u64> {
        let mut inner = self.inner.write().await;
        match inner.products.get_mut(&id) {
            Some(existing) => {
                product.assign_id(id);
                *existing = product;
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete(&self, id: i64) -> Result<u64> {
        let mut inner = self.inner.write().await;
        Ok(inner.products.remove(&id).map_or(0, |_| 1))
    }
}
