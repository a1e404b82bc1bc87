//! Instrumented store for unit tests.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;

use crate::error::{CatalogError, Result};
use crate::models::{Product, SortField};
use crate::store::{InMemoryProductStore, ProductStore};

/// Wraps [`InMemoryProductStore`], counting calls and optionally slowing
/// down or failing `list_all`.
#[derive(Debug, Default)]
pub struct CountingStore {
    inner: InMemoryProductStore,
    list_all_calls: AtomicUsize,
    write_calls: AtomicUsize,
    list_delay_ms: AtomicUsize,
    fail_list_all: AtomicBool,
}

impl CountingStore {
    pub fn with_products(products: impl IntoIterator<Item = Product>) -> Self {
        Self {
            inner: InMemoryProductStore::with_products(products),
            ..Default::default()
        }
    }

    pub fn list_all_calls(&self) -> usize {
        self.list_all_calls.load(Ordering::SeqCst)
    }

    pub fn write_calls(&self) -> usize {
        self.write_calls.load(Ordering::SeqCst)
    }

    pub fn set_list_delay(&self, delay: Duration) {
        self.list_delay_ms
            .store(delay.as_millis() as usize, Ordering::SeqCst);
    }

    pub fn set_fail_list_all(&self, fail: bool) {
        self.fail_list_all.store(fail, Ordering::SeqCst);
    }

    pub fn inner(&self) -> &InMemoryProductStore {
        &self.inner
    }
}

#[async_trait]
impl ProductStore for CountingStore {
    async fn list_all(&self) -> Result<Vec<Product>> {
        self.list_all_calls.fetch_add(1, Ordering::SeqCst);

        let delay = self.list_delay_ms.load(Ordering::SeqCst);
        if delay > 0 {
            tokio::time::sleep(Duration::from_millis(delay as u64)).await;
        }

        if self.fail_list_all.load(Ordering::SeqCst) {
            return Err(CatalogError::Unexpected("store unreachable".to_string()));
        }
        self.inner.list_all().await
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<Product>> {
        self.inner.get_by_id(id).await
    }

    async fn get_by_name(&self, name: &str) -> Result<Option<Product>> {
        self.inner.get_by_name(name).await
    }

    async fn list_ordered_by(&self, field: SortField) -> Result<Vec<Product>> {
        self.inner.list_ordered_by(field).await
    }

    async fn create(&self, product: Product) -> Result<Product> {
        self.write_calls.fetch_add(1, Ordering::SeqCst);
        self.inner.create(product).await
    }

    async fn update(&self, id: i64, product: Product) -> Result<u64> {
        self.write_calls.fetch_add(1, Ordering::SeqCst);
        self.inner.update(id, product).await
    }

    async fn delete(&self, id: i64) -> Result<u64> {
        self.write_calls.fetch_add(1, Ordering::SeqCst);
        self.inner.delete(id).await
    }
}
