//! Catalog Service
//!
//! Single-item reads and all writes go straight to the store; collection
//! reads go through the [`ProductCache`]. Every successful write refreshes
//! the cache before returning, so the writer's next list reflects it.

use std::sync::Arc;

use tracing::{debug, info};

use crate::cache::{CacheStats, ProductCache, ALL_PRODUCTS_KEY};
use crate::error::{CatalogError, Result};
use crate::models::{ProductInput, ProductView, SortField};
use crate::store::ProductStore;

#[derive(Clone)]
pub struct CatalogService {
    store: Arc<dyn ProductStore>,
    cache: Arc<ProductCache>,
}

impl CatalogService {
    /// Creates a service over `store`. `cache` must be backed by the same store.
    pub fn new(store: Arc<dyn ProductStore>, cache: Arc<ProductCache>) -> Self {
        Self { store, cache }
    }

    // == Reads ==
    /// Lists every product from the cache. May be stale within the expiry window.
    pub async fn list_all(&self) -> Result<Vec<ProductView>> {
        let products = self.cache.get_or_load(ALL_PRODUCTS_KEY).await?;
        Ok(products.iter().map(ProductView::from).collect())
    }

    pub async fn get_by_id(&self, id: i64) -> Result<ProductView> {
        self.store
            .get_by_id(id)
            .await?
            .map(|product| ProductView::from(&product))
            .ok_or_else(|| CatalogError::product_not_found(id))
    }

    pub async fn get_by_name(&self, name: &str) -> Result<ProductView> {
        self.store
            .get_by_name(name)
            .await?
            .map(|product| ProductView::from(&product))
            .ok_or_else(|| CatalogError::NotFound(format!("product '{}' does not exist", name)))
    }

    /// Lists cached products in stable ascending order of `field`
    /// (`name`, `stock` or `value`, case-insensitive).
    ///
    /// An unknown field is rejected before the cache is consulted.
    pub async fn list_ordered_by(&self, field: &str) -> Result<Vec<ProductView>> {
        let field: SortField = field.parse()?;
        let products = self.cache.get_or_load(ALL_PRODUCTS_KEY).await?;

        let mut sorted: Vec<_> = products.iter().cloned().collect();
        field.sort(&mut sorted);
        debug!(%field, count = sorted.len(), "ordered product listing");

        Ok(sorted.iter().map(ProductView::from).collect())
    }

    // == Writes ==
    pub async fn create(&self, input: ProductInput) -> Result<ProductView> {
        let product = input.into_product()?;
        let created = self.store.create(product).await?;
        info!(id = created.id(), name = created.name(), "product created");

        self.cache.refresh().await?;
        Ok(ProductView::from(&created))
    }

    /// Applies `input` to an existing product. Returns the affected row count.
    pub async fn update(&self, id: i64, input: ProductInput) -> Result<u64> {
        let mut product = self
            .store
            .get_by_id(id)
            .await?
            .ok_or_else(|| CatalogError::product_not_found(id))?;

        product.set_name(input.name)?;
        product.set_stock(input.stock)?;
        product.set_value(input.value)?;
        product.touch();

        let affected = self.store.update(id, product).await?;
        if affected == 0 {
            return Err(CatalogError::product_not_found(id));
        }
        info!(id, "product updated");

        self.cache.refresh().await?;
        Ok(affected)
    }

    /// Removes a product. Returns the affected row count.
    pub async fn delete(&self, id: i64) -> Result<u64> {
        let affected = self.store.delete(id).await?;
        if affected == 0 {
            return Err(CatalogError::product_not_found(id));
        }
        info!(id, "product deleted");

        self.cache.refresh().await?;
        Ok(affected)
    }

    pub async fn cache_stats(&self) -> CacheStats {
        self.cache.stats().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Product;
    use crate::store::testing::CountingStore;
    use rust_decimal::Decimal;
    use std::time::Duration;

    fn product(name: &str, stock: i32, value: i64) -> Product {
        Product::new(name, stock, Decimal::from(value)).unwrap()
    }

    fn input(name: &str, stock: i32, value: i64) -> ProductInput {
        ProductInput::new(name, stock, Decimal::from(value))
    }

    fn setup(products: Vec<Product>) -> (Arc<CountingStore>, Arc<ProductCache>, CatalogService) {
        let store = Arc::new(CountingStore::with_products(products));
        let cache = Arc::new(ProductCache::new(
            store.clone(),
            Duration::from_secs(60),
            Duration::from_secs(30),
        ));
        let service = CatalogService::new(store.clone(), cache.clone());
        (store, cache, service)
    }

    fn seeded() -> Vec<Product> {
        vec![
            product("B", 20, 200),
            product("A", 10, 100),
            product("C", 30, 300),
        ]
    }

    fn names(views: &[ProductView]) -> Vec<&str> {
        views.iter().map(|v| v.name.as_str()).collect()
    }

    #[tokio::test]
    async fn test_create_then_get_by_id() {
        let (_store, _cache, service) = setup(Vec::new());

        let created = service.create(input("Lamp", 3, 45)).await.unwrap();
        let fetched = service.get_by_id(1).await.unwrap();

        assert_eq!(created, fetched);
        assert_eq!(fetched.name, "Lamp");
        assert_eq!(fetched.stock, 3);
        assert_eq!(fetched.value, Decimal::from(45));
    }

    #[tokio::test]
    async fn test_create_rejects_invalid_input_without_writing() {
        let (store, cache, service) = setup(Vec::new());

        for bad in [input("", 1, 1), input("x", -1, 1), input("x", 1, -1)] {
            let result = service.create(bad).await;
            assert!(matches!(result, Err(CatalogError::Validation(_))));
        }

        assert_eq!(store.write_calls(), 0);
        assert_eq!(cache.stats().await.refreshes, 0);
    }

    #[tokio::test]
    async fn test_writes_are_visible_to_next_list() {
        let (_store, _cache, service) = setup(seeded());

        assert_eq!(service.list_all().await.unwrap().len(), 3);

        service.create(input("D", 40, 400)).await.unwrap();
        assert_eq!(service.list_all().await.unwrap().len(), 4);

        service.update(4, input("D2", 41, 401)).await.unwrap();
        let listed = service.list_all().await.unwrap();
        assert!(listed.iter().any(|v| v.name == "D2" && v.stock == 41));

        service.delete(4).await.unwrap();
        let listed = service.list_all().await.unwrap();
        assert_eq!(names(&listed), vec!["B", "A", "C"]);
    }

    #[tokio::test]
    async fn test_list_all_served_from_cache() {
        let (store, _cache, service) = setup(seeded());

        service.list_all().await.unwrap();
        service.list_all().await.unwrap();
        service.list_ordered_by("name").await.unwrap();

        assert_eq!(store.list_all_calls(), 1);
    }

    #[tokio::test]
    async fn test_list_ordered_by_seeded_scenario() {
        let (_store, _cache, service) = setup(seeded());

        for field in ["name", "stock", "value", "NAME", "Stock"] {
            let views = service.list_ordered_by(field).await.unwrap();
            assert_eq!(names(&views), vec!["A", "B", "C"], "ordering by {}", field);
        }
    }

    #[tokio::test]
    async fn test_list_ordered_by_unknown_field_leaves_cache_untouched() {
        let (store, cache, service) = setup(seeded());

        let result = service.list_ordered_by("bogus").await;

        assert!(matches!(result, Err(CatalogError::Validation(_))));
        assert_eq!(store.list_all_calls(), 0);
        assert!(cache.peek().await.is_none());
    }

    #[tokio::test]
    async fn test_list_ordered_by_empty_store() {
        let (_store, _cache, service) = setup(Vec::new());
        assert!(service.list_ordered_by("value").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_nonexistent_does_not_refresh() {
        let (store, cache, service) = setup(seeded());

        let result = service.delete(99).await;

        assert!(matches!(result, Err(CatalogError::NotFound(_))));
        assert_eq!(cache.stats().await.refreshes, 0);
        assert_eq!(store.list_all_calls(), 0);
    }

    #[tokio::test]
    async fn test_delete_returns_affected_count() {
        let (_store, cache, service) = setup(seeded());

        assert_eq!(service.delete(1).await.unwrap(), 1);
        assert_eq!(cache.stats().await.refreshes, 1);
        assert!(matches!(
            service.get_by_id(1).await,
            Err(CatalogError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_update_negative_stock_fails_before_write() {
        let (store, cache, service) = setup(seeded());

        let result = service.update(1, input("B", -1, 200)).await;

        assert!(matches!(result, Err(CatalogError::Validation(_))));
        assert_eq!(store.write_calls(), 0);
        assert_eq!(cache.stats().await.refreshes, 0);
        assert_eq!(service.get_by_id(1).await.unwrap().stock, 20);
    }

    #[tokio::test]
    async fn test_update_missing_product_is_not_found() {
        let (store, _cache, service) = setup(seeded());

        let result = service.update(42, input("Z", 1, 1)).await;

        assert!(matches!(result, Err(CatalogError::NotFound(_))));
        assert_eq!(store.write_calls(), 0);
    }

    #[tokio::test]
    async fn test_update_stamps_modified_time() {
        let (store, _cache, service) = setup(seeded());
        let before = store.inner().get_by_id(2).await.unwrap().unwrap();

        tokio::time::sleep(Duration::from_millis(5)).await;
        assert_eq!(service.update(2, input("A+", 11, 101)).await.unwrap(), 1);

        let after = store.inner().get_by_id(2).await.unwrap().unwrap();
        assert_eq!(after.name(), "A+");
        assert_eq!(after.meta.created_at, before.meta.created_at);
        assert!(after.meta.modified_at > before.meta.modified_at);
    }

    #[tokio::test]
    async fn test_get_by_name() {
        let (_store, _cache, service) = setup(seeded());

        assert_eq!(service.get_by_name("C").await.unwrap().stock, 30);
        assert!(matches!(
            service.get_by_name("missing").await,
            Err(CatalogError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_failed_refresh_after_write_is_visible() {
        let (store, _cache, service) = setup(seeded());
        store.set_fail_list_all(true);

        let result = service.create(input("D", 1, 1)).await;

        assert!(matches!(result, Err(CatalogError::Unexpected(_))));
        // The write itself committed
        assert_eq!(store.inner().len().await, 4);
    }
}
