//! Product Cache Module
//!
//! Read-through cache over the full product collection, refreshed explicitly
//! after every write.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{Mutex, RwLock};
use tracing::{debug, info, warn};

use crate::cache::{CacheEntry, CacheStats, StatsCounters, ALL_PRODUCTS_KEY};
use crate::error::Result;
use crate::models::Product;
use crate::store::ProductStore;

// == Product Cache ==
/// Single-slot cache of the product collection.
///
/// The slot always holds either nothing or one complete [`CacheEntry`];
/// replacing it swaps the whole `Arc`. Store loads, including refreshes, are
/// serialized by `load_lock` so concurrent misses share one store read and an
/// in-flight load can never overwrite a newer refresh.
pub struct ProductCache {
    store: Arc<dyn ProductStore>,
    slot: RwLock<Option<Arc<CacheEntry>>>,
    load_lock: Mutex<()>,
    stats: StatsCounters,
    absolute_ttl: Duration,
    sliding_ttl: Duration,
}

impl ProductCache {
    // == Constructor ==
    /// Creates an empty cache in front of `store`.
    ///
    /// # Arguments
    /// * `store` - Source of truth for the product collection
    /// * `absolute_ttl` - Maximum lifetime of a snapshot
    /// * `sliding_ttl` - Idle window after which a snapshot expires
    pub fn new(
        store: Arc<dyn ProductStore>,
        absolute_ttl: Duration,
        sliding_ttl: Duration,
    ) -> Self {
        Self {
            store,
            slot: RwLock::new(None),
            load_lock: Mutex::new(()),
            stats: StatsCounters::new(),
            absolute_ttl,
            sliding_ttl,
        }
    }

    // == Get Or Load ==
    /// Returns the cached collection for `key`, loading it from the store on
    /// a miss or after expiry.
    ///
    /// An empty collection is a valid cached value. Store errors propagate
    /// and leave the slot untouched.
    pub async fn get_or_load(&self, key: &str) -> Result<Arc<Vec<Product>>> {
        if let Some(products) = self.lookup(key).await {
            self.stats.record_hit();
            debug!(key, count = products.len(), "product cache hit");
            return Ok(products);
        }
        self.stats.record_miss();

        let _guard = self.load_lock.lock().await;

        // Another caller may have filled the slot while we waited
        if let Some(products) = self.lookup(key).await {
            debug!(key, "product cache filled by concurrent load");
            return Ok(products);
        }

        debug!(key, "product cache miss, loading from store");
        let products = Arc::new(self.store.list_all().await?);
        self.stats.record_load();
        self.install(key, products.clone()).await;

        Ok(products)
    }

    // == Refresh ==
    /// Reloads the full collection from the store and replaces the entry,
    /// resetting both timers.
    ///
    /// On failure the slot is cleared before the error is returned, so the
    /// pre-write snapshot is never served again.
    pub async fn refresh(&self) -> Result<Arc<Vec<Product>>> {
        let _guard = self.load_lock.lock().await;

        match self.store.list_all().await {
            Ok(products) => {
                let products = Arc::new(products);
                self.stats.record_refresh();
                self.install(ALL_PRODUCTS_KEY, products.clone()).await;
                info!(count = products.len(), "product cache refreshed");
                Ok(products)
            }
            Err(err) => {
                *self.slot.write().await = None;
                warn!(error = %err, "product cache refresh failed, slot cleared");
                Err(err)
            }
        }
    }

    // == Invalidate ==
    /// Drops the cached entry; the next read goes to the store.
    pub async fn invalidate(&self) {
        let _guard = self.load_lock.lock().await;
        if self.slot.write().await.take().is_some() {
            debug!("product cache invalidated");
        }
    }

    // == Peek ==
    /// Returns the current snapshot, if any and unexpired, without renewing
    /// it or recording a hit.
    pub async fn peek(&self) -> Option<Arc<Vec<Product>>> {
        let slot = self.slot.read().await;
        slot.as_ref()
            .filter(|entry| !entry.is_expired())
            .map(|entry| entry.products.clone())
    }

    // == Stats ==
    /// Counters plus the size and remaining lifetime of the live snapshot.
    pub async fn stats(&self) -> CacheStats {
        let slot = self.slot.read().await;
        match slot.as_ref().filter(|entry| !entry.is_expired()) {
            Some(entry) => self
                .stats
                .snapshot(entry.products.len(), Some(entry.ttl_remaining_ms())),
            None => self.stats.snapshot(0, None),
        }
    }

    async fn lookup(&self, key: &str) -> Option<Arc<Vec<Product>>> {
        let slot = self.slot.read().await;
        match slot.as_ref() {
            Some(entry) if entry.key == key && !entry.is_expired() => {
                entry.touch();
                Some(entry.products.clone())
            }
            _ => None,
        }
    }

    async fn install(&self, key: &str, products: Arc<Vec<Product>>) {
        let entry = CacheEntry::new(key, products, self.absolute_ttl, self.sliding_ttl);
        *self.slot.write().await = Some(Arc::new(entry));
    }
}
