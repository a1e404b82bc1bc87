//! Cache Entry Module
//!
//! Defines the cached product snapshot with absolute and sliding expiry.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use crate::models::Product;

// == Cache Entry ==
/// A full product snapshot plus the timers that bound its lifetime.
///
/// Entries are immutable apart from `last_access`; a refresh replaces the
/// whole entry rather than editing it.
#[derive(Debug)]
pub struct CacheEntry {
    /// Logical key the snapshot was stored under
    pub key: String,
    /// The cached collection
    pub products: Arc<Vec<Product>>,
    /// Absolute expiration timestamp (Unix milliseconds)
    pub expires_at: u64,
    /// Sliding window length in milliseconds
    sliding_ms: u64,
    /// Last hit timestamp (Unix milliseconds)
    last_access: AtomicU64,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new entry whose timers start now.
    ///
    /// # Arguments
    /// * `key` - Logical cache key
    /// * `products` - Snapshot to cache
    /// * `absolute_ttl` - Hard cap on the entry's lifetime
    /// * `sliding_ttl` - Idle window, renewed on every hit
    pub fn new(
        key: impl Into<String>,
        products: Arc<Vec<Product>>,
        absolute_ttl: Duration,
        sliding_ttl: Duration,
    ) -> Self {
        let now = current_timestamp_ms();
        Self {
            key: key.into(),
            products,
            expires_at: now.saturating_add(duration_ms(absolute_ttl)),
            sliding_ms: duration_ms(sliding_ttl),
            last_access: AtomicU64::new(now),
        }
    }

    // == Is Expired ==
    /// Checks if the entry has expired.
    ///
    /// Valid only while `now < expires_at` and `now < last_access + sliding`.
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(current_timestamp_ms())
    }

    pub fn is_expired_at(&self, now: u64) -> bool {
        now >= self.expires_at || now >= self.sliding_deadline()
    }

    // == Touch ==
    /// Renews the sliding window. Never moves `last_access` backwards.
    pub fn touch(&self) {
        self.last_access
            .fetch_max(current_timestamp_ms(), Ordering::AcqRel);
    }

    pub fn last_access(&self) -> u64 {
        self.last_access.load(Ordering::Acquire)
    }

    fn sliding_deadline(&self) -> u64 {
        self.last_access().saturating_add(self.sliding_ms)
    }

    // == Time To Live ==
    /// Returns remaining lifetime in milliseconds, whichever timer ends first.
    pub fn ttl_remaining_ms(&self) -> u64 {
        let deadline = self.expires_at.min(self.sliding_deadline());
        deadline.saturating_sub(current_timestamp_ms())
    }
}

// == Utility Functions ==
/// Converts a duration to milliseconds, clamping at `u64::MAX`.
fn duration_ms(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

/// Returns current Unix timestamp in milliseconds.
pub fn current_timestamp_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(duration_ms)
        .unwrap_or(0)
}
