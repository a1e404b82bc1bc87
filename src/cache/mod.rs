//! Cache Module
//!
//! Provides the in-memory product cache with absolute and sliding expiry.

mod entry;
mod product_cache;
mod stats;


// Re-export public types
pub use entry::CacheEntry;
pub use product_cache::ProductCache;
pub use stats::{CacheStats, StatsCounters};

// == Public Constants ==
/// Logical key under which the full product collection is cached
pub const ALL_PRODUCTS_KEY: &str = "all_products";
