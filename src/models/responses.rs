//! Response DTOs for the catalog API
//!
//! Defines the structure of outgoing HTTP response bodies.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::cache::CacheStats;
use crate::models::Product;

/// Public projection of a product: identifier and timestamps stay internal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductView {
    pub name: String,
    pub stock: i32,
    pub value: Decimal,
}

impl From<&Product> for ProductView {
    fn from(product: &Product) -> Self {
        Self {
            name: product.name().to_string(),
            stock: product.stock(),
            value: product.value(),
        }
    }
}

/// Response body for the stats endpoint (GET /stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    /// Reads served from memory
    pub hits: u64,
    /// Reads that found the slot empty or expired
    pub misses: u64,
    /// Store reads triggered by misses
    pub loads: u64,
    /// Forced reloads after writes
    pub refreshes: u64,
    /// Products in the current snapshot
    pub cached_products: usize,
    /// Milliseconds until the current snapshot expires, null when none is live
    pub ttl_remaining_ms: Option<u64>,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
}

impl From<CacheStats> for StatsResponse {
    fn from(stats: CacheStats) -> Self {
        Self {
            hits: stats.hits,
            misses: stats.misses,
            loads: stats.loads,
            refreshes: stats.refreshes,
            cached_products: stats.cached_products,
            ttl_remaining_ms: stats.ttl_remaining_ms,
            hit_rate: stats.hit_rate(),
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
