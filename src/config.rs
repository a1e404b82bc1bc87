//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;
use std::time::Duration;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// Absolute lifetime of the cached product list, in milliseconds
    pub cache_absolute_ttl_ms: u64,
    /// Sliding window renewed on every cache hit, in milliseconds
    pub cache_sliding_ttl_ms: u64,
    /// Seed the store with sample products when it starts empty
    pub seed_products: bool,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `CACHE_ABSOLUTE_TTL_MS` - Absolute cache lifetime (default: 8000)
    /// - `CACHE_SLIDING_TTL_MS` - Sliding cache window (default: 5000)
    /// - `SEED_PRODUCTS` - Seed sample products on startup (default: true)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            server_port: parse_var("SERVER_PORT").unwrap_or(defaults.server_port),
            cache_absolute_ttl_ms: parse_var("CACHE_ABSOLUTE_TTL_MS")
                .unwrap_or(defaults.cache_absolute_ttl_ms),
            cache_sliding_ttl_ms: parse_var("CACHE_SLIDING_TTL_MS")
                .unwrap_or(defaults.cache_sliding_ttl_ms),
            seed_products: parse_var("SEED_PRODUCTS").unwrap_or(defaults.seed_products),
        }
    }

    pub fn absolute_ttl(&self) -> Duration {
        Duration::from_millis(self.cache_absolute_ttl_ms)
    }

    pub fn sliding_ttl(&self) -> Duration {
        Duration::from_millis(self.cache_sliding_ttl_ms)
    }
}

fn parse_var<T: std::str::FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.parse().ok())
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 3000,
            cache_absolute_ttl_ms: 8_000,
            cache_sliding_ttl_ms: 5_000,
            seed_products: true,
        }
    }
}
