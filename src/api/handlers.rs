//! API Handlers
//!
//! HTTP request handlers for each catalog endpoint.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use rust_decimal::Decimal;
use tracing::info;

use crate::cache::ProductCache;
use crate::config::Config;
use crate::error::Result;
use crate::models::{HealthResponse, Product, ProductInput, ProductView, StatsResponse};
use crate::service::CatalogService;
use crate::store::{InMemoryProductStore, ProductStore};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub catalog: CatalogService,
}

impl AppState {
    /// Wires a store, a cache in front of it and the catalog service.
    pub fn new(store: Arc<dyn ProductStore>, config: &Config) -> Self {
        let cache = Arc::new(ProductCache::new(
            store.clone(),
            config.absolute_ttl(),
            config.sliding_ttl(),
        ));
        Self {
            catalog: CatalogService::new(store, cache),
        }
    }

    /// Creates a new AppState from configuration, backed by the in-memory
    /// store and optionally seeded with sample products.
    pub fn from_config(config: &Config) -> Result<Self> {
        let seed = if config.seed_products {
            sample_products()?
        } else {
            Vec::new()
        };
        if !seed.is_empty() {
            info!("Seeding store with {} sample products", seed.len());
        }

        let store = Arc::new(InMemoryProductStore::with_products(seed));
        Ok(Self::new(store, config))
    }
}

/// "Product 1" .. "Product 5" with stock 10..50 and value 100..500.
fn sample_products() -> Result<Vec<Product>> {
    (1..=5)
        .map(|i| Product::new(format!("Product {}", i), i * 10, Decimal::from(i * 100)))
        .collect()
}

/// Handler for GET /api/product
pub async fn list_products_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<ProductView>>> {
    Ok(Json(state.catalog.list_all().await?))
}

/// Handler for GET /api/product/:id
pub async fn get_product_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ProductView>> {
    Ok(Json(state.catalog.get_by_id(id).await?))
}

/// Handler for GET /api/product/product/:name
pub async fn get_product_by_name_handler(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<ProductView>> {
    Ok(Json(state.catalog.get_by_name(&name).await?))
}

/// Handler for GET /api/product/orderby/:field
pub async fn list_ordered_handler(
    State(state): State<AppState>,
    Path(field): Path<String>,
) -> Result<Json<Vec<ProductView>>> {
    Ok(Json(state.catalog.list_ordered_by(&field).await?))
}

/// Handler for POST /api/product
pub async fn create_product_handler(
    State(state): State<AppState>,
    Json(input): Json<ProductInput>,
) -> Result<(StatusCode, Json<ProductView>)> {
    let view = state.catalog.create(input).await?;
    Ok((StatusCode::CREATED, Json(view)))
}

/// Handler for PUT /api/product/:id
pub async fn update_product_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(input): Json<ProductInput>,
) -> Result<StatusCode> {
    state.catalog.update(id, input).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Handler for DELETE /api/product/:id
pub async fn delete_product_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode> {
    state.catalog.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Handler for GET /stats
///
/// Returns current cache statistics.
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    Json(StatsResponse::from(state.catalog.cache_stats().await))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
