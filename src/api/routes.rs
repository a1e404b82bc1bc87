//! API Routes
//!
//! Configures the Axum router with all catalog endpoints.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    create_product_handler, delete_product_handler, get_product_by_name_handler,
    get_product_handler, health_handler, list_ordered_handler, list_products_handler,
    stats_handler, update_product_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /api/product` - List all products (cached)
/// - `POST /api/product` - Create a product
/// - `GET /api/product/:id` - Get a product by id
/// - `PUT /api/product/:id` - Update a product
/// - `DELETE /api/product/:id` - Delete a product
/// - `GET /api/product/product/:name` - Get a product by name
/// - `GET /api/product/orderby/:field` - List products ordered by name, stock or value
/// - `GET /stats` - Get cache statistics
/// - `GET /health` - Health check endpoint
///
/// # Middleware
/// - CORS: Allows any origin (configurable for production)
/// - Tracing: Logs all requests for debugging
pub fn create_router(state: AppState) -> Router {
    // Configure CORS middleware
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(
            "/api/product",
            get(list_products_handler).post(create_product_handler),
        )
        .route(
            "/api/product/:id",
            get(get_product_handler)
                .put(update_product_handler)
                .delete(delete_product_handler),
        )
        .route("/api/product/product/:name", get(get_product_by_name_handler))
        .route("/api/product/orderby/:field", get(list_ordered_handler))
        .route("/stats", get(stats_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
