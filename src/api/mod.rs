//! API Module
//!
//! HTTP handlers and routing for the catalog REST API.
//!
//! # Endpoints
//! - `GET|POST /api/product` - List or create products
//! - `GET|PUT|DELETE /api/product/:id` - Read, update or delete one product
//! - `GET /api/product/product/:name` - Look a product up by name
//! - `GET /api/product/orderby/:field` - Ordered listing
//! - `GET /stats` - Cache statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
