//! Product Catalog - CRUD over a product collection
//!
//! Collection reads are served from an in-memory cache with absolute and
//! sliding expiry; every write refreshes the cache before it returns.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod service;
pub mod store;

pub use api::AppState;
pub use config::Config;
pub use error::CatalogError;
pub use service::CatalogService;
