//! Domain entity and request/response models for the catalog service
//!
//! This module defines the product entity and the DTOs (Data Transfer Objects)
//! used for serializing/deserializing HTTP request and response bodies.

pub mod product;
pub mod requests;
pub mod responses;
pub mod sort_field;

// Re-export commonly used types
pub use product::{EntityMeta, Product};
pub use requests::ProductInput;
pub use responses::{ErrorResponse, HealthResponse, ProductView, StatsResponse};
pub use sort_field::SortField;
