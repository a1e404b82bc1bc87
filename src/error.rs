//! Error types for the catalog service
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;

// == Catalog Error Enum ==
/// Unified error type for the catalog service.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// Input failed a shape or range check
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Referenced product is absent, or no rows were affected
    #[error("Not found: {0}")]
    NotFound(String),

    /// Store or cache I/O failure
    #[error("Unexpected failure: {0}")]
    Unexpected(String),
}

impl CatalogError {
    /// Shorthand for a product id that does not exist.
    pub fn product_not_found(id: i64) -> Self {
        CatalogError::NotFound(format!("product {} does not exist", id))
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        let status = match &self {
            CatalogError::Validation(_) => StatusCode::BAD_REQUEST,
            CatalogError::NotFound(_) => StatusCode::NOT_FOUND,
            CatalogError::Unexpected(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(ErrorResponse::new(self.to_string()));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the catalog service.
pub type Result<T> = std::result::Result<T, CatalogError>;
