//! Service Module
//!
//! Catalog operations exposed to the transport layer.

mod catalog;

pub use catalog::CatalogService;
