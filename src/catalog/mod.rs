//! Catalog Domain Module
//!
//! This module contains the read-only product catalog:
//! - Domain models (CatalogItem, query/response shapes, filter allow-list)
//! - Record mapping helpers (strict decoding of store records)
//! - REST API handlers

pub mod handlers;
pub mod helpers;
pub mod models;

pub use handlers::routes;
pub use models::CatalogItem;
