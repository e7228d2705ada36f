//! Shopping Cart Domain Module
//!
//! This module contains all shopping cart business logic, including:
//! - Domain models (CartEntry, inputs, responses)
//! - Business logic helpers (cart ids, record encoding, email checks)
//! - REST API handlers

pub mod handlers;
pub mod helpers;
pub mod models;

// Re-export commonly used types for convenience
pub use handlers::routes;
pub use models::CartEntry;
