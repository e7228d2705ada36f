//! Shopping Cart Domain Models
//!
//! This module contains all data structures related to the shopping cart
//! business domain.

use serde::{Deserialize, Serialize};

// =============================================================================
// Cart Domain Models
// =============================================================================

/// One "add to cart" event, persisted as its own row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartEntry {
    /// Identifier generated when the entry is written
    pub cart_id: String,

    /// Email address of the shopper
    pub user: String,

    /// Catalog item that was added (not checked against the catalog)
    pub item_id: String,
}

/// Body of `POST /items/{itemId}/addtocart`
#[derive(Debug, Deserialize)]
pub struct AddToCartInput {
    /// Email address of the shopper
    pub email: String,
}

/// Query string of `GET /cart`
#[derive(Debug, Deserialize)]
pub struct CartQuery {
    pub email: Option<String>,
}

/// Response for cart mutations
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    /// Status of the operation
    pub status: String,
}

/// Response for `GET /cart`
#[derive(Debug, Serialize)]
pub struct CountResponse {
    /// Number of entries in the shopper's cart
    pub count: usize,
}
