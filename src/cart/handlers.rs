//! REST API handlers for shopping cart operations
//!
//! This module implements HTTP endpoints for adding items to a cart
//! and counting a shopper's cart entries.

use super::{helpers::*, models::*};
use crate::error::ApiError;
use crate::state::SharedState;
use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    routing::{get, post},
    Json, Router,
};

/// Creates routes for cart-related operations
pub fn routes() -> Router<SharedState> {
    Router::new()
        .route("/items/:item_id/addtocart", post(add_to_cart))
        .route("/cart", get(cart_count))
}

/// Endpoint: POST /items/{itemId}/addtocart
/// Appends one cart entry for the shopper named in the body.
async fn add_to_cart(
    State(state): State<SharedState>,
    Path(item_id): Path<String>,
    body: Result<Json<AddToCartInput>, JsonRejection>,
) -> Result<Json<StatusResponse>, ApiError> {
    let Json(input) = body.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    let email = non_blank_email(Some(input.email.as_str()))
        .ok_or_else(|| ApiError::BadRequest("email must not be blank".to_string()))?;

    state.access.add_cart_entry(&item_id, email).await?;

    Ok(Json(StatusResponse {
        status: "success".to_string(),
    }))
}

/// Endpoint: GET /cart?email=<string>
/// Counts the shopper's cart entries.
async fn cart_count(
    State(state): State<SharedState>,
    query: Result<Query<CartQuery>, QueryRejection>,
) -> Result<Json<CountResponse>, ApiError> {
    let Query(query) = query.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    let email = non_blank_email(query.email.as_deref())
        .ok_or_else(|| ApiError::BadRequest("email query parameter is required".to_string()))?;

    let count = state.access.count_cart_entries(email).await?;
    tracing::debug!(count, "cart counted");

    Ok(Json(CountResponse { count }))
}
