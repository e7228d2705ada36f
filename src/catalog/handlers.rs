//! REST API handlers for catalog reads

use super::models::*;
use crate::error::ApiError;
use crate::state::SharedState;
use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    routing::get,
    Json, Router,
};

/// Creates routes for catalog operations
pub fn routes() -> Router<SharedState> {
    Router::new()
        .route("/items", get(list_items))
        .route("/items/:item_id", get(get_item))
}

/// Endpoint: GET /items[?filter=<attr>&value=<val>]
/// Lists the whole catalog, or only matching items when both parameters are set.
async fn list_items(
    State(state): State<SharedState>,
    query: Result<Query<ItemsQuery>, QueryRejection>,
) -> Result<Json<ItemsResponse>, ApiError> {
    let Query(query) = query.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    let items = match query.filter_pair() {
        Some((filter, value)) => {
            tracing::info!(filter, value, "querying items");
            state.access.query_items_by_attribute(filter, value).await?
        }
        None => state.access.list_all_items().await?,
    };

    Ok(Json(ItemsResponse { items }))
}

/// Endpoint: GET /items/{itemId}
async fn get_item(
    State(state): State<SharedState>,
    Path(item_id): Path<String>,
) -> Result<Json<CatalogItem>, ApiError> {
    let item = state.access.get_item(&item_id).await?;
    Ok(Json(item))
}
