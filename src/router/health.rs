//! Health check route

use crate::state::SharedState;
use axum::{routing::get, Json, Router};
use serde::Serialize;

/// Fixed message returned by `GET /`
pub const HEALTH_MESSAGE: &str = "Nothing here, used for health check. Try /items instead.";

#[derive(Serialize)]
struct HealthResponse {
    message: &'static str,
}

/// Creates the health check route
pub fn routes() -> Router<SharedState> {
    Router::new().route("/", get(health_check))
}

/// Endpoint: GET /
/// Never touches the store.
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        message: HEALTH_MESSAGE,
    })
}
