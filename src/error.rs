//! HTTP error responses
//!
//! Maps access-layer failures and malformed requests onto status codes and a
//! small JSON body: `{"error": <kind>, "message": <text>}`.

use crate::access::AccessError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Errors a route handler can return.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Failure from the Store Access Layer
    #[error(transparent)]
    Access(#[from] AccessError),

    /// Missing or unusable request input
    #[error("bad request: {0}")]
    BadRequest(String),
}

impl ApiError {
    /// HTTP status for this error
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Access(AccessError::StoreUnavailable(_)) => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::Access(AccessError::NotFound(_)) => StatusCode::NOT_FOUND,
            ApiError::Access(AccessError::UnknownFilter(_)) => StatusCode::BAD_REQUEST,
            ApiError::Access(AccessError::MalformedRecord { .. }) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }

    /// Stable machine-readable error kind
    pub fn kind(&self) -> &'static str {
        match self {
            ApiError::Access(AccessError::StoreUnavailable(_)) => "StoreUnavailable",
            ApiError::Access(AccessError::NotFound(_)) => "NotFound",
            ApiError::Access(AccessError::UnknownFilter(_)) => "UnknownFilter",
            ApiError::Access(AccessError::MalformedRecord { .. }) => "MalformedRecord",
            ApiError::BadRequest(_) => "BadRequest",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(kind = self.kind(), error = %self, "request failed");
        } else {
            tracing::warn!(kind = self.kind(), error = %self, "request rejected");
        }

        let body = json!({
            "error": self.kind(),
            "message": self.to_string(),
        });
        (status, Json(body)).into_response()
    }
}
