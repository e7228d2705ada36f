//! Store Access Layer errors

use crate::store::StoreError;
use thiserror::Error;

/// Failures of a Store Access Layer operation.
///
/// Every operation either returns a complete result or one of these; there are
/// no partial results.
#[derive(Debug, Error)]
pub enum AccessError {
    /// The store could not serve the request.
    #[error("store unavailable: {0}")]
    StoreUnavailable(#[from] StoreError),

    /// No catalog item has the requested id.
    #[error("item {0} not found")]
    NotFound(String),

    /// The requested filter attribute has no usable secondary index.
    #[error("unknown filter attribute: {0}")]
    UnknownFilter(String),

    /// A stored record does not match the catalog item shape.
    #[error("malformed record: field {field} {reason}")]
    MalformedRecord {
        /// Storage attribute at fault
        field: String,
        /// What was wrong with it
        reason: String,
    },
}

impl AccessError {
    pub(crate) fn malformed(field: &str, reason: impl Into<String>) -> Self {
        AccessError::MalformedRecord {
            field: field.to_string(),
            reason: reason.into(),
        }
    }
}
