//! Application State
//!
//! Holds the Store Access Layer built once at startup and handed to every
//! route handler through axum's `State` extractor.

use crate::access::StoreAccess;
use crate::store::KeyValueStore;
use std::sync::Arc;

// =============================================================================
// Application State
// =============================================================================

/// Shared application state that can be safely passed between threads
pub type SharedState = Arc<AppState>;

/// Core application state: the typed access layer over the store client
pub struct AppState {
    /// Catalog and cart operations. Stateless apart from the client it wraps.
    pub access: StoreAccess,
}

impl AppState {
    /// Creates the state around a long-lived store client
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            access: StoreAccess::new(store),
        }
    }
}
