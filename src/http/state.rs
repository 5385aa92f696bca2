//! Application state for the HTTP server.

use crate::store::DataStore;
use std::sync::Arc;

/// Shared application state passed to all handlers.
///
/// The data store is immutable, so sharing the `Arc` across any number of
/// concurrent requests needs no further coordination.
#[derive(Clone)]
pub struct AppState {
    /// Reference data loaded once at startup
    pub store: Arc<DataStore>,
}

impl AppState {
    /// Create a new application state around the loaded data store.
    pub fn new(store: Arc<DataStore>) -> Self {
        Self { store }
    }
}
