//! Application state for the API server

use std::sync::Arc;

use receipt_store::{MemoryScoreStore, ScoreStore};

/// API server state
#[derive(Clone)]
pub struct AppState {
    /// Score records, shared by every request task
    pub store: Arc<dyn ScoreStore>,
    /// API version
    pub version: String,
}

impl AppState {
    /// Create state around an existing store
    pub fn new(store: Arc<dyn ScoreStore>) -> Self {
        Self {
            store,
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }

    /// Create state backed by a fresh in-memory store
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryScoreStore::new()))
    }
}
