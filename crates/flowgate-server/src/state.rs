//! Application state holding the shared store client.
//!
//! [`AppState`] wraps a single `Arc<dyn ProgramStore>` created once at
//! startup and shared read-only across request tasks. Handlers never
//! construct their own store clients; the store's lifecycle is the
//! process's lifecycle.

use std::sync::Arc;

use flowgate_store::{DgraphStore, InMemoryStore, ProgramStore};

/// Shared application state for the HTTP server.
#[derive(Clone)]
pub struct AppState {
    /// The shared store client.
    pub store: Arc<dyn ProgramStore>,
}

impl AppState {
    /// Creates state around an existing store backend.
    pub fn new(store: Arc<dyn ProgramStore>) -> Self {
        AppState { store }
    }

    /// Creates state backed by the Dgraph Alpha at `base_url`.
    pub fn dgraph(base_url: &str) -> Self {
        AppState {
            store: Arc::new(DgraphStore::new(base_url)),
        }
    }

    /// Creates state backed by an in-memory store (for testing).
    pub fn in_memory() -> Self {
        AppState {
            store: Arc::new(InMemoryStore::new()),
        }
    }
}
