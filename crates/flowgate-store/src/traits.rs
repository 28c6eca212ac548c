//! The [`ProgramStore`] trait defining the storage contract for program
//! graph documents.
//!
//! Each operation is a single store call committed immediately; the gateway
//! keeps no cross-request state of its own. All backends (DgraphStore,
//! InMemoryStore) implement this trait, ensuring they are fully swappable
//! without changing handler logic. The trait is async and object-safe so a
//! shared `Arc<dyn ProgramStore>` can live in server state.

use async_trait::async_trait;
use flowgate_model::ProgramGraph;

use crate::error::StoreError;

/// The storage contract for program graph documents.
#[async_trait]
pub trait ProgramStore: Send + Sync {
    /// Lists all persisted program documents.
    ///
    /// Returns the raw store result: a JSON array of program documents, each
    /// carrying its store-assigned `uid` alongside the graph fields.
    async fn list_programs(&self) -> Result<serde_json::Value, StoreError>;

    /// Persists a program graph as a set-mutation, committed immediately.
    ///
    /// The store allocates identity for new documents; submitting the same
    /// graph twice stores two documents.
    async fn upsert_program(&self, graph: &ProgramGraph) -> Result<(), StoreError>;

    /// Removes the node data of the document identified by `id`, committed
    /// immediately.
    ///
    /// `id` is a store uid. Deleting an unknown id is a no-op at the store
    /// level, not an error.
    async fn delete_program(&self, id: &str) -> Result<(), StoreError>;
}
