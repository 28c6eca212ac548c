//! In-memory implementation of [`ProgramStore`].
//!
//! [`InMemoryStore`] is a first-class backend for tests and ephemeral
//! sessions. It mimics the Dgraph backend's observable semantics: every
//! set-mutation stores a fresh document under a newly allocated uid, listing
//! returns each document with its uid attached, and deleting clears the
//! matching document's node data (a no-op for unknown uids).

use async_trait::async_trait;
use flowgate_model::ProgramGraph;
use serde_json::Value;
use tokio::sync::Mutex;

use crate::error::StoreError;
use crate::traits::ProgramStore;

/// One stored document with its synthetic uid.
#[derive(Debug, Clone)]
struct StoredDocument {
    uid: String,
    graph: ProgramGraph,
}

#[derive(Debug, Default)]
struct Inner {
    documents: Vec<StoredDocument>,
    next_uid: u64,
}

/// In-memory program store.
///
/// Interior state lives behind a `tokio::sync::Mutex` so the store can be
/// shared immutably across async tasks like the production backend.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    inner: Mutex<Inner>,
}

impl InMemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        InMemoryStore::default()
    }
}

#[async_trait]
impl ProgramStore for InMemoryStore {
    async fn list_programs(&self) -> Result<Value, StoreError> {
        let inner = self.inner.lock().await;
        let mut programs = Vec::with_capacity(inner.documents.len());
        for doc in &inner.documents {
            let mut value = serde_json::to_value(&doc.graph)?;
            if let Value::Object(map) = &mut value {
                map.insert("uid".to_string(), Value::String(doc.uid.clone()));
            }
            programs.push(value);
        }
        Ok(Value::Array(programs))
    }

    async fn upsert_program(&self, graph: &ProgramGraph) -> Result<(), StoreError> {
        let mut inner = self.inner.lock().await;
        inner.next_uid += 1;
        let uid = format!("0x{:x}", inner.next_uid);
        inner.documents.push(StoredDocument {
            uid,
            graph: graph.clone(),
        });
        Ok(())
    }

    async fn delete_program(&self, id: &str) -> Result<(), StoreError> {
        let mut inner = self.inner.lock().await;
        // Unknown uids fall through silently, matching the store's
        // delete-pattern semantics.
        if let Some(doc) = inner.documents.iter_mut().find(|doc| doc.uid == id) {
            doc.graph.nodes_data = None;
        }
        Ok(())
    }
}
