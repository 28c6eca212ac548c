//! Dgraph implementation of [`ProgramStore`] over the HTTP API.
//!
//! Talks to a Dgraph Alpha's HTTP endpoints: `POST {base}/query` with a DQL
//! query for listing, and `POST {base}/mutate?commitNow=true` for set and
//! delete mutations. One `reqwest::Client` is constructed with the store and
//! shared across all requests for the life of the process.

use async_trait::async_trait;
use flowgate_model::ProgramGraph;
use serde_json::Value;

use crate::error::StoreError;
use crate::traits::ProgramStore;

/// DQL query returning every persisted program with its node tree.
///
/// Each nested `expand(_all_)` block descends one uid-predicate level, and a
/// node's connections sit four levels down: node -> inputs/outputs ->
/// slot -> connections -> {node, input/output}. The expansion must reach all
/// four or listed slots come back stripped of their connections.
const LIST_PROGRAMS_QUERY: &str = r#"{
  programs(func: has(programName)) {
    uid
    programName
    nodesData {
      uid
      expand(_all_) {
        uid
        expand(_all_) {
          uid
          expand(_all_) {
            uid
            expand(_all_)
          }
        }
      }
    }
  }
}"#;

/// Dgraph-backed program store.
pub struct DgraphStore {
    client: reqwest::Client,
    base_url: String,
}

impl DgraphStore {
    /// Creates a store client for the Dgraph Alpha at `base_url`
    /// (e.g. `http://localhost:8080`).
    pub fn new(base_url: &str) -> Self {
        DgraphStore {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn mutate_endpoint(&self) -> String {
        format!("{}/mutate?commitNow=true", self.base_url)
    }
}

/// Builds the RDF delete block removing a document's `nodesData` predicate.
fn delete_nquads(uid: &str) -> String {
    format!("{{ delete {{ <{}> <nodesData> * . }} }}", uid)
}

/// Checks a mutation response for transport-level and store-level errors.
///
/// Dgraph reports mutation failures both via non-2xx statuses and via an
/// `errors` array in a 200 body, so both paths map to [`StoreError::Rejected`].
async fn check_mutation_response(response: reqwest::Response) -> Result<(), StoreError> {
    let status = response.status();
    let body = response.text().await?;
    if !status.is_success() {
        return Err(StoreError::Rejected {
            status: status.as_u16(),
            body,
        });
    }
    let parsed: Value = serde_json::from_str(&body)?;
    if let Some(errors) = parsed.get("errors").and_then(Value::as_array) {
        if !errors.is_empty() {
            return Err(StoreError::Rejected {
                status: status.as_u16(),
                body,
            });
        }
    }
    Ok(())
}

#[async_trait]
impl ProgramStore for DgraphStore {
    async fn list_programs(&self) -> Result<Value, StoreError> {
        let response = self
            .client
            .post(format!("{}/query", self.base_url))
            .header("Content-Type", "application/dql")
            .body(LIST_PROGRAMS_QUERY)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(StoreError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: Value = serde_json::from_str(&body)?;
        parsed
            .get("data")
            .and_then(|data| data.get("programs"))
            .cloned()
            .ok_or_else(|| StoreError::MalformedResponse {
                reason: "query response missing data.programs".to_string(),
            })
    }

    async fn upsert_program(&self, graph: &ProgramGraph) -> Result<(), StoreError> {
        let mutation = serde_json::json!({ "set": [graph] });
        tracing::debug!(program = %graph.program_name, "submitting set mutation");

        let response = self
            .client
            .post(self.mutate_endpoint())
            .json(&mutation)
            .send()
            .await?;
        check_mutation_response(response).await
    }

    async fn delete_program(&self, id: &str) -> Result<(), StoreError> {
        tracing::debug!(%id, "submitting delete mutation");

        let response = self
            .client
            .post(self.mutate_endpoint())
            .header("Content-Type", "application/rdf")
            .body(delete_nquads(id))
            .send()
            .await?;
        check_mutation_response(response).await
    }
}
