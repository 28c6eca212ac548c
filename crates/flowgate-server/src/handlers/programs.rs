//! Program graph handlers (list, upsert, delete).

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use flowgate_model::ProgramGraph;
use serde::Deserialize;

use crate::error::ApiError;
use crate::state::AppState;

/// Lists all stored program graphs.
///
/// `GET /getAllPrograms`
///
/// Returns the raw store query result: a JSON array of program documents.
pub async fn list_programs(
    State(state): State<AppState>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let programs = state.store.list_programs().await?;
    Ok(Json(programs))
}

/// Upserts one program graph.
///
/// `POST /setAllPrograms`
///
/// A body that fails to decode yields 400 with the decode error text and
/// nothing is submitted to the store. On success the mutation is committed
/// immediately and the response body is empty.
pub async fn upsert_program(
    State(state): State<AppState>,
    body: Result<Json<ProgramGraph>, JsonRejection>,
) -> Result<StatusCode, ApiError> {
    let Json(graph) = body.map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;

    tracing::info!(program = %graph.program_name, nodes = graph.node_count(), "upserting program");
    state.store.upsert_program(&graph).await?;
    Ok(StatusCode::OK)
}

/// Query parameters for [`delete_program`].
#[derive(Debug, Clone, Deserialize)]
pub struct DeleteProgramParams {
    /// Store uid of the program document to delete.
    pub id: String,
}

/// Deletes a program's node data by store id.
///
/// `POST /deleteProgram?id=<id>`
///
/// Committed immediately. An unknown id is a store-level no-op and still
/// answers 200.
pub async fn delete_program(
    State(state): State<AppState>,
    params: Result<Query<DeleteProgramParams>, QueryRejection>,
) -> Result<StatusCode, ApiError> {
    let Query(params) = params.map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;
    if params.id.is_empty() {
        return Err(ApiError::BadRequest("id must not be empty".to_string()));
    }

    tracing::info!(id = %params.id, "deleting program node data");
    state.store.delete_program(&params.id).await?;
    Ok(StatusCode::OK)
}
