//! End-to-end integration tests for the gateway HTTP API.
//!
//! Tests exercise the full stack: HTTP request -> axum router -> handler ->
//! ProgramStore -> HTTP response.
//!
//! Each test creates a fresh AppState backed by an in-memory store. Tests
//! use `tower::ServiceExt::oneshot` to send requests directly to the router
//! without starting a network server.

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use flowgate_model::ProgramGraph;
use flowgate_store::{ProgramStore, StoreError};
use serde_json::json;
use tower::ServiceExt;

use flowgate_server::router::build_router;
use flowgate_server::state::AppState;

// ---------------------------------------------------------------------------
// Test helpers
// ---------------------------------------------------------------------------

/// Creates a fresh router backed by an in-memory store.
fn test_app() -> Router {
    build_router(AppState::in_memory())
}

/// A store whose every operation is rejected, for exercising the
/// failure-to-5xx mapping through the router.
struct RejectingStore;

#[async_trait]
impl ProgramStore for RejectingStore {
    async fn list_programs(&self) -> Result<serde_json::Value, StoreError> {
        Err(StoreError::Rejected {
            status: 500,
            body: "store down".to_string(),
        })
    }

    async fn upsert_program(&self, _graph: &ProgramGraph) -> Result<(), StoreError> {
        Err(StoreError::Rejected {
            status: 500,
            body: "store down".to_string(),
        })
    }

    async fn delete_program(&self, _id: &str) -> Result<(), StoreError> {
        Err(StoreError::Rejected {
            status: 500,
            body: "store down".to_string(),
        })
    }
}

/// Creates a router whose store rejects every operation.
fn rejecting_app() -> Router {
    build_router(AppState::new(Arc::new(RejectingStore)))
}

/// Sends a POST request with a raw body and returns (status, body text).
async fn post_raw(app: &Router, path: &str, body: &str) -> (StatusCode, String) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(path)
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, String::from_utf8_lossy(&body_bytes).into_owned())
}

/// Sends a POST request with a JSON body and returns the status.
async fn post_json(app: &Router, path: &str, body: serde_json::Value) -> StatusCode {
    let (status, _) = post_raw(app, path, &serde_json::to_string(&body).unwrap()).await;
    status
}

/// Sends a GET request and returns (status, json).
async fn get_json(app: &Router, path: &str) -> (StatusCode, serde_json::Value) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body_bytes).unwrap_or(json!(null));
    (status, json)
}

/// A small two-node program in the editor's export shape.
fn sample_graph(name: &str) -> serde_json::Value {
    json!({
        "programName": name,
        "nodesData": [
            {
                "id": 1,
                "name": "x",
                "data": { "kind": "variable", "variable": "x", "number": "4" },
                "class": "variable",
                "html": "<div>x</div>",
                "typenode": "vue",
                "outputs": {
                    "output_1": {
                        "connections": [ { "node": "2", "output": "input_1" } ]
                    }
                },
                "pos_x": 40.0,
                "pos_y": 60.0
            },
            {
                "id": 2,
                "name": "sum",
                "data": { "kind": "arithmetic", "num1": "x", "num2": "8", "result": 12.0 },
                "class": "sum",
                "html": "<div>sum</div>",
                "typenode": "vue",
                "inputs": {
                    "input_1": {
                        "connections": [ { "node": "1", "input": "output_1" } ]
                    }
                },
                "pos_x": 180.0,
                "pos_y": 60.0
            }
        ]
    })
}

/// Lists programs and asserts the response is a 200 JSON array.
async fn list_programs(app: &Router) -> Vec<serde_json::Value> {
    let (status, body) = get_json(app, "/getAllPrograms").await;
    assert_eq!(status, StatusCode::OK);
    body.as_array().expect("list response is an array").clone()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[tokio::test]
async fn empty_store_lists_empty_array() {
    let app = test_app();
    let programs = list_programs(&app).await;
    assert!(programs.is_empty());
}

#[tokio::test]
async fn upsert_then_list_round_trips() {
    let app = test_app();
    let graph = sample_graph("P1");

    let status = post_json(&app, "/setAllPrograms", graph.clone()).await;
    assert_eq!(status, StatusCode::OK);

    let programs = list_programs(&app).await;
    assert_eq!(programs.len(), 1);
    // Field-for-field round-trip of everything the caller posted; the store
    // adds its own uid alongside.
    assert_eq!(programs[0]["programName"], graph["programName"]);
    assert_eq!(programs[0]["nodesData"], graph["nodesData"]);
    assert!(programs[0]["uid"].is_string());
}

#[tokio::test]
async fn distinct_programs_list_as_separate_entries() {
    let app = test_app();

    let status = post_json(&app, "/setAllPrograms", sample_graph("P1")).await;
    assert_eq!(status, StatusCode::OK);
    let status = post_json(&app, "/setAllPrograms", sample_graph("P2")).await;
    assert_eq!(status, StatusCode::OK);

    let programs = list_programs(&app).await;
    assert_eq!(programs.len(), 2);
    let names: Vec<&str> = programs
        .iter()
        .map(|p| p["programName"].as_str().unwrap())
        .collect();
    assert!(names.contains(&"P1"));
    assert!(names.contains(&"P2"));
}

#[tokio::test]
async fn delete_removes_node_data() {
    let app = test_app();
    post_json(&app, "/setAllPrograms", sample_graph("P1")).await;

    let programs = list_programs(&app).await;
    let uid = programs[0]["uid"].as_str().unwrap().to_string();

    let status = post_json(
        &app,
        &format!("/deleteProgram?id={}", uid),
        json!(null),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let programs = list_programs(&app).await;
    assert!(programs[0].get("nodesData").is_none());
}

#[tokio::test]
async fn delete_unknown_id_leaves_other_programs_untouched() {
    let app = test_app();
    post_json(&app, "/setAllPrograms", sample_graph("P1")).await;

    let status = post_json(&app, "/deleteProgram?id=0xdeadbeef", json!(null)).await;
    assert_eq!(status, StatusCode::OK);

    let programs = list_programs(&app).await;
    assert_eq!(programs.len(), 1);
    assert_eq!(programs[0]["programName"], "P1");
    assert!(programs[0].get("nodesData").is_some());
}

#[tokio::test]
async fn delete_without_id_is_bad_request() {
    let app = test_app();
    let status = post_json(&app, "/deleteProgram", json!(null)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn malformed_body_is_rejected_and_stored_data_survives() {
    let app = test_app();
    post_json(&app, "/setAllPrograms", sample_graph("P1")).await;

    let (status, body) = post_raw(&app, "/setAllPrograms", "{not json").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.contains("error"), "expected error body, got: {}", body);

    // A body missing the required programName is also a decode failure.
    let status = post_json(&app, "/setAllPrograms", json!({ "nodesData": [] })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let programs = list_programs(&app).await;
    assert_eq!(programs.len(), 1);
    assert_eq!(programs[0]["programName"], "P1");
}

#[tokio::test]
async fn store_rejection_maps_to_500_on_every_endpoint() {
    let app = rejecting_app();

    let (status, body) = get_json(&app, "/getAllPrograms").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"]["code"], "INTERNAL_ERROR");

    let (status, body) = post_raw(
        &app,
        "/setAllPrograms",
        &serde_json::to_string(&sample_graph("P1")).unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    let body: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(body["success"], false);
    assert_eq!(body["error"]["code"], "INTERNAL_ERROR");

    let (status, body) = post_raw(&app, "/deleteProgram?id=0x1", "").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    let body: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(body["success"], false);
    assert_eq!(body["error"]["code"], "INTERNAL_ERROR");
}

#[tokio::test]
async fn unreachable_store_maps_to_502_not_process_exit() {
    // A Dgraph backend pointed at a closed local port fails at the transport
    // level; the request gets a 502 and the process stays up to serve more.
    let app = build_router(AppState::dgraph("http://127.0.0.1:9"));

    let (status, body) = get_json(&app, "/getAllPrograms").await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"]["code"], "STORE_UNAVAILABLE");

    // The router still answers subsequent requests.
    let (status, _) = get_json(&app, "/getAllPrograms").await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
}

#[tokio::test]
async fn concurrent_upserts_both_persist() {
    let app = test_app();

    let (status_a, status_b) = tokio::join!(
        post_json(&app, "/setAllPrograms", sample_graph("A")),
        post_json(&app, "/setAllPrograms", sample_graph("B")),
    );
    assert_eq!(status_a, StatusCode::OK);
    assert_eq!(status_b, StatusCode::OK);

    let programs = list_programs(&app).await;
    assert_eq!(programs.len(), 2);
}
