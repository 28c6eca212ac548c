//! Router assembly for the gateway HTTP API.
//!
//! [`build_router`] wires the three handler functions to their routes with
//! CORS, timeout, and tracing middleware layers.

use std::time::Duration;

use axum::http::{header, HeaderName, Method};
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Per-request timeout covering the forwarded store call.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Builds the complete axum router with all API routes.
///
/// CORS allows any origin with the listed methods and headers, credentials
/// disabled. TraceLayer provides request-level logging via tracing.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            header::ACCEPT,
            header::AUTHORIZATION,
            header::CONTENT_TYPE,
            HeaderName::from_static("x-csrf-token"),
        ]);

    Router::new()
        .route("/getAllPrograms", get(handlers::programs::list_programs))
        .route("/setAllPrograms", post(handlers::programs::upsert_program))
        .route("/deleteProgram", post(handlers::programs::delete_program))
        .layer(TimeoutLayer::new(REQUEST_TIMEOUT))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
