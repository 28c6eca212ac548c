//! Binary entrypoint for the flowgate HTTP server.
//!
//! Reads configuration from environment variables:
//! - `FLOWGATE_STORE_URL`: Dgraph Alpha HTTP base URL (default: "http://localhost:8080")
//! - `FLOWGATE_PORT`: Server listen port (default: "5000")

use flowgate_server::router::build_router;
use flowgate_server::state::AppState;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let store_url = std::env::var("FLOWGATE_STORE_URL")
        .unwrap_or_else(|_| "http://localhost:8080".to_string());
    let port = std::env::var("FLOWGATE_PORT")
        .unwrap_or_else(|_| "5000".to_string());

    let state = AppState::dgraph(&store_url);
    let app = build_router(state);

    let addr = format!("0.0.0.0:{}", port);
    tracing::info!(%store_url, "flowgate server starting on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
