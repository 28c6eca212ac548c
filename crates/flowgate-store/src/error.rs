//! Store error types for flowgate-store.
//!
//! [`StoreError`] covers all anticipated failure modes at the store seam:
//! transport failures reaching the store, serialization of documents and
//! responses, and mutations or queries the store rejects.

use thiserror::Error;

/// Errors produced by store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The HTTP request to the store failed (connect, timeout, I/O).
    #[error("store transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// JSON serialization or deserialization failed.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The store rejected the request.
    #[error("store rejected request (status {status}): {body}")]
    Rejected { status: u16, body: String },

    /// The store's response did not have the expected shape.
    #[error("malformed store response: {reason}")]
    MalformedResponse { reason: String },
}
