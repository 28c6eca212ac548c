//! HTTP gateway for persisting visual program graphs in an external store.
//!
//! Exposes three endpoints — list all programs, upsert a program, delete a
//! program's node data by id — each forwarding to the store as a single
//! committed query or mutation. This crate contains the server framework,
//! error handling, and route definitions.

pub mod error;
pub mod handlers;
pub mod router;
pub mod state;
