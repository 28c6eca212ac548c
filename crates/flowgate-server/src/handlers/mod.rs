//! HTTP handler modules for the gateway API.
//!
//! Handlers are thin: parse the request, forward one call to the shared
//! [`ProgramStore`](flowgate_store::ProgramStore), and map the result to a
//! response. No business logic lives in handlers.

pub mod programs;
