//! Store abstraction for persisted program graphs.
//!
//! Provides the [`ProgramStore`] trait defining the storage contract, plus
//! the [`DgraphStore`] (production, Dgraph over HTTP) and [`InMemoryStore`]
//! (tests, ephemeral sessions) as first-class backends.
//!
//! # Modules
//!
//! - [`error`]: StoreError enum with all failure modes
//! - [`traits`]: ProgramStore trait definition
//! - [`dgraph`]: DgraphStore implementation
//! - [`memory`]: InMemoryStore implementation

pub mod dgraph;
pub mod error;
pub mod memory;
pub mod traits;

// Re-export key types for ergonomic use.
pub use dgraph::DgraphStore;
pub use error::StoreError;
pub use memory::InMemoryStore;
pub use traits::ProgramStore;
