//! Data model for persisted visual program graphs.
//!
//! The types in this crate are JSON mirrors of the store's node/edge model:
//! a [`ProgramGraph`] is the Drawflow-style export a frontend editor produces,
//! persisted as a single document. Serde renames pin the exact wire field
//! names (`programName`, `pos_x`, `typenode`, ...) so a graph round-trips
//! through the store field-for-field.

pub mod graph;
pub mod node;

// Re-export commonly used types
pub use graph::ProgramGraph;
pub use node::{
    InputConnection, InputSlot, Inputs, Node, NodeData, OutputConnection, OutputSlot, Outputs,
};
