//! ProgramGraph: the top-level persisted document.

use serde::{Deserialize, Serialize};

use crate::node::Node;

/// A named visual program, persisted as one document.
///
/// Nodes have no lifecycle of their own: they exist only inside a
/// `ProgramGraph`, and deleting the graph's node set removes them with it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgramGraph {
    /// The program's display name.
    #[serde(rename = "programName")]
    pub program_name: String,
    /// The program's nodes, in editor order. Omitted when the program has
    /// no nodes.
    #[serde(
        rename = "nodesData",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub nodes_data: Option<Vec<Node>>,
}

impl ProgramGraph {
    /// Creates an empty program with the given name.
    pub fn new(name: &str) -> Self {
        ProgramGraph {
            program_name: name.to_string(),
            nodes_data: None,
        }
    }

    /// Number of nodes in the program.
    pub fn node_count(&self) -> usize {
        self.nodes_data.as_ref().map_or(0, Vec::len)
    }
}
