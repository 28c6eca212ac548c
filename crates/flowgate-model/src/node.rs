//! Node and connection types for the visual program wire format.
//!
//! A [`Node`] is one element on the editor canvas: display metadata, a
//! position, kind-specific payload data, and named input/output slots whose
//! connections reference other nodes by id. Connection endpoints carry string
//! node ids because that is how the editor serializes them, even though
//! `Node.id` itself is numeric.

use serde::{Deserialize, Serialize};

/// One visual program node.
///
/// `id` is unique within a graph by convention; the gateway does not enforce
/// this, the store does. `html` holds the node's display template and
/// `typenode` its editor type tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Node identifier, unique within its graph.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Kind-specific payload. Nodes without payload omit the field.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<NodeData>,
    /// CSS class used by the editor.
    pub class: String,
    /// HTML display template.
    pub html: String,
    /// Editor type tag.
    pub typenode: String,
    /// Named input slots. Omitted for source nodes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inputs: Option<Inputs>,
    /// Named output slots. Omitted for sink nodes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outputs: Option<Outputs>,
    /// Canvas x coordinate.
    pub pos_x: f64,
    /// Canvas y coordinate.
    pub pos_y: f64,
}

/// Kind-specific node payload, tagged by node kind.
///
/// The editor's export overloads one loosely-typed record with optional
/// fields for every node kind. Here each kind is a variant carrying only the
/// fields meaningful for it, with a `kind` tag on the wire. The four variants
/// cover the semantic families the field set implies: arithmetic, assignment,
/// variable, and comparison nodes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum NodeData {
    /// An arithmetic node: two operands and an optional computed result.
    Arithmetic {
        /// First operand, as the editor captured it.
        num1: String,
        /// Second operand.
        num2: String,
        /// Computed result, if evaluation has run.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        result: Option<f64>,
    },
    /// An assignment node: a variable receiving a numeric value.
    Assignment {
        /// Target variable name.
        variable: String,
        /// Assigned value, if set.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        assign: Option<f64>,
    },
    /// A variable reference node.
    Variable {
        /// Variable name.
        variable: String,
        /// Literal number string, if the editor captured one.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        number: Option<String>,
    },
    /// A comparison node: two operands, an operator option, and the
    /// condition outcome.
    Comparison {
        /// First operand.
        num1: String,
        /// Second operand.
        num2: String,
        /// Selected comparison operator.
        option: String,
        /// Condition outcome, if evaluation has run.
        #[serde(
            default,
            rename = "conditionResult",
            skip_serializing_if = "Option::is_none"
        )]
        condition_result: Option<String>,
    },
}

/// The named input slots of a node.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Inputs {
    /// First input slot.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_1: Option<InputSlot>,
    /// Second input slot.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_2: Option<InputSlot>,
}

/// One input slot: the connections feeding it.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct InputSlot {
    /// Connections into this slot.
    pub connections: Vec<InputConnection>,
}

/// A connection endpoint on the input side: which upstream node/slot feeds
/// this input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputConnection {
    /// Upstream node id (string on the wire).
    pub node: String,
    /// Upstream slot name.
    pub input: String,
}

/// The named output slots of a node.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Outputs {
    /// The single output slot.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_1: Option<OutputSlot>,
}

/// One output slot: the connections it feeds.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct OutputSlot {
    /// Connections out of this slot.
    pub connections: Vec<OutputConnection>,
}

/// A connection endpoint on the output side: which downstream node/slot this
/// output feeds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConnection {
    /// Downstream node id (string on the wire).
    pub node: String,
    /// Downstream slot name.
    pub output: String,
}
