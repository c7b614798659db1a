//! Core graph data structures.

use fcg_core::{EMPTY_VALUE, NodeKey, Value, wrapping_product, wrapping_sum};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{GraphError, GraphResult};

/// Operator attached to an operand edge.
///
/// Only `Add` and `Mult` are ever attached by the builder. `Noop` stands
/// for "no edge" and `Equal` is reserved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Operator {
    Noop = 0,
    Mult = 1,
    Add = 2,
    Equal = 3,
}

impl Operator {
    /// Combine two operand values, or `None` if this operator does not
    /// produce a value.
    pub fn apply(self, lhs: Value, rhs: Value) -> Option<Value> {
        match self {
            Operator::Add => Some(wrapping_sum(lhs, rhs)),
            Operator::Mult => Some(wrapping_product(lhs, rhs)),
            Operator::Noop | Operator::Equal => None,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Noop => "noop",
            Operator::Mult => "*",
            Operator::Add => "+",
            Operator::Equal => "==",
        }
    }
}

/// Operand descriptor owned by a combinator node.
///
/// The edge points from the node to its operands; operand order is kept
/// as given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    pub operands: Vec<NodeKey>,
    pub operator: Operator,
}

impl Edge {
    /// Edge over exactly two operands.
    pub fn binary(left: NodeKey, right: NodeKey, operator: Operator) -> Self {
        Self {
            operands: vec![left, right],
            operator,
        }
    }
}

/// A scalar vertex of the graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    pub key: NodeKey,
    pub value: Value,
    /// `None` for leaves.
    pub edge: Option<Edge>,
}

impl Node {
    pub fn is_leaf(&self) -> bool {
        self.edge.is_none()
    }
}

/// Append-only, key-addressed sequence of nodes.
///
/// A node's key is the length of the store at the moment it is appended,
/// so keys grow strictly with creation order.
#[derive(Debug, Clone, Default)]
pub struct GraphStore {
    pub(crate) nodes: Vec<Node>,
}

impl GraphStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// All nodes in creation order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Get a node by key.
    pub fn node(&self, key: NodeKey) -> GraphResult<&Node> {
        self.nodes.get(key.index()).ok_or(GraphError::NodeNotFound {
            key,
            len: self.nodes.len(),
        })
    }

    fn push(&mut self, value: Value, edge: Option<Edge>) -> NodeKey {
        let key = NodeKey::from_index(self.nodes.len());
        debug!(%key, value, ?edge, "append node");
        self.nodes.push(Node { key, value, edge });
        key
    }

    /// Append a leaf node holding `initial_value`.
    pub fn create_node(&mut self, initial_value: Value) -> NodeKey {
        self.push(initial_value, None)
    }

    /// Append a node combining two existing operands.
    ///
    /// The node's value stays at the placeholder until evaluation.
    pub fn attach_binary_node(
        &mut self,
        left: NodeKey,
        right: NodeKey,
        operator: Operator,
    ) -> NodeKey {
        self.push(EMPTY_VALUE, Some(Edge::binary(left, right, operator)))
    }

    /// Append a node with an arbitrary edge.
    ///
    /// Nothing about the edge is checked here; malformed edges surface as
    /// errors from the evaluation pass.
    pub fn attach_node(&mut self, edge: Edge, initial_value: Value) -> NodeKey {
        self.push(initial_value, Some(edge))
    }

    /// Current value of a node.
    pub fn get_value(&self, key: NodeKey) -> GraphResult<Value> {
        self.node(key).map(|n| n.value)
    }

    /// Overwrite the value of a node.
    pub fn set_value(&mut self, key: NodeKey, value: Value) -> GraphResult<()> {
        let len = self.nodes.len();
        let node = self
            .nodes
            .get_mut(key.index())
            .ok_or(GraphError::NodeNotFound { key, len })?;
        node.value = value;
        Ok(())
    }
}
