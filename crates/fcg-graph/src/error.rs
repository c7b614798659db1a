//! Graph-specific error types.

use fcg_core::{FcgError, NodeKey};
use thiserror::Error;

use crate::graph::Operator;

/// Graph construction and evaluation errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// An operand edge does not name exactly two operands.
    #[error("Node {node} has an edge with {count} operands (expected 2)")]
    Arity { node: NodeKey, count: usize },

    /// A key was never issued by this store.
    #[error("Node {key} not found (store holds {len} nodes)")]
    NodeNotFound { key: NodeKey, len: usize },

    /// An operand is not strictly older than the node that consumes it.
    #[error("Node {node} refers to operand {operand}, which is not created before it")]
    ForwardReference { node: NodeKey, operand: NodeKey },

    /// An edge carries an operator the evaluator cannot combine with.
    #[error("Node {node} has an edge with unsupported operator {operator:?}")]
    UnexpectedOperator { node: NodeKey, operator: Operator },
}

pub type GraphResult<T> = Result<T, GraphError>;

impl From<GraphError> for FcgError {
    fn from(err: GraphError) -> Self {
        match err {
            GraphError::NodeNotFound { key, len } => FcgError::IndexOob {
                what: "node key",
                index: key.index(),
                len,
            },
            other => FcgError::Invariant {
                what: other.to_string(),
            },
        }
    }
}
