//! Single forward evaluation pass.

use fcg_core::{NodeKey, Value};
use tracing::{debug, debug_span, trace};

use crate::error::{GraphError, GraphResult};
use crate::graph::GraphStore;

/// Counts reported by a successful evaluation pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EvalSummary {
    /// Nodes without an edge, left untouched.
    pub leaves: usize,
    /// Combinator nodes whose value was computed.
    pub resolved: usize,
}

/// Resolve every combinator node's value from its operands.
///
/// Nodes are visited in creation order. Operands must have lower keys than
/// the node that uses them, so each operand is already resolved when it is
/// read. On error the pass stops; nodes visited before the failing one keep
/// their computed values.
pub fn evaluate(store: &mut GraphStore) -> GraphResult<EvalSummary> {
    let _span = debug_span!("evaluate", nodes = store.len()).entered();
    let mut summary = EvalSummary::default();

    for index in 0..store.nodes.len() {
        let node = &store.nodes[index];
        let Some(edge) = &node.edge else {
            summary.leaves += 1;
            continue;
        };

        let key = node.key;
        let [left, right] = edge.operands[..] else {
            return Err(GraphError::Arity {
                node: key,
                count: edge.operands.len(),
            });
        };
        let operator = edge.operator;

        let lhs = operand_value(store, key, left)?;
        let rhs = operand_value(store, key, right)?;
        let value = operator
            .apply(lhs, rhs)
            .ok_or(GraphError::UnexpectedOperator { node: key, operator })?;

        trace!(%key, %left, %right, op = operator.symbol(), value, "resolved");
        store.nodes[index].value = value;
        summary.resolved += 1;
    }

    debug!(leaves = summary.leaves, resolved = summary.resolved, "evaluation done");
    Ok(summary)
}

fn operand_value(store: &GraphStore, node: NodeKey, operand: NodeKey) -> GraphResult<Value> {
    let value = store.get_value(operand)?;
    if operand >= node {
        return Err(GraphError::ForwardReference { node, operand });
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{Edge, Operator};

    fn key(i: usize) -> NodeKey {
        NodeKey::from_index(i)
    }

    #[test]
    fn evaluate_empty_store() {
        let mut store = GraphStore::new();
        assert_eq!(evaluate(&mut store).unwrap(), EvalSummary::default());
    }

    #[test]
    fn evaluate_counts_leaves_and_resolved() {
        let mut store = GraphStore::new();
        let a = store.create_node(3);
        let b = store.create_node(4);
        let c = store.attach_binary_node(a, b, Operator::Mult);
        let d = store.attach_binary_node(c, a, Operator::Add);

        let summary = evaluate(&mut store).unwrap();
        assert_eq!(summary, EvalSummary { leaves: 2, resolved: 2 });
        assert_eq!(store.get_value(c).unwrap(), 12);
        assert_eq!(store.get_value(d).unwrap(), 15);
    }

    #[test]
    fn three_operand_edge_is_arity_error() {
        let mut store = GraphStore::new();
        let a = store.create_node(1);
        let b = store.create_node(2);
        let c = store.create_node(3);
        let bad = store.attach_node(
            Edge {
                operands: vec![a, b, c],
                operator: Operator::Add,
            },
            0,
        );

        let err = evaluate(&mut store).unwrap_err();
        assert_eq!(err, GraphError::Arity { node: bad, count: 3 });
        assert!(err.to_string().contains('3'));
    }

    #[test]
    fn nodes_before_failure_keep_values() {
        let mut store = GraphStore::new();
        let a = store.create_node(5);
        let sum = store.attach_binary_node(a, a, Operator::Add);
        store.attach_node(
            Edge {
                operands: vec![a],
                operator: Operator::Add,
            },
            0,
        );
        let after = store.attach_binary_node(a, a, Operator::Mult);

        assert!(matches!(
            evaluate(&mut store),
            Err(GraphError::Arity { count: 1, .. })
        ));
        assert_eq!(store.get_value(sum).unwrap(), 10);
        assert_eq!(store.get_value(after).unwrap(), 0);
    }

    #[test]
    fn missing_operand_is_not_found() {
        let mut store = GraphStore::new();
        let a = store.create_node(1);
        store.attach_binary_node(a, key(40), Operator::Add);

        assert_eq!(
            evaluate(&mut store),
            Err(GraphError::NodeNotFound { key: key(40), len: 2 })
        );
    }

    #[test]
    fn forward_operand_is_rejected() {
        let mut store = GraphStore::new();
        let a = store.create_node(1);
        let fwd = store.attach_binary_node(a, key(2), Operator::Add);
        store.create_node(9);

        assert_eq!(
            evaluate(&mut store),
            Err(GraphError::ForwardReference {
                node: fwd,
                operand: key(2)
            })
        );
    }

    #[test]
    fn self_reference_is_rejected() {
        let mut store = GraphStore::new();
        let a = store.create_node(1);
        let own = store.attach_binary_node(a, key(1), Operator::Mult);

        assert!(matches!(
            evaluate(&mut store),
            Err(GraphError::ForwardReference { node, operand }) if node == own && operand == own
        ));
    }

    #[test]
    fn equal_operator_on_edge_is_rejected() {
        let mut store = GraphStore::new();
        let a = store.create_node(1);
        let b = store.create_node(1);
        let eq = store.attach_binary_node(a, b, Operator::Equal);

        assert_eq!(
            evaluate(&mut store),
            Err(GraphError::UnexpectedOperator {
                node: eq,
                operator: Operator::Equal
            })
        );
    }

    #[test]
    fn overflow_wraps() {
        let mut store = GraphStore::new();
        let max = store.create_node(u64::MAX);
        let two = store.create_node(2);
        let sum = store.attach_binary_node(max, two, Operator::Add);
        let prod = store.attach_binary_node(max, two, Operator::Mult);

        evaluate(&mut store).unwrap();
        assert_eq!(store.get_value(sum).unwrap(), 1);
        assert_eq!(store.get_value(prod).unwrap(), u64::MAX - 1);
    }
}
