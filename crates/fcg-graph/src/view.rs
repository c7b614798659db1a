//! Human-readable and JSON dumps of a graph store.

use std::fmt;
use std::io;

use crate::graph::{Edge, GraphStore, Node};

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.operator.symbol())?;
        for (i, key) in self.operands.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{key}")?;
        }
        write!(f, ")")
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n{}: value={}", self.key, self.value)?;
        match &self.edge {
            Some(edge) => write!(f, " edge={edge}"),
            None => write!(f, " leaf"),
        }
    }
}

/// Write one line per node, in creation order.
pub fn write_dump<W: io::Write>(store: &GraphStore, out: &mut W) -> io::Result<()> {
    for node in store.nodes() {
        writeln!(out, "{node}")?;
    }
    Ok(())
}

/// Render every node as a JSON array, in creation order.
pub fn dump_json(store: &GraphStore) -> serde_json::Result<String> {
    serde_json::to_string_pretty(store.nodes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Operator;
    use fcg_core::NodeKey;

    fn sample() -> GraphStore {
        let mut store = GraphStore::new();
        let x = store.create_node(6);
        store.attach_binary_node(x, x, Operator::Mult);
        store
    }

    #[test]
    fn node_display() {
        let store = sample();
        let lines: Vec<String> = store.nodes().iter().map(|n| n.to_string()).collect();
        assert_eq!(lines, vec!["n0: value=6 leaf", "n1: value=0 edge=*(0, 0)"]);
    }

    #[test]
    fn dump_keeps_creation_order() {
        let store = sample();
        let mut out = Vec::new();
        write_dump(&store, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("n0:"));
        assert!(lines[1].starts_with("n1:"));
    }

    #[test]
    fn json_dump_round_trips() {
        let store = sample();
        let json = dump_json(&store).unwrap();
        let nodes: Vec<Node> = serde_json::from_str(&json).unwrap();
        assert_eq!(nodes, store.nodes());
        assert_eq!(nodes[1].edge.as_ref().unwrap().operands, vec![NodeKey::from_index(0); 2]);
    }

    #[test]
    fn json_keys_are_plain_indices() {
        let store = sample();
        let value: serde_json::Value = serde_json::from_str(&dump_json(&store).unwrap()).unwrap();
        assert_eq!(value[1]["key"], 1);
        assert_eq!(value[1]["edge"]["operator"], "Mult");
        assert!(value[0]["edge"].is_null());
    }
}
