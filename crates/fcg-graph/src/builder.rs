//! Incremental graph builder.

use std::io;

use fcg_core::{NodeKey, Value};
use tracing::warn;

use crate::error::GraphResult;
use crate::eval::{self, EvalSummary};
use crate::graph::{GraphStore, Operator};
use crate::view;

/// Builder for constructing and evaluating an arithmetic graph.
///
/// Leaves are added with `input`/`constant`, combinators with `add` and
/// `multiply`. Combinator values stay at zero until `evaluate` is called.
/// Every method hands back a [`NodeKey`]; read values through the builder
/// so they always reflect the latest evaluation.
#[derive(Debug, Default)]
pub struct GraphBuilder {
    store: GraphStore,
}

impl GraphBuilder {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an input leaf.
    pub fn input(&mut self, value: Value) -> NodeKey {
        self.store.create_node(value)
    }

    /// Same as [`GraphBuilder::input`].
    pub fn init(&mut self, value: Value) -> NodeKey {
        self.input(value)
    }

    /// Add a constant leaf. Identical to an input at the data level.
    pub fn constant(&mut self, value: Value) -> NodeKey {
        self.store.create_node(value)
    }

    /// Add a node computing `a + b`.
    pub fn add(&mut self, a: NodeKey, b: NodeKey) -> NodeKey {
        self.store.attach_binary_node(a, b, Operator::Add)
    }

    /// Add a node computing `a * b`.
    pub fn multiply(&mut self, a: NodeKey, b: NodeKey) -> NodeKey {
        self.store.attach_binary_node(a, b, Operator::Mult)
    }

    /// Compare the current values of two nodes.
    ///
    /// Nothing is recorded in the graph. Before `evaluate`, combinator
    /// nodes still hold their placeholder.
    pub fn assert_equal(&self, a: NodeKey, b: NodeKey) -> GraphResult<bool> {
        Ok(self.store.get_value(a)? == self.store.get_value(b)?)
    }

    /// Run the evaluation pass over every node.
    pub fn evaluate(&mut self) -> GraphResult<EvalSummary> {
        eval::evaluate(&mut self.store)
    }

    /// Check the graph's constraints.
    ///
    /// Constraint checking is not implemented: this always returns `false`
    /// and must not be used to validate a graph.
    pub fn check_constraints(&self) -> bool {
        warn!(nodes = self.store.len(), "constraint checking is not implemented");
        false
    }

    /// Current value of a node.
    pub fn value(&self, key: NodeKey) -> GraphResult<Value> {
        self.store.get_value(key)
    }

    /// Write one line per node, in creation order.
    pub fn view_graph<W: io::Write>(&self, out: &mut W) -> io::Result<()> {
        view::write_dump(&self.store, out)
    }

    pub fn store(&self) -> &GraphStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut GraphStore {
        &mut self.store
    }

    pub fn into_store(self) -> GraphStore {
        self.store
    }
}
