//! fcg-graph: arithmetic computation graph for fcg.
//!
//! Provides:
//! - An append-only graph store of `u64` nodes
//! - An incremental builder (`input`, `constant`, `add`, `multiply`)
//! - A single forward evaluation pass with wrapping arithmetic
//! - Text and JSON dumps for diagnostics
//!
//! # Example
//!
//! ```
//! use fcg_graph::GraphBuilder;
//!
//! // f(x) = x^2 + x + 5
//! let mut builder = GraphBuilder::new();
//! let x = builder.input(6);
//! let x_squared = builder.multiply(x, x);
//! let five = builder.constant(5);
//! let x_squared_plus_5 = builder.add(x_squared, five);
//! let y = builder.add(x_squared_plus_5, x);
//!
//! builder.evaluate().unwrap();
//! assert_eq!(builder.value(y).unwrap(), 47);
//! ```

pub mod builder;
pub mod error;
pub mod eval;
pub mod graph;
pub mod view;

// Re-exports for ergonomics
pub use builder::GraphBuilder;
pub use error::{GraphError, GraphResult};
pub use eval::{EvalSummary, evaluate};
pub use graph::{Edge, GraphStore, Node, Operator};
pub use view::{dump_json, write_dump};
