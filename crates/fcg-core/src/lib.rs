//! fcg-core: shared foundation for the arithmetic computation graph.
//!
//! Contains:
//! - key (compact node keys handed out by the graph store)
//! - value (the scalar type every node carries)
//! - error (shared error types)

pub mod error;
pub mod key;
pub mod value;

// Re-exports: nice ergonomics for downstream crates
pub use error::{FcgError, FcgResult};
pub use key::NodeKey;
pub use value::*;
