use core::fmt;
use core::num::NonZeroUsize;

use serde::{Deserialize, Serialize};

/// Key of a node inside a graph store.
///
/// A key is the node's position in the store, assigned when the node is
/// appended and never reused. It is stored as `index + 1` so that
/// `Option<NodeKey>` costs nothing extra.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "usize", from = "usize")]
pub struct NodeKey(NonZeroUsize);

impl NodeKey {
    /// Create a key from a 0-based index.
    ///
    /// A store never holds `usize::MAX` nodes, so `index + 1` cannot
    /// saturate for any index it issues.
    pub fn from_index(index: usize) -> Self {
        Self(NonZeroUsize::MIN.saturating_add(index))
    }

    /// Recover the 0-based index.
    pub fn index(self) -> usize {
        self.0.get() - 1
    }
}

impl fmt::Debug for NodeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeKey({})", self.index())
    }
}

impl fmt::Display for NodeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.index())
    }
}

impl From<NodeKey> for usize {
    fn from(key: NodeKey) -> Self {
        key.index()
    }
}

impl From<usize> for NodeKey {
    fn from(index: usize) -> Self {
        NodeKey::from_index(index)
    }
}
