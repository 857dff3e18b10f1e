//! The edge value owned by a source node.

use serde::{Deserialize, Serialize};

use super::NodeKey;

/// A directed, weighted connection to another node.
///
/// The target is held by key, so an edge never keeps its target alive; it is
/// resolved against the owning graph with [`crate::Graph::get_node`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    weight: i32,
    target: NodeKey,
}

impl Edge {
    /// Create a new edge pointing at `target`.
    pub fn new(weight: i32, target: NodeKey) -> Self {
        Self { weight, target }
    }

    /// Weight of the connection. Stored, never used by traversal.
    pub fn weight(&self) -> i32 {
        self.weight
    }

    /// Key of the node this edge points at.
    pub fn target(&self) -> NodeKey {
        self.target
    }
}
