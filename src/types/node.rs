//! Graph nodes and their outgoing adjacency lists.

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::Serialize;

use super::{Edge, GraphError, GraphResult, NodeKey};

/// A vertex identified by an integer key, owning its outgoing edges.
///
/// Equality and hashing look only at the key. The edge list can grow after a
/// node has been placed in a set or map without disturbing either.
#[derive(Debug, Clone, Serialize)]
pub struct Node {
    key: NodeKey,
    edges: Vec<Edge>,
}

impl Node {
    /// Create a node with no edges.
    pub fn new(key: NodeKey) -> Self {
        Self {
            key,
            edges: Vec::new(),
        }
    }

    /// Add an outgoing edge to `target`.
    ///
    /// Fails with [`GraphError::NullTarget`] when no target is given.
    pub fn add_adjacency(&mut self, target: Option<&Node>, weight: i32) -> GraphResult<()> {
        let target = target.ok_or(GraphError::NullTarget)?;
        self.push_edge(Edge::new(weight, target.key));
        Ok(())
    }

    /// Append an edge whose target the caller has already resolved.
    pub(crate) fn push_edge(&mut self, edge: Edge) {
        self.edges.push(edge);
    }

    /// The node's key.
    pub fn key(&self) -> NodeKey {
        self.key
    }

    /// Outgoing edges in the order they were added.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Number of outgoing edges, duplicates included.
    pub fn out_degree(&self) -> usize {
        self.edges.len()
    }

    /// Target keys in edge order.
    pub fn targets(&self) -> impl Iterator<Item = NodeKey> + '_ {
        self.edges.iter().map(Edge::target)
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for Node {}

impl Hash for Node {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}

/// Renders as `key:{target:weight,...}`, with a separator after every entry.
impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{{", self.key)?;
        for edge in &self.edges {
            write!(f, "{}:{},", edge.target(), edge.weight())?;
        }
        write!(f, "}}")
    }
}
