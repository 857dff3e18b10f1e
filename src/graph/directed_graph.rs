//! Core graph structure — keyed nodes owning their outgoing edges.

use std::collections::HashMap;
use std::fmt;

use crate::types::{Edge, GraphError, GraphResult, Node, NodeKey};

use super::traversal;

/// A directed graph whose nodes are unique by integer key.
///
/// Nodes live in a single arena in insertion order; edges refer to their
/// targets by key. Nothing is ever removed, so every key stored in an edge
/// resolves for the lifetime of the graph.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    /// All nodes, in insertion order.
    nodes: Vec<Node>,
    /// Key index: key -> position in `nodes`.
    index: HashMap<NodeKey, usize>,
}

impl Graph {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges across all nodes.
    pub fn edge_count(&self) -> usize {
        self.nodes.iter().map(Node::out_degree).sum()
    }

    /// Whether a node with this key exists.
    pub fn contains_node(&self, key: NodeKey) -> bool {
        self.index.contains_key(&key)
    }

    /// Get a node by key.
    pub fn get_node(&self, key: NodeKey) -> Option<&Node> {
        self.index.get(&key).map(|&idx| &self.nodes[idx])
    }

    fn get_node_mut(&mut self, key: NodeKey) -> Option<&mut Node> {
        self.index.get(&key).map(|&idx| &mut self.nodes[idx])
    }

    /// All nodes, in insertion order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Outgoing edges of a node. Empty for an unknown key.
    pub fn edges_from(&self, key: NodeKey) -> &[Edge] {
        self.get_node(key).map(Node::edges).unwrap_or(&[])
    }

    /// Insert a node. A key that is already present is left as it is,
    /// edges included.
    pub fn add_node(&mut self, key: NodeKey) {
        if self.index.contains_key(&key) {
            log::debug!("Node {} already present, insert ignored", key);
            return;
        }
        self.index.insert(key, self.nodes.len());
        self.nodes.push(Node::new(key));
    }

    /// Add an edge `source -> target` carrying `weight`.
    ///
    /// When either endpoint is missing nothing is added and no error is
    /// reported. This differs from [`Node::add_adjacency`], which rejects a
    /// missing target.
    pub fn add_adjacency(&mut self, source: NodeKey, target: NodeKey, weight: i32) {
        if !self.contains_node(target) {
            log::debug!("Adjacency {} -> {} ignored: target not found", source, target);
            return;
        }
        match self.get_node_mut(source) {
            Some(node) => node.push_edge(Edge::new(weight, target)),
            None => {
                log::debug!("Adjacency {} -> {} ignored: source not found", source, target);
            }
        }
    }

    /// Resolve a traversal root, failing when the key is absent.
    pub(crate) fn root(&self, key: NodeKey) -> GraphResult<&Node> {
        self.get_node(key).ok_or(GraphError::NodeNotFound(key))
    }

    /// Nodes reachable from `source` in depth-first order.
    ///
    /// Uses an explicit stack: children are pushed in edge order, so the
    /// most recently added child is expanded first.
    pub fn depth_first_search(&self, source: NodeKey) -> GraphResult<Vec<&Node>> {
        traversal::dfs_traverse(self, source)
    }

    /// Nodes reachable from `source` in breadth-first (level) order.
    pub fn breadth_first_search(&self, source: NodeKey) -> GraphResult<Vec<&Node>> {
        traversal::bfs_traverse(self, source)
    }

    /// Whether a breadth-first walk from `source` reaches any node twice.
    ///
    /// Two distinct paths converging on one node count, so a diamond-shaped
    /// DAG reports `true`. See [`traversal::revisit_check`].
    pub fn is_cyclic(&self, source: NodeKey) -> GraphResult<bool> {
        traversal::revisit_check(self, source)
    }
}

/// Concatenation of every node's rendering, in insertion order.
impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for node in &self.nodes {
            write!(f, "{}", node)?;
        }
        Ok(())
    }
}
