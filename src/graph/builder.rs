//! Fluent API for building Graph instances.

use crate::types::NodeKey;

use super::Graph;

/// Fluent builder for constructing a [`Graph`].
///
/// Links are applied after all nodes, in the order they were declared, so a
/// link may name a node declared later. Links naming a key that was never
/// declared are dropped, exactly as [`Graph::add_adjacency`] drops them.
#[derive(Debug, Default)]
pub struct GraphBuilder {
    nodes: Vec<NodeKey>,
    links: Vec<(NodeKey, NodeKey, i32)>,
}

impl GraphBuilder {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a node.
    pub fn node(&mut self, key: NodeKey) -> &mut Self {
        self.nodes.push(key);
        self
    }

    /// Declare several nodes.
    pub fn nodes(&mut self, keys: impl IntoIterator<Item = NodeKey>) -> &mut Self {
        self.nodes.extend(keys);
        self
    }

    /// Add an edge between two nodes.
    pub fn link(&mut self, source: NodeKey, target: NodeKey, weight: i32) -> &mut Self {
        self.links.push((source, target, weight));
        self
    }

    /// Build the final Graph.
    pub fn build(&self) -> Graph {
        let mut graph = Graph::new();
        for &key in &self.nodes {
            graph.add_node(key);
        }
        for &(source, target, weight) in &self.links {
            graph.add_adjacency(source, target, weight);
        }
        graph
    }
}
