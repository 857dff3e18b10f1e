//! Serializable shape of a graph document.

use serde::{Deserialize, Serialize};

use crate::graph::Graph;
use crate::types::NodeKey;

/// One edge in a document: `source -> target` with a weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeRecord {
    pub source: NodeKey,
    pub target: NodeKey,
    #[serde(default)]
    pub weight: i32,
}

/// A graph as plain lists of keys and edges.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphDocument {
    #[serde(default)]
    pub nodes: Vec<NodeKey>,
    #[serde(default)]
    pub edges: Vec<EdgeRecord>,
}

impl GraphDocument {
    /// Snapshot a graph. Nodes keep insertion order; edges are grouped by
    /// source node and keep their per-node order.
    pub fn from_graph(graph: &Graph) -> Self {
        let nodes = graph.nodes().iter().map(|n| n.key()).collect();
        let edges = graph
            .nodes()
            .iter()
            .flat_map(|node| {
                node.edges().iter().map(move |edge| EdgeRecord {
                    source: node.key(),
                    target: edge.target(),
                    weight: edge.weight(),
                })
            })
            .collect();
        Self { nodes, edges }
    }

    /// Build a graph from this document.
    ///
    /// Returns the graph and the number of edges dropped because an endpoint
    /// was not declared.
    pub fn to_graph(&self) -> (Graph, usize) {
        let mut graph = Graph::new();
        for &key in &self.nodes {
            graph.add_node(key);
        }
        let mut dropped = 0;
        for record in &self.edges {
            if graph.contains_node(record.source) && graph.contains_node(record.target) {
                graph.add_adjacency(record.source, record.target, record.weight);
            } else {
                log::warn!(
                    "Dropping edge {} -> {}: endpoint not declared",
                    record.source,
                    record.target
                );
                dropped += 1;
            }
        }
        (graph, dropped)
    }
}
