//! Reads graph documents into an in-memory graph.

use std::io::Read;
use std::path::Path;

use crate::graph::Graph;
use crate::types::GraphResult;

use super::GraphDocument;

/// Reader for JSON graph documents.
pub struct GraphReader;

impl GraphReader {
    /// Read a document file into a Graph.
    pub fn read_from_file(path: &Path) -> GraphResult<Graph> {
        let file = std::fs::File::open(path)?;
        let mut reader = std::io::BufReader::new(file);
        Self::read_from(&mut reader)
    }

    /// Read from any reader into a Graph.
    pub fn read_from(reader: &mut impl Read) -> GraphResult<Graph> {
        let document: GraphDocument = serde_json::from_reader(reader)?;
        let (graph, dropped) = document.to_graph();
        log::debug!(
            "Loaded graph: {} nodes, {} edges ({} dropped)",
            graph.node_count(),
            graph.edge_count(),
            dropped
        );
        Ok(graph)
    }
}
