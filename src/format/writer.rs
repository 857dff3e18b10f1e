//! Writes graph documents from an in-memory graph.

use std::io::Write;
use std::path::Path;

use crate::graph::Graph;
use crate::types::GraphResult;

use super::GraphDocument;

/// Writer for JSON graph documents.
#[derive(Debug, Clone, Copy, Default)]
pub struct GraphWriter {
    pretty: bool,
}

impl GraphWriter {
    /// Create a writer emitting compact JSON.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a writer emitting indented JSON.
    pub fn pretty() -> Self {
        Self { pretty: true }
    }

    /// Write a complete Graph to a document file.
    pub fn write_to_file(&self, graph: &Graph, path: &Path) -> GraphResult<()> {
        let file = std::fs::File::create(path)?;
        let mut writer = std::io::BufWriter::new(file);
        self.write_to(graph, &mut writer)?;
        writer.flush()?;
        Ok(())
    }

    /// Write a complete Graph to any writer.
    pub fn write_to(&self, graph: &Graph, writer: &mut impl Write) -> GraphResult<()> {
        let document = GraphDocument::from_graph(graph);
        if self.pretty {
            serde_json::to_writer_pretty(&mut *writer, &document)?;
        } else {
            serde_json::to_writer(&mut *writer, &document)?;
        }
        writeln!(writer)?;
        Ok(())
    }
}
