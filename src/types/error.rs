//! Error types for the keygraph library.

use thiserror::Error;

use super::NodeKey;

/// All errors that can occur in the keygraph library.
#[derive(Error, Debug)]
pub enum GraphError {
    /// No node with the requested key exists in the graph.
    #[error("Node {0} not found in the graph")]
    NodeNotFound(NodeKey),

    /// An adjacency was added to a node without a target.
    #[error("Target node cannot be null")]
    NullTarget,

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed graph document.
    #[error("Invalid graph document: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience result type for keygraph operations.
pub type GraphResult<T> = Result<T, GraphError>;
