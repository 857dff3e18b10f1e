//! keygraph — in-memory directed graph keyed by integers.
//!
//! Nodes own their outgoing weighted edges. The graph offers depth-first and
//! breadth-first traversal from a start node, and a revisit check that reports
//! whether any node is reachable twice from that start.
//!
//! A [`Graph`] is a plain owned value with no internal locking. Wrap it in a
//! mutex if it has to be shared between threads.

pub mod cli;
pub mod format;
pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use format::{EdgeRecord, GraphDocument, GraphReader, GraphWriter};
pub use graph::{Graph, GraphBuilder, TraversalOrder};
pub use types::{Edge, GraphError, GraphResult, Node, NodeKey};
