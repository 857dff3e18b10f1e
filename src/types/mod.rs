//! All data types for the keygraph library.

pub mod edge;
pub mod error;
pub mod node;

pub use edge::Edge;
pub use error::{GraphError, GraphResult};
pub use node::Node;

/// Scalar identifier of a node.
pub type NodeKey = i32;
