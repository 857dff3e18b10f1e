//! In-memory graph operations — the core data structure.

pub mod builder;
pub mod directed_graph;
pub mod traversal;

pub use builder::GraphBuilder;
pub use directed_graph::Graph;
pub use traversal::{bfs_traverse, dfs_traverse, revisit_check, traverse, TraversalOrder};
