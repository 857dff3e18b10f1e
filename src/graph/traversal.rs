//! Graph traversal algorithms (DFS, BFS, revisit check).

use std::collections::{HashSet, VecDeque};

use crate::types::{GraphResult, Node, NodeKey};

use super::Graph;

/// Order in which pending nodes are taken off the frontier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraversalOrder {
    /// Last pushed, first expanded (stack).
    DepthFirst,
    /// First pushed, first expanded (queue).
    BreadthFirst,
}

impl TraversalOrder {
    fn take(self, frontier: &mut VecDeque<NodeKey>) -> Option<NodeKey> {
        match self {
            Self::DepthFirst => frontier.pop_back(),
            Self::BreadthFirst => frontier.pop_front(),
        }
    }
}

/// Walk every node reachable from `source`, returning them in visit order.
///
/// A node taken off the frontier that was already visited is skipped and not
/// expanded again. Fails with `NodeNotFound` before touching anything when
/// `source` is absent.
pub fn traverse(graph: &Graph, source: NodeKey, order: TraversalOrder) -> GraphResult<Vec<&Node>> {
    let root = graph.root(source)?;
    log::trace!("{:?} traversal from node {}", order, source);

    let mut visited: HashSet<NodeKey> = HashSet::new();
    let mut visited_order: Vec<&Node> = Vec::new();
    let mut frontier: VecDeque<NodeKey> = VecDeque::new();
    frontier.push_back(root.key());

    while let Some(current) = order.take(&mut frontier) {
        if !visited.insert(current) {
            continue;
        }
        let Some(node) = graph.get_node(current) else {
            continue;
        };
        visited_order.push(node);
        frontier.extend(node.targets());
    }

    Ok(visited_order)
}

/// Depth-first traversal with an explicit stack.
pub fn dfs_traverse(graph: &Graph, source: NodeKey) -> GraphResult<Vec<&Node>> {
    traverse(graph, source, TraversalOrder::DepthFirst)
}

/// Breadth-first traversal with a FIFO queue.
pub fn bfs_traverse(graph: &Graph, source: NodeKey) -> GraphResult<Vec<&Node>> {
    traverse(graph, source, TraversalOrder::BreadthFirst)
}

/// Breadth-first walk that stops at the first node dequeued a second time.
///
/// Returns `true` for real cycles and for any node reachable along two
/// distinct paths. This is not a color-marking cycle detector.
pub fn revisit_check(graph: &Graph, source: NodeKey) -> GraphResult<bool> {
    let root = graph.root(source)?;

    let mut visited: HashSet<NodeKey> = HashSet::new();
    let mut queue: VecDeque<NodeKey> = VecDeque::new();
    queue.push_back(root.key());

    while let Some(current) = queue.pop_front() {
        if !visited.insert(current) {
            log::trace!("Node {} reached twice from {}", current, source);
            return Ok(true);
        }
        queue.extend(graph.edges_from(current).iter().map(|e| e.target()));
    }

    Ok(false)
}
