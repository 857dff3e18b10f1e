//! Phase 2 tests: DFS, BFS and the revisit check.

use std::collections::HashSet;

use keygraph::graph::{bfs_traverse, dfs_traverse, revisit_check, Graph, GraphBuilder};
use keygraph::types::error::GraphError;
use keygraph::types::node::Node;

// ==================== Helper ====================

/// Seven nodes with the reference adjacency set.
fn reference_graph() -> Graph {
    let _ = env_logger::builder().is_test(true).try_init();
    let mut graph = Graph::new();
    for key in 0..=6 {
        graph.add_node(key);
    }
    graph.add_adjacency(0, 6, 10);
    graph.add_adjacency(0, 3, 20);
    graph.add_adjacency(0, 2, 10);
    graph.add_adjacency(2, 1, 0);
    graph.add_adjacency(4, 5, 1);
    graph.add_adjacency(4, 3, 2);
    graph.add_adjacency(3, 6, 5);
    graph.add_adjacency(5, 6, 30);
    graph
}

fn keys(nodes: &[&Node]) -> Vec<i32> {
    nodes.iter().map(|n| n.key()).collect()
}

// ==================== Reference Scenario ====================

#[test]
fn test_dfs_reference_order() {
    let graph = reference_graph();
    let visited = graph.depth_first_search(0).unwrap();
    assert_eq!(keys(&visited), vec![0, 2, 1, 3, 6]);
}

#[test]
fn test_bfs_reference_order() {
    let graph = reference_graph();
    let visited = graph.breadth_first_search(0).unwrap();
    assert_eq!(keys(&visited), vec![0, 6, 3, 2, 1]);
}

#[test]
fn test_is_cyclic_reference() {
    let graph = reference_graph();
    assert!(graph.is_cyclic(0).unwrap());
}

#[test]
fn test_reference_rendering_of_source() {
    let graph = reference_graph();
    let root = graph.get_node(0).unwrap();
    assert_eq!(root.to_string(), "0:{6:10,3:20,2:10,}");
}

#[test]
fn test_traversal_from_other_roots() {
    let graph = reference_graph();
    assert_eq!(keys(&graph.depth_first_search(4).unwrap()), vec![4, 3, 6, 5]);
    assert_eq!(keys(&graph.breadth_first_search(4).unwrap()), vec![4, 5, 3, 6]);
    assert_eq!(keys(&graph.depth_first_search(6).unwrap()), vec![6]);
    assert!(graph.is_cyclic(4).unwrap());
    assert!(!graph.is_cyclic(2).unwrap());
    assert!(!graph.is_cyclic(6).unwrap());
}

// ==================== Properties ====================

#[test]
fn test_results_start_at_source_without_duplicates() {
    let graph = reference_graph();
    for key in 0..=6 {
        for visited in [
            graph.depth_first_search(key).unwrap(),
            graph.breadth_first_search(key).unwrap(),
        ] {
            assert_eq!(visited[0].key(), key);
            let unique: HashSet<i32> = visited.iter().map(|n| n.key()).collect();
            assert_eq!(unique.len(), visited.len());
        }
    }
}

#[test]
fn test_missing_source_fails() {
    let graph = reference_graph();
    match graph.depth_first_search(42) {
        Err(GraphError::NodeNotFound(42)) => {}
        other => panic!("Expected NodeNotFound, got {:?}", other.map(|v| keys(&v))),
    }
    match graph.breadth_first_search(-1) {
        Err(GraphError::NodeNotFound(-1)) => {}
        other => panic!("Expected NodeNotFound, got {:?}", other.map(|v| keys(&v))),
    }
    match graph.is_cyclic(7) {
        Err(GraphError::NodeNotFound(7)) => {}
        other => panic!("Expected NodeNotFound, got {:?}", other),
    }
    assert!(Graph::new().depth_first_search(0).is_err());
}

#[test]
fn test_dfs_expands_last_added_child_first() {
    let graph = GraphBuilder::new()
        .nodes(0..=4)
        .link(0, 1, 0)
        .link(0, 2, 0)
        .link(1, 3, 0)
        .link(2, 4, 0)
        .build();
    assert_eq!(keys(&dfs_traverse(&graph, 0).unwrap()), vec![0, 2, 4, 1, 3]);
    assert_eq!(keys(&bfs_traverse(&graph, 0).unwrap()), vec![0, 1, 2, 3, 4]);
}

#[test]
fn test_chain_and_tree_are_not_cyclic() {
    let chain = GraphBuilder::new()
        .nodes(0..5)
        .link(0, 1, 1)
        .link(1, 2, 1)
        .link(2, 3, 1)
        .link(3, 4, 1)
        .build();
    assert!(!revisit_check(&chain, 0).unwrap());

    let tree = GraphBuilder::new()
        .nodes(0..7)
        .link(0, 1, 0)
        .link(0, 2, 0)
        .link(1, 3, 0)
        .link(1, 4, 0)
        .link(2, 5, 0)
        .link(2, 6, 0)
        .build();
    assert!(!tree.is_cyclic(0).unwrap());

    let mut single = Graph::new();
    single.add_node(9);
    assert!(!single.is_cyclic(9).unwrap());
}

#[test]
fn test_diamond_reports_revisit() {
    let diamond = GraphBuilder::new()
        .nodes([1, 2, 3, 4])
        .link(1, 2, 0)
        .link(1, 3, 0)
        .link(2, 4, 0)
        .link(3, 4, 0)
        .build();
    assert!(diamond.is_cyclic(1).unwrap());
    assert!(!diamond.is_cyclic(2).unwrap());
}

#[test]
fn test_back_edge_and_self_loop() {
    let ring = GraphBuilder::new()
        .nodes([0, 1, 2])
        .link(0, 1, 0)
        .link(1, 2, 0)
        .link(2, 0, 0)
        .build();
    assert!(ring.is_cyclic(1).unwrap());
    assert_eq!(keys(&ring.depth_first_search(1).unwrap()), vec![1, 2, 0]);

    let mut looped = Graph::new();
    looped.add_node(3);
    looped.add_adjacency(3, 3, 1);
    assert!(looped.is_cyclic(3).unwrap());
    assert_eq!(keys(&looped.breadth_first_search(3).unwrap()), vec![3]);
}

#[test]
fn test_duplicate_edge_counts_as_revisit() {
    let graph = GraphBuilder::new()
        .nodes([0, 1])
        .link(0, 1, 1)
        .link(0, 1, 2)
        .build();
    assert!(graph.is_cyclic(0).unwrap());
    assert_eq!(keys(&graph.depth_first_search(0).unwrap()), vec![0, 1]);
}

#[test]
fn test_unreachable_nodes_excluded() {
    let graph = reference_graph();
    let visited = keys(&graph.breadth_first_search(2).unwrap());
    assert_eq!(visited, vec![2, 1]);
}
