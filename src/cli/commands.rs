//! CLI command implementations.

use std::path::Path;

use crate::format::{GraphReader, GraphWriter};
use crate::graph::{traverse, Graph, TraversalOrder};
use crate::types::{GraphError, GraphResult, Node, NodeKey};

/// Create a new empty graph document.
pub fn cmd_create(path: &Path) -> GraphResult<()> {
    let graph = Graph::new();
    GraphWriter::pretty().write_to_file(&graph, path)?;
    println!("Created {}", path.display());
    Ok(())
}

/// Display summary information about a graph document.
pub fn cmd_info(path: &Path, json: bool) -> GraphResult<()> {
    let graph = GraphReader::read_from_file(path)?;
    let max_out_degree = graph.nodes().iter().map(Node::out_degree).max().unwrap_or(0);
    let sinks = graph.nodes().iter().filter(|n| n.out_degree() == 0).count();

    if json {
        let info = serde_json::json!({
            "file": path.display().to_string(),
            "nodes": graph.node_count(),
            "edges": graph.edge_count(),
            "max_out_degree": max_out_degree,
            "sinks": sinks,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&info).unwrap_or_default()
        );
    } else {
        println!("File: {}", path.display());
        println!("Nodes: {}", graph.node_count());
        println!("Edges: {}", graph.edge_count());
        println!("Max out-degree: {}", max_out_degree);
        println!("Sinks: {}", sinks);
    }
    Ok(())
}

/// Add a node to the document. An existing key is left untouched.
pub fn cmd_add_node(path: &Path, key: NodeKey, json: bool) -> GraphResult<()> {
    let mut graph = GraphReader::read_from_file(path)?;
    let existed = graph.contains_node(key);
    graph.add_node(key);
    GraphWriter::pretty().write_to_file(&graph, path)?;

    if json {
        println!("{}", serde_json::json!({"key": key, "added": !existed}));
    } else if existed {
        println!("Node {} already in {}", key, path.display());
    } else {
        println!("Added node {} to {}", key, path.display());
    }
    Ok(())
}

/// Add an edge between two nodes. Missing endpoints are reported, not fatal.
pub fn cmd_link(
    path: &Path,
    source: NodeKey,
    target: NodeKey,
    weight: i32,
    json: bool,
) -> GraphResult<()> {
    let mut graph = GraphReader::read_from_file(path)?;
    let before = graph.edge_count();
    graph.add_adjacency(source, target, weight);
    let linked = graph.edge_count() > before;
    if linked {
        GraphWriter::pretty().write_to_file(&graph, path)?;
    }

    if json {
        println!(
            "{}",
            serde_json::json!({"source": source, "target": target, "weight": weight, "linked": linked})
        );
    } else if linked {
        println!("Linked {} --{}--> {}", source, weight, target);
    } else {
        println!(
            "Ignored {} --{}--> {}: endpoint not in graph",
            source, weight, target
        );
    }
    Ok(())
}

/// Run a depth-first or breadth-first traversal from a node.
pub fn cmd_traverse(
    path: &Path,
    source: NodeKey,
    order: TraversalOrder,
    json: bool,
) -> GraphResult<()> {
    let graph = GraphReader::read_from_file(path)?;
    let visited = traverse(&graph, source, order)?;

    if json {
        let keys: Vec<NodeKey> = visited.iter().map(|n| n.key()).collect();
        println!(
            "{}",
            serde_json::json!({"source": source, "order": order_name(order), "visited": keys})
        );
    } else {
        println!("{} from node {}:", order_name(order), source);
        for (i, node) in visited.iter().enumerate() {
            println!("  {:>3}. {}", i + 1, node);
        }
    }
    Ok(())
}

/// Check whether any node is reachable twice from a node.
pub fn cmd_cyclic(path: &Path, source: NodeKey, json: bool) -> GraphResult<()> {
    let graph = GraphReader::read_from_file(path)?;
    let cyclic = graph.is_cyclic(source)?;

    if json {
        println!("{}", serde_json::json!({"source": source, "cyclic": cyclic}));
    } else if cyclic {
        println!("Node {}: a node is reachable more than once", source);
    } else {
        println!("Node {}: no node is reachable more than once", source);
    }
    Ok(())
}

/// List the outgoing edges of a node.
pub fn cmd_neighbors(path: &Path, key: NodeKey, json: bool) -> GraphResult<()> {
    let graph = GraphReader::read_from_file(path)?;
    let node = graph
        .get_node(key)
        .ok_or(GraphError::NodeNotFound(key))?;

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(node).unwrap_or_default()
        );
    } else {
        println!("Node {} ({} edges):", key, node.out_degree());
        for edge in node.edges() {
            println!("  -> {} (weight {})", edge.target(), edge.weight());
        }
    }
    Ok(())
}

/// Print the whole graph in its compact rendering.
pub fn cmd_render(path: &Path, json: bool) -> GraphResult<()> {
    let graph = GraphReader::read_from_file(path)?;
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(graph.nodes()).unwrap_or_default()
        );
    } else {
        println!("{}", graph);
    }
    Ok(())
}

fn order_name(order: TraversalOrder) -> &'static str {
    match order {
        TraversalOrder::DepthFirst => "depth_first",
        TraversalOrder::BreadthFirst => "breadth_first",
    }
}
