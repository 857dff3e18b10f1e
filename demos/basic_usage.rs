//! Basic build -> traverse -> save flow.

use keygraph::*;

fn main() -> GraphResult<()> {
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

    println!(
        "Graph created with {} nodes and {} edges",
        graph.node_count(),
        graph.edge_count()
    );

    println!("---------------DFS---------------");
    for node in graph.depth_first_search(0)? {
        println!("{}", node);
    }

    println!("---------------BFS---------------");
    for node in graph.breadth_first_search(0)? {
        println!("{}", node);
    }

    println!("Revisit from 0: {}", graph.is_cyclic(0)?);

    let path = std::env::temp_dir().join("keygraph_example.json");
    GraphWriter::pretty().write_to_file(&graph, &path)?;
    let loaded = GraphReader::read_from_file(&path)?;
    println!("Reloaded from {}: {}", path.display(), loaded);

    Ok(())
}
