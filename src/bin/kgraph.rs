//! CLI entry point for the `kgraph` command-line tool.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use keygraph::cli::commands;
use keygraph::graph::TraversalOrder;
use keygraph::types::NodeKey;
use keygraph::GraphError;

#[derive(Parser)]
#[command(
    name = "kgraph",
    about = "keygraph CLI — directed graphs keyed by integers"
)]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text")]
    format: String,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new empty graph document
    Create {
        /// Path to the graph document to create
        file: PathBuf,
    },
    /// Display information about a graph document
    Info {
        /// Path to the graph document
        file: PathBuf,
    },
    /// Add a node to the graph
    AddNode {
        /// Path to the graph document
        file: PathBuf,
        /// Node key
        #[arg(allow_hyphen_values = true)]
        key: NodeKey,
    },
    /// Add an edge between two nodes
    Link {
        /// Path to the graph document
        file: PathBuf,
        /// Source node key
        #[arg(allow_hyphen_values = true)]
        source: NodeKey,
        /// Target node key
        #[arg(allow_hyphen_values = true)]
        target: NodeKey,
        /// Edge weight
        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        weight: i32,
    },
    /// Depth-first traversal from a node
    Dfs {
        /// Path to the graph document
        file: PathBuf,
        /// Starting node key
        #[arg(allow_hyphen_values = true)]
        source: NodeKey,
    },
    /// Breadth-first traversal from a node
    Bfs {
        /// Path to the graph document
        file: PathBuf,
        /// Starting node key
        #[arg(allow_hyphen_values = true)]
        source: NodeKey,
    },
    /// Check whether any node is reachable twice from a node
    Cyclic {
        /// Path to the graph document
        file: PathBuf,
        /// Starting node key
        #[arg(allow_hyphen_values = true)]
        source: NodeKey,
    },
    /// List the outgoing edges of a node
    Neighbors {
        /// Path to the graph document
        file: PathBuf,
        /// Node key
        #[arg(allow_hyphen_values = true)]
        key: NodeKey,
    },
    /// Print every node as key:{target:weight,...}
    Render {
        /// Path to the graph document
        file: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format == "json";

    if cli.verbose {
        // env_logger is only available in dev/test builds
        eprintln!("Verbose mode enabled");
    }

    let result = match cli.command {
        Commands::Create { file } => commands::cmd_create(&file),
        Commands::Info { file } => commands::cmd_info(&file, json),
        Commands::AddNode { file, key } => commands::cmd_add_node(&file, key, json),
        Commands::Link {
            file,
            source,
            target,
            weight,
        } => commands::cmd_link(&file, source, target, weight, json),
        Commands::Dfs { file, source } => {
            commands::cmd_traverse(&file, source, TraversalOrder::DepthFirst, json)
        }
        Commands::Bfs { file, source } => {
            commands::cmd_traverse(&file, source, TraversalOrder::BreadthFirst, json)
        }
        Commands::Cyclic { file, source } => commands::cmd_cyclic(&file, source, json),
        Commands::Neighbors { file, key } => commands::cmd_neighbors(&file, key, json),
        Commands::Render { file } => commands::cmd_render(&file, json),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        let code = match &e {
            GraphError::Io(_) => 1,
            GraphError::Json(_) => 2,
            GraphError::NodeNotFound(_) => 4,
            GraphError::NullTarget => 5,
        };
        process::exit(code);
    }
}
