//! CLI entry point for the `egm` command-line tool.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use edgemap::cli::commands;
use edgemap::GraphError;

#[derive(Parser)]
#[command(
    name = "egm",
    about = "edgemap CLI — weighted directed graphs with binary persistence"
)]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text")]
    format: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new empty .egm file
    Create {
        /// Path to the .egm file to create
        file: PathBuf,
    },
    /// Display information about an .egm file
    Info {
        /// Path to the .egm file
        file: PathBuf,
    },
    /// List all vertices
    Nodes {
        /// Path to the .egm file
        file: PathBuf,
    },
    /// Find the minimum-weight directed path between two vertices
    Path {
        /// Path to the .egm file
        file: PathBuf,
        /// Source vertex id
        src: u64,
        /// Destination vertex id
        dest: u64,
    },
    /// Check whether two vertices are connected, ignoring edge direction
    Connected {
        /// Path to the .egm file
        file: PathBuf,
        /// First vertex id
        u: u64,
        /// Second vertex id
        v: u64,
    },
    /// Render the graph in Graphviz DOT format
    Dot {
        /// Path to the .egm file
        file: PathBuf,
    },
    /// Add (or overwrite) an edge
    AddEdge {
        /// Path to the .egm file
        file: PathBuf,
        /// Source vertex id
        from: u64,
        /// Destination vertex id
        to: u64,
        /// Edge label
        #[arg(long, default_value = "")]
        label: String,
        /// Edge weight
        #[arg(long, default_value = "1.0")]
        weight: f64,
    },
    /// Remove an edge
    RemoveEdge {
        /// Path to the .egm file
        file: PathBuf,
        /// Source vertex id
        from: u64,
        /// Destination vertex id
        to: u64,
    },
    /// Remove a vertex and all its edges
    RemoveNode {
        /// Path to the .egm file
        file: PathBuf,
        /// Vertex id
        node: u64,
    },
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format == "json";

    let result = match cli.command {
        Commands::Create { file } => commands::cmd_create(&file),
        Commands::Info { file } => commands::cmd_info(&file, json),
        Commands::Nodes { file } => commands::cmd_nodes(&file, json),
        Commands::Path { file, src, dest } => commands::cmd_path(&file, src, dest, json),
        Commands::Connected { file, u, v } => commands::cmd_connected(&file, u, v, json),
        Commands::Dot { file } => commands::cmd_dot(&file),
        Commands::AddEdge {
            file,
            from,
            to,
            label,
            weight,
        } => commands::cmd_add_edge(&file, from, to, &label, weight, json),
        Commands::RemoveEdge { file, from, to } => commands::cmd_remove_edge(&file, from, to, json),
        Commands::RemoveNode { file, node } => commands::cmd_remove_node(&file, node, json),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        let code = match &e {
            GraphError::Io(_) => 1,
            GraphError::InvalidMagic
            | GraphError::UnsupportedVersion(_)
            | GraphError::Truncated
            | GraphError::Corrupt(_) => 2,
            GraphError::LabelTooLarge { .. } => 3,
        };
        process::exit(code);
    }
}
