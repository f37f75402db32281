//! Implementations of the `egm` subcommands.
//!
//! Every command loads the graph from an .egm file, queries or mutates it,
//! and (for mutations) writes it back. Output goes to stdout as text or JSON.

use std::path::Path;

use serde_json::json;

use crate::format::{GraphReader, GraphWriter};
use crate::graph::{to_dot, DirectedGraph};
use crate::types::GraphResult;

/// Create a new empty .egm file.
pub fn cmd_create(file: &Path) -> GraphResult<()> {
    let graph: DirectedGraph<u64> = DirectedGraph::new();
    GraphWriter::write_to_file(&graph, file)?;
    println!("Created {}", file.display());
    Ok(())
}

/// Display summary information about a graph file.
pub fn cmd_info(file: &Path, json: bool) -> GraphResult<()> {
    let graph = GraphReader::read_from_file(file)?;
    if json {
        let out = json!({
            "file": file.display().to_string(),
            "nodes": graph.node_count(),
            "edges": graph.edge_count(),
        });
        println!("{}", out);
    } else {
        println!("File:  {}", file.display());
        println!("Nodes: {}", graph.node_count());
        println!("Edges: {}", graph.edge_count());
    }
    Ok(())
}

/// List the vertices of the graph.
pub fn cmd_nodes(file: &Path, json: bool) -> GraphResult<()> {
    let graph = GraphReader::read_from_file(file)?;
    let mut nodes: Vec<u64> = graph.nodes().into_iter().collect();
    nodes.sort_unstable();
    if json {
        println!("{}", json!({ "nodes": nodes }));
    } else {
        for node in nodes {
            println!("{}", node);
        }
    }
    Ok(())
}

/// Shortest-path query between two vertices.
pub fn cmd_path(file: &Path, src: u64, dest: u64, json: bool) -> GraphResult<()> {
    let graph = GraphReader::read_from_file(file)?;
    let path = graph.shortest_path(&src, &dest);
    let weight: f64 = path
        .windows(2)
        .filter_map(|pair| graph.get_edge(&pair[0], &pair[1]))
        .map(|edge| edge.weight)
        .sum();
    if json {
        println!("{}", json!({ "path": path, "total_weight": weight }));
    } else if path.is_empty() {
        println!("No directed path from {} to {}", src, dest);
    } else {
        let rendered: Vec<String> = path.iter().map(u64::to_string).collect();
        println!("{} (total weight {})", rendered.join(" -> "), weight);
    }
    Ok(())
}

/// Undirected connectivity query between two vertices.
pub fn cmd_connected(file: &Path, u: u64, v: u64, json: bool) -> GraphResult<()> {
    let graph = GraphReader::read_from_file(file)?;
    let connected = graph.is_connected(&u, &v);
    if json {
        println!("{}", json!({ "connected": connected }));
    } else {
        println!("{}", connected);
    }
    Ok(())
}

/// Render the graph in DOT format.
pub fn cmd_dot(file: &Path) -> GraphResult<()> {
    let graph = GraphReader::read_from_file(file)?;
    print!("{}", to_dot(&graph));
    Ok(())
}

/// Add (or overwrite) an edge and save the file.
pub fn cmd_add_edge(
    file: &Path,
    from: u64,
    to: u64,
    label: &str,
    weight: f64,
    json: bool,
) -> GraphResult<()> {
    let graph = GraphReader::read_from_file(file)?;
    graph.add_edge(from, to, label, weight);
    GraphWriter::write_to_file(&graph, file)?;
    if json {
        println!("{}", json!({ "from": from, "to": to, "label": label, "weight": weight }));
    } else {
        println!("Added edge {} -> {} (weight {})", from, to, weight);
    }
    Ok(())
}

/// Remove an edge and save the file.
pub fn cmd_remove_edge(file: &Path, from: u64, to: u64, json: bool) -> GraphResult<()> {
    let graph = GraphReader::read_from_file(file)?;
    let existed = graph.contains_edge(&from, &to);
    graph.remove_edge(&from, &to);
    GraphWriter::write_to_file(&graph, file)?;
    if json {
        println!("{}", json!({ "removed": existed }));
    } else if existed {
        println!("Removed edge {} -> {}", from, to);
    } else {
        println!("No edge {} -> {}", from, to);
    }
    Ok(())
}

/// Remove a vertex with all its edges and save the file.
pub fn cmd_remove_node(file: &Path, node: u64, json: bool) -> GraphResult<()> {
    let graph = GraphReader::read_from_file(file)?;
    let existed = graph.contains_node(&node);
    graph.remove_node(&node);
    GraphWriter::write_to_file(&graph, file)?;
    if json {
        println!("{}", json!({ "removed": existed }));
    } else if existed {
        println!("Removed node {}", node);
    } else {
        println!("No node {}", node);
    }
    Ok(())
}
