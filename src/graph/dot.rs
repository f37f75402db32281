//! DOT rendering of a graph for external visualization tooling.

use std::fmt::{Display, Write};
use std::hash::Hash;

use super::DirectedGraph;

/// Render the graph in Graphviz DOT format.
///
/// A pure formatting function over `nodes()` and `outgoing_edges()` — it
/// holds no lock of its own beyond those queries and sees whatever snapshot
/// they return. Vertices and neighbors are sorted so the output is
/// deterministic. Isolated vertices get a bare node statement; edges carry
/// `label` and `weight` attributes.
pub fn to_dot<N>(graph: &DirectedGraph<N>) -> String
where
    N: Clone + Eq + Hash + Ord + Display,
{
    let mut nodes: Vec<N> = graph.nodes().into_iter().collect();
    nodes.sort();

    let mut out = String::from("digraph {\n");
    for node in &nodes {
        // Ignoring fmt::Error: writing to a String cannot fail.
        let _ = writeln!(out, "    \"{}\";", node);
    }
    for node in &nodes {
        let mut neighbors: Vec<_> = graph.outgoing_edges(node).into_iter().collect();
        neighbors.sort_by(|a, b| a.0.cmp(&b.0));
        for (dest, edge) in neighbors {
            let _ = writeln!(
                out,
                "    \"{}\" -> \"{}\" [label=\"{}\", weight={}];",
                node,
                dest,
                escape(&edge.label),
                edge.weight
            );
        }
    }
    out.push_str("}\n");
    out
}

/// Escape quotes and backslashes for a double-quoted DOT string.
fn escape(label: &str) -> String {
    label.replace('\\', "\\\\").replace('"', "\\\"")
}
