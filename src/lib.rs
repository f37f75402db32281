//! edgemap — thread-safe in-memory directed graph with binary persistence.
//!
//! Stores a directed graph as a pair of mirrored adjacency maps (outgoing and
//! incoming), guarded by a single reader/writer lock so independent threads
//! can query and mutate the same graph instance. Edges carry a text label and
//! an `f64` weight. On top of the store sit an undirected connectivity check,
//! Dijkstra shortest paths, DOT rendering, and an `.egm` binary file format
//! for integer-vertex graphs.

pub mod cli;
pub mod format;
pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use format::{GraphReader, GraphWriter, MmapReader};
pub use graph::{to_dot, DirectedGraph, GraphBuilder};
pub use types::{
    Edge, FileHeader, GraphError, GraphResult, EDGEMAP_MAGIC, FORMAT_VERSION, MAX_LABEL_SIZE,
};
