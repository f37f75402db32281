//! In-memory graph operations — the core data structure.

mod adjacency;
mod connectivity;
mod shortest_path;

pub mod builder;
pub mod digraph;
pub mod dot;

pub use builder::GraphBuilder;
pub use digraph::DirectedGraph;
pub use dot::to_dot;

pub(crate) use adjacency::AdjacencyStore;
