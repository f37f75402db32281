//! Fluent API for building DirectedGraph instances.

use std::hash::Hash;

use super::DirectedGraph;

/// Fluent builder for constructing a [`DirectedGraph`].
///
/// Pure convenience over the core operations — graphs can always be built by
/// calling `add_node`/`add_edge` directly.
///
/// ```
/// use edgemap::GraphBuilder;
///
/// let graph = GraphBuilder::new()
///     .node(1)
///     .edge(1, 2, "one to two", 3.0)
///     .edge(2, 3, "two to three", 1.0)
///     .build();
/// assert_eq!(graph.node_count(), 3);
/// ```
pub struct GraphBuilder<N> {
    graph: DirectedGraph<N>,
}

impl<N: Clone + Eq + Hash> GraphBuilder<N> {
    /// Start with an empty graph.
    pub fn new() -> Self {
        Self {
            graph: DirectedGraph::new(),
        }
    }

    /// Add a vertex. Duplicates are silently ignored.
    pub fn node(self, node: N) -> Self {
        self.graph.add_node(node);
        self
    }

    /// Add an edge, creating missing endpoints.
    pub fn edge(self, src: N, dest: N, label: impl Into<String>, weight: f64) -> Self {
        self.graph.add_edge(src, dest, label, weight);
        self
    }

    /// Finish and hand over the graph.
    pub fn build(self) -> DirectedGraph<N> {
        self.graph
    }
}

impl<N: Clone + Eq + Hash> Default for GraphBuilder<N> {
    fn default() -> Self {
        Self::new()
    }
}
