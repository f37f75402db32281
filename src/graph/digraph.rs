//! The public graph type: adjacency store behind a reader/writer lock.

use std::collections::{HashMap, HashSet};
use std::hash::Hash;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::types::Edge;

use super::{connectivity, shortest_path, AdjacencyStore};

/// A thread-safe directed graph with labeled, weighted edges.
///
/// All state lives in a single [`AdjacencyStore`] guarded by one `RwLock`:
/// queries take a shared read hold for their whole duration (a long shortest
/// path computation blocks writers but not other readers), mutations take an
/// exclusive write hold. No operation takes the lock twice or takes a second
/// lock, so the guard cannot deadlock. Writers may starve behind a stream of
/// readers; the lock makes no fairness promise.
///
/// Every query returns an independent copy, so callers can never alias the
/// guarded maps.
///
/// ```
/// use edgemap::DirectedGraph;
///
/// let graph = DirectedGraph::new();
/// graph.add_edge(1, 2, "one to two", 4.0);
/// graph.add_edge(2, 3, "two to three", 1.0);
/// assert_eq!(graph.shortest_path(&1, &3), vec![1, 2, 3]);
/// assert!(graph.is_connected(&3, &1));
/// ```
#[derive(Debug)]
pub struct DirectedGraph<N> {
    store: RwLock<AdjacencyStore<N>>,
}

impl<N: Clone + Eq + Hash> DirectedGraph<N> {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self {
            store: RwLock::new(AdjacencyStore::new()),
        }
    }

    // A poisoned lock means some caller panicked while holding it. Store
    // mutations never unwind between the twin index updates, so the data is
    // still consistent; recover the guard instead of propagating the panic.
    fn read(&self) -> RwLockReadGuard<'_, AdjacencyStore<N>> {
        self.store.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, AdjacencyStore<N>> {
        self.store.write().unwrap_or_else(|e| e.into_inner())
    }

    /// Add a new, unconnected vertex. Returns false if it was already present.
    pub fn add_node(&self, node: N) -> bool {
        self.write().add_node(node)
    }

    /// Remove a vertex and every edge incident to it. No-op if absent.
    pub fn remove_node(&self, node: &N) {
        self.write().remove_node(node);
    }

    /// Connect two vertices, creating either endpoint if it is not yet in the
    /// graph. Re-adding an existing (src, dest) pair overwrites the previous
    /// label and weight. The whole operation happens under one write hold, so
    /// no reader can observe a half-created edge.
    pub fn add_edge(&self, src: N, dest: N, label: impl Into<String>, weight: f64) {
        self.write().add_edge(src, dest, Edge::new(label, weight));
    }

    /// Remove the edge src→dest. No-op if either endpoint or the edge is
    /// absent.
    pub fn remove_edge(&self, src: &N, dest: &N) {
        self.write().remove_edge(src, dest);
    }

    /// Check for the existence of a vertex.
    pub fn contains_node(&self, node: &N) -> bool {
        self.read().contains_node(node)
    }

    /// Check for the existence of the directed edge src→dest.
    pub fn contains_edge(&self, src: &N, dest: &N) -> bool {
        self.read().contains_edge(src, dest)
    }

    /// Look up the edge src→dest. `None` if the edge does not exist.
    pub fn get_edge(&self, src: &N, dest: &N) -> Option<Edge> {
        self.read().get_edge(src, dest)
    }

    /// A copy of the full vertex set. Insertion order is not preserved.
    pub fn nodes(&self) -> HashSet<N> {
        self.read().nodes()
    }

    /// A copy of the neighbor→edge map for the vertex's outgoing edges;
    /// empty when the vertex is absent or unconnected.
    pub fn outgoing_edges(&self, node: &N) -> HashMap<N, Edge> {
        self.read().outgoing_edges(node)
    }

    /// A copy of the neighbor→edge map for the vertex's incoming edges;
    /// empty when the vertex is absent or unconnected.
    pub fn incoming_edges(&self, node: &N) -> HashMap<N, Edge> {
        self.read().incoming_edges(node)
    }

    /// Number of vertices.
    pub fn node_count(&self) -> usize {
        self.read().node_count()
    }

    /// Number of directed edges.
    pub fn edge_count(&self) -> usize {
        self.read().edge_count()
    }

    /// True if the graph has no vertices.
    pub fn is_empty(&self) -> bool {
        self.read().node_count() == 0
    }

    /// True if a path connects `u` and `v` ignoring edge direction. A vertex
    /// is connected to itself only through an explicit self-loop edge. The
    /// whole traversal runs under a single read hold.
    pub fn is_connected(&self, u: &N, v: &N) -> bool {
        connectivity::is_connected(&self.read(), u, v)
    }
}

impl<N: Clone + Eq + Hash + Ord> DirectedGraph<N> {
    /// The minimum total-weight directed path from `src` to `dest`, including
    /// both endpoints; empty when either endpoint is absent or `dest` is not
    /// reachable along directed edges. Dijkstra's algorithm, run under a
    /// single read hold over a consistent snapshot.
    ///
    /// Equal-distance ties are broken by the natural order of the vertices,
    /// so results are deterministic when several shortest paths exist.
    ///
    /// Precondition: edge weights are non-negative. Negative weights give
    /// unspecified results.
    pub fn shortest_path(&self, src: &N, dest: &N) -> Vec<N> {
        shortest_path::shortest_path(&self.read(), src, dest)
    }
}

impl<N: Clone + Eq + Hash> Default for DirectedGraph<N> {
    fn default() -> Self {
        Self::new()
    }
}
