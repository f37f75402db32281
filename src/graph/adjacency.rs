//! The unguarded adjacency store: two mirrored vertex-to-neighbor maps.

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use crate::types::Edge;

/// Twin adjacency indexes over a directed graph.
///
/// `outgoing[v]` maps each neighbor `w` with an edge v→w to that edge's
/// payload; `incoming[v]` maps each neighbor `u` with an edge u→v to the same
/// payload. Every mutation keeps the two indexes mirror-consistent: an edge
/// present in one is present in the other with an identical payload.
///
/// A vertex is "in the graph" exactly when it is a key of `outgoing`; every
/// present vertex has entries in both maps, possibly empty.
///
/// This type carries no locking — [`DirectedGraph`](super::DirectedGraph)
/// wraps it in a reader/writer lock and is the public surface.
#[derive(Debug, Clone)]
pub(crate) struct AdjacencyStore<N> {
    /// Neighbors each vertex points to, with the edge payload.
    outgoing: HashMap<N, HashMap<N, Edge>>,
    /// Neighbors pointing to each vertex, mirroring `outgoing`.
    incoming: HashMap<N, HashMap<N, Edge>>,
}

impl<N: Clone + Eq + Hash> AdjacencyStore<N> {
    pub(crate) fn new() -> Self {
        Self {
            outgoing: HashMap::new(),
            incoming: HashMap::new(),
        }
    }

    /// Insert an unconnected vertex. Returns false if it is already present.
    pub(crate) fn add_node(&mut self, node: N) -> bool {
        if self.outgoing.contains_key(&node) {
            return false;
        }
        self.outgoing.insert(node.clone(), HashMap::new());
        self.incoming.insert(node, HashMap::new());
        true
    }

    /// Remove a vertex and every edge incident to it, in both directions.
    /// No-op if the vertex is absent.
    pub(crate) fn remove_node(&mut self, node: &N) {
        if !self.outgoing.contains_key(node) {
            return;
        }

        // Collect neighbor keys first; removal mutates the maps under iteration.
        let in_neighbors: Vec<N> = self
            .incoming
            .get(node)
            .map(|m| m.keys().cloned().collect())
            .unwrap_or_default();
        for neighbor in &in_neighbors {
            self.remove_edge(neighbor, node);
        }

        let out_neighbors: Vec<N> = self
            .outgoing
            .get(node)
            .map(|m| m.keys().cloned().collect())
            .unwrap_or_default();
        for neighbor in &out_neighbors {
            self.remove_edge(node, neighbor);
        }

        self.outgoing.remove(node);
        self.incoming.remove(node);
    }

    /// Insert or overwrite the edge src→dest, implicitly creating either
    /// endpoint if absent. Re-adding an existing pair replaces the payload.
    pub(crate) fn add_edge(&mut self, src: N, dest: N, edge: Edge) {
        if !self.outgoing.contains_key(&src) {
            self.add_node(src.clone());
        }
        if !self.outgoing.contains_key(&dest) {
            self.add_node(dest.clone());
        }

        if let Some(neighbors) = self.outgoing.get_mut(&src) {
            neighbors.insert(dest.clone(), edge.clone());
        }
        if let Some(neighbors) = self.incoming.get_mut(&dest) {
            neighbors.insert(src, edge);
        }
    }

    /// Remove the edge src→dest from both indexes. No-op if either endpoint
    /// or the edge itself is absent.
    pub(crate) fn remove_edge(&mut self, src: &N, dest: &N) {
        if !self.outgoing.contains_key(src) || !self.outgoing.contains_key(dest) {
            return;
        }
        if let Some(neighbors) = self.outgoing.get_mut(src) {
            neighbors.remove(dest);
        }
        if let Some(neighbors) = self.incoming.get_mut(dest) {
            neighbors.remove(src);
        }
    }

    pub(crate) fn contains_node(&self, node: &N) -> bool {
        self.outgoing.contains_key(node)
    }

    pub(crate) fn contains_edge(&self, src: &N, dest: &N) -> bool {
        self.outgoing
            .get(src)
            .is_some_and(|neighbors| neighbors.contains_key(dest))
    }

    /// Look up the edge src→dest, cloning the payload.
    pub(crate) fn get_edge(&self, src: &N, dest: &N) -> Option<Edge> {
        self.outgoing.get(src)?.get(dest).cloned()
    }

    /// Copy of the full vertex set.
    pub(crate) fn nodes(&self) -> HashSet<N> {
        self.outgoing.keys().cloned().collect()
    }

    /// Copy of the neighbor→edge map for the vertex's outgoing edges.
    /// Empty if the vertex is absent or has no outgoing edges.
    pub(crate) fn outgoing_edges(&self, node: &N) -> HashMap<N, Edge> {
        self.outgoing.get(node).cloned().unwrap_or_default()
    }

    /// Copy of the neighbor→edge map for the vertex's incoming edges.
    /// Empty if the vertex is absent or has no incoming edges.
    pub(crate) fn incoming_edges(&self, node: &N) -> HashMap<N, Edge> {
        self.incoming.get(node).cloned().unwrap_or_default()
    }

    /// Borrowed views for in-process traversals; not exposed past the lock.
    pub(crate) fn out_neighbors(&self, node: &N) -> Option<&HashMap<N, Edge>> {
        self.outgoing.get(node)
    }

    pub(crate) fn in_neighbors(&self, node: &N) -> Option<&HashMap<N, Edge>> {
        self.incoming.get(node)
    }

    pub(crate) fn node_count(&self) -> usize {
        self.outgoing.len()
    }

    pub(crate) fn edge_count(&self) -> usize {
        self.outgoing.values().map(HashMap::len).sum()
    }
}

impl<N: Clone + Eq + Hash> Default for AdjacencyStore<N> {
    fn default() -> Self {
        Self::new()
    }
}
