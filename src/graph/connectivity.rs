//! Undirected reachability over the directed store.

use std::collections::HashSet;
use std::hash::Hash;

use super::AdjacencyStore;

/// True if `v` is reachable from `u` ignoring edge direction.
///
/// Iterative depth-first search with an explicit stack so traversal depth is
/// bounded by heap, not the call stack. At each popped vertex both the
/// outgoing and the incoming neighbors are expanded — in a graph A→B→C this
/// makes C and A connected in both query orders. Short-circuits true as soon
/// as the target shows up as a neighbor.
///
/// Same-vertex queries are only true when an explicit self-loop edge exists.
/// Absent vertices are never connected to anything.
pub(crate) fn is_connected<N>(store: &AdjacencyStore<N>, u: &N, v: &N) -> bool
where
    N: Clone + Eq + Hash,
{
    if !store.contains_node(u) || !store.contains_node(v) {
        return false;
    }

    if u == v {
        return store.contains_edge(u, v);
    }

    let mut visited: HashSet<&N> = HashSet::new();
    let mut stack: Vec<&N> = vec![u];

    while let Some(current) = stack.pop() {
        if !visited.insert(current) {
            continue;
        }

        if let Some(out) = store.out_neighbors(current) {
            for neighbor in out.keys() {
                if neighbor == v {
                    return true;
                }
                if !visited.contains(neighbor) {
                    stack.push(neighbor);
                }
            }
        }

        if let Some(inc) = store.in_neighbors(current) {
            for neighbor in inc.keys() {
                if neighbor == v {
                    return true;
                }
                if !visited.contains(neighbor) {
                    stack.push(neighbor);
                }
            }
        }
    }

    false
}
