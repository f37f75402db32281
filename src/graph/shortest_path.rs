//! Single-source shortest path via Dijkstra relaxation.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};
use std::hash::Hash;

use super::AdjacencyStore;

/// A queue entry: tentative distance to a vertex at push time.
///
/// Ordered as a min-heap entry (smallest distance is greatest), with equal
/// distances broken by the reverse natural order of the vertex so the
/// smallest vertex pops first. Distances are compared with `f64::total_cmp`;
/// weights are required to be non-negative, so NaN never enters the queue
/// through well-formed input.
struct QueueEntry<N> {
    dist: f64,
    node: N,
}

impl<N: Ord> PartialEq for QueueEntry<N> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<N: Ord> Eq for QueueEntry<N> {}

impl<N: Ord> PartialOrd for QueueEntry<N> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<N: Ord> Ord for QueueEntry<N> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .dist
            .total_cmp(&self.dist)
            .then_with(|| other.node.cmp(&self.node))
    }
}

/// Minimum total-weight directed path from `src` to `dest`.
///
/// Returns the vertex sequence including both endpoints, `[src]` when
/// `src == dest` and present, and an empty `Vec` when either endpoint is
/// absent or no directed path exists.
///
/// Precondition: all edge weights are non-negative. Behavior with negative
/// weights is unspecified.
pub(crate) fn shortest_path<N>(store: &AdjacencyStore<N>, src: &N, dest: &N) -> Vec<N>
where
    N: Clone + Eq + Hash + Ord,
{
    if !store.contains_node(src) || !store.contains_node(dest) {
        return Vec::new();
    }

    // Tentative distances; vertices not yet reached are implicitly +infinity.
    let mut distance: HashMap<N, f64> = HashMap::new();
    // prev[v] = the vertex before v on the best known path; src maps to None.
    let mut prev: HashMap<N, Option<N>> = HashMap::new();
    let mut queue: BinaryHeap<QueueEntry<N>> = BinaryHeap::new();

    distance.insert(src.clone(), 0.0);
    prev.insert(src.clone(), None);
    queue.push(QueueEntry {
        dist: 0.0,
        node: src.clone(),
    });

    while let Some(QueueEntry { dist, node: u }) = queue.pop() {
        // Done. Found the destination vertex.
        if &u == dest {
            break;
        }

        // Stale entry: the vertex was re-queued with a shorter distance.
        if distance.get(&u).is_some_and(|&d| dist > d) {
            continue;
        }

        if let Some(neighbors) = store.out_neighbors(&u) {
            for (v, edge) in neighbors {
                let alt = dist + edge.weight;
                if distance.get(v).map_or(true, |&d| alt < d) {
                    distance.insert(v.clone(), alt);
                    prev.insert(v.clone(), Some(u.clone()));
                    queue.push(QueueEntry {
                        dist: alt,
                        node: v.clone(),
                    });
                }
            }
        }
    }

    build_path(&prev, dest)
}

/// Walk predecessor links backward from `dest` and reverse the result.
fn build_path<N>(prev: &HashMap<N, Option<N>>, dest: &N) -> Vec<N>
where
    N: Clone + Eq + Hash,
{
    if !prev.contains_key(dest) {
        // Never relaxed: unreachable from src.
        return Vec::new();
    }

    let mut path = vec![dest.clone()];
    let mut cursor = prev.get(dest).cloned().flatten();
    while let Some(node) = cursor {
        cursor = prev.get(&node).cloned().flatten();
        path.push(node);
    }
    path.reverse();
    path
}
