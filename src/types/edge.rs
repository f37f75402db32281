//! The edge payload attached to an ordered vertex pair.

use serde::Serialize;

/// Payload of a directed edge: a text label and a weight.
///
/// An `Edge` does not know its endpoints; the adjacency maps attach it to an
/// ordered (source, destination) pair. Absent edges are represented by
/// `Option::None` in every lookup — there is no "empty" sentinel edge.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Edge {
    /// Human-readable label for the edge.
    pub label: String,
    /// Edge weight. Shortest-path queries require this to be non-negative.
    pub weight: f64,
}

impl Edge {
    /// Create a new edge payload.
    pub fn new(label: impl Into<String>, weight: f64) -> Self {
        Self {
            label: label.into(),
            weight,
        }
    }

    /// Create an edge with an empty label.
    pub fn unlabeled(weight: f64) -> Self {
        Self {
            label: String::new(),
            weight,
        }
    }
}
