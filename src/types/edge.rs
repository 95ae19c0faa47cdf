//! Weighted adjacency entry.

use serde::Serialize;

use super::Vertex;

/// One outgoing edge as seen from its source vertex.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WeightedEdgeTo {
    /// Target vertex.
    pub to: Vertex,
    /// Edge weight. Dijkstra expects it to be non-negative.
    pub weight: f64,
}

impl WeightedEdgeTo {
    /// Create a weighted adjacency entry.
    pub fn new(to: Vertex, weight: f64) -> Self {
        Self { to, weight }
    }
}
