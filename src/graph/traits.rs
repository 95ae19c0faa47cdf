//! Graph capabilities consumed by the algorithms.

use crate::types::{Vertex, WeightedEdgeTo};

/// Read-only adjacency view of a directed graph over vertices `0..vertex_count()`.
///
/// `adjacencies` must return targets `< vertex_count()` in an order that is
/// deterministic for a given graph instance. Implementations may panic when
/// `v` is out of range; the algorithms validate their own vertex arguments
/// before asking.
pub trait Graph {
    /// Number of vertices. Fixed for as long as an algorithm borrows the graph.
    fn vertex_count(&self) -> usize;

    /// Targets of the directed edges leaving `v`.
    fn adjacencies(&self, v: Vertex) -> impl Iterator<Item = Vertex> + '_;
}

/// A graph whose edges carry real weights.
pub trait WeightedGraph: Graph {
    /// Outgoing edges of `v` together with their weights, in the same order
    /// as [`Graph::adjacencies`].
    fn adjacencies_with_weights(&self, v: Vertex) -> impl Iterator<Item = WeightedEdgeTo> + '_;
}
