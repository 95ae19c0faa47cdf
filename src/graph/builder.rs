//! Fluent API for building AdjacencyGraph instances.

use crate::types::{GraphResult, Vertex, DEFAULT_EDGE_WEIGHT};

use super::AdjacencyGraph;

/// Fluent builder for constructing an AdjacencyGraph.
///
/// Edges are only validated by [`GraphBuilder::build`].
pub struct GraphBuilder {
    vertex_count: usize,
    directed: bool,
    edges: Vec<(Vertex, Vertex, f64)>,
}

impl GraphBuilder {
    /// Create a builder for a directed graph with `vertex_count` vertices.
    pub fn new(vertex_count: usize) -> Self {
        Self {
            vertex_count,
            directed: true,
            edges: Vec::new(),
        }
    }

    /// Make the built graph undirected.
    pub fn undirected(mut self) -> Self {
        self.directed = false;
        self
    }

    /// Add an edge carrying `DEFAULT_EDGE_WEIGHT`.
    pub fn edge(self, from: Vertex, to: Vertex) -> Self {
        self.weighted_edge(from, to, DEFAULT_EDGE_WEIGHT)
    }

    /// Add a weighted edge.
    pub fn weighted_edge(mut self, from: Vertex, to: Vertex, weight: f64) -> Self {
        self.edges.push((from, to, weight));
        self
    }

    /// Add several unweighted edges at once.
    pub fn edges(mut self, edges: &[(Vertex, Vertex)]) -> Self {
        self.edges
            .extend(edges.iter().map(|&(from, to)| (from, to, DEFAULT_EDGE_WEIGHT)));
        self
    }

    /// Build the final AdjacencyGraph, keeping edge insertion order.
    pub fn build(self) -> GraphResult<AdjacencyGraph> {
        let mut graph = if self.directed {
            AdjacencyGraph::new(self.vertex_count)
        } else {
            AdjacencyGraph::undirected(self.vertex_count)
        };
        for (from, to, weight) in self.edges {
            graph.add_weighted_edge(from, to, weight)?;
        }
        Ok(graph)
    }
}
