//! Reference graph implementation: adjacency lists with weighted edges.

use crate::types::{
    check_vertex, GraphError, GraphResult, Vertex, WeightedEdgeTo, DEFAULT_EDGE_WEIGHT,
};

use super::{Graph, WeightedGraph};

/// An in-memory graph over vertices `0..vertex_count`, stored as one
/// adjacency list per vertex.
///
/// Adjacency order is insertion order. An undirected graph stores every edge
/// in both directions (a self-loop once).
#[derive(Debug, Clone)]
pub struct AdjacencyGraph {
    /// Outgoing edges, indexed by source vertex.
    adjacency: Vec<Vec<WeightedEdgeTo>>,
    /// Whether `add_*_edge` inserts a single direction.
    directed: bool,
    /// Number of logical edges (an undirected edge counts once).
    edge_count: usize,
}

impl AdjacencyGraph {
    /// Create a directed graph with `vertex_count` vertices and no edges.
    pub fn new(vertex_count: usize) -> Self {
        Self {
            adjacency: vec![Vec::new(); vertex_count],
            directed: true,
            edge_count: 0,
        }
    }

    /// Create an undirected graph with `vertex_count` vertices and no edges.
    pub fn undirected(vertex_count: usize) -> Self {
        Self {
            directed: false,
            ..Self::new(vertex_count)
        }
    }

    /// Whether edges are one-way.
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Number of edges added (undirected edges count once).
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Add an edge carrying `DEFAULT_EDGE_WEIGHT`.
    pub fn add_edge(&mut self, from: Vertex, to: Vertex) -> GraphResult<()> {
        self.add_weighted_edge(from, to, DEFAULT_EDGE_WEIGHT)
    }

    /// Add an edge with an explicit weight. Negative weights are accepted.
    pub fn add_weighted_edge(&mut self, from: Vertex, to: Vertex, weight: f64) -> GraphResult<()> {
        let n = self.adjacency.len();
        check_vertex(from, n)?;
        check_vertex(to, n)?;
        if !weight.is_finite() {
            return Err(GraphError::InvalidWeight(weight));
        }

        self.adjacency[from].push(WeightedEdgeTo::new(to, weight));
        if !self.directed && from != to {
            self.adjacency[to].push(WeightedEdgeTo::new(from, weight));
        }
        self.edge_count += 1;
        Ok(())
    }

    /// Remove every `from -> to` edge (and its mirror when undirected).
    pub fn remove_edge(&mut self, from: Vertex, to: Vertex) -> GraphResult<()> {
        let n = self.adjacency.len();
        check_vertex(from, n)?;
        check_vertex(to, n)?;

        let initial_len = self.adjacency[from].len();
        self.adjacency[from].retain(|e| e.to != to);
        let removed = initial_len - self.adjacency[from].len();
        if removed == 0 {
            return Err(GraphError::EdgeNotFound { from, to });
        }
        if !self.directed && from != to {
            self.adjacency[to].retain(|e| e.to != from);
        }
        self.edge_count -= removed;
        Ok(())
    }

    /// Whether at least one `from -> to` edge exists.
    pub fn has_edge(&self, from: Vertex, to: Vertex) -> bool {
        self.adjacency
            .get(from)
            .is_some_and(|list| list.iter().any(|e| e.to == to))
    }

    /// All stored directed edges as `(source, edge)`, grouped by source.
    pub fn edges(&self) -> impl Iterator<Item = (Vertex, WeightedEdgeTo)> + '_ {
        self.adjacency
            .iter()
            .enumerate()
            .flat_map(|(from, list)| list.iter().map(move |e| (from, *e)))
    }
}

impl Graph for AdjacencyGraph {
    fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    fn adjacencies(&self, v: Vertex) -> impl Iterator<Item = Vertex> + '_ {
        self.adjacency[v].iter().map(|e| e.to)
    }
}

impl WeightedGraph for AdjacencyGraph {
    fn adjacencies_with_weights(&self, v: Vertex) -> impl Iterator<Item = WeightedEdgeTo> + '_ {
        self.adjacency[v].iter().copied()
    }
}
