//! Distance / predecessor arrays produced by the shortest-path algorithms.

use serde::Serialize;

use crate::types::{GraphResult, Vertex, INFINITY};

/// Outcome of a single-source shortest-path search.
///
/// Both arrays are indexed by vertex and sized `vertex_count()`. A vertex the
/// search never reached has distance [`INFINITY`] and no predecessor.
/// Non-finite distances serialize to JSON as `null`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MinDistanceSearchResult {
    /// Shortest known distance from the source.
    pub distances: Vec<f64>,
    /// Predecessor of each vertex, `None` for the source and unreached vertices.
    pub predecessors: Vec<Option<Vertex>>,
    /// Outer iterations performed: extractions for Dijkstra, relaxation
    /// passes for Bellman-Ford.
    pub rounds: usize,
}

impl MinDistanceSearchResult {
    /// Fresh arrays for a search from `source` over `vertex_count` vertices.
    pub(crate) fn start(vertex_count: usize, source: Vertex) -> Self {
        let mut distances = vec![INFINITY; vertex_count];
        distances[source] = 0.0;
        Self {
            distances,
            predecessors: vec![None; vertex_count],
            rounds: 0,
        }
    }

    /// Number of vertices covered.
    pub fn len(&self) -> usize {
        self.distances.len()
    }

    /// Whether the result covers no vertex.
    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }

    /// Distance to `v`, `None` when out of range.
    pub fn distance(&self, v: Vertex) -> Option<f64> {
        self.distances.get(v).copied()
    }

    /// Predecessor of `v`, `None` when undefined or out of range.
    pub fn predecessor(&self, v: Vertex) -> Option<Vertex> {
        self.predecessors.get(v).copied().flatten()
    }

    /// Whether `v` got a finite distance.
    pub fn is_reachable(&self, v: Vertex) -> bool {
        self.distance(v).is_some_and(f64::is_finite)
    }

    /// Follow predecessors back from `target` and return the chain
    /// first-vertex-first.
    ///
    /// Returns `None` if `target` is unreached, out of range, or the chain
    /// does not end within `len()` steps (a negative cycle can do that).
    pub fn path_to(&self, target: Vertex) -> Option<Vec<Vertex>> {
        if !self.is_reachable(target) {
            return None;
        }
        let mut path = vec![target];
        let mut curr = target;
        while let Some(prev) = self.predecessor(curr) {
            if path.len() > self.len() {
                return None;
            }
            path.push(prev);
            curr = prev;
        }
        path.reverse();
        Some(path)
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json(&self) -> GraphResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
