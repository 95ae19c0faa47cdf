//! Error types for the graph-algos library.

use thiserror::Error;

use super::Vertex;

/// All errors that can occur in the graph-algos library.
#[derive(Error, Debug)]
pub enum GraphError {
    /// A vertex argument is outside `0..vertex_count`.
    #[error("Vertex {vertex} out of range (vertex count {vertex_count})")]
    VertexOutOfRange { vertex: Vertex, vertex_count: usize },

    /// The graph reported an adjacency that is not a valid vertex.
    #[error("Edge {from} -> {to} references an invalid vertex")]
    InvalidEdgeTarget { from: Vertex, to: Vertex },

    /// Edge weight is NaN or infinite.
    #[error("Edge weight must be finite: {0}")]
    InvalidWeight(f64),

    /// No edge between the given vertices.
    #[error("Edge {from} -> {to} not found")]
    EdgeNotFound { from: Vertex, to: Vertex },

    /// JSON serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience result type for graph-algos operations.
pub type GraphResult<T> = Result<T, GraphError>;

/// Fail with `VertexOutOfRange` unless `vertex < vertex_count`.
pub(crate) fn check_vertex(vertex: Vertex, vertex_count: usize) -> GraphResult<()> {
    if vertex < vertex_count {
        Ok(())
    } else {
        Err(GraphError::VertexOutOfRange {
            vertex,
            vertex_count,
        })
    }
}

/// Fail with `InvalidEdgeTarget` unless the adjacency `from -> to` stays in range.
pub(crate) fn check_edge(from: Vertex, to: Vertex, vertex_count: usize) -> GraphResult<()> {
    if to < vertex_count {
        Ok(())
    } else {
        Err(GraphError::InvalidEdgeTarget { from, to })
    }
}
