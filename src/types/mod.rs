//! Core data types for the graph-algos library.

pub mod edge;
pub mod error;

pub use edge::WeightedEdgeTo;
pub use error::{GraphError, GraphResult};

pub(crate) use error::{check_edge, check_vertex};

/// A vertex is a dense zero-based index in `0..vertex_count`.
pub type Vertex = usize;

/// Distance of a vertex not (yet) reached from the source.
pub const INFINITY: f64 = f64::INFINITY;

/// Weight given to edges added without an explicit weight.
pub const DEFAULT_EDGE_WEIGHT: f64 = 1.0;
