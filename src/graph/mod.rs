//! Graph abstraction and the in-memory reference graph.

pub mod adjacency_graph;
pub mod builder;
pub mod traits;

pub use adjacency_graph::AdjacencyGraph;
pub use builder::GraphBuilder;
pub use traits::{Graph, WeightedGraph};
