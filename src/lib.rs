//! graph-algos — classic graph algorithms over an abstract graph interface.
//!
//! Algorithms only see a graph through the [`Graph`] and [`WeightedGraph`]
//! traits; vertices are dense indices `0..vertex_count()`. All per-vertex
//! state belongs to the running algorithm, never to the graph.

pub mod graph;
pub mod paths;
pub mod traversal;
pub mod types;

// Re-export commonly used types at the crate root
pub use graph::{AdjacencyGraph, Graph, GraphBuilder, WeightedGraph};
pub use paths::{bellman_ford, dijkstra, dijkstra_all, MinDistanceSearchResult};
pub use traversal::{
    bfs, bfs_iter, dfs_iter, dfs_recursion, path_dfs, reachability_report, ActivePath,
    BreadthFirst, DepthFirst, ReachabilityReport,
};
pub use types::{GraphError, GraphResult, Vertex, WeightedEdgeTo, DEFAULT_EDGE_WEIGHT, INFINITY};
