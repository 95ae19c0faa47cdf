//! Graph traversal algorithms (DFS, BFS, path-sensitive search).

pub mod bfs;
pub mod dfs;
pub mod reachability;
pub mod sequence;

pub use bfs::bfs;
pub use dfs::dfs_recursion;
pub use reachability::{path_dfs, reachability_report, ActivePath, ReachabilityReport};
pub use sequence::{
    bfs_iter, dfs_iter, BfsIter, BreadthFirst, DepthFirst, DfsIter, Frontier, Traversal,
    TraversalIter,
};
