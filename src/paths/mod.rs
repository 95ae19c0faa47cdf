//! Single-source shortest paths.

pub mod bellman_ford;
pub mod dijkstra;
pub mod result;

pub use bellman_ford::bellman_ford;
pub use dijkstra::{dijkstra, dijkstra_all};
pub use result::MinDistanceSearchResult;
