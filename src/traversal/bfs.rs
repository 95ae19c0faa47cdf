//! Queue-based breadth-first search.

use std::collections::VecDeque;

use crate::graph::Graph;
use crate::types::{check_edge, check_vertex, GraphResult, Vertex};

/// BFS from `from`, calling `visitor` once per reachable vertex in layer
/// order. Neighbours are marked when enqueued, so ties inside a layer follow
/// adjacency order.
pub fn bfs<G, F>(graph: &G, from: Vertex, mut visitor: F) -> GraphResult<()>
where
    G: Graph,
    F: FnMut(Vertex),
{
    let n = graph.vertex_count();
    check_vertex(from, n)?;

    let mut visited = vec![false; n];
    let mut queue: VecDeque<Vertex> = VecDeque::new();
    visited[from] = true;
    queue.push_back(from);

    while let Some(curr) = queue.pop_front() {
        visitor(curr);
        for next in graph.adjacencies(curr) {
            check_edge(curr, next, n)?;
            if !visited[next] {
                visited[next] = true;
                queue.push_back(next);
            }
        }
    }

    Ok(())
}
