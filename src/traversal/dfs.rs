//! Recursive depth-first search with an exclusion latch.

use crate::graph::Graph;
use crate::types::{check_edge, check_vertex, GraphResult, Vertex};

/// Recursive DFS from `from`, calling `visitor` for `from` and then for every
/// vertex right before it is recursed into.
///
/// While scanning the adjacency list of a vertex, meeting
/// `exclude_neighbor_of` sets a latch: that adjacency is never followed and
/// no later adjacency in the same list is recursed into either. Adjacencies
/// already handled before the latch are unaffected, and the latch does not
/// carry over to other vertices' scans. Visited marks are set on entry and
/// never cleared.
///
/// Fails with `VertexOutOfRange` if `from` or `exclude_neighbor_of` is not a
/// vertex, and with `InvalidEdgeTarget` if the graph reports an adjacency
/// outside `0..vertex_count()`.
pub fn dfs_recursion<G, F>(
    graph: &G,
    from: Vertex,
    exclude_neighbor_of: Vertex,
    visitor: F,
) -> GraphResult<()>
where
    G: Graph,
    F: FnMut(Vertex),
{
    let n = graph.vertex_count();
    check_vertex(from, n)?;
    check_vertex(exclude_neighbor_of, n)?;

    let mut walk = LatchedDfs {
        graph,
        visited: vec![false; n],
        exclude: exclude_neighbor_of,
        visitor,
    };
    (walk.visitor)(from);
    walk.visit(from)
}

/// State shared by every level of the recursion.
struct LatchedDfs<'g, G, F> {
    graph: &'g G,
    visited: Vec<bool>,
    exclude: Vertex,
    visitor: F,
}

impl<G, F> LatchedDfs<'_, G, F>
where
    G: Graph,
    F: FnMut(Vertex),
{
    fn visit(&mut self, curr: Vertex) -> GraphResult<()> {
        self.visited[curr] = true;
        let graph = self.graph;
        let n = self.visited.len();
        let mut latched = false;

        for next in graph.adjacencies(curr) {
            check_edge(curr, next, n)?;
            if next == self.exclude {
                latched = true;
                continue;
            }
            if !latched && !self.visited[next] {
                (self.visitor)(next);
                self.visit(next)?;
            }
        }
        Ok(())
    }
}
