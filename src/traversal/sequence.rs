//! Lazy, pull-based DFS and BFS sequences.
//!
//! A [`Traversal`] remembers a graph and a start vertex. Every call to
//! [`Traversal::iter`] starts an independent walk with its own frontier and
//! visited set, so the same sequence can be iterated any number of times.
//! A single [`TraversalIter`] is driven by one consumer through `&mut self`.
//!
//! Each pull takes the next vertex off the frontier, marks and pushes all of
//! its unvisited neighbours, then yields it. With a stack frontier this is a
//! "plan-ahead" DFS: neighbours are claimed when their parent is expanded,
//! which differs from the order of [`dfs_recursion`](super::dfs_recursion).

use std::collections::VecDeque;
use std::iter::FusedIterator;
use std::marker::PhantomData;

use crate::graph::Graph;
use crate::types::{check_vertex, GraphResult, Vertex};

/// Working set of vertices waiting to be expanded.
///
/// The container decides the order: `Vec` pops last-in (DFS),
/// `VecDeque` pops first-in (BFS).
pub trait Frontier {
    /// A frontier holding only `start`.
    fn seeded(start: Vertex) -> Self;

    /// Add a vertex to the frontier.
    fn put(&mut self, v: Vertex);

    /// Remove the next vertex to expand.
    fn take(&mut self) -> Option<Vertex>;
}

impl Frontier for Vec<Vertex> {
    fn seeded(start: Vertex) -> Self {
        vec![start]
    }

    fn put(&mut self, v: Vertex) {
        self.push(v);
    }

    fn take(&mut self) -> Option<Vertex> {
        self.pop()
    }
}

impl Frontier for VecDeque<Vertex> {
    fn seeded(start: Vertex) -> Self {
        VecDeque::from([start])
    }

    fn put(&mut self, v: Vertex) {
        self.push_back(v);
    }

    fn take(&mut self) -> Option<Vertex> {
        self.pop_front()
    }
}

/// A restartable traversal sequence over `graph` starting at `from`.
pub struct Traversal<'g, G, F> {
    graph: &'g G,
    from: Vertex,
    _frontier: PhantomData<F>,
}

/// Stack-driven sequence.
pub type DepthFirst<'g, G> = Traversal<'g, G, Vec<Vertex>>;
/// Queue-driven sequence.
pub type BreadthFirst<'g, G> = Traversal<'g, G, VecDeque<Vertex>>;

impl<'g, G: Graph, F: Frontier> Traversal<'g, G, F> {
    /// Fails with `VertexOutOfRange` if `from` is not a vertex of `graph`.
    pub fn new(graph: &'g G, from: Vertex) -> GraphResult<Self> {
        check_vertex(from, graph.vertex_count())?;
        Ok(Self {
            graph,
            from,
            _frontier: PhantomData,
        })
    }

    /// The start vertex.
    pub fn start(&self) -> Vertex {
        self.from
    }

    /// Begin a fresh walk.
    pub fn iter(&self) -> TraversalIter<'g, G, F> {
        let mut visited = vec![false; self.graph.vertex_count()];
        visited[self.from] = true;
        TraversalIter {
            graph: self.graph,
            frontier: F::seeded(self.from),
            visited,
        }
    }
}

impl<'g, G: Graph, F: Frontier> IntoIterator for &Traversal<'g, G, F> {
    type Item = Vertex;
    type IntoIter = TraversalIter<'g, G, F>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// One in-progress walk.
///
/// # Panics
///
/// `next` panics if the graph reports an adjacency outside
/// `0..vertex_count()`.
pub struct TraversalIter<'g, G, F> {
    graph: &'g G,
    frontier: F,
    visited: Vec<bool>,
}

/// Iterator returned by [`DepthFirst::iter`].
pub type DfsIter<'g, G> = TraversalIter<'g, G, Vec<Vertex>>;
/// Iterator returned by [`BreadthFirst::iter`].
pub type BfsIter<'g, G> = TraversalIter<'g, G, VecDeque<Vertex>>;

impl<G: Graph, F: Frontier> Iterator for TraversalIter<'_, G, F> {
    type Item = Vertex;

    fn next(&mut self) -> Option<Vertex> {
        let curr = self.frontier.take()?;
        let graph = self.graph;
        for adj in graph.adjacencies(curr) {
            if !self.visited[adj] {
                self.visited[adj] = true;
                self.frontier.put(adj);
            }
        }
        Some(curr)
    }
}

impl<G: Graph, F: Frontier> FusedIterator for TraversalIter<'_, G, F> {}

/// Lazy DFS sequence from `from`.
pub fn dfs_iter<G: Graph>(graph: &G, from: Vertex) -> GraphResult<DepthFirst<'_, G>> {
    Traversal::new(graph, from)
}

/// Lazy BFS sequence from `from`.
pub fn bfs_iter<G: Graph>(graph: &G, from: Vertex) -> GraphResult<BreadthFirst<'_, G>> {
    Traversal::new(graph, from)
}
