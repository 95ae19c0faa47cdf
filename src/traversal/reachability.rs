//! Path-sensitive search: which vertices lie on every path between two vertices.
//!
//! Unlike the other traversals, the search here clears a vertex's mark when
//! it backtracks out of it. The marks therefore describe only the current
//! recursion path, and the search enumerates every simple path from the
//! start vertex. That is exponential in the worst case.

use std::fmt;

use serde::Serialize;

use crate::graph::Graph;
use crate::types::{check_edge, check_vertex, GraphResult, Vertex};

/// Vertices on the current recursion path.
#[derive(Debug, Clone)]
pub struct ActivePath {
    marks: Vec<bool>,
}

impl ActivePath {
    /// An empty path over `vertex_count` vertices.
    pub fn new(vertex_count: usize) -> Self {
        Self {
            marks: vec![false; vertex_count],
        }
    }

    /// Whether `v` is on the path.
    pub fn contains(&self, v: Vertex) -> bool {
        self.marks[v]
    }

    /// Whether no vertex is on the path.
    pub fn is_empty(&self) -> bool {
        !self.marks.iter().any(|&m| m)
    }

    /// Vertices not on the path, ascending.
    pub fn off_path(&self) -> impl Iterator<Item = Vertex> + '_ {
        self.marks
            .iter()
            .enumerate()
            .filter(|&(_, &on)| !on)
            .map(|(v, _)| v)
    }

    /// Run `f` with `v` pushed onto the path; `v` is popped again when `f`
    /// returns, whatever it returns.
    pub fn within<R>(&mut self, v: Vertex, f: impl FnOnce(&mut Self) -> R) -> R {
        self.marks[v] = true;
        let out = f(self);
        self.marks[v] = false;
        out
    }
}

/// Backtracking DFS from `v` towards `need_v`.
///
/// Each time the search stands on `need_v` it stops descending and sets
/// `result[u] = false` for every `u` off the current path. Entries of
/// `result` are never set back to `true`.
///
/// `path` and `result` must be sized `graph.vertex_count()`; `path` is left as
/// it was found.
pub fn path_dfs<G: Graph>(
    graph: &G,
    v: Vertex,
    path: &mut ActivePath,
    result: &mut [bool],
    need_v: Vertex,
) -> GraphResult<()> {
    let n = graph.vertex_count();
    check_vertex(v, n)?;
    check_vertex(need_v, n)?;
    descend(graph, v, path, result, need_v, n)
}

fn descend<G: Graph>(
    graph: &G,
    v: Vertex,
    path: &mut ActivePath,
    result: &mut [bool],
    need_v: Vertex,
    n: usize,
) -> GraphResult<()> {
    path.within(v, |path| -> GraphResult<()> {
        if v == need_v {
            for u in path.off_path() {
                result[u] = false;
            }
            return Ok(());
        }
        for next in graph.adjacencies(v) {
            check_edge(v, next, n)?;
            if !path.contains(next) {
                descend(graph, next, path, result, need_v, n)?;
            }
        }
        Ok(())
    })
}

/// For every vertex, whether it lies on every simple path from `v1` to `v2`.
///
/// `v1` and `v2` are always flagged when a path exists. When `v2` cannot be
/// reached every vertex stays flagged.
pub fn reachability_report<G: Graph>(
    graph: &G,
    v1: Vertex,
    v2: Vertex,
) -> GraphResult<ReachabilityReport> {
    let n = graph.vertex_count();
    check_vertex(v1, n)?;
    check_vertex(v2, n)?;

    let mut path = ActivePath::new(n);
    let mut flags = vec![true; n];
    descend(graph, v1, &mut path, &mut flags, v2, n)?;

    log::debug!(
        "path search {} -> {}: {} of {} vertices on every path",
        v1,
        v2,
        flags.iter().filter(|&&f| f).count(),
        n
    );
    Ok(ReachabilityReport { flags })
}

/// Per-vertex outcome of [`reachability_report`].
///
/// Displays as one `vertex->flag` line per vertex followed by a blank line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReachabilityReport {
    flags: Vec<bool>,
}

impl ReachabilityReport {
    /// Flag per vertex.
    pub fn flags(&self) -> &[bool] {
        &self.flags
    }

    /// Flag of one vertex; `false` when out of range.
    pub fn is_flagged(&self, v: Vertex) -> bool {
        self.flags.get(v).copied().unwrap_or(false)
    }

    /// Flagged vertices, ascending.
    pub fn flagged(&self) -> Vec<Vertex> {
        self.flags
            .iter()
            .enumerate()
            .filter_map(|(v, &f)| f.then_some(v))
            .collect()
    }

    /// Unwrap the flags.
    pub fn into_inner(self) -> Vec<bool> {
        self.flags
    }
}

impl fmt::Display for ReachabilityReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (v, flag) in self.flags.iter().enumerate() {
            writeln!(f, "{}->{}", v, flag)?;
        }
        writeln!(f)
    }
}
