//! Dijkstra's algorithm in its O(n²) form: a linear scan stands in for the
//! priority queue.

use crate::graph::WeightedGraph;
use crate::types::{check_edge, check_vertex, GraphResult, Vertex};

use super::MinDistanceSearchResult;

/// Shortest distances from `source`, stopping once `target` is extracted.
///
/// Weights must be non-negative for the distances to be shortest; this is not
/// checked. The recorded predecessor of each extracted vertex is the vertex
/// extracted just before it, so `predecessors` follows extraction order and is
/// not, in general, the shortest-path tree.
pub fn dijkstra<G: WeightedGraph>(
    graph: &G,
    source: Vertex,
    target: Vertex,
) -> GraphResult<MinDistanceSearchResult> {
    let n = graph.vertex_count();
    check_vertex(source, n)?;
    check_vertex(target, n)?;
    scan_search(graph, source, Some(target))
}

/// Like [`dijkstra`] without a target: runs until every reachable vertex is
/// extracted.
pub fn dijkstra_all<G: WeightedGraph>(
    graph: &G,
    source: Vertex,
) -> GraphResult<MinDistanceSearchResult> {
    check_vertex(source, graph.vertex_count())?;
    scan_search(graph, source, None)
}

fn scan_search<G: WeightedGraph>(
    graph: &G,
    source: Vertex,
    target: Option<Vertex>,
) -> GraphResult<MinDistanceSearchResult> {
    let n = graph.vertex_count();
    let mut result = MinDistanceSearchResult::start(n, source);
    let mut found = vec![false; n];
    let mut prev: Option<Vertex> = None;

    for _ in 0..n {
        let Some(curr) = closest_unfound(&result.distances, &found) else {
            break;
        };
        // Only unreachable vertices are left.
        if !result.distances[curr].is_finite() {
            log::debug!(
                "dijkstra from {}: {} vertices unreachable",
                source,
                found.iter().filter(|&&f| !f).count()
            );
            break;
        }

        found[curr] = true;
        result.predecessors[curr] = prev;
        result.rounds += 1;
        log::trace!("extracted {} at distance {}", curr, result.distances[curr]);

        if target == Some(curr) {
            log::debug!("dijkstra from {}: reached target {}", source, curr);
            break;
        }

        let base = result.distances[curr];
        for edge in graph.adjacencies_with_weights(curr) {
            check_edge(curr, edge.to, n)?;
            let candidate = base + edge.weight;
            if candidate < result.distances[edge.to] {
                result.distances[edge.to] = candidate;
            }
        }
        prev = Some(curr);
    }

    Ok(result)
}

/// Unfound vertex with the smallest distance; the lowest index wins ties.
fn closest_unfound(distances: &[f64], found: &[bool]) -> Option<Vertex> {
    let mut best: Option<Vertex> = None;
    for (v, &d) in distances.iter().enumerate() {
        if found[v] {
            continue;
        }
        if best.map_or(true, |b| d < distances[b]) {
            best = Some(v);
        }
    }
    best
}
