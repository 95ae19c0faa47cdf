//! Bellman-Ford single-source shortest paths, O(n·m).

use crate::graph::WeightedGraph;
use crate::types::{check_edge, check_vertex, GraphResult, Vertex};

use super::MinDistanceSearchResult;

/// Shortest distances and predecessors from `source`.
///
/// Relaxes every edge, vertices in index order and edges in adjacency order,
/// for at most `n - 1` passes and stops after the first pass that changes
/// nothing. Negative weights are allowed. Negative cycles are not detected:
/// the arrays after the last pass are returned as they are.
pub fn bellman_ford<G: WeightedGraph>(
    graph: &G,
    source: Vertex,
) -> GraphResult<MinDistanceSearchResult> {
    let n = graph.vertex_count();
    check_vertex(source, n)?;

    let mut result = MinDistanceSearchResult::start(n, source);

    for _ in 0..n - 1 {
        result.rounds += 1;
        let mut changed = false;

        for j in 0..n {
            for edge in graph.adjacencies_with_weights(j) {
                check_edge(j, edge.to, n)?;
                let candidate = result.distances[j] + edge.weight;
                if result.distances[edge.to] > candidate {
                    log::trace!("relax {} -> {}: {}", j, edge.to, candidate);
                    result.distances[edge.to] = candidate;
                    result.predecessors[edge.to] = Some(j);
                    changed = true;
                }
            }
        }

        if !changed {
            break;
        }
    }

    log::debug!(
        "bellman-ford from {}: {} passes over {} vertices",
        source,
        result.rounds,
        n
    );
    Ok(result)
}
