//! Phase 1 tests: graph abstraction, reference graph, builder.

use graph_algos::graph::{AdjacencyGraph, Graph, GraphBuilder, WeightedGraph};
use graph_algos::traversal::bfs;
use graph_algos::types::error::GraphError;
use graph_algos::types::{Vertex, WeightedEdgeTo, DEFAULT_EDGE_WEIGHT};

// ==================== Helper ====================

/// Adjacency-matrix graph implemented outside the crate.
struct MatrixGraph {
    matrix: Vec<Vec<bool>>,
}

impl Graph for MatrixGraph {
    fn vertex_count(&self) -> usize {
        self.matrix.len()
    }

    fn adjacencies(&self, v: Vertex) -> impl Iterator<Item = Vertex> + '_ {
        self.matrix[v]
            .iter()
            .enumerate()
            .filter(|&(_, &edge)| edge)
            .map(|(to, _)| to)
    }
}

fn neighbors(graph: &AdjacencyGraph, v: Vertex) -> Vec<Vertex> {
    graph.adjacencies(v).collect()
}

// ==================== AdjacencyGraph Tests ====================

#[test]
fn test_new_graph_is_empty() {
    let graph = AdjacencyGraph::new(4);
    assert_eq!(graph.vertex_count(), 4);
    assert_eq!(graph.edge_count(), 0);
    assert!(graph.is_directed());
    for v in 0..4 {
        assert!(neighbors(&graph, v).is_empty());
    }
}

#[test]
fn test_adjacency_keeps_insertion_order() {
    let mut graph = AdjacencyGraph::new(4);
    graph.add_edge(0, 3).unwrap();
    graph.add_edge(0, 1).unwrap();
    graph.add_edge(0, 2).unwrap();

    assert_eq!(neighbors(&graph, 0), vec![3, 1, 2]);
    assert_eq!(graph.edge_count(), 3);
}

#[test]
fn test_default_and_explicit_weights() {
    let mut graph = AdjacencyGraph::new(3);
    graph.add_edge(0, 1).unwrap();
    graph.add_weighted_edge(0, 2, -2.5).unwrap();

    let edges: Vec<WeightedEdgeTo> = graph.adjacencies_with_weights(0).collect();
    assert_eq!(
        edges,
        vec![
            WeightedEdgeTo::new(1, DEFAULT_EDGE_WEIGHT),
            WeightedEdgeTo::new(2, -2.5)
        ]
    );
}

#[test]
fn test_add_edge_out_of_range() {
    let mut graph = AdjacencyGraph::new(2);
    match graph.add_edge(0, 2).unwrap_err() {
        GraphError::VertexOutOfRange {
            vertex,
            vertex_count,
        } => {
            assert_eq!(vertex, 2);
            assert_eq!(vertex_count, 2);
        }
        e => panic!("Expected VertexOutOfRange, got {:?}", e),
    }
    assert!(graph.add_edge(5, 0).is_err());
    assert_eq!(graph.edge_count(), 0);
}

#[test]
fn test_non_finite_weight_rejected() {
    let mut graph = AdjacencyGraph::new(2);
    match graph.add_weighted_edge(0, 1, f64::NAN).unwrap_err() {
        GraphError::InvalidWeight(w) => assert!(w.is_nan()),
        e => panic!("Expected InvalidWeight, got {:?}", e),
    }
    assert!(matches!(
        graph.add_weighted_edge(0, 1, f64::INFINITY),
        Err(GraphError::InvalidWeight(_))
    ));
    assert!(!graph.has_edge(0, 1));
}

#[test]
fn test_undirected_edges_mirrored() {
    let mut graph = AdjacencyGraph::undirected(3);
    graph.add_weighted_edge(0, 1, 2.0).unwrap();
    graph.add_edge(2, 2).unwrap();

    assert!(!graph.is_directed());
    assert!(graph.has_edge(0, 1));
    assert!(graph.has_edge(1, 0));
    assert_eq!(neighbors(&graph, 2), vec![2]);
    assert_eq!(graph.edge_count(), 2);
    assert_eq!(graph.edges().count(), 3);
}

#[test]
fn test_remove_edge() {
    let mut graph = AdjacencyGraph::new(3);
    graph.add_edge(0, 1).unwrap();
    graph.add_edge(0, 2).unwrap();
    graph.add_edge(0, 1).unwrap();

    graph.remove_edge(0, 1).unwrap();
    assert_eq!(neighbors(&graph, 0), vec![2]);
    assert_eq!(graph.edge_count(), 1);

    match graph.remove_edge(0, 1).unwrap_err() {
        GraphError::EdgeNotFound { from, to } => assert_eq!((from, to), (0, 1)),
        e => panic!("Expected EdgeNotFound, got {:?}", e),
    }
}

#[test]
fn test_remove_undirected_edge() {
    let mut graph = AdjacencyGraph::undirected(2);
    graph.add_edge(0, 1).unwrap();
    graph.remove_edge(1, 0).unwrap();
    assert!(!graph.has_edge(0, 1));
    assert!(!graph.has_edge(1, 0));
    assert_eq!(graph.edge_count(), 0);
}

#[test]
fn test_edges_listing() {
    let mut graph = AdjacencyGraph::new(3);
    graph.add_weighted_edge(1, 2, 3.0).unwrap();
    graph.add_weighted_edge(0, 1, 1.0).unwrap();

    let edges: Vec<(Vertex, Vertex)> = graph.edges().map(|(from, e)| (from, e.to)).collect();
    assert_eq!(edges, vec![(0, 1), (1, 2)]);
}

// ==================== Builder Tests ====================

#[test]
fn test_builder_directed() {
    let graph = GraphBuilder::new(4)
        .edge(0, 1)
        .weighted_edge(1, 2, 2.0)
        .edges(&[(2, 3), (3, 0)])
        .build()
        .unwrap();

    assert_eq!(graph.vertex_count(), 4);
    assert_eq!(graph.edge_count(), 4);
    assert!(graph.has_edge(3, 0));
    assert!(!graph.has_edge(0, 3));
}

#[test]
fn test_builder_undirected() {
    let graph = GraphBuilder::new(3).undirected().edge(0, 2).build().unwrap();
    assert!(graph.has_edge(2, 0));
    assert!(!graph.is_directed());
}

#[test]
fn test_builder_validates_on_build() {
    let result = GraphBuilder::new(2).edge(0, 1).edge(1, 9).build();
    assert!(matches!(
        result,
        Err(GraphError::VertexOutOfRange { vertex: 9, .. })
    ));
}

// ==================== Trait Tests ====================

#[test]
fn test_foreign_graph_implementation() {
    let graph = MatrixGraph {
        matrix: vec![
            vec![false, true, true],
            vec![false, false, true],
            vec![false, false, false],
        ],
    };

    let mut order = Vec::new();
    bfs(&graph, 0, |v| order.push(v)).unwrap();
    assert_eq!(order, vec![0, 1, 2]);
}

#[test]
fn test_error_messages() {
    let err = GraphError::VertexOutOfRange {
        vertex: 7,
        vertex_count: 3,
    };
    assert_eq!(err.to_string(), "Vertex 7 out of range (vertex count 3)");

    let err = GraphError::InvalidEdgeTarget { from: 1, to: 9 };
    assert_eq!(err.to_string(), "Edge 1 -> 9 references an invalid vertex");
}
