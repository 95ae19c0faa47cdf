//! Criterion benchmarks for graph-algos.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use graph_algos::graph::AdjacencyGraph;
use graph_algos::paths::{bellman_ford, dijkstra, dijkstra_all};
use graph_algos::traversal::{bfs, bfs_iter, dfs_iter, dfs_recursion};

/// Random directed graph with non-negative weights.
fn make_graph(node_count: usize, edges_per_node: usize) -> AdjacencyGraph {
    let mut rng = StdRng::seed_from_u64(42);
    let mut graph = AdjacencyGraph::new(node_count);
    for from in 0..node_count {
        for _ in 0..edges_per_node {
            let to = rng.gen_range(0..node_count);
            graph
                .add_weighted_edge(from, to, rng.gen_range(0.1..10.0))
                .unwrap();
        }
    }
    graph
}

fn bench_traversal(c: &mut Criterion) {
    let graph = make_graph(10_000, 5);

    c.bench_function("bfs_callback_10k", |b| {
        b.iter(|| {
            let mut count = 0usize;
            bfs(&graph, black_box(0), |_| count += 1).unwrap();
            count
        })
    });

    c.bench_function("bfs_iter_10k", |b| {
        let seq = bfs_iter(&graph, 0).unwrap();
        b.iter(|| seq.iter().count())
    });

    c.bench_function("dfs_iter_10k", |b| {
        let seq = dfs_iter(&graph, 0).unwrap();
        b.iter(|| seq.iter().count())
    });

    // Recursion depth grows with the graph, keep this one small.
    let small = make_graph(1_000, 3);
    c.bench_function("dfs_recursion_1k", |b| {
        b.iter(|| {
            let mut count = 0usize;
            dfs_recursion(&small, black_box(0), 999, |_| count += 1).unwrap();
            count
        })
    });
}

fn bench_shortest_paths(c: &mut Criterion) {
    let graph = make_graph(1_000, 5);

    c.bench_function("dijkstra_all_1k", |b| {
        b.iter(|| dijkstra_all(&graph, black_box(0)).unwrap())
    });

    c.bench_function("dijkstra_target_1k", |b| {
        b.iter(|| dijkstra(&graph, black_box(0), black_box(500)).unwrap())
    });

    c.bench_function("bellman_ford_1k", |b| {
        b.iter(|| bellman_ford(&graph, black_box(0)).unwrap())
    });
}

criterion_group!(benches, bench_traversal, bench_shortest_paths);
criterion_main!(benches);
