use markov_sssp::graph::generators::random_graph;
use markov_sssp::graph::Graph;
use markov_sssp::{
    AdjacencyGraph, BellmanFord, Dijkstra, Edge, Error, FloydWarshall, ShortestPathAlgorithm,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn assert_close(actual: f64, expected: f64) {
    if expected.is_infinite() {
        assert!(actual.is_infinite(), "expected unreachable, got {}", actual);
        return;
    }
    let tolerance = 1e-9 * expected.abs().max(1.0);
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {}, got {}",
        expected,
        actual
    );
}

#[test]
fn test_bellman_ford_agrees_with_dijkstra() {
    for seed in 0..10 {
        let mut rng = StdRng::seed_from_u64(seed);
        let graph = random_graph(50, 3.0, true, &mut rng);

        let dijkstra = Dijkstra::new().compute_shortest_paths(&graph, 0).unwrap();
        let bellman_ford = BellmanFord::new().compute_shortest_paths(&graph, 0).unwrap();

        for v in 0..graph.vertex_count() {
            assert_close(bellman_ford.records[v].priority, dijkstra.records[v].priority);
            assert_eq!(bellman_ford.is_reachable(v), dijkstra.is_reachable(v));
        }
    }
}

#[test]
fn test_bellman_ford_handles_negative_weights() {
    let edges = [
        Edge::new(0, 1, 4.0),
        Edge::new(0, 2, 5.0),
        Edge::new(2, 1, -3.0),
        Edge::new(1, 3, 2.0),
    ];
    let graph: AdjacencyGraph<f64> = AdjacencyGraph::from_edges(5, true, &edges).unwrap();
    let result = BellmanFord::new().compute_shortest_paths(&graph, 0).unwrap();

    assert_eq!(result.values()[..4], [0.0, 2.0, 5.0, 4.0]);
    assert!(result.records[4].priority.is_infinite());
    assert_eq!(result.path_to(3), Some(vec![0, 2, 1, 3]));
}

#[test]
fn test_bellman_ford_without_early_exit_gives_same_answer() {
    let mut rng = StdRng::seed_from_u64(17);
    let graph = random_graph(30, 2.0, false, &mut rng);

    let early = BellmanFord::new().compute_shortest_paths(&graph, 0).unwrap();
    let full = BellmanFord::new()
        .with_early_exit(false)
        .compute_shortest_paths(&graph, 0)
        .unwrap();

    assert_eq!(early.values(), full.values());
    assert!(full.stats.edges_scanned >= early.stats.edges_scanned);
}

#[test]
fn test_bellman_ford_detects_negative_cycle() {
    let edges = [
        Edge::new(0, 1, 1.0),
        Edge::new(1, 2, -2.0),
        Edge::new(2, 1, 1.0),
    ];
    let graph = AdjacencyGraph::from_edges(3, true, &edges).unwrap();
    let err = BellmanFord::new().compute_shortest_paths(&graph, 0).unwrap_err();
    assert_eq!(err, Error::NegativeCycle);
}

#[test]
fn test_bellman_ford_ignores_unreachable_negative_cycle() {
    let edges = [
        Edge::new(0, 1, 1.0),
        Edge::new(2, 3, -2.0),
        Edge::new(3, 2, 1.0),
    ];
    let graph = AdjacencyGraph::from_edges(4, true, &edges).unwrap();
    let result = BellmanFord::new().compute_shortest_paths(&graph, 0).unwrap();
    assert_eq!(result.records[1].priority, 1.0);
    assert!(!result.is_reachable(2));
}

#[test]
fn test_negative_undirected_edge_is_a_cycle() {
    let graph = AdjacencyGraph::from_edges(2, false, &[Edge::new(0, 1, -1.0)]).unwrap();
    assert_eq!(
        BellmanFord::new().compute_shortest_paths(&graph, 0).unwrap_err(),
        Error::NegativeCycle
    );
}

#[test]
fn test_floyd_warshall_agrees_with_dijkstra_from_every_source() {
    let mut rng = StdRng::seed_from_u64(23);
    let graph = random_graph(25, 3.0, true, &mut rng);
    let all_pairs = FloydWarshall::new().compute(&graph).unwrap();

    for source in 0..graph.vertex_count() {
        let single = Dijkstra::new().compute_shortest_paths(&graph, source).unwrap();
        for target in 0..graph.vertex_count() {
            assert_close(
                all_pairs.distance(source, target).unwrap(),
                single.records[target].priority,
            );
        }
    }
}

#[test]
fn test_floyd_warshall_paths() {
    let edges = [
        Edge::new(0, 1, 1.0),
        Edge::new(0, 2, 2.0),
        Edge::new(1, 2, 1.5),
        Edge::new(2, 3, 1.0),
        Edge::new(3, 4, 8.1),
    ];
    let graph: AdjacencyGraph<f64> = AdjacencyGraph::from_edges(6, false, &edges).unwrap();
    let result = FloydWarshall::new().compute(&graph).unwrap();

    assert_eq!(result.path(4, 0), Some(vec![4, 3, 2, 0]));
    assert_eq!(result.path(1, 1), Some(vec![1]));
    assert_eq!(result.path(0, 5), None);
    assert!(result.distance(0, 5).unwrap().is_infinite());
    assert_eq!(result.distance(9, 0), None);
}

#[test]
fn test_floyd_warshall_detects_negative_cycle() {
    let edges = [Edge::new(0, 1, 1.0), Edge::new(1, 0, -3.0)];
    let graph = AdjacencyGraph::from_edges(2, true, &edges).unwrap();
    assert_eq!(FloydWarshall::new().compute(&graph).unwrap_err(), Error::NegativeCycle);
}
