use markov_sssp::algorithm::engine::RelaxationEngine;
use markov_sssp::algorithm::semantics::{Additive, Multiplicative, PathSemantics};
use markov_sssp::{AdjacencyGraph, Edge};

#[test]
fn test_additive_keys_are_values() {
    let engine = RelaxationEngine::new(Additive);
    let semantics = engine.semantics();

    let zero: f64 = semantics.identity();
    let unreached: f64 = semantics.unreached();
    assert_eq!(zero, 0.0);
    assert!(unreached.is_infinite());
    assert_eq!(semantics.combine(2.5, 1.5), 4.0);
    assert!(semantics.is_better(1.0, 2.0));
    assert!(!semantics.is_better(2.0, 2.0));
    assert_eq!(semantics.to_priority(3.25), 3.25);
    assert_eq!(semantics.from_priority(3.25), 3.25);
}

#[test]
fn test_multiplicative_keys_are_negative_logs() {
    let engine = RelaxationEngine::new(Multiplicative);
    let semantics = engine.semantics();

    let one: f64 = semantics.identity();
    let unreached: f64 = semantics.unreached();
    assert_eq!(one, 1.0);
    assert_eq!(unreached, 0.0);
    assert_eq!(semantics.to_priority(one), 0.0);
    assert!(semantics.to_priority(unreached).is_infinite());

    // More probable means a smaller key
    assert!(semantics.is_better(0.7, 0.3));
    assert!(semantics.to_priority(0.7) < semantics.to_priority(0.3));

    let recovered: f64 = semantics.from_priority(semantics.to_priority(0.42));
    assert!((recovered - 0.42).abs() < 1e-12);
}

#[test]
fn test_engine_runs_directly_over_a_graph() {
    let edges = [
        Edge::new(0, 1, 0.5),
        Edge::new(0, 2, 0.5),
        Edge::new(1, 2, 1.0),
    ];
    let graph = AdjacencyGraph::from_edges(3, true, &edges).unwrap();

    let additive = RelaxationEngine::new(Additive)
        .with_invariant_checks(true)
        .run(&graph, 0)
        .unwrap();
    assert_eq!(additive.values(), vec![0.0, 0.5, 0.5]);

    let multiplicative = RelaxationEngine::new(Multiplicative)
        .with_invariant_checks(true)
        .run(&graph, 0)
        .unwrap();
    assert_eq!(multiplicative.values(), vec![1.0, 0.5, 0.5]);
    // 0 -> 1 -> 2 ties with 0 -> 2; the direct edge was found first
    assert_eq!(multiplicative.predecessor(2), Some(0));
    assert_eq!(multiplicative.stats.stale_discards, 0);
}
