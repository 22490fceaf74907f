use rand::seq::index::sample;
use rand::Rng;

use crate::graph::{AdjacencyGraph, MutableGraph};

/// Generates a random graph with roughly `edge_factor * n` edges
/// Weights are drawn uniformly from `1.0..100.0`; self-loops are skipped.
pub fn random_graph<R: Rng>(
    n: usize,
    edge_factor: f64,
    directed: bool,
    rng: &mut R,
) -> AdjacencyGraph<f64> {
    let mut graph = AdjacencyGraph::with_vertices(n, directed);
    if n < 2 {
        return graph;
    }

    let num_edges = (edge_factor * n as f64) as usize;
    for _ in 0..num_edges {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        if u != v {
            let weight = rng.gen_range(1.0..100.0);
            // Both endpoints are in range, so this cannot fail
            let _ = graph.add_edge(u, v, weight);
        }
    }

    graph
}

/// Generates a random Markov chain over `n` states
/// Each state transitions to `out_degree` distinct states (capped at `n`)
/// with random probabilities normalized to sum to one.
pub fn random_markov_chain<R: Rng>(
    n: usize,
    out_degree: usize,
    rng: &mut R,
) -> AdjacencyGraph<f64> {
    let mut graph = AdjacencyGraph::with_vertices(n, true);
    let degree = out_degree.min(n);

    for u in 0..n {
        if degree == 0 {
            break;
        }
        let targets = sample(rng, n, degree).into_vec();
        let raw: Vec<f64> = targets.iter().map(|_| rng.gen_range(0.05..1.0)).collect();
        let total: f64 = raw.iter().sum();

        for (v, weight) in targets.into_iter().zip(raw) {
            let _ = graph.add_edge(u, v, weight / total);
        }
    }

    graph
}

/// Generates an undirected `width * height` grid with unit weights
pub fn generate_grid(width: usize, height: usize) -> AdjacencyGraph<f64> {
    let mut graph = AdjacencyGraph::with_vertices(width * height, false);

    // Helper function to get vertex index from 2D coordinates
    let index = |x: usize, y: usize| -> usize { y * width + x };

    for y in 0..height {
        for x in 0..width {
            if x + 1 < width {
                let _ = graph.add_edge(index(x, y), index(x + 1, y), 1.0);
            }
            if y + 1 < height {
                let _ = graph.add_edge(index(x, y), index(x, y + 1), 1.0);
            }
        }
    }

    graph
}
