use log::debug;
use num_traits::Float;
use std::fmt::Debug;

use crate::graph::Graph;
use crate::{Error, Result};

/// Distances and next hops between every ordered pair of vertices
#[derive(Debug, Clone)]
pub struct AllPairsResult<W> {
    distances: Vec<Vec<W>>,
    /// `next[u][v]` is the vertex after `u` on a shortest `u -> v` path
    next: Vec<Vec<Option<usize>>>,
}

impl<W> AllPairsResult<W>
where
    W: Float + Debug,
{
    pub fn vertex_count(&self) -> usize {
        self.distances.len()
    }

    /// Shortest distance from `from` to `to`, infinite when unreachable
    pub fn distance(&self, from: usize, to: usize) -> Option<W> {
        self.distances.get(from).and_then(|row| row.get(to)).copied()
    }

    /// Distance matrix, row per source vertex
    pub fn distances(&self) -> &[Vec<W>] {
        &self.distances
    }

    /// Shortest path from `from` to `to`, both endpoints included
    pub fn path(&self, from: usize, to: usize) -> Option<Vec<usize>> {
        let mut current = from;
        let mut path = vec![from];
        while current != to {
            current = (*self.next.get(current)?.get(to)?)?;
            path.push(current);
            if path.len() > self.vertex_count() {
                return None;
            }
        }
        Some(path)
    }
}

/// Floyd-Warshall all-pairs shortest paths
///
/// Accepts negative weights; a negative cycle anywhere in the graph is
/// reported as [`Error::NegativeCycle`].
#[derive(Debug, Default, Clone)]
pub struct FloydWarshall;

impl FloydWarshall {
    pub fn new() -> Self {
        FloydWarshall
    }

    pub fn compute<W, G>(&self, graph: &G) -> Result<AllPairsResult<W>>
    where
        W: Float + Debug,
        G: Graph<W>,
    {
        let n = graph.vertex_count();
        let mut distances = vec![vec![W::infinity(); n]; n];
        let mut next = vec![vec![None; n]; n];

        for v in 0..n {
            distances[v][v] = W::zero();
            next[v][v] = Some(v);
        }
        for (u, v, weight) in graph.edges() {
            if weight < distances[u][v] {
                distances[u][v] = weight;
                next[u][v] = Some(v);
            }
        }

        for k in 0..n {
            for i in 0..n {
                if distances[i][k] == W::infinity() {
                    continue;
                }
                for j in 0..n {
                    if distances[k][j] == W::infinity() {
                        continue;
                    }
                    let through_k = distances[i][k] + distances[k][j];
                    if through_k < distances[i][j] {
                        distances[i][j] = through_k;
                        next[i][j] = next[i][k];
                    }
                }
            }
        }

        if (0..n).any(|v| distances[v][v] < W::zero()) {
            return Err(Error::NegativeCycle);
        }

        debug!("Floyd-Warshall computed {} x {} distances", n, n);
        Ok(AllPairsResult { distances, next })
    }
}
