use log::{debug, warn};
use num_traits::Float;
use std::fmt::Debug;

use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult, TraversalStats};
use crate::data_structures::PathRecord;
use crate::graph::Graph;
use crate::{Error, Result};

/// Bellman-Ford single-source shortest paths
///
/// Accepts negative edge weights. Runs up to `V - 1` rounds relaxing every
/// edge, then one more round: any edge that still relaxes from a reachable
/// vertex proves a negative cycle, reported as [`Error::NegativeCycle`].
///
/// In an undirected graph a negative edge is itself a negative cycle.
#[derive(Debug, Clone)]
pub struct BellmanFord {
    /// Stop as soon as a round changes nothing
    early_exit: bool,
}

impl Default for BellmanFord {
    fn default() -> Self {
        BellmanFord { early_exit: true }
    }
}

impl BellmanFord {
    pub fn new() -> Self {
        BellmanFord::default()
    }

    /// Enable or disable stopping once a round makes no improvement
    pub fn with_early_exit(mut self, enabled: bool) -> Self {
        self.early_exit = enabled;
        self
    }
}

impl<W, G> ShortestPathAlgorithm<W, G> for BellmanFord
where
    W: Float + Debug,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "Bellman-Ford"
    }

    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult<W>> {
        if !graph.has_vertex(source) {
            return Err(Error::SourceNotFound);
        }

        let n = graph.vertex_count();
        let edges: Vec<(usize, usize, W)> = graph.edges().collect();
        let mut distances = vec![W::infinity(); n];
        let mut predecessors: Vec<Option<usize>> = vec![None; n];
        let mut stats = TraversalStats::default();
        distances[source] = W::zero();

        for round in 1..n {
            let mut changed = false;
            for &(u, v, weight) in &edges {
                stats.edges_scanned += 1;
                if distances[u] == W::infinity() {
                    continue;
                }
                let candidate = distances[u] + weight;
                if candidate < distances[v] {
                    distances[v] = candidate;
                    predecessors[v] = Some(u);
                    stats.improvements += 1;
                    changed = true;
                }
            }
            if !changed && self.early_exit {
                debug!("Bellman-Ford converged after {} rounds", round);
                break;
            }
        }

        let negative_cycle = edges.iter().any(|&(u, v, weight)| {
            distances[u] != W::infinity() && distances[u] + weight < distances[v]
        });
        if negative_cycle {
            warn!("Negative cycle reachable from vertex {}", source);
            return Err(Error::NegativeCycle);
        }

        let records = (0..n)
            .map(|vertex| PathRecord::new(vertex, distances[vertex], predecessors[vertex]))
            .collect();

        Ok(ShortestPathResult {
            records,
            source,
            stats,
        })
    }
}
