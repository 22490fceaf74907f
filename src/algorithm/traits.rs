use log::warn;
use num_traits::Float;
use serde::Serialize;
use std::fmt::Debug;

use crate::data_structures::PathRecord;
use crate::graph::Graph;
use crate::Result;

/// Counters collected while a single-source search runs
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TraversalStats {
    /// New entries inserted into the heap
    pub pushes: usize,
    /// Live heap entries whose priority was lowered
    pub decreases: usize,
    /// Records removed from the heap
    pub extractions: usize,
    /// Extracted records dropped because their vertex was already final
    pub stale_discards: usize,
    /// Edges examined during relaxation
    pub edges_scanned: usize,
    /// Relaxations that improved a tentative value
    pub improvements: usize,
}

/// Result of a single-source path algorithm execution
///
/// `records[v]` describes vertex `v`. Its `priority` holds the reported
/// value: a distance for additive searches (`+inf` when unreachable), a
/// probability for most-probable-path searches (`0.0` when unreachable).
#[derive(Debug, Clone, Serialize)]
pub struct ShortestPathResult<W> {
    /// One record per vertex, indexed by vertex ID
    pub records: Vec<PathRecord<W>>,

    /// Source vertex ID
    pub source: usize,

    /// Work done by the search
    pub stats: TraversalStats,
}

impl<W> ShortestPathResult<W>
where
    W: Float + Debug,
{
    /// Number of vertices covered by the result
    pub fn vertex_count(&self) -> usize {
        self.records.len()
    }

    /// Reported value (distance or probability) of a vertex
    pub fn value(&self, vertex: usize) -> Option<W> {
        self.records.get(vertex).map(|record| record.priority)
    }

    /// Predecessor of a vertex in the path tree
    pub fn predecessor(&self, vertex: usize) -> Option<usize> {
        self.records.get(vertex).and_then(|record| record.predecessor)
    }

    /// Returns true if the search reached `vertex`
    pub fn is_reachable(&self, vertex: usize) -> bool {
        vertex < self.records.len()
            && (vertex == self.source || self.records[vertex].predecessor.is_some())
    }

    /// Reported values of all vertices in vertex order
    pub fn values(&self) -> Vec<W> {
        self.records.iter().map(|record| record.priority).collect()
    }

    /// Reconstructs the path from the source to `target` by walking predecessors
    ///
    /// Returns `None` if `target` is out of range or was never reached.
    pub fn path_to(&self, target: usize) -> Option<Vec<usize>> {
        if !self.is_reachable(target) {
            return None;
        }

        let mut path = vec![target];
        let mut current = target;
        while current != self.source {
            current = self.records[current].predecessor?;
            path.push(current);

            // A predecessor chain longer than the graph means a broken tree
            if path.len() > self.records.len() {
                warn!("Predecessor cycle detected while rebuilding path to {}", target);
                return None;
            }
        }

        path.reverse();
        Some(path)
    }
}

/// Trait for single-source path algorithms
pub trait ShortestPathAlgorithm<W, G>
where
    W: Float + Debug,
    G: Graph<W>,
{
    /// Compute paths from a source vertex to all other vertices
    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult<W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;

    /// Get the path from source to target as a sequence of vertices
    fn get_path(&self, result: &ShortestPathResult<W>, target: usize) -> Option<Vec<usize>> {
        result.path_to(target)
    }
}
