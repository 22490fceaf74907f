use num_traits::Float;
use std::fmt::Debug;

use crate::algorithm::engine::RelaxationEngine;
use crate::algorithm::semantics::Additive;
use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::graph::Graph;
use crate::Result;

/// Classic Dijkstra's algorithm over an indexed min-heap
///
/// Edge weights must be non-negative; this is not checked. Unreachable
/// vertices are reported with an infinite distance and no predecessor.
#[derive(Debug, Default, Clone)]
pub struct Dijkstra {
    check_invariants: bool,
}

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra::default()
    }

    /// Verify the heap invariant after every heap operation
    pub fn with_invariant_checks(mut self, enabled: bool) -> Self {
        self.check_invariants = enabled;
        self
    }
}

impl<W, G> ShortestPathAlgorithm<W, G> for Dijkstra
where
    W: Float + Debug,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult<W>> {
        RelaxationEngine::new(Additive)
            .with_invariant_checks(self.check_invariants)
            .run(graph, source)
    }
}
