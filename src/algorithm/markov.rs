use num_traits::Float;
use std::fmt::Debug;

use crate::algorithm::engine::RelaxationEngine;
use crate::algorithm::semantics::Multiplicative;
use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::graph::{Graph, MarkovValidator};
use crate::Result;

/// Most probable paths in a Markov chain graph
///
/// Edge weights are transition probabilities. For every state the search
/// finds the path from the source whose product of transition probabilities
/// is largest. Internally paths are ordered by `-ln(p)` so the same min-heap
/// engine as [`Dijkstra`](crate::Dijkstra) applies; the reported values are
/// plain probabilities, `0.0` for unreachable states.
///
/// The graph is validated with a [`MarkovValidator`] before the search runs.
#[derive(Debug, Default, Clone)]
pub struct MostProbablePath {
    validator: MarkovValidator,
    check_invariants: bool,
}

impl MostProbablePath {
    /// Creates an instance using the default validation tolerance
    pub fn new() -> Self {
        MostProbablePath::default()
    }

    /// Set the tolerance allowed on each state's outgoing probability sum
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.validator = self.validator.with_tolerance(tolerance);
        self
    }

    /// Verify the heap invariant after every heap operation
    pub fn with_invariant_checks(mut self, enabled: bool) -> Self {
        self.check_invariants = enabled;
        self
    }
}

impl<W, G> ShortestPathAlgorithm<W, G> for MostProbablePath
where
    W: Float + Debug,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "Most probable path"
    }

    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult<W>> {
        self.validator.validate(graph)?;
        RelaxationEngine::new(Multiplicative)
            .with_invariant_checks(self.check_invariants)
            .run(graph, source)
    }
}
