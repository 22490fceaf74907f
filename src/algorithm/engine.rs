use log::{debug, trace, warn};
use num_traits::Float;
use std::fmt::Debug;

use crate::algorithm::semantics::PathSemantics;
use crate::algorithm::{ShortestPathResult, TraversalStats};
use crate::data_structures::{IndexedMinHeap, PathRecord};
use crate::graph::Graph;
use crate::{Error, Result};

/// Best-first relaxation loop shared by the single-source engines
///
/// The engine repeatedly extracts the best frontier vertex from an
/// [`IndexedMinHeap`], commits it to the result table, and offers each of its
/// neighbors a path through it. The [`PathSemantics`] decides how values
/// combine, which of two values wins, and how values map to heap keys.
///
/// Correctness requires that extending a path never improves it (non-negative
/// weights for [`Additive`](crate::algorithm::semantics::Additive),
/// probabilities in `[0, 1]` for
/// [`Multiplicative`](crate::algorithm::semantics::Multiplicative)). This is
/// not checked here.
#[derive(Debug, Clone)]
pub struct RelaxationEngine<S> {
    semantics: S,
    /// Re-verify the heap invariant after every heap operation
    check_invariants: bool,
}

impl<S> RelaxationEngine<S> {
    /// Creates an engine for the given semantics
    pub fn new(semantics: S) -> Self {
        RelaxationEngine {
            semantics,
            check_invariants: false,
        }
    }

    /// Enable or disable heap invariant verification after every operation
    pub fn with_invariant_checks(mut self, enabled: bool) -> Self {
        self.check_invariants = enabled;
        self
    }

    pub fn semantics(&self) -> &S {
        &self.semantics
    }

    /// Runs the search from `source` over `graph`
    pub fn run<W, G>(&self, graph: &G, source: usize) -> Result<ShortestPathResult<W>>
    where
        W: Float + Debug,
        G: Graph<W>,
        S: PathSemantics<W>,
    {
        if !graph.has_vertex(source) {
            return Err(Error::SourceNotFound);
        }

        let n = graph.vertex_count();
        let semantics = &self.semantics;
        debug!(
            "{} search from vertex {} over {} vertices and {} edges",
            semantics.name(),
            source,
            n,
            graph.edge_count()
        );

        let mut records: Vec<PathRecord<W>> = (0..n)
            .map(|vertex| PathRecord::new(vertex, semantics.unreached(), None))
            .collect();
        // Best value offered so far, in value space; final once visited
        let mut best = vec![semantics.unreached(); n];
        let mut visited = vec![false; n];
        let mut stats = TraversalStats::default();

        let mut heap = IndexedMinHeap::with_capacity(n);
        best[source] = semantics.identity();
        heap.insert_or_decrease(PathRecord::new(
            source,
            semantics.to_priority(semantics.identity()),
            None,
        ))?;
        stats.pushes += 1;
        self.verify(&heap)?;

        while !heap.is_empty() {
            trace!("frontier: {:?}", heap.entries());
            let entry = heap.extract_min()?;
            stats.extractions += 1;
            self.verify(&heap)?;

            let u = entry.vertex;
            if visited[u] {
                // Only reachable when extending a path improved it
                stats.stale_discards += 1;
                warn!("Discarding stale heap entry for finalized vertex {}", u);
                continue;
            }
            visited[u] = true;

            // The key round-trips through `to_priority`; relax from the exact value
            let value = best[u];
            records[u] = PathRecord::new(u, value, entry.predecessor);
            trace!(
                "finalized vertex {} with value {:?} (key {:?} -> {:?})",
                u,
                value,
                entry.priority,
                semantics.from_priority(entry.priority)
            );

            for (neighbor, weight) in graph.outgoing_edges(u) {
                stats.edges_scanned += 1;
                let candidate = semantics.combine(value, weight);
                let priority = semantics.to_priority(candidate);
                // Both orders must agree, or a tie in key space reopens a final vertex
                let improves = semantics.is_better(candidate, best[neighbor])
                    && priority < semantics.to_priority(best[neighbor]);
                if !improves {
                    continue;
                }

                best[neighbor] = candidate;
                stats.improvements += 1;

                let was_live = heap.contains(neighbor);
                let record = PathRecord::new(neighbor, priority, Some(u));
                if heap.insert_or_decrease(record)? {
                    if was_live {
                        stats.decreases += 1;
                    } else {
                        stats.pushes += 1;
                    }
                }
                self.verify(&heap)?;
            }
        }

        debug!(
            "{} search from vertex {} finished: {:?}",
            semantics.name(),
            source,
            stats
        );

        Ok(ShortestPathResult {
            records,
            source,
            stats,
        })
    }

    fn verify<W>(&self, heap: &IndexedMinHeap<W>) -> Result<()>
    where
        W: Float + Debug,
    {
        if self.check_invariants && !heap.check_invariants() {
            return Err(Error::AlgorithmError(
                "heap position index out of sync with heap order".to_string(),
            ));
        }
        Ok(())
    }
}
