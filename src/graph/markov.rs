use log::warn;
use num_traits::Float;
use std::fmt::Debug;

use crate::graph::Graph;
use crate::{Error, Result};

/// Tolerance on the outgoing probability sum of each vertex
pub const DEFAULT_TOLERANCE: f64 = 1e-6;

/// Checks that a graph describes a Markov chain
///
/// A valid chain is directed, every weight is a probability in `[0, 1]`, and
/// the outgoing weights of each vertex sum to one within the tolerance.
/// Vertices without outgoing edges are absorbing states and pass the check.
#[derive(Debug, Clone, Copy)]
pub struct MarkovValidator {
    tolerance: f64,
}

impl Default for MarkovValidator {
    fn default() -> Self {
        MarkovValidator {
            tolerance: DEFAULT_TOLERANCE,
        }
    }
}

impl MarkovValidator {
    /// Creates a validator with the default tolerance
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the tolerance allowed on each vertex's outgoing probability sum
    ///
    /// A non-finite tolerance would accept any sum; it falls back to
    /// [`DEFAULT_TOLERANCE`].
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        if tolerance.is_finite() {
            self.tolerance = tolerance.abs();
        } else {
            warn!(
                "Ignoring non-finite tolerance {}, using {}",
                tolerance, DEFAULT_TOLERANCE
            );
            self.tolerance = DEFAULT_TOLERANCE;
        }
        self
    }

    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Validates `graph`, returning the first violation found
    pub fn validate<W, G>(&self, graph: &G) -> Result<()>
    where
        W: Float + Debug,
        G: Graph<W>,
    {
        if !graph.is_directed() {
            return Err(reject("the graph is not directed".to_string()));
        }

        for vertex in 0..graph.vertex_count() {
            let mut sum = 0.0;
            let mut has_edges = false;

            for (target, weight) in graph.outgoing_edges(vertex) {
                let probability = weight.to_f64().unwrap_or(f64::NAN);
                if !(0.0..=1.0).contains(&probability) {
                    return Err(reject(format!(
                        "edge {} -> {} has weight {}, outside [0, 1]",
                        vertex, target, probability
                    )));
                }
                sum += probability;
                has_edges = true;
            }

            if has_edges && (sum - 1.0).abs() > self.tolerance {
                return Err(reject(format!(
                    "vertex {} has outgoing weight sum {}",
                    vertex, sum
                )));
            }
        }

        Ok(())
    }

    /// Returns true if `graph` passes [`MarkovValidator::validate`]
    pub fn is_valid<W, G>(&self, graph: &G) -> bool
    where
        W: Float + Debug,
        G: Graph<W>,
    {
        self.validate(graph).is_ok()
    }
}

/// Checks `graph` with the default tolerance
pub fn is_valid_markov_chain<W, G>(graph: &G) -> bool
where
    W: Float + Debug,
    G: Graph<W>,
{
    MarkovValidator::default().is_valid(graph)
}

fn reject(reason: String) -> Error {
    warn!("Markov validation failed: {}", reason);
    Error::InvalidMarkovGraph(reason)
}
