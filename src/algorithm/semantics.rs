use num_traits::Float;
use std::fmt::Debug;

/// How path values combine and compare during relaxation
///
/// The engine always orders its heap by ascending priority. A semantics maps
/// path values into that order with [`to_priority`](PathSemantics::to_priority)
/// and back with [`from_priority`](PathSemantics::from_priority); the two must
/// be monotone inverses such that `is_better(a, b)` implies
/// `to_priority(a) < to_priority(b)`.
pub trait PathSemantics<W>: Debug
where
    W: Float + Debug,
{
    /// Short name used in log messages
    fn name(&self) -> &'static str;

    /// Value of the empty path at the source
    fn identity(&self) -> W;

    /// Value reported for vertices that are never reached
    fn unreached(&self) -> W;

    /// Value of a path extended by an edge of weight `weight`
    fn combine(&self, value: W, weight: W) -> W;

    /// Returns true if `candidate` strictly improves on `current`
    fn is_better(&self, candidate: W, current: W) -> bool;

    /// Heap key for a path value
    fn to_priority(&self, value: W) -> W;

    /// Path value for a heap key
    fn from_priority(&self, priority: W) -> W;
}

/// Minimum total weight: values add along a path, smaller is better
#[derive(Debug, Default, Clone, Copy)]
pub struct Additive;

impl<W> PathSemantics<W> for Additive
where
    W: Float + Debug,
{
    fn name(&self) -> &'static str {
        "additive"
    }

    fn identity(&self) -> W {
        W::zero()
    }

    fn unreached(&self) -> W {
        W::infinity()
    }

    fn combine(&self, value: W, weight: W) -> W {
        value + weight
    }

    fn is_better(&self, candidate: W, current: W) -> bool {
        candidate < current
    }

    fn to_priority(&self, value: W) -> W {
        value
    }

    fn from_priority(&self, priority: W) -> W {
        priority
    }
}

/// Maximum product of probabilities: values multiply along a path, larger is better
///
/// Heap keys are `-ln(p)`, so the most probable path has the smallest key.
#[derive(Debug, Default, Clone, Copy)]
pub struct Multiplicative;

impl<W> PathSemantics<W> for Multiplicative
where
    W: Float + Debug,
{
    fn name(&self) -> &'static str {
        "multiplicative"
    }

    fn identity(&self) -> W {
        W::one()
    }

    fn unreached(&self) -> W {
        W::zero()
    }

    fn combine(&self, value: W, weight: W) -> W {
        value * weight
    }

    fn is_better(&self, candidate: W, current: W) -> bool {
        candidate > current
    }

    fn to_priority(&self, value: W) -> W {
        -value.ln()
    }

    fn from_priority(&self, priority: W) -> W {
        (-priority).exp()
    }
}
