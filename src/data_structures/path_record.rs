use serde::{Deserialize, Serialize};

/// A vertex together with its priority and the vertex it was reached from.
///
/// Inside the heap `priority` is the ordering key. In a finished result
/// table it is the reported value for the vertex (a distance or a
/// probability, depending on the engine).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PathRecord<W> {
    /// Vertex identity, also the slot of this record in a result table
    pub vertex: usize,

    /// Ordering key in the heap, reported value once committed
    pub priority: W,

    /// Previous vertex on the best known path, `None` for the source and
    /// for vertices that were never reached
    pub predecessor: Option<usize>,
}

impl<W> PathRecord<W> {
    /// Creates a new record
    pub fn new(vertex: usize, priority: W, predecessor: Option<usize>) -> Self {
        PathRecord {
            vertex,
            priority,
            predecessor,
        }
    }
}
