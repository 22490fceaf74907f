//! Markov SSSP - Indexed-heap Dijkstra and most-probable-path search
//!
//! This library implements single-source path search on top of an indexed
//! binary min-heap supporting decrease-key by vertex identity. The same
//! relaxation loop drives two engines:
//!
//! - [`Dijkstra`]: additive minimum-cost paths over non-negative weights.
//! - [`MostProbablePath`]: multiplicative maximum-probability paths over
//!   Markov chain graphs, ordered in the heap through `-ln(p)`.
//!
//! Bellman-Ford and Floyd-Warshall are provided for graphs with negative
//! weights and for all-pairs queries.

pub mod algorithm;
pub mod data_structures;
pub mod graph;

pub use algorithm::{
    bellman_ford::BellmanFord, dijkstra::Dijkstra, floyd_warshall::FloydWarshall,
    markov::MostProbablePath, ShortestPathAlgorithm, ShortestPathResult, TraversalStats,
};
pub use data_structures::{IndexedMinHeap, PathRecord};
/// Re-export main types for convenient use
pub use graph::{AdjacencyGraph, Edge, MarkovValidator};

/// Error types for the library
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Invalid vertex ID: {0}")]
    InvalidVertex(usize),

    #[error("Invalid edge: from {0} to {1}")]
    InvalidEdge(usize, usize),

    #[error("Source vertex not found in graph")]
    SourceNotFound,

    #[error("Priority queue is empty")]
    EmptyQueue,

    #[error("Priority queue capacity of {capacity} exceeded")]
    CapacityExceeded { capacity: usize },

    #[error("Graph is not a valid Markov chain: {0}")]
    InvalidMarkovGraph(String),

    #[error("Graph contains a negative-weight cycle reachable from the source")]
    NegativeCycle,

    #[error("Invalid adjacency list near '{token}': {reason}")]
    Parse { token: String, reason: &'static str },

    #[error("Algorithm execution error: {0}")]
    AlgorithmError(String),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
