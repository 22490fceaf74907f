pub mod traits;
pub mod semantics;
pub mod engine;
pub mod dijkstra;
pub mod markov;
pub mod bellman_ford;
pub mod floyd_warshall;

pub use traits::{ShortestPathAlgorithm, ShortestPathResult, TraversalStats};
