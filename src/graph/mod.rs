pub mod adjacency;
pub mod generators;
pub mod markov;
pub mod parser;
pub mod traits;

pub use adjacency::{AdjacencyGraph, Edge, GraphDescription};
pub use markov::{is_valid_markov_chain, MarkovValidator};
pub use parser::parse_adjacency_list;
pub use traits::{Graph, MutableGraph};
