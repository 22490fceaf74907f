use num_traits::Float;
use std::fmt::Debug;

use crate::Result;

/// Trait representing a weighted graph as seen by the path engines
///
/// Undirected graphs expose every edge from both endpoints.
pub trait Graph<W>: Debug
where
    W: Float + Debug,
{
    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of stored adjacency entries
    fn edge_count(&self) -> usize;

    /// Returns true if edges only go from source to target
    fn is_directed(&self) -> bool;

    /// Returns an iterator over the outgoing edges from a vertex
    fn outgoing_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_>;

    /// Returns true if the vertex exists in the graph
    fn has_vertex(&self, vertex: usize) -> bool {
        vertex < self.vertex_count()
    }

    /// Returns true if there's an edge between the two vertices
    fn has_edge(&self, from: usize, to: usize) -> bool {
        self.outgoing_edges(from).any(|(target, _)| target == to)
    }

    /// Gets the weight of an edge if it exists
    fn get_edge_weight(&self, from: usize, to: usize) -> Option<W> {
        self.outgoing_edges(from)
            .find(|(target, _)| *target == to)
            .map(|(_, weight)| weight)
    }

    /// Returns every adjacency entry as `(source, target, weight)`
    fn edges<'a>(&'a self) -> Box<dyn Iterator<Item = (usize, usize, W)> + 'a>
    where
        W: 'a,
    {
        Box::new((0..self.vertex_count()).flat_map(move |source| {
            self.outgoing_edges(source)
                .map(move |(target, weight)| (source, target, weight))
        }))
    }
}

/// Trait for mutable graph operations
pub trait MutableGraph<W>: Graph<W>
where
    W: Float + Debug,
{
    /// Adds a vertex to the graph and returns its ID
    fn add_vertex(&mut self) -> usize;

    /// Adds an edge between vertices with the given weight
    ///
    /// Adding an edge that already exists replaces its weight.
    fn add_edge(&mut self, from: usize, to: usize, weight: W) -> Result<()>;

    /// Removes an edge from the graph
    fn remove_edge(&mut self, from: usize, to: usize) -> bool;
}
