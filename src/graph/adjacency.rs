use num_traits::Float;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

use crate::graph::traits::{Graph, MutableGraph};
use crate::{Error, Result};

/// A weighted edge as given by the caller
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Edge<W> {
    pub source: usize,
    pub target: usize,
    pub weight: W,
}

impl<W> Edge<W> {
    pub fn new(source: usize, target: usize, weight: W) -> Self {
        Edge {
            source,
            target,
            weight,
        }
    }
}

/// Serializable description of a graph: vertex count, orientation and edges
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphDescription {
    pub vertices: usize,
    #[serde(default)]
    pub directed: bool,
    #[serde(default)]
    pub edges: Vec<Edge<f64>>,
}

impl GraphDescription {
    /// Builds the described graph, rejecting edges with unknown endpoints
    pub fn build(&self) -> Result<AdjacencyGraph<f64>> {
        AdjacencyGraph::from_edges(self.vertices, self.directed, &self.edges)
    }
}

/// A graph implementation using adjacency lists
///
/// Undirected graphs store every edge in the lists of both endpoints.
#[derive(Debug, Clone)]
pub struct AdjacencyGraph<W>
where
    W: Float + Debug,
{
    /// Whether edges are one-way
    directed: bool,

    /// Outgoing edges for each vertex: vertex_id -> [(target_vertex, weight)]
    adjacency: Vec<Vec<(usize, W)>>,
}

impl<W> AdjacencyGraph<W>
where
    W: Float + Debug,
{
    /// Creates a new empty graph
    pub fn new(directed: bool) -> Self {
        AdjacencyGraph {
            directed,
            adjacency: Vec::new(),
        }
    }

    /// Creates a graph with the specified number of vertices and no edges
    pub fn with_vertices(vertices: usize, directed: bool) -> Self {
        AdjacencyGraph {
            directed,
            adjacency: vec![Vec::new(); vertices],
        }
    }

    /// Creates a graph with `vertices` vertices from an edge list
    pub fn from_edges(vertices: usize, directed: bool, edges: &[Edge<W>]) -> Result<Self> {
        let mut graph = Self::with_vertices(vertices, directed);
        for edge in edges {
            graph.add_edge(edge.source, edge.target, edge.weight)?;
        }
        Ok(graph)
    }

    /// Validate that the graph doesn't have negative weights
    pub fn validate_non_negative(&self) -> bool {
        self.adjacency
            .iter()
            .flatten()
            .all(|(_, weight)| *weight >= W::zero())
    }

    fn upsert(&mut self, from: usize, to: usize, weight: W) {
        let edges = &mut self.adjacency[from];
        match edges.iter_mut().find(|(target, _)| *target == to) {
            Some(edge) => edge.1 = weight,
            None => edges.push((to, weight)),
        }
    }
}

impl<W> Graph<W> for AdjacencyGraph<W>
where
    W: Float + Debug,
{
    fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    fn edge_count(&self) -> usize {
        self.adjacency.iter().map(|edges| edges.len()).sum()
    }

    fn is_directed(&self) -> bool {
        self.directed
    }

    fn outgoing_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_> {
        match self.adjacency.get(vertex) {
            Some(edges) => Box::new(edges.iter().copied()),
            None => Box::new(std::iter::empty()),
        }
    }
}

impl<W> MutableGraph<W> for AdjacencyGraph<W>
where
    W: Float + Debug,
{
    fn add_vertex(&mut self) -> usize {
        self.adjacency.push(Vec::new());
        self.adjacency.len() - 1
    }

    fn add_edge(&mut self, from: usize, to: usize, weight: W) -> Result<()> {
        if !self.has_vertex(from) || !self.has_vertex(to) {
            return Err(Error::InvalidEdge(from, to));
        }

        self.upsert(from, to, weight);
        if !self.directed && from != to {
            self.upsert(to, from, weight);
        }
        Ok(())
    }

    fn remove_edge(&mut self, from: usize, to: usize) -> bool {
        if !self.has_vertex(from) || !self.has_vertex(to) {
            return false;
        }

        let len_before = self.adjacency[from].len();
        self.adjacency[from].retain(|(target, _)| *target != to);
        let removed = len_before > self.adjacency[from].len();

        if removed && !self.directed {
            self.adjacency[to].retain(|(target, _)| *target != from);
        }
        removed
    }
}
