use crate::graph::traits::{Graph, MutableGraph, Weight};
use crate::{Error, Result};

/// A directed graph implementation using adjacency lists
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectedGraph<W>
where
    W: Weight,
{
    /// Outgoing edges for each vertex: adjacency[vertex] = [(target_vertex, weight)]
    adjacency: Vec<Vec<(usize, W)>>,

    /// Total number of edges across all adjacency lists
    edge_count: usize,
}

impl<W> DirectedGraph<W>
where
    W: Weight,
{
    /// Creates a new empty directed graph
    pub fn new() -> Self {
        DirectedGraph {
            adjacency: Vec::new(),
            edge_count: 0,
        }
    }

    /// Creates a new directed graph with `vertices` isolated vertices
    pub fn with_vertices(vertices: usize) -> Self {
        DirectedGraph {
            adjacency: vec![Vec::new(); vertices],
            edge_count: 0,
        }
    }

    /// Builds a graph with `vertices` vertices from `(from, to, weight)` triples,
    /// keeping their order within each adjacency list
    pub fn from_edges<I>(vertices: usize, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, usize, W)>,
    {
        let mut graph = DirectedGraph::with_vertices(vertices);
        for (from, to, weight) in edges {
            graph.add_edge(from, to, weight)?;
        }
        Ok(graph)
    }

    /// Returns true if any edge carries a weight below zero
    pub fn has_negative_weights(&self) -> bool {
        self.adjacency
            .iter()
            .flatten()
            .any(|(_, weight)| *weight < W::zero())
    }
}

impl<W> Default for DirectedGraph<W>
where
    W: Weight,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<W> Graph<W> for DirectedGraph<W>
where
    W: Weight,
{
    fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }

    fn outgoing_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_> {
        match self.adjacency.get(vertex) {
            Some(edges) => Box::new(edges.iter().copied()),
            None => Box::new(std::iter::empty()),
        }
    }
}

impl<W> MutableGraph<W> for DirectedGraph<W>
where
    W: Weight,
{
    fn add_vertex(&mut self) -> usize {
        self.adjacency.push(Vec::new());
        self.adjacency.len() - 1
    }

    fn add_edge(&mut self, from: usize, to: usize, weight: W) -> Result<()> {
        if !self.has_vertex(from) || !self.has_vertex(to) {
            return Err(Error::InvalidEdge(from, to));
        }

        self.adjacency[from].push((to, weight));
        self.edge_count += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_parallel_edges_and_self_loops_in_order() {
        let graph = DirectedGraph::from_edges(2, [(0, 1, 5), (0, 1, 2), (1, 1, 3)]).unwrap();

        assert_eq!(graph.edge_count(), 3);
        assert_eq!(graph.outgoing_edges(0).collect::<Vec<_>>(), vec![(1, 5), (1, 2)]);
        assert_eq!(graph.outgoing_edges(1).collect::<Vec<_>>(), vec![(1, 3)]);
        assert_eq!(
            graph.edges().collect::<Vec<_>>(),
            vec![(0, 1, 5), (0, 1, 2), (1, 1, 3)]
        );
    }

    #[test]
    fn rejects_edges_to_missing_vertices() {
        let mut graph: DirectedGraph<i64> = DirectedGraph::with_vertices(3);

        assert_eq!(graph.add_edge(0, 3, 1), Err(Error::InvalidEdge(0, 3)));
        assert_eq!(graph.add_edge(7, 0, 1), Err(Error::InvalidEdge(7, 0)));
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn add_vertex_returns_dense_ids() {
        let mut graph: DirectedGraph<i64> = DirectedGraph::new();

        assert_eq!(graph.add_vertex(), 0);
        assert_eq!(graph.add_vertex(), 1);
        assert!(graph.has_vertex(1));
        assert!(!graph.has_vertex(2));
        assert_eq!(graph.check_vertex(2), Err(Error::InvalidVertex(2)));
    }

    #[test]
    fn detects_negative_weights() {
        let positive = DirectedGraph::from_edges(2, [(0, 1, 4)]).unwrap();
        let negative = DirectedGraph::from_edges(2, [(0, 1, 4), (1, 0, -1)]).unwrap();

        assert!(!positive.has_negative_weights());
        assert!(negative.has_negative_weights());
        assert!(negative.has_edge(1, 0));
        assert!(!positive.has_edge(1, 0));
    }
}
