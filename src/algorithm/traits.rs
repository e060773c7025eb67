use std::ops::Index;

use crate::data_structures::{Distance, DistanceMatrix};
use crate::graph::{Graph, Weight};
use crate::Result;

/// Result of a single-source shortest path algorithm execution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPathResult<W>
where
    W: Weight,
{
    /// Distances from source to each vertex
    pub distances: Vec<Distance<W>>,

    /// Source vertex ID
    pub source: usize,
}

impl<W> ShortestPathResult<W>
where
    W: Weight,
{
    pub fn new(source: usize, distances: Vec<Distance<W>>) -> Self {
        ShortestPathResult { distances, source }
    }

    /// Number of vertices reachable from the source, the source included
    pub fn reachable_count(&self) -> usize {
        self.distances.iter().filter(|d| d.is_finite()).count()
    }
}

impl<W> Index<usize> for ShortestPathResult<W>
where
    W: Weight,
{
    type Output = Distance<W>;

    fn index(&self, target: usize) -> &Self::Output {
        &self.distances[target]
    }
}

/// Trait for single-source shortest path algorithms
pub trait ShortestPathAlgorithm<W, G>
where
    W: Weight,
    G: Graph<W>,
{
    /// Compute shortest distances from a source vertex to all other vertices
    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult<W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;

    /// Compute the shortest distance from `source` to `target`
    fn shortest_distance(&self, graph: &G, source: usize, target: usize) -> Result<Distance<W>> {
        graph.check_vertex(target)?;
        let result = self.compute_shortest_paths(graph, source)?;
        Ok(result[target])
    }
}

/// Trait for algorithms producing the full distance matrix
pub trait AllPairsAlgorithm<W, G>
where
    W: Weight,
    G: Graph<W>,
{
    /// Compute shortest distances between every ordered pair of vertices
    fn compute_all_pairs(&self, graph: &G) -> Result<DistanceMatrix<W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;
}
