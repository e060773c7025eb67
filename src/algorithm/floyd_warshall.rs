use crate::algorithm::{AllPairsAlgorithm, ShortestPathAlgorithm, ShortestPathResult};
use crate::data_structures::{Distance, DistanceMatrix};
use crate::graph::{Graph, Weight};
use crate::Result;

/// How direct edges between the same ordered pair are folded into the
/// initial matrix
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum SeedPolicy {
    /// The last parallel edge in adjacency order overwrites earlier ones.
    ///
    /// Self-loops are the exception: a self-loop only ever lowers its
    /// diagonal cell, so among several self-loops on one vertex the most
    /// negative one is kept, whatever the policy.
    #[default]
    LastWins,
    /// The lightest parallel edge is kept
    Minimum,
}

/// Floyd-Warshall all-pairs shortest distances.
///
/// Negative cycles are not detected. When one exists, the affected diagonal
/// cells end up negative and other cells are meaningless; see
/// [`DistanceMatrix::has_negative_diagonal`].
#[derive(Debug, Default, Clone, Copy)]
pub struct FloydWarshall {
    seed_policy: SeedPolicy,
}

impl FloydWarshall {
    /// Creates a new Floyd-Warshall instance with [`SeedPolicy::LastWins`]
    pub fn new() -> Self {
        FloydWarshall::default()
    }

    /// Set how parallel edges are seeded
    pub fn with_seed_policy(mut self, policy: SeedPolicy) -> Self {
        self.seed_policy = policy;
        self
    }

    /// Initial matrix: zero diagonal plus one cell per direct edge
    fn seed<W, G>(&self, graph: &G) -> DistanceMatrix<W>
    where
        W: Weight,
        G: Graph<W>,
    {
        let mut matrix = DistanceMatrix::new(graph.vertex_count());

        for (u, v, weight) in graph.edges() {
            let direct = Distance::Finite(weight);
            let keep = if u == v {
                // self-loops never lift the diagonal above zero
                direct < matrix.get(u, v)
            } else {
                match self.seed_policy {
                    SeedPolicy::LastWins => true,
                    SeedPolicy::Minimum => direct < matrix.get(u, v),
                }
            };
            if keep {
                matrix.set(u, v, direct);
            }
        }

        matrix
    }
}

impl<W, G> AllPairsAlgorithm<W, G> for FloydWarshall
where
    W: Weight,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "Floyd-Warshall"
    }

    fn compute_all_pairs(&self, graph: &G) -> Result<DistanceMatrix<W>> {
        let n = graph.vertex_count();
        let mut dist = self.seed(graph);

        for k in 0..n {
            for i in 0..n {
                let Distance::Finite(dist_ik) = dist.get(i, k) else {
                    continue;
                };
                for j in 0..n {
                    let through_k = Distance::Finite(dist_ik).combine(dist.get(k, j));
                    if through_k < dist.get(i, j) {
                        dist.set(i, j, through_k);
                    }
                }
            }
        }

        if dist.has_negative_diagonal() {
            log::debug!("Floyd-Warshall matrix has a negative diagonal (negative cycle present)");
        }

        Ok(dist)
    }
}

impl<W, G> ShortestPathAlgorithm<W, G> for FloydWarshall
where
    W: Weight,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "Floyd-Warshall"
    }

    /// Row `source` of the full matrix
    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult<W>> {
        graph.check_vertex(source)?;
        let matrix = self.compute_all_pairs(graph)?;
        Ok(ShortestPathResult::new(source, matrix.row(source).to_vec()))
    }

    fn shortest_distance(&self, graph: &G, source: usize, target: usize) -> Result<Distance<W>> {
        graph.check_vertex(source)?;
        graph.check_vertex(target)?;
        let matrix = self.compute_all_pairs(graph)?;
        Ok(matrix.get(source, target))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::DirectedGraph;

    #[test]
    fn last_parallel_edge_wins_by_default() {
        let graph = DirectedGraph::from_edges(2, [(0, 1, 2), (0, 1, 5)]).unwrap();

        let last_wins = FloydWarshall::new().compute_all_pairs(&graph).unwrap();
        let minimum = FloydWarshall::new()
            .with_seed_policy(SeedPolicy::Minimum)
            .compute_all_pairs(&graph)
            .unwrap();

        assert_eq!(last_wins[0][1], Distance::Finite(5));
        assert_eq!(minimum[0][1], Distance::Finite(2));
    }

    #[test]
    fn non_negative_self_loop_keeps_zero_diagonal() {
        let graph = DirectedGraph::from_edges(2, [(0, 0, 3), (0, 1, 1)]).unwrap();
        let matrix = FloydWarshall::new().compute_all_pairs(&graph).unwrap();

        assert_eq!(matrix[0][0], Distance::Finite(0));
        assert_eq!(matrix[0][1], Distance::Finite(1));
        assert_eq!(matrix[1][0], Distance::Unreachable);
    }

    #[test]
    fn negative_cycle_shows_on_the_diagonal() {
        let graph = DirectedGraph::from_edges(3, [(0, 1, 1), (1, 2, -1), (2, 0, -1)]).unwrap();
        let matrix = FloydWarshall::new().compute_all_pairs(&graph).unwrap();

        assert!(matrix.has_negative_diagonal());
    }

    #[test]
    fn dense_negative_cycle_saturates_instead_of_overflowing() {
        let n = 48;
        let edges = (0..n).flat_map(|u| (0..n).filter(move |&v| v != u).map(move |v| (u, v, -1i64)));
        let graph = DirectedGraph::from_edges(n, edges).unwrap();

        let matrix = FloydWarshall::new().compute_all_pairs(&graph).unwrap();

        assert!(matrix.has_negative_diagonal());
        assert!((0..n).all(|v| matrix[v][v] < Distance::Finite(0)));
    }

    #[test]
    fn several_self_loops_keep_the_most_negative() {
        let graph = DirectedGraph::from_edges(1, [(0, 0, -4), (0, 0, -1), (0, 0, 2)]).unwrap();
        let matrix = FloydWarshall::new().compute_all_pairs(&graph).unwrap();

        assert_eq!(matrix[0][0], Distance::Finite(-4));
    }

    #[test]
    fn empty_graph_yields_empty_matrix() {
        let graph: DirectedGraph<i64> = DirectedGraph::new();
        let matrix = FloydWarshall::new().compute_all_pairs(&graph).unwrap();

        assert_eq!(matrix.size(), 0);
    }
}
