use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::data_structures::{Distance, Frontier};
use crate::graph::{Graph, Weight};
use crate::Result;

/// Classic Dijkstra's algorithm implementation.
///
/// Only correct when no negative edge weight is reachable from the source;
/// this is not checked. A negative cycle reachable from the source keeps
/// re-inserting its vertices into the frontier, so the run never terminates.
/// Use [`BellmanFord`](crate::algorithm::BellmanFord) for such graphs.
#[derive(Debug, Clone, Copy)]
pub struct Dijkstra {
    /// Stop as soon as the target of a point-to-point query is settled
    early_exit: bool,
}

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra { early_exit: true }
    }

    /// Enable or disable stopping once the target vertex is popped from the frontier
    pub fn with_early_exit(mut self, enabled: bool) -> Self {
        self.early_exit = enabled;
        self
    }

    fn run<W, G>(&self, graph: &G, source: usize, target: Option<usize>) -> Vec<Distance<W>>
    where
        W: Weight,
        G: Graph<W>,
    {
        let n = graph.vertex_count();
        let mut distances = vec![Distance::Unreachable; n];
        distances[source] = Distance::zero();

        let mut frontier = Frontier::new();
        frontier.push(source, W::zero());

        while let Some((u, dist_u)) = frontier.pop() {
            // A shorter path to u was found after this entry was pushed
            if Distance::Finite(dist_u) > distances[u] {
                continue;
            }

            if self.early_exit && target == Some(u) {
                log::trace!("Dijkstra settled target {} early", u);
                break;
            }

            for (v, weight) in graph.outgoing_edges(u) {
                let candidate = Distance::Finite(dist_u).extend(weight);
                if candidate < distances[v] {
                    distances[v] = candidate;
                    if let Distance::Finite(new_dist) = candidate {
                        frontier.push(v, new_dist);
                    }
                }
            }
        }

        distances
    }
}

impl Default for Dijkstra {
    fn default() -> Self {
        Self::new()
    }
}

impl<W, G> ShortestPathAlgorithm<W, G> for Dijkstra
where
    W: Weight,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult<W>> {
        graph.check_vertex(source)?;
        let distances = self.run(graph, source, None);
        Ok(ShortestPathResult::new(source, distances))
    }

    fn shortest_distance(&self, graph: &G, source: usize, target: usize) -> Result<Distance<W>> {
        graph.check_vertex(source)?;
        graph.check_vertex(target)?;
        let distances = self.run(graph, source, Some(target));
        Ok(distances[target])
    }
}
