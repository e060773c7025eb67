use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::data_structures::Distance;
use crate::graph::{Graph, Weight};
use crate::{Error, Result};

/// Bellman-Ford single-source shortest paths.
///
/// Negative edge weights are allowed. If a negative cycle is reachable from
/// the source the run fails with [`Error::NegativeCycle`] instead of
/// returning distances.
#[derive(Debug, Default, Clone, Copy)]
pub struct BellmanFord;

impl BellmanFord {
    /// Creates a new Bellman-Ford algorithm instance
    pub fn new() -> Self {
        BellmanFord
    }

    /// Runs `n - 1` relaxation rounds followed by the negative-cycle scan
    fn run<W, G>(&self, graph: &G, source: usize) -> Result<Vec<Distance<W>>>
    where
        W: Weight,
        G: Graph<W>,
    {
        let n = graph.vertex_count();
        let mut distances = vec![Distance::Unreachable; n];
        distances[source] = Distance::zero();

        for _ in 1..n {
            for (u, v, weight) in graph.edges() {
                if let Some(candidate) = relaxed(&distances, u, v, weight) {
                    distances[v] = candidate;
                }
            }
        }

        for (u, v, weight) in graph.edges() {
            if relaxed(&distances, u, v, weight).is_some() {
                log::warn!(
                    "Bellman-Ford found a negative cycle reachable from {} (edge {} -> {})",
                    source,
                    u,
                    v
                );
                return Err(Error::NegativeCycle {
                    start: source,
                    vertex: v,
                });
            }
        }

        Ok(distances)
    }
}

/// The improved distance for `v` through edge `u -> v`, if the edge relaxes.
/// Unreachable sources never relax anything.
fn relaxed<W: Weight>(distances: &[Distance<W>], u: usize, v: usize, weight: W) -> Option<Distance<W>> {
    let candidate = distances[u].extend(weight);
    (candidate < distances[v]).then_some(candidate)
}

impl<W, G> ShortestPathAlgorithm<W, G> for BellmanFord
where
    W: Weight,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "Bellman-Ford"
    }

    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult<W>> {
        graph.check_vertex(source)?;
        let distances = self.run(graph, source)?;
        Ok(ShortestPathResult::new(source, distances))
    }
}
