use crate::algorithm::{AllPairsAlgorithm, ShortestPathAlgorithm};
use crate::data_structures::DistanceMatrix;
use crate::graph::{Graph, Weight};
use crate::Result;

/// All-pairs distances obtained by running a single-source algorithm once
/// from every vertex
#[derive(Debug, Clone, Copy)]
pub struct RepeatedSingleSource<A> {
    inner: A,
}

impl<A> RepeatedSingleSource<A> {
    pub fn new(inner: A) -> Self {
        RepeatedSingleSource { inner }
    }
}

impl<W, G, A> AllPairsAlgorithm<W, G> for RepeatedSingleSource<A>
where
    W: Weight,
    G: Graph<W>,
    A: ShortestPathAlgorithm<W, G>,
{
    fn name(&self) -> &'static str {
        self.inner.name()
    }

    fn compute_all_pairs(&self, graph: &G) -> Result<DistanceMatrix<W>> {
        let rows = (0..graph.vertex_count())
            .map(|source| {
                self.inner
                    .compute_shortest_paths(graph, source)
                    .map(|result| result.distances)
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(DistanceMatrix::from_rows(rows))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::{BellmanFord, Dijkstra, FloydWarshall};
    use crate::graph::DirectedGraph;
    use crate::Error;

    #[test]
    fn matches_floyd_warshall_on_small_graph() {
        let graph = DirectedGraph::from_edges(
            4,
            [(0, 1, 3), (1, 2, 1), (0, 2, 7), (2, 3, 2), (3, 0, 4)],
        )
        .unwrap();

        let expected = FloydWarshall::new().compute_all_pairs(&graph).unwrap();
        let by_dijkstra = RepeatedSingleSource::new(Dijkstra::new())
            .compute_all_pairs(&graph)
            .unwrap();
        let by_bellman_ford = RepeatedSingleSource::new(BellmanFord::new())
            .compute_all_pairs(&graph)
            .unwrap();

        assert_eq!(by_dijkstra, expected);
        assert_eq!(by_bellman_ford, expected);
    }

    #[test]
    fn propagates_negative_cycle() {
        let graph = DirectedGraph::from_edges(2, [(0, 1, -2), (1, 0, 1)]).unwrap();

        assert!(matches!(
            RepeatedSingleSource::new(BellmanFord::new()).compute_all_pairs(&graph),
            Err(Error::NegativeCycle { .. })
        ));
    }
}
