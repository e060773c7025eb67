pub mod traits;
pub mod dijkstra;
pub mod bellman_ford;
pub mod floyd_warshall;
pub mod all_pairs;

pub use traits::{AllPairsAlgorithm, ShortestPathAlgorithm, ShortestPathResult};
pub use dijkstra::Dijkstra;
pub use bellman_ford::BellmanFord;
pub use floyd_warshall::{FloydWarshall, SeedPolicy};
pub use all_pairs::RepeatedSingleSource;
