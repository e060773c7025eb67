//! Shortest Paths - Dijkstra, Bellman-Ford and Floyd-Warshall on weighted directed graphs
//!
//! All three algorithms work over the same dense adjacency representation and
//! return the same distances for the same inputs, as long as the graph has no
//! negative cycle. Bellman-Ford reports negative cycles as
//! [`Error::NegativeCycle`] instead of a distance.
//!
//! Unreachable vertices are represented by [`Distance::Unreachable`], which
//! absorbs any weight added to it.

pub mod algorithm;
pub mod data_structures;
pub mod experiment;
pub mod graph;
pub mod report;

pub use algorithm::{
    all_pairs::RepeatedSingleSource, bellman_ford::BellmanFord, dijkstra::Dijkstra,
    floyd_warshall::{FloydWarshall, SeedPolicy}, AllPairsAlgorithm, ShortestPathAlgorithm,
    ShortestPathResult,
};
pub use data_structures::{Distance, DistanceMatrix};
/// Re-export main types for convenient use
pub use graph::directed::DirectedGraph;
pub use graph::Weight;

/// Error types for the library
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Invalid vertex ID: {0}")]
    InvalidVertex(usize),

    #[error("Invalid edge: from {0} to {1}")]
    InvalidEdge(usize, usize),

    #[error("Negative cycle reachable from vertex {start} (still relaxing at vertex {vertex})")]
    NegativeCycle { start: usize, vertex: usize },

    #[error("Distance discrepancy on graph of size {size}: {details}")]
    Discrepancy { size: usize, details: String },

    #[error("Invalid experiment configuration: {0}")]
    InvalidConfig(String),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
