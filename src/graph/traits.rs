use std::fmt::Debug;
use num_traits::{SaturatingAdd, Zero};
use ordered_float::OrderedFloat;

use crate::{Error, Result};

/// Edge weight usable by every algorithm in the crate.
///
/// Weights must be totally ordered so they can key the Dijkstra frontier;
/// use `ordered_float::OrderedFloat` for floating point weights.
pub trait Weight: Copy + Ord + Debug + Zero + 'static {
    /// Adds two weights, clamping at the bounds of the type instead of overflowing
    fn saturating_sum(self, other: Self) -> Self;
}

macro_rules! integer_weight {
    ($($t:ty),*) => {
        $(
            impl Weight for $t {
                fn saturating_sum(self, other: Self) -> Self {
                    SaturatingAdd::saturating_add(&self, &other)
                }
            }
        )*
    };
}

integer_weight!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

// Float sums run off to +/- infinity rather than wrapping
impl Weight for OrderedFloat<f32> {
    fn saturating_sum(self, other: Self) -> Self {
        self + other
    }
}

impl Weight for OrderedFloat<f64> {
    fn saturating_sum(self, other: Self) -> Self {
        self + other
    }
}

/// Trait representing a weighted directed graph with dense vertex ids `0..n`
pub trait Graph<W>: Debug
where
    W: Weight,
{
    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of edges in the graph, parallel edges and self-loops included
    fn edge_count(&self) -> usize;

    /// Returns an iterator over the outgoing edges from a vertex, in insertion order
    fn outgoing_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_>;

    /// Returns every edge as `(source, target, weight)`, grouped by source vertex
    fn edges(&self) -> Box<dyn Iterator<Item = (usize, usize, W)> + '_> {
        Box::new((0..self.vertex_count()).flat_map(move |u| {
            self.outgoing_edges(u).map(move |(v, weight)| (u, v, weight))
        }))
    }

    /// Returns true if the vertex exists in the graph
    fn has_vertex(&self, vertex: usize) -> bool {
        vertex < self.vertex_count()
    }

    /// Returns true if there's at least one edge between the two vertices
    fn has_edge(&self, from: usize, to: usize) -> bool {
        self.has_vertex(from) && self.outgoing_edges(from).any(|(target, _)| target == to)
    }

    /// Fails with [`Error::InvalidVertex`] when `vertex` is out of range
    fn check_vertex(&self, vertex: usize) -> Result<()> {
        if self.has_vertex(vertex) {
            Ok(())
        } else {
            Err(Error::InvalidVertex(vertex))
        }
    }
}

/// Trait for building a graph up
pub trait MutableGraph<W>: Graph<W>
where
    W: Weight,
{
    /// Adds a vertex to the graph and returns its ID
    fn add_vertex(&mut self) -> usize;

    /// Appends a directed edge. Parallel edges and self-loops are kept as-is.
    fn add_edge(&mut self, from: usize, to: usize, weight: W) -> Result<()>;
}
