use crate::graph::{DirectedGraph, Graph, MutableGraph, Weight};
use ordered_float::OrderedFloat;
use rand::prelude::*;
use std::collections::{BTreeSet, VecDeque};

/// A generated graph together with the query endpoints it was generated for
#[derive(Debug, Clone)]
pub struct GraphFixture<W>
where
    W: Weight,
{
    pub graph: DirectedGraph<W>,
    /// Start vertex, `None` only for the empty graph
    pub start: Option<usize>,
    /// Goal vertex, distinct from `start` whenever the graph has two or more vertices
    pub goal: Option<usize>,
}

impl<W> GraphFixture<W>
where
    W: Weight,
{
    /// Number of edges in the generated graph
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }
}

/// Generates a random directed graph with integer weights in `1..=limit`.
///
/// Every vertex gets up to `max(1, size / 2)` distinct outgoing edges, without
/// self-loops. With `ensure_path`, a path from start to goal is added if the
/// random edges do not already provide one.
pub fn generate_random_graph<R: Rng>(
    rng: &mut R,
    size: usize,
    limit: i64,
    ensure_path: bool,
) -> GraphFixture<i64> {
    assert!(limit >= 1, "limit must be at least 1");
    generate_random_graph_with(rng, size, ensure_path, |rng| rng.gen_range(1..=limit))
}

/// Same as [`generate_random_graph`] with `OrderedFloat<f64>` weights in `[1.0, max_weight)`
pub fn generate_random_float_graph<R: Rng>(
    rng: &mut R,
    size: usize,
    max_weight: f64,
    ensure_path: bool,
) -> GraphFixture<OrderedFloat<f64>> {
    assert!(max_weight > 1.0, "max_weight must be greater than 1");
    generate_random_graph_with(rng, size, ensure_path, |rng| {
        OrderedFloat(rng.gen_range(1.0..max_weight))
    })
}

/// Generates a random directed graph, drawing every edge weight from `weight_fn`
pub fn generate_random_graph_with<W, R, F>(
    rng: &mut R,
    size: usize,
    ensure_path: bool,
    mut weight_fn: F,
) -> GraphFixture<W>
where
    W: Weight,
    R: Rng,
    F: FnMut(&mut R) -> W,
{
    let mut graph = DirectedGraph::with_vertices(size);
    if size == 0 {
        return GraphFixture {
            graph,
            start: None,
            goal: None,
        };
    }

    let max_edges = (size / 2).max(1);
    for vertex in 0..size {
        let num_edges = rng.gen_range(0..=max_edges);

        // Duplicate draws collapse, so a vertex may end up with fewer edges
        let targets: BTreeSet<usize> = (0..num_edges)
            .map(|_| rng.gen_range(0..size))
            .filter(|&target| target != vertex)
            .collect();

        for target in targets {
            let weight = weight_fn(rng);
            push_edge(&mut graph, vertex, target, weight);
        }
    }

    let start = rng.gen_range(0..size);
    let mut goal = rng.gen_range(0..size);
    while size > 1 && goal == start {
        goal = rng.gen_range(0..size);
    }

    if ensure_path && !has_path(&graph, start, goal) {
        add_path(&mut graph, rng, start, goal, weight_fn);
    }

    log::trace!(
        "generated graph with {} vertices and {} edges ({} -> {})",
        size,
        graph.edge_count(),
        start,
        goal
    );

    GraphFixture {
        graph,
        start: Some(start),
        goal: Some(goal),
    }
}

/// Generates a random DAG: edges only go from a lower to a higher vertex id,
/// with weights in `-limit..=limit`. Negative weights appear but no cycle can.
pub fn generate_random_dag<R: Rng>(rng: &mut R, size: usize, limit: i64) -> DirectedGraph<i64> {
    assert!(limit >= 0, "limit must not be negative");
    let mut graph = DirectedGraph::with_vertices(size);

    for from in 0..size {
        for to in (from + 1)..size {
            if rng.gen_bool(0.4) {
                let weight = rng.gen_range(-limit..=limit);
                push_edge(&mut graph, from, to, weight);
            }
        }
    }

    graph
}

/// Connects `start` to `end`, either directly or through one to three random
/// intermediate vertices. A hop is only added when no edge between that pair
/// exists yet.
pub fn add_path<W, R, F>(
    graph: &mut DirectedGraph<W>,
    rng: &mut R,
    start: usize,
    end: usize,
    mut weight_fn: F,
) where
    W: Weight,
    R: Rng,
    F: FnMut(&mut R) -> W,
{
    if start == end {
        return;
    }

    let n = graph.vertex_count();
    let mut intermediates: Vec<usize> = (0..n).filter(|&v| v != start && v != end).collect();
    intermediates.shuffle(rng);

    let mut hops = vec![start];
    if n > 2 && rng.gen_bool(0.5) {
        let count = rng.gen_range(1..=intermediates.len().min(3));
        hops.extend_from_slice(&intermediates[..count]);
    }
    hops.push(end);

    for pair in hops.windows(2) {
        let (u, v) = (pair[0], pair[1]);
        if !graph.has_edge(u, v) {
            let weight = weight_fn(rng);
            push_edge(graph, u, v, weight);
        }
    }
}

/// Breadth-first reachability check. A vertex always reaches itself.
pub fn has_path<W, G>(graph: &G, start: usize, goal: usize) -> bool
where
    W: Weight,
    G: Graph<W>,
{
    if start == goal {
        return true;
    }
    if !graph.has_vertex(start) || !graph.has_vertex(goal) {
        return false;
    }

    let mut visited = vec![false; graph.vertex_count()];
    let mut queue = VecDeque::from([start]);
    visited[start] = true;

    while let Some(vertex) = queue.pop_front() {
        for (neighbor, _) in graph.outgoing_edges(vertex) {
            if neighbor == goal {
                return true;
            }
            if !visited[neighbor] {
                visited[neighbor] = true;
                queue.push_back(neighbor);
            }
        }
    }

    false
}

// Endpoints come from `0..vertex_count`, so the insertion cannot fail.
fn push_edge<W: Weight>(graph: &mut DirectedGraph<W>, from: usize, to: usize, weight: W) {
    let inserted = graph.add_edge(from, to, weight);
    debug_assert!(inserted.is_ok(), "generator produced an invalid edge: {:?}", inserted);
}
