//! Timing experiments comparing the three algorithms on random graphs.
//!
//! Every sample also cross-checks the algorithms against each other, so an
//! experiment run doubles as a randomized agreement test.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

use crate::algorithm::{
    AllPairsAlgorithm, BellmanFord, Dijkstra, FloydWarshall, RepeatedSingleSource,
    ShortestPathAlgorithm,
};
use crate::data_structures::DistanceMatrix;
use crate::graph::generators::generate_random_graph;
use crate::{Error, Result};

/// Graph sizes and sample counts for an experiment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperimentConfig {
    pub min_size: usize,
    pub max_size: usize,
    pub step: usize,
    /// Graphs generated per size; the reported time is the median
    pub samples: usize,
    /// Edge weights are drawn from `1..=weight_limit`
    pub weight_limit: i64,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            min_size: 10,
            max_size: 100,
            step: 10,
            samples: 5,
            weight_limit: 100,
        }
    }
}

impl ExperimentConfig {
    /// Smaller preset for the all-pairs experiment, which is cubic in the size
    pub fn all_pairs() -> Self {
        Self {
            max_size: 50,
            samples: 3,
            ..Self::default()
        }
    }

    /// Set the size range
    pub fn with_sizes(mut self, min_size: usize, max_size: usize, step: usize) -> Self {
        self.min_size = min_size;
        self.max_size = max_size;
        self.step = step;
        self
    }

    /// Set the number of samples per size
    pub fn with_samples(mut self, samples: usize) -> Self {
        self.samples = samples;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.step == 0 {
            return Err(Error::InvalidConfig("step must be positive".to_string()));
        }
        if self.samples == 0 {
            return Err(Error::InvalidConfig("samples must be positive".to_string()));
        }
        if self.min_size > self.max_size {
            return Err(Error::InvalidConfig(format!(
                "min_size {} exceeds max_size {}",
                self.min_size, self.max_size
            )));
        }
        if self.weight_limit < 1 {
            return Err(Error::InvalidConfig("weight_limit must be at least 1".to_string()));
        }
        Ok(())
    }

    /// Graph sizes covered by the experiment, in increasing order
    pub fn sizes(&self) -> impl Iterator<Item = usize> {
        (self.min_size..=self.max_size).step_by(self.step.max(1))
    }
}

/// Median single-source query times for one graph size
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SingleSourceRow {
    pub size: usize,
    pub dijkstra_secs: f64,
    pub bellman_ford_secs: f64,
    pub floyd_warshall_secs: f64,
}

/// Median all-pairs computation times for one graph size
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllPairsRow {
    pub size: usize,
    pub floyd_warshall_secs: f64,
    pub dijkstra_all_secs: f64,
    pub bellman_ford_all_secs: f64,
}

/// Upper median (element `len / 2` once sorted); zero for no samples
pub fn median(samples: &[Duration]) -> Duration {
    let mut sorted = samples.to_vec();
    sorted.sort_unstable();
    sorted.get(sorted.len() / 2).copied().unwrap_or(Duration::ZERO)
}

fn timed<T>(f: impl FnOnce() -> T) -> (T, Duration) {
    let start = Instant::now();
    let value = f();
    (value, start.elapsed())
}

/// Times one start -> goal query per algorithm on `samples` random graphs of
/// each size. Fails with [`Error::Discrepancy`] if the algorithms disagree.
pub fn run_single_source_experiment<R: Rng>(
    config: &ExperimentConfig,
    rng: &mut R,
) -> Result<Vec<SingleSourceRow>> {
    config.validate()?;

    let dijkstra = Dijkstra::new();
    let bellman_ford = BellmanFord::new();
    let floyd_warshall = FloydWarshall::new();

    let mut rows = Vec::new();
    for size in config.sizes() {
        log::info!("Testing size (single source): {}", size);
        let mut d_times = Vec::with_capacity(config.samples);
        let mut bf_times = Vec::with_capacity(config.samples);
        let mut fw_times = Vec::with_capacity(config.samples);

        for _ in 0..config.samples {
            let fixture = generate_random_graph(rng, size, config.weight_limit, true);
            let (Some(start), Some(goal)) = (fixture.start, fixture.goal) else {
                continue;
            };
            let graph = &fixture.graph;

            let (d_dist, d_time) = timed(|| dijkstra.shortest_distance(graph, start, goal));
            let (bf_dist, bf_time) = timed(|| bellman_ford.shortest_distance(graph, start, goal));
            let (fw_dist, fw_time) =
                timed(|| floyd_warshall.shortest_distance(graph, start, goal));
            let (d_dist, bf_dist, fw_dist) = (d_dist?, bf_dist?, fw_dist?);

            if d_dist != bf_dist || bf_dist != fw_dist {
                return Err(Error::Discrepancy {
                    size,
                    details: format!(
                        "{} -> {}: dijkstra={}, bellman-ford={}, floyd-warshall={}",
                        start, goal, d_dist, bf_dist, fw_dist
                    ),
                });
            }

            d_times.push(d_time);
            bf_times.push(bf_time);
            fw_times.push(fw_time);
        }

        rows.push(SingleSourceRow {
            size,
            dijkstra_secs: median(&d_times).as_secs_f64(),
            bellman_ford_secs: median(&bf_times).as_secs_f64(),
            floyd_warshall_secs: median(&fw_times).as_secs_f64(),
        });
    }

    Ok(rows)
}

/// Times Floyd-Warshall against Dijkstra and Bellman-Ford run from every
/// vertex, comparing the full matrices.
pub fn run_all_pairs_experiment<R: Rng>(
    config: &ExperimentConfig,
    rng: &mut R,
) -> Result<Vec<AllPairsRow>> {
    config.validate()?;

    let floyd_warshall = FloydWarshall::new();
    let dijkstra_all = RepeatedSingleSource::new(Dijkstra::new());
    let bellman_ford_all = RepeatedSingleSource::new(BellmanFord::new());

    let mut rows = Vec::new();
    for size in config.sizes() {
        log::info!("Testing size (all pairs): {}", size);
        let mut fw_times = Vec::with_capacity(config.samples);
        let mut d_times = Vec::with_capacity(config.samples);
        let mut bf_times = Vec::with_capacity(config.samples);

        for _ in 0..config.samples {
            let fixture = generate_random_graph(rng, size, config.weight_limit, true);
            let graph = &fixture.graph;

            let (fw_matrix, fw_time) = timed(|| floyd_warshall.compute_all_pairs(graph));
            let (d_matrix, d_time) = timed(|| dijkstra_all.compute_all_pairs(graph));
            let (bf_matrix, bf_time) = timed(|| bellman_ford_all.compute_all_pairs(graph));
            let (fw_matrix, d_matrix) = (fw_matrix?, d_matrix?);

            match bf_matrix {
                Ok(bf_matrix) => {
                    check_matrices(size, &fw_matrix, &d_matrix, &bf_matrix)?;
                }
                Err(Error::NegativeCycle { start, .. }) => {
                    log::warn!(
                        "skipping comparison on size {}: negative cycle reachable from {}",
                        size,
                        start
                    );
                }
                Err(err) => return Err(err),
            }

            fw_times.push(fw_time);
            d_times.push(d_time);
            bf_times.push(bf_time);
        }

        rows.push(AllPairsRow {
            size,
            floyd_warshall_secs: median(&fw_times).as_secs_f64(),
            dijkstra_all_secs: median(&d_times).as_secs_f64(),
            bellman_ford_all_secs: median(&bf_times).as_secs_f64(),
        });
    }

    Ok(rows)
}

fn check_matrices(
    size: usize,
    floyd_warshall: &DistanceMatrix<i64>,
    dijkstra: &DistanceMatrix<i64>,
    bellman_ford: &DistanceMatrix<i64>,
) -> Result<()> {
    for i in 0..floyd_warshall.size() {
        for j in 0..floyd_warshall.size() {
            let (fw, d, bf) = (floyd_warshall.get(i, j), dijkstra.get(i, j), bellman_ford.get(i, j));
            if fw != d || d != bf {
                return Err(Error::Discrepancy {
                    size,
                    details: format!(
                        "{} -> {}: floyd-warshall={}, dijkstra={}, bellman-ford={}",
                        i, j, fw, d, bf
                    ),
                });
            }
        }
    }
    Ok(())
}
