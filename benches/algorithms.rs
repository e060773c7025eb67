use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;
use shortest_paths::graph::generators::generate_random_graph;
use shortest_paths::{
    AllPairsAlgorithm, BellmanFord, Dijkstra, FloydWarshall, RepeatedSingleSource,
    ShortestPathAlgorithm,
};

fn single_source(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_source");
    let mut rng = StdRng::seed_from_u64(0x5eed);

    for size in [25, 50, 100] {
        let fixture = generate_random_graph(&mut rng, size, 100, true);
        let (start, goal) = (fixture.start.unwrap(), fixture.goal.unwrap());
        let graph = fixture.graph;

        group.bench_with_input(BenchmarkId::new("dijkstra", size), &graph, |b, g| {
            b.iter(|| Dijkstra::new().shortest_distance(g, black_box(start), black_box(goal)))
        });
        group.bench_with_input(BenchmarkId::new("bellman_ford", size), &graph, |b, g| {
            b.iter(|| BellmanFord::new().shortest_distance(g, black_box(start), black_box(goal)))
        });
        group.bench_with_input(BenchmarkId::new("floyd_warshall", size), &graph, |b, g| {
            b.iter(|| FloydWarshall::new().shortest_distance(g, black_box(start), black_box(goal)))
        });
    }

    group.finish();
}

fn all_pairs(c: &mut Criterion) {
    let mut group = c.benchmark_group("all_pairs");
    group.sample_size(20);
    let mut rng = StdRng::seed_from_u64(0xa11);

    for size in [20, 40] {
        let graph = generate_random_graph(&mut rng, size, 100, true).graph;

        group.bench_with_input(BenchmarkId::new("floyd_warshall", size), &graph, |b, g| {
            b.iter(|| FloydWarshall::new().compute_all_pairs(g))
        });
        group.bench_with_input(BenchmarkId::new("dijkstra_all", size), &graph, |b, g| {
            b.iter(|| RepeatedSingleSource::new(Dijkstra::new()).compute_all_pairs(g))
        });
        group.bench_with_input(BenchmarkId::new("bellman_ford_all", size), &graph, |b, g| {
            b.iter(|| RepeatedSingleSource::new(BellmanFord::new()).compute_all_pairs(g))
        });
    }

    group.finish();
}

criterion_group!(benches, single_source, all_pairs);
criterion_main!(benches);
