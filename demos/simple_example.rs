use shortest_paths::graph::{Graph, MutableGraph};
use shortest_paths::{
    AllPairsAlgorithm, BellmanFord, Dijkstra, DirectedGraph, Distance, Error, FloydWarshall,
    ShortestPathAlgorithm,
};

fn main() -> Result<(), Error> {
    // Create a simple directed graph
    let mut graph: DirectedGraph<i64> = DirectedGraph::new();

    // Add vertices (0-4)
    for _ in 0..5 {
        graph.add_vertex();
    }

    // Add edges with weights
    graph.add_edge(0, 1, 10)?;
    graph.add_edge(0, 2, 5)?;
    graph.add_edge(1, 3, 1)?;
    graph.add_edge(2, 1, 3)?;
    graph.add_edge(2, 3, 9)?;
    graph.add_edge(2, 4, 2)?;
    graph.add_edge(3, 4, 4)?;
    graph.add_edge(4, 0, 7)?;
    graph.add_edge(4, 3, 6)?;

    let source = 0;

    println!("--- Testing on a simple graph ---");
    println!("Graph has {} vertices and {} edges", graph.vertex_count(), graph.edge_count());

    let dijkstra = Dijkstra::new().compute_shortest_paths(&graph, source)?;
    let bellman_ford = BellmanFord::new().compute_shortest_paths(&graph, source)?;
    let matrix = FloydWarshall::new().compute_all_pairs(&graph)?;

    println!("\nDistances from vertex {}:", source);
    println!("{:<8} | {:<8} | {:<12} | {:<14}", "Vertex", "Dijkstra", "Bellman-Ford", "Floyd-Warshall");
    for v in 0..graph.vertex_count() {
        println!(
            "{:<8} | {:<8} | {:<12} | {:<14}",
            v, dijkstra[v], bellman_ford[v], matrix[source][v]
        );
    }

    // Introduce a negative cycle 3 -> 4 -> 3 and ask Bellman-Ford again
    graph.add_edge(4, 3, -5)?;
    if graph.has_negative_weights() {
        println!("\nGraph now has negative weights, Dijkstra no longer applies");
    }
    match BellmanFord::new().shortest_distance(&graph, source, 3) {
        Ok(Distance::Finite(d)) => println!("\nDistance to 3: {}", d),
        Ok(Distance::Unreachable) => println!("\nVertex 3 is unreachable"),
        Err(Error::NegativeCycle { vertex, .. }) => {
            println!("\nBellman-Ford detected a negative cycle (through vertex {})", vertex)
        }
        Err(err) => return Err(err),
    }

    Ok(())
}
