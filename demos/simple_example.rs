use markov_sssp::graph::{Graph, MutableGraph};
use markov_sssp::{AdjacencyGraph, BellmanFord, Dijkstra, ShortestPathAlgorithm};

fn main() -> Result<(), markov_sssp::Error> {
    // Create a simple undirected graph
    let mut graph = AdjacencyGraph::with_vertices(5, false);

    // Add edges with weights
    graph.add_edge(0, 1, 1.0)?;
    graph.add_edge(0, 2, 2.0)?;
    graph.add_edge(1, 2, 1.5)?;
    graph.add_edge(2, 3, 1.0)?;
    graph.add_edge(3, 4, 8.1)?;

    // Source vertex
    let source = 0;

    println!("--- Testing on a simple graph ---");
    println!(
        "Graph has {} vertices and {} adjacency entries",
        graph.vertex_count(),
        graph.edge_count()
    );

    // Run Dijkstra's algorithm
    let dijkstra = Dijkstra::new();
    let result = dijkstra.compute_shortest_paths(&graph, source)?;

    println!(
        "\n{} algorithm results:",
        <Dijkstra as ShortestPathAlgorithm<f64, AdjacencyGraph<f64>>>::name(&dijkstra)
    );
    for v in 0..graph.vertex_count() {
        match result.path_to(v) {
            Some(path) => println!(
                "Vertex {}: distance = {:.1}, path = {:?}",
                v, result.records[v].priority, path
            ),
            None => println!("Vertex {}: unreachable", v),
        }
    }
    println!("Heap work: {:?}", result.stats);

    // Bellman-Ford agrees on graphs without negative weights
    let bellman_ford = BellmanFord::new().compute_shortest_paths(&graph, source)?;
    assert_eq!(bellman_ford.values(), result.values());
    println!("\nBellman-Ford agrees with Dijkstra");

    Ok(())
}
