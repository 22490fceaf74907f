use markov_sssp::graph::parse_adjacency_list;
use markov_sssp::{AdjacencyGraph, MostProbablePath, ShortestPathAlgorithm};

/// States of a tiny sentence generator; 0 and 8 are the start and end markers
const WORDS: [&str; 9] = [
    "",
    "We studied",
    "We built",
    "We saw",
    "an example",
    "a video",
    "of a graph",
    "of an exercise",
    "",
];

const CHAIN: &str = "0:1/0.5,2/0.2,3/0.3 \
                     1:4/0.6,5/0.4 2:4/0.3,5/0.7 3:4/0.5,5/0.5 \
                     4:6/0.7,7/0.3 5:6/0.4,7/0.6 \
                     6:8/1.0 7:8/1.0";

fn main() -> Result<(), markov_sssp::Error> {
    let edges = parse_adjacency_list(CHAIN)?;
    let graph = AdjacencyGraph::from_edges(WORDS.len(), true, &edges)?;

    let result = MostProbablePath::new().compute_shortest_paths(&graph, 0)?;
    let end = WORDS.len() - 1;

    match result.path_to(end) {
        Some(path) => {
            let sentence: Vec<&str> = path
                .iter()
                .map(|&state| WORDS[state])
                .filter(|word| !word.is_empty())
                .collect();
            println!("Most probable sentence: {}", sentence.join(" "));
            println!("Probability: {:.4}", result.records[end].priority);
        }
        None => println!("The end state cannot be reached"),
    }

    Ok(())
}
