use clap::{Args, Parser, Subcommand};
use log::{debug, LevelFilter};
use ordered_float::OrderedFloat;
use serde::Serialize;
use std::cmp::Reverse;
use std::error::Error;
use std::fs;
use std::path::PathBuf;
use std::process;

use markov_sssp::algorithm::floyd_warshall::AllPairsResult;
use markov_sssp::graph::{parse_adjacency_list, Graph, GraphDescription};
use markov_sssp::{
    AdjacencyGraph, BellmanFord, Dijkstra, FloydWarshall, MostProbablePath, ShortestPathAlgorithm,
    ShortestPathResult, TraversalStats,
};

type CliResult<T> = Result<T, Box<dyn Error>>;

#[derive(Parser)]
#[command(name = "pathfinder")]
#[command(author, version, about = "Shortest and most probable paths over weighted graphs")]
#[command(after_help = concat!(
    "Example:\n",
    "  pathfinder dijkstra -a \"0:1/1.0,2/2.0 1:2/1.5 2:3/1.0 3:4/8.1\" -s 0"
))]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv); RUST_LOG overrides
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Output results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct GraphArgs {
    /// Number of vertices (defaults to the highest vertex mentioned plus one)
    #[arg(short = 'n', long)]
    vertices: Option<usize>,

    /// Adjacency list, e.g. "0:1/1.0,2/2.0 1:2/1.5"
    #[arg(short, long)]
    adjacencies: Option<String>,

    /// JSON graph file, used when no adjacency list is given:
    /// {"vertices": 3, "directed": true, "edges": [{"source": 0, "target": 1, "weight": 0.5}]}
    #[arg(short, long, env = "MARKOV_SSSP_GRAPH")]
    graph: Option<PathBuf>,

    /// Treat the graph as directed (default: undirected)
    #[arg(short, long)]
    directed: bool,
}

#[derive(Args)]
struct SourceArgs {
    /// Start vertex
    #[arg(short, long, default_value_t = 0)]
    start: usize,

    /// Only report the path to this vertex
    #[arg(short, long)]
    target: Option<usize>,
}

#[derive(Subcommand)]
enum Commands {
    /// Dijkstra shortest paths (non-negative weights)
    Dijkstra {
        #[command(flatten)]
        graph: GraphArgs,
        #[command(flatten)]
        source: SourceArgs,
    },

    /// Most probable paths in a Markov chain (always directed)
    Markov {
        #[command(flatten)]
        graph: GraphArgs,
        #[command(flatten)]
        source: SourceArgs,

        /// Comma-separated state labels used to print paths as sentences
        #[arg(short, long, value_delimiter = ',')]
        labels: Option<Vec<String>>,

        /// Only report the k most probable destinations
        #[arg(long)]
        top: Option<usize>,

        /// Tolerance on each state's outgoing probability sum
        #[arg(long, default_value_t = markov_sssp::graph::markov::DEFAULT_TOLERANCE)]
        tolerance: f64,
    },

    /// Bellman-Ford shortest paths (negative weights allowed)
    BellmanFord {
        #[command(flatten)]
        graph: GraphArgs,
        #[command(flatten)]
        source: SourceArgs,
    },

    /// Floyd-Warshall all-pairs shortest distances
    FloydWarshall {
        #[command(flatten)]
        graph: GraphArgs,
    },
}

#[derive(Serialize)]
struct VertexReport {
    vertex: usize,
    /// `None` when the vertex is unreachable
    value: Option<f64>,
    predecessor: Option<usize>,
    path: Option<Vec<usize>>,
}

#[derive(Serialize)]
struct SingleSourceReport<'a> {
    algorithm: &'a str,
    source: usize,
    vertices: Vec<VertexReport>,
    stats: TraversalStats,
}

/// How a single-source result is worded and filtered
struct Presentation<'a> {
    unit: &'a str,
    vertex_noun: &'a str,
    labels: Option<&'a [String]>,
    top: Option<usize>,
    json: bool,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(err) = run(cli) {
        eprintln!("Error: {}", err);
        process::exit(1);
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn run(cli: Cli) -> CliResult<()> {
    let json = cli.json;
    match cli.command {
        Commands::Dijkstra { graph, source } => {
            let graph = load_graph(&graph, false)?;
            let presentation = Presentation {
                unit: "length",
                vertex_noun: "vertex",
                labels: None,
                top: None,
                json,
            };
            run_single_source(&Dijkstra::new(), &graph, &source, &presentation)
        }
        Commands::Markov {
            graph,
            source,
            labels,
            top,
            tolerance,
        } => {
            if !tolerance.is_finite() {
                return Err(format!("tolerance must be finite, got {}", tolerance).into());
            }
            let graph = load_graph(&graph, true)?;
            if let Some(labels) = &labels {
                if labels.len() < graph.vertex_count() {
                    return Err(format!(
                        "{} labels given for {} states",
                        labels.len(),
                        graph.vertex_count()
                    )
                    .into());
                }
            }
            let presentation = Presentation {
                unit: "probability",
                vertex_noun: "state",
                labels: labels.as_deref(),
                top,
                json,
            };
            let algorithm = MostProbablePath::new().with_tolerance(tolerance);
            run_single_source(&algorithm, &graph, &source, &presentation)
        }
        Commands::BellmanFord { graph, source } => {
            let graph = load_graph(&graph, false)?;
            let presentation = Presentation {
                unit: "length",
                vertex_noun: "vertex",
                labels: None,
                top: None,
                json,
            };
            run_single_source(&BellmanFord::new(), &graph, &source, &presentation)
        }
        Commands::FloydWarshall { graph } => {
            let graph = load_graph(&graph, false)?;
            let result = FloydWarshall::new().compute(&graph)?;
            print_all_pairs(&result, json)
        }
    }
}

/// Builds the graph from a JSON file or an adjacency list
fn load_graph(args: &GraphArgs, force_directed: bool) -> CliResult<AdjacencyGraph<f64>> {
    let mut description = match (&args.graph, &args.adjacencies) {
        (_, Some(list)) => {
            let edges = parse_adjacency_list(list)?;
            let inferred = edges
                .iter()
                .map(|edge| edge.source.max(edge.target) + 1)
                .max()
                .unwrap_or(0);
            GraphDescription {
                vertices: args.vertices.unwrap_or(inferred),
                directed: args.directed,
                edges,
            }
        }
        (Some(path), None) => {
            let text = fs::read_to_string(path)?;
            serde_json::from_str::<GraphDescription>(&text)?
        }
        (None, None) => return Err("either --adjacencies or --graph is required".into()),
    };

    if let Some(vertices) = args.vertices {
        description.vertices = vertices;
    }
    description.directed |= args.directed || force_directed;

    let graph = description.build()?;
    debug!(
        "Loaded {} graph with {} vertices and {} adjacency entries",
        if graph.is_directed() { "directed" } else { "undirected" },
        graph.vertex_count(),
        graph.edge_count()
    );
    Ok(graph)
}

fn run_single_source<A>(
    algorithm: &A,
    graph: &AdjacencyGraph<f64>,
    args: &SourceArgs,
    presentation: &Presentation<'_>,
) -> CliResult<()>
where
    A: ShortestPathAlgorithm<f64, AdjacencyGraph<f64>>,
{
    let result = algorithm.compute_shortest_paths(graph, args.start)?;
    let vertices = select_vertices(&result, args.target, presentation.top)?;

    if presentation.json {
        let report = SingleSourceReport {
            algorithm: algorithm.name(),
            source: result.source,
            vertices: vertices
                .iter()
                .map(|&vertex| VertexReport {
                    vertex,
                    value: result
                        .is_reachable(vertex)
                        .then(|| result.records[vertex].priority),
                    predecessor: result.predecessor(vertex),
                    path: result.path_to(vertex),
                })
                .collect(),
            stats: result.stats,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!(
        "{} from {} {}:",
        algorithm.name(),
        presentation.vertex_noun,
        result.source
    );
    for vertex in vertices {
        match result.path_to(vertex) {
            Some(path) => println!(
                "to {} {}, {} {:.4}: {}",
                presentation.vertex_noun,
                vertex,
                presentation.unit,
                result.records[vertex].priority,
                format_path(&path, presentation.labels)
            ),
            None => println!(
                "to {} {}, {} {}",
                presentation.vertex_noun,
                vertex,
                presentation.unit,
                unreachable_symbol(result.records[vertex].priority)
            ),
        }
    }
    Ok(())
}

/// Picks the vertices to report: one target, the `top` best, or all
fn select_vertices(
    result: &ShortestPathResult<f64>,
    target: Option<usize>,
    top: Option<usize>,
) -> CliResult<Vec<usize>> {
    if let Some(target) = target {
        if target >= result.vertex_count() {
            return Err(markov_sssp::Error::InvalidVertex(target).into());
        }
        return Ok(vec![target]);
    }

    match top {
        Some(k) => {
            let mut reachable: Vec<usize> = (0..result.vertex_count())
                .filter(|&v| v != result.source && result.is_reachable(v))
                .collect();
            reachable.sort_by_key(|&v| Reverse(OrderedFloat(result.records[v].priority)));
            reachable.truncate(k);
            Ok(reachable)
        }
        None => Ok((0..result.vertex_count()).collect()),
    }
}

/// Renders a path as `0 → 2 → 3`, or as a sentence of labels
fn format_path(path: &[usize], labels: Option<&[String]>) -> String {
    match labels {
        Some(labels) => path
            .iter()
            .map(|&v| labels[v].as_str())
            .filter(|label| !label.is_empty())
            .collect::<Vec<_>>()
            .join(" "),
        None => path
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(" → "),
    }
}

fn unreachable_symbol(value: f64) -> String {
    if value.is_infinite() {
        "∞".to_string()
    } else {
        format!("{:.4} (unreachable)", value)
    }
}

fn print_all_pairs(result: &AllPairsResult<f64>, json: bool) -> CliResult<()> {
    if json {
        let rows: Vec<Vec<Option<f64>>> = result
            .distances()
            .iter()
            .map(|row| row.iter().map(|d| d.is_finite().then_some(*d)).collect())
            .collect();
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    let n = result.vertex_count();
    print!("     ");
    for v in 0..n {
        print!("{:>8}", v);
    }
    println!();
    for (u, row) in result.distances().iter().enumerate() {
        print!("{:>4} ", u);
        for distance in row {
            if distance.is_finite() {
                print!("{:>8.2}", distance);
            } else {
                print!("{:>8}", "∞");
            }
        }
        println!();
    }
    Ok(())
}
