use std::io;
use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::Parser;
use rand::{rngs::StdRng, SeedableRng};
use tracing::Level;

use dijkstra_walkthrough::{
    config::SceneConfig,
    graph_algorithms::exhaustive_distances,
    shortest_path::ShortestPathEngine,
    storyboard::{compose, Presenter, TextPresenter},
    utils::{graph_generator::random_graph, measure_time},
    types::Weight,
    GraphModel,
};

#[derive(Parser)]
#[clap(name = "dijkstra-walkthrough", version)]
struct Opts {

    /// more log output on stderr (-v debug, -vv trace)
    #[clap(short, long, global = true, parse(from_occurrences))]
    verbose: u64,

    #[clap(subcommand)]
    subcmd: SubCommand
}

#[derive(Parser)]
enum SubCommand {
    /// print the walkthrough of a shortest path query step by step
    Walkthrough(QueryCommand),
    /// print the event log of a shortest path query as json
    Events(EventsCommand),
    /// compare the engine against an exhaustive search on random graphs
    Verify(VerifyCommand)
}

#[derive(Parser)]
struct QueryCommand {

    /// scene file (.json or line based text format), defaults to the lecture graph
    #[clap(short, long)]
    graph: Option<PathBuf>,

    /// start vertex, overrides the scene's query
    #[clap(short, long)]
    start: Option<String>,

    /// end vertex, overrides the scene's query
    #[clap(short, long)]
    end: Option<String>
}

#[derive(Parser)]
struct EventsCommand {

    #[clap(flatten)]
    query: QueryCommand,

    /// pretty print the json output
    #[clap(short, long)]
    pretty: bool
}

#[derive(Parser)]
struct VerifyCommand {

    /// number of vertices per random graph
    #[clap(short = 'n', long, default_value = "8")]
    vertices: usize,

    /// number of random graphs
    #[clap(short, long, default_value = "100")]
    iterations: u64,

    /// probability of each vertex pair being connected
    #[clap(short, long, default_value = "0.35")]
    probability: f64,

    /// largest edge weight
    #[clap(short = 'w', long, default_value = "9")]
    max_weight: u32,

    /// seed of the first graph, graph i uses seed + i (wrapping)
    #[clap(short, long, default_value = "0")]
    seed: u64
}

fn main() -> anyhow::Result<()> {
    let opts: Opts = Opts::parse();

    let level = match opts.verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt().with_max_level(level).with_writer(io::stderr).init();

    match opts.subcmd {
        SubCommand::Walkthrough(query) => {
            let scene = load_scene(&query)?;
            let graph = scene.build_graph().context("invalid scene graph")?;
            let mut engine = ShortestPathEngine::new(&graph, &scene.start, &scene.end)?;

            let cues = compose(&scene.title, &mut engine)?;
            let mut presenter = TextPresenter::new(io::stdout().lock());
            presenter.present_all(&cues)?;
        },
        SubCommand::Events(events) => {
            let scene = load_scene(&events.query)?;
            let graph = scene.build_graph().context("invalid scene graph")?;
            let mut engine = ShortestPathEngine::new(&graph, &scene.start, &scene.end)?;

            let log = engine.run_to_completion()?;
            let json = if events.pretty {
                serde_json::to_string_pretty(&log)?
            }
            else {
                serde_json::to_string(&log)?
            };

            println!("{}", json);
        },
        SubCommand::Verify(verify) => {
            if verify.vertices == 0 {
                bail!("random graphs need at least one vertex");
            }

            if !(0.0..=1.0).contains(&verify.probability) {
                bail!("edge probability has to be within 0 and 1, got {}", verify.probability);
            }

            let mut mismatches = 0;

            for iteration in 0..verify.iterations {
                let mut rng = StdRng::seed_from_u64(graph_seed(verify.seed, iteration));
                let graph = random_graph(&mut rng, verify.vertices, verify.probability, verify.max_weight)?;

                let (run_time, matches) = measure_time(|| check_graph(&graph));
                if !matches? {
                    mismatches += 1;
                    println!("seed {}: engine disagrees with exhaustive search", graph_seed(verify.seed, iteration));
                }

                tracing::debug!(iteration, run_time_ns = run_time.as_nanos() as u64, "graph checked");
            }

            println!("{} graphs checked, {} mismatches", verify.iterations, mismatches);

            if mismatches > 0 {
                bail!("{} of {} random graphs failed verification", mismatches, verify.iterations);
            }
        }
    }

    Ok(())
}

fn load_scene(query: &QueryCommand) -> anyhow::Result<SceneConfig> {
    let scene = match &query.graph {
        Some(path) => SceneConfig::from_path(path)
            .with_context(|| format!("unable to read scene file {}", path.display()))?,
        None => SceneConfig::default(),
    };

    Ok(scene.with_query(query.start.clone(), query.end.clone()))
}

/// seed of the random graph of one iteration, wraps around at `u64::MAX`
fn graph_seed(seed: u64, iteration: u64) -> u64 {
    seed.wrapping_add(iteration)
}

/// runs the engine from the first vertex and checks distances and paths of all vertices
fn check_graph(graph: &GraphModel) -> anyhow::Result<bool> {
    let start = graph.label(0);
    let mut engine = ShortestPathEngine::new(graph, start, start)?;
    engine.run_to_completion()?;

    let expected = exhaustive_distances(graph, 0);

    for node_id in graph.node_ids() {
        let vertex = graph.label(node_id);
        let distance = engine.distance_to(vertex)?;

        if distance != expected[node_id as usize] {
            return Ok(false);
        }

        if let Some(distance) = distance {
            let path = engine.path_to(vertex)?;
            let mut path_weight = Weight::ZERO;

            for pair in path.windows(2) {
                path_weight = path_weight + graph.weight(&pair[0], &pair[1])?;
            }

            if path_weight != distance {
                return Ok(false);
            }
        }
    }

    Ok(true)
}
