//! Contraction Demo - End-to-end example
//!
//! This binary demonstrates the complete Coalesce workflow:
//! 1. Generate a random undirected graph
//! 2. Contract it round by round until only connected components remain
//! 3. Optionally settle a force-directed layout for the node positions
//! 4. Report the run as text or JSON
//!
//! # Usage
//!
//! ```bash
//! cargo run --package coalesce-playground --bin contraction-demo -- \
//!     --nodes 75 --edges 50 --seed 42 --layout
//! ```

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;

use coalesce_core::{BoruvkaContraction, ContractionAutomaton, ContractionOutcome, Graph};
use coalesce_layout::{ForceLayout, Vec2};
use common_error::CoalesceResult;

use coalesce_playground::{format_groups, print_divider, print_header, random_graph};

// The original visualization's window size, reused as the projection
// viewport.
const VIEWPORT_WIDTH: f32 = 800.0;
const VIEWPORT_HEIGHT: f32 = 480.0;

/// Contraction Demo CLI arguments.
#[derive(Parser, Debug)]
#[command(name = "contraction-demo")]
#[command(about = "Round-by-round demonstration of randomized graph contraction")]
struct Args {
    /// Node identity limit for the generated graph
    #[arg(long, default_value_t = 75)]
    nodes: u32,

    /// Number of random edges to draw
    #[arg(long, default_value_t = 50)]
    edges: u32,

    /// Seed for generation, contraction, and layout; random when absent
    #[arg(long)]
    seed: Option<u64>,

    /// Settle a force-directed layout and report projected positions
    #[arg(long, default_value_t = false)]
    layout: bool,

    /// Print the full report as JSON
    #[arg(long, default_value_t = false)]
    json: bool,

    /// Write the JSON report to a file
    #[arg(long)]
    output: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

/// Serializable summary of one demo run.
#[derive(Debug, Serialize)]
struct ContractionReport {
    seed: u64,
    nodes: usize,
    edges: usize,
    /// Group count after every round, starting with the seeded groups.
    group_counts: Vec<usize>,
    outcome: ContractionOutcome,
    #[serde(skip_serializing_if = "Option::is_none")]
    positions: Option<HashMap<u32, Vec2>>,
}

fn main() -> CoalesceResult<()> {
    env_logger::init();
    let args = Args::parse();
    let seed = args.seed.unwrap_or_else(rand::random);

    print_header("Coalesce Contraction Demo");
    println!();
    println!("This demo shows how to:");
    println!("  1. Generate a random undirected graph");
    println!("  2. Contract it round by round to its connected components");
    println!("  3. Lay out the nodes with a force-directed simulation");

    // Step 1: Generate the graph
    print_header("Step 1: Generate Random Graph");
    let mut rng = StdRng::seed_from_u64(seed);
    let graph = random_graph(args.nodes, args.edges, &mut rng)?;

    println!("Generated graph with seed {seed}:");
    println!("  - {} nodes", graph.node_count());
    println!("  - {} edges", graph.edges().len());

    if args.verbose {
        print_divider();
        println!("Edges:");
        for (a, b) in graph.edges() {
            println!("  {a} - {b}");
        }
    }

    // Step 2: Contract round by round
    print_header("Step 2: Contract Round by Round");
    let (automaton, group_counts) = run_contraction(&graph, seed, args.verbose);

    let outcome = ContractionOutcome {
        rounds: automaton.rounds(),
        groups: automaton.groups().len(),
        finished: automaton.finished(),
    };
    println!();
    println!(
        "Contracted {} nodes into {} component(s) in {} round(s)",
        graph.node_count(),
        outcome.groups,
        outcome.rounds
    );

    // Step 3: Layout (optional)
    let positions = if args.layout {
        print_header("Step 3: Force-Directed Layout");
        Some(run_layout(&graph, seed, args.verbose)?)
    } else {
        None
    };

    // Step 4: Report
    let report = ContractionReport {
        seed,
        nodes: graph.node_count(),
        edges: graph.edges().len(),
        group_counts,
        outcome,
        positions,
    };

    if args.json {
        print_header("Report");
        println!("{}", serde_json::to_string_pretty(&report)?);
    }
    if let Some(path) = &args.output {
        fs::write(path, serde_json::to_string_pretty(&report)?)?;
        println!("Report written to {}", path.display());
    }

    print_header("Demo Complete!");
    Ok(())
}

/// Run the automaton to termination, printing the group count per round.
fn run_contraction(
    graph: &Graph<u32>,
    seed: u64,
    verbose: bool,
) -> (BoruvkaContraction<u32>, Vec<usize>) {
    let mut automaton = BoruvkaContraction::with_seed(graph, seed);
    let mut group_counts = vec![automaton.groups().len()];

    println!("round  0: {} groups (seeded)", automaton.groups().len());
    while !automaton.finished() {
        automaton.perform_round();
        group_counts.push(automaton.groups().len());

        println!(
            "round {:2}: {} groups",
            automaton.rounds(),
            automaton.groups().len()
        );
        if verbose {
            print!("{}", format_groups(&automaton.current_groups()));
        }
    }

    (automaton, group_counts)
}

/// Settle a layout and project it into the demo viewport.
fn run_layout(graph: &Graph<u32>, seed: u64, verbose: bool) -> CoalesceResult<HashMap<u32, Vec2>> {
    let mut layout = ForceLayout::with_seed(graph, seed);
    layout.settle();

    let positions = layout.project(VIEWPORT_WIDTH, VIEWPORT_HEIGHT)?;
    println!(
        "Settled {} positions in a {}x{} viewport",
        positions.len(),
        VIEWPORT_WIDTH,
        VIEWPORT_HEIGHT
    );

    if verbose {
        print_divider();
        let mut nodes: Vec<&u32> = positions.keys().collect();
        nodes.sort_unstable();
        for node in nodes {
            let position = positions[node];
            println!("  node {node:3}: ({:7.2}, {:7.2})", position.x, position.y);
        }
    }

    Ok(positions)
}
