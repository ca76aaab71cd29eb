//! # Gridpath CLI
//!
//! Command-line interface for the gridpath library. Builds a graph from a
//! data file, optionally applies edge mutations, and prints shortest path
//! reports or a depth-first traversal.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use gridpath::DenseGraph;
use log::error;

mod cli;

use cli::{InsertSpec, RemoveSpec};

/// Command-line interface for gridpath
#[derive(Parser)]
#[command(name = "gridpath")]
#[command(about = "All-pairs shortest paths over small dense graphs")]
#[command(long_about = "Computes all-pairs shortest paths over a directed weighted graph:
  gridpath all data.txt                  # Full all-pairs report
  gridpath pair data.txt 1 3             # One pair, with the label sequence
  gridpath pair data.txt 1 3 --json      # Same, as JSON
  gridpath all data.txt --remove 2,3 --insert 1,3,2
  gridpath dfs dfs-data.txt              # Depth-first traversal report

Mutations are applied after the build: removals first, then insertions,
each followed by a full re-solve.")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Print the all-pairs shortest path table
    All {
        /// Graph data file (node count, labels, weighted edge triples)
        file: PathBuf,

        /// Remove an edge before reporting: FROM,TO (repeatable)
        #[arg(long = "remove", value_name = "FROM,TO", value_parser = cli::parse_remove_spec)]
        removes: Vec<RemoveSpec>,

        /// Insert an edge before reporting: FROM,TO,WEIGHT (repeatable)
        #[arg(long = "insert", value_name = "FROM,TO,WEIGHT", value_parser = cli::parse_insert_spec)]
        inserts: Vec<InsertSpec>,

        /// Emit the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Report the shortest path between one pair of nodes
    Pair {
        /// Graph data file (node count, labels, weighted edge triples)
        file: PathBuf,

        /// Source node id (1-based)
        from: usize,

        /// Target node id (1-based)
        to: usize,

        /// Remove an edge before reporting: FROM,TO (repeatable)
        #[arg(long = "remove", value_name = "FROM,TO", value_parser = cli::parse_remove_spec)]
        removes: Vec<RemoveSpec>,

        /// Insert an edge before reporting: FROM,TO,WEIGHT (repeatable)
        #[arg(long = "insert", value_name = "FROM,TO,WEIGHT", value_parser = cli::parse_insert_spec)]
        inserts: Vec<InsertSpec>,

        /// Emit the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the depth-first visitation order of an adjacency-list graph
    Dfs {
        /// Graph data file (node count, labels, unweighted edge pairs)
        file: PathBuf,
    },
}

fn main() {
    if let Err(e) = run() {
        error!("{e:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging to stderr
    let mut builder = env_logger::Builder::from_default_env();
    builder.target(env_logger::Target::Stderr);
    if cli.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.init();

    match cli.command {
        Command::All {
            file,
            removes,
            inserts,
            json,
        } => {
            let graph = load_dense(&file, &removes, &inserts)?;
            if json {
                let doc = serde_json::json!({ "pairs": graph.all_reports() });
                println!("{}", serde_json::to_string_pretty(&doc)?);
            } else {
                print!("{}", graph.report_all());
            }
        }
        Command::Pair {
            file,
            from,
            to,
            removes,
            inserts,
            json,
        } => {
            let graph = load_dense(&file, &removes, &inserts)?;
            if json {
                let report = graph.pair_report(from, to)?;
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print!("{}", graph.report_pair(from, to)?);
            }
        }
        Command::Dfs { file } => {
            let mut reader = open_input(&file)?;
            let graph = gridpath::traverse_from(&mut reader)
                .with_context(|| format!("failed to build graph from {}", file.display()))?;
            print!("{}", graph.report_order());
            print!("{}", graph.report_graph());
        }
    }

    Ok(())
}

fn open_input(path: &Path) -> anyhow::Result<BufReader<File>> {
    let file =
        File::open(path).with_context(|| format!("cannot open input file {}", path.display()))?;
    Ok(BufReader::new(file))
}

/// Build and solve the matrix graph, then apply mutations: removals
/// first, then insertions, each re-solving the table.
fn load_dense(
    path: &Path,
    removes: &[RemoveSpec],
    inserts: &[InsertSpec],
) -> anyhow::Result<DenseGraph> {
    let mut reader = open_input(path)?;
    let mut graph = gridpath::solve_from(&mut reader)
        .with_context(|| format!("failed to build graph from {}", path.display()))?;

    for spec in removes {
        graph
            .remove_edge(spec.from, spec.to)
            .with_context(|| format!("--remove {},{}", spec.from, spec.to))?;
    }
    for spec in inserts {
        graph
            .insert_edge(spec.from, spec.to, spec.weight)
            .with_context(|| format!("--insert {},{},{}", spec.from, spec.to, spec.weight))?;
    }

    Ok(graph)
}
