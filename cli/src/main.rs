//! Digraph CLI: load an edge-list file and run a traversal or query on it

mod edgelist;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use comfy_table::{ContentArrangement, Table};
use digraph::{GraphStore, TraversalOrder};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "digraph", version, about = "Directed graph traversal CLI")]
struct Cli {
    /// Edge-list file to load
    #[arg(long, env = "DIGRAPH_GRAPH")]
    graph: PathBuf,

    /// Output format
    #[arg(long, default_value = "table", global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, clap::ValueEnum)]
enum OutputFormat {
    Table,
    Json,
    Csv,
}

#[derive(Subcommand)]
enum Commands {
    /// Print vertex, edge and degree counts
    Stats,
    /// Breadth-first settlement order
    Bfs {
        /// Start vertex
        start: String,
    },
    /// Depth-first order
    Dfs {
        /// Start vertex
        start: String,

        /// `visit` or `settlement`
        #[arg(long, default_value = "visit")]
        order: TraversalOrder,
    },
    /// Kahn's topological sort
    Topo,
    /// Single-source shortest paths
    ShortestPath {
        /// Source vertex
        start: String,

        /// Only print the path to this vertex
        #[arg(long)]
        to: Option<String>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let store = edgelist::load_file(&cli.graph)?;

    match cli.command {
        Commands::Stats => run_stats(&store, &cli.format),
        Commands::Bfs { start } => {
            let order = store.bfs_traversal(&start)?;
            print_sequence(&order, &cli.format)
        }
        Commands::Dfs { start, order } => {
            let walk = store.dfs_traversal(&start, order)?;
            print_sequence(&walk, &cli.format)
        }
        Commands::Topo => match store.topological_sort() {
            Some(order) => print_sequence(&order, &cli.format),
            None => bail!("graph contains a directed cycle; no topological order exists"),
        },
        Commands::ShortestPath { start, to: Some(target) } => run_path(&store, &start, &target, &cli.format),
        Commands::ShortestPath { start, to: None } => run_shortest_paths(&store, &start, &cli.format),
    }
}

fn run_stats(store: &GraphStore<String>, format: &OutputFormat) -> Result<()> {
    let stats = store.statistics();

    let rows = [
        ("vertices", stats.vertex_count),
        ("edges", stats.edge_count),
        ("max out-degree", stats.max_out_degree),
        ("max in-degree", stats.max_in_degree),
        ("sources", stats.source_count),
        ("sinks", stats.sink_count),
        ("isolated", stats.isolated_count),
    ];

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&stats)?),
        OutputFormat::Csv => {
            println!("metric,value");
            for (name, value) in rows {
                println!("{},{}", name, value);
            }
        }
        OutputFormat::Table => {
            let mut table = new_table(&["metric", "value"]);
            for (name, value) in rows {
                table.add_row(vec![name.to_string(), value.to_string()]);
            }
            println!("{}", table);
        }
    }
    Ok(())
}

fn print_sequence(labels: &[String], format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(labels)?),
        OutputFormat::Csv => {
            println!("step,vertex");
            for (i, label) in labels.iter().enumerate() {
                println!("{},{}", i + 1, csv_field(label));
            }
        }
        OutputFormat::Table => {
            let mut table = new_table(&["#", "vertex"]);
            for (i, label) in labels.iter().enumerate() {
                table.add_row(vec![(i + 1).to_string(), label.clone()]);
            }
            println!("{}", table);
            println!("{} vertex(es)", labels.len());
        }
    }
    Ok(())
}

fn run_shortest_paths(store: &GraphStore<String>, start: &str, format: &OutputFormat) -> Result<()> {
    let paths = store.shortest_path(&start.to_string())?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&paths)?),
        OutputFormat::Csv => {
            println!("vertex,distance,predecessor");
            for (label, entry) in paths.iter() {
                let pred = entry.predecessor.as_deref().map(csv_field).unwrap_or_default();
                println!("{},{},{}", csv_field(label), entry.distance, pred);
            }
        }
        OutputFormat::Table => {
            let mut table = new_table(&["vertex", "distance", "predecessor"]);
            for (label, entry) in paths.iter() {
                table.add_row(vec![
                    label.clone(),
                    entry.distance.to_string(),
                    entry.predecessor.clone().unwrap_or_else(|| "-".to_string()),
                ]);
            }
            println!("{}", table);
            println!("{} vertex(es) reachable from {}", paths.len(), start);
        }
    }
    Ok(())
}

fn run_path(store: &GraphStore<String>, start: &str, target: &str, format: &OutputFormat) -> Result<()> {
    let result = store.shortest_path_between(&start.to_string(), &target.to_string())?;

    match (format, result) {
        (OutputFormat::Json, result) => println!("{}", serde_json::to_string_pretty(&result)?),
        (_, None) => println!("(no path from {} to {})", start, target),
        (OutputFormat::Csv, Some(path)) => {
            println!("cost,path");
            let joined: Vec<String> = path.path.iter().map(|l| csv_field(l)).collect();
            println!("{},{}", path.cost, joined.join(" "));
        }
        (OutputFormat::Table, Some(path)) => {
            println!("{}", path.path.join(" -> "));
            println!("cost: {}", path.cost);
        }
    }
    Ok(())
}

fn new_table(header: &[&str]) -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(header.to_vec());
    table
}

fn csv_field(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}
