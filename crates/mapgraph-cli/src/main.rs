use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use mapgraph_cli::commands::describe::handle_describe;
use mapgraph_cli::commands::diameter::handle_diameter;
use mapgraph_cli::commands::matrix::{handle_matrix, MatrixKind};
use mapgraph_cli::commands::replay::handle_replay;
use mapgraph_cli::commands::route::{handle_route, RouteCommandArgs};
use mapgraph_cli::config::resolve_map_path;
use mapgraph_cli::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(author, version, about = "Routing and graph analysis over GeoJSON maps")]
struct Cli {
    /// GeoJSON map file. Falls back to the MAPGRAPH_MAP environment variable.
    #[arg(long, global = true)]
    map: Option<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute the shortest route between two vertices.
    Route {
        /// Starting vertex (name, label or numeric id).
        #[arg(long = "from")]
        from: String,
        /// Destination vertex (name, label or numeric id).
        #[arg(long = "to")]
        to: String,
        /// Give up after this many milliseconds of searching.
        #[arg(long = "budget-ms")]
        budget_ms: Option<u64>,
    },
    /// Show the order in which the search settles vertices.
    Replay {
        #[arg(long = "from")]
        from: String,
        #[arg(long = "to")]
        to: String,
    },
    /// Report the graph diameter and the vertices realising it.
    Diameter,
    /// Print the vertex set, edge set, relations and degrees.
    Describe,
    /// Export the adjacency or incidence matrix as CSV.
    Matrix {
        #[arg(long, value_enum)]
        kind: MatrixKind,
        /// Write to this file instead of stdout.
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let map_path = resolve_map_path(cli.map.as_deref())?;
    let format = cli.format;

    match cli.command {
        Command::Route {
            from,
            to,
            budget_ms,
        } => handle_route(
            &map_path,
            &RouteCommandArgs {
                from,
                to,
                budget_ms,
            },
            format,
        ),
        Command::Replay { from, to } => handle_replay(&map_path, &from, &to, format),
        Command::Diameter => handle_diameter(&map_path, format),
        Command::Describe => handle_describe(&map_path, format),
        Command::Matrix { kind, output } => {
            handle_matrix(&map_path, kind, output.as_deref(), format)
        }
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
