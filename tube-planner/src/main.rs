use std::net::SocketAddr;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use tube_planner::cache::CacheConfig;
use tube_planner::dataset::{DatasetError, load_dir};
use tube_planner::network::Network;
use tube_planner::planner::{ConfigError, Planner, RouteConfig, RouteError};
use tube_planner::render::Renderer;
use tube_planner::stations::{ResolveError, StationIndex};
use tube_planner::web::{AppState, create_router};

/// Plan routes across the London Underground.
#[derive(Parser, Debug)]
#[command(name = "tube-planner", version, about, long_about = None)]
struct Cli {
    /// Directory holding lines.csv, stations.csv and routes.csv.
    #[arg(long, global = true, env = "TUBE_DATA_DIR", default_value = "datasets")]
    data_dir: PathBuf,

    /// Cost per kilometre travelled.
    #[arg(long, global = true, default_value_t = RouteConfig::DEFAULT_DISTANCE_WEIGHT)]
    distance_weight: f64,

    /// Cost added for each change of line, in kilometre-equivalents.
    #[arg(long, global = true, default_value_t = RouteConfig::DEFAULT_TRANSFER_PENALTY)]
    transfer_penalty: f64,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Plan a route between two stations.
    Route {
        /// Origin station name.
        from: String,

        /// Destination station name.
        to: String,

        /// Print line names without colour.
        #[arg(long)]
        no_color: bool,
    },

    /// List stations matching a name.
    Stations {
        /// Part of a station name; lists every station when omitted.
        query: Option<String>,

        /// Maximum number of stations to list.
        #[arg(long, default_value_t = 20)]
        limit: usize,
    },

    /// Serve the HTTP API.
    Serve {
        /// Address to listen on.
        #[arg(long, default_value = "127.0.0.1:3000")]
        addr: SocketAddr,
    },
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Dataset(#[from] DatasetError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Resolve(#[from] ResolveError),

    #[error(transparent)]
    Route(#[from] RouteError),

    #[error("server error: {0}")]
    Serve(#[from] std::io::Error),
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("tube_planner=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            if let CliError::Resolve(resolve) = &e {
                let alternatives = resolve.alternatives();
                if !alternatives.is_empty() {
                    eprintln!("did you mean:");
                    for m in alternatives {
                        eprintln!("  {}", m.name);
                    }
                }
            }
            ExitCode::from(1)
        }
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let config = RouteConfig::new(cli.distance_weight, cli.transfer_penalty)?;
    let network = load_dir(&cli.data_dir)?;

    match cli.command {
        Command::Route { from, to, no_color } => route(&network, config, &from, &to, !no_color),
        Command::Stations { query, limit } => {
            list_stations(&network, query.as_deref().unwrap_or(""), limit);
            Ok(())
        }
        Command::Serve { addr } => serve(network, config, addr).await,
    }
}

fn route(network: &Network, config: RouteConfig, from: &str, to: &str, colour: bool) -> Result<(), CliError> {
    let index = StationIndex::new(network);
    let source = index.resolve(from)?;
    let target = index.resolve(to)?;

    if source == target {
        println!("You are already at {}.", network.station_name(source));
        return Ok(());
    }

    let plan = Planner::new(network, config).plan(source, target)?;
    let renderer = Renderer::new(network, colour);

    println!(
        "{} to {}",
        network.station_name(source),
        network.station_name(target)
    );
    print!("{}", renderer.itinerary(&plan.itinerary));
    println!(
        "{} stops, {} {}",
        plan.itinerary.total_stops(),
        plan.itinerary.change_count(),
        if plan.itinerary.change_count() == 1 { "change" } else { "changes" }
    );
    Ok(())
}

fn list_stations(network: &Network, query: &str, limit: usize) {
    let index = StationIndex::new(network);
    for m in index.search(query, limit) {
        let lines: Vec<String> = network
            .station(m.id)
            .map(|s| s.lines.iter().map(|&l| network.line_name(l)).collect())
            .unwrap_or_default();
        println!("{:>4}  {}  ({})", m.id.0, m.name, lines.join(", "));
    }
}

async fn serve(network: Network, config: RouteConfig, addr: SocketAddr) -> Result<(), CliError> {
    let state = AppState::new(network, config, &CacheConfig::default());
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "tube planner listening");
    info!("GET /health, /api/stations/search?q=&limit=, /api/route?from=&to=");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("shutting down");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_route() {
        let cli = Cli::try_parse_from(["tube-planner", "route", "Baker Street", "Bank", "--no-color"]).unwrap();
        match cli.command {
            Command::Route { from, to, no_color } => {
                assert_eq!(from, "Baker Street");
                assert_eq!(to, "Bank");
                assert!(no_color);
            }
            other => panic!("unexpected command: {other:?}"),
        }
        assert_eq!(cli.transfer_penalty, RouteConfig::DEFAULT_TRANSFER_PENALTY);
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "tube-planner",
            "stations",
            "bank",
            "--limit",
            "3",
            "--data-dir",
            "/tmp/tube",
            "--transfer-penalty",
            "12.5",
        ])
        .unwrap();
        assert_eq!(cli.data_dir, PathBuf::from("/tmp/tube"));
        assert_eq!(cli.transfer_penalty, 12.5);
        assert!(matches!(cli.command, Command::Stations { limit: 3, .. }));
    }

    #[test]
    fn serve_default_addr() {
        let cli = Cli::try_parse_from(["tube-planner", "serve"]).unwrap();
        match cli.command {
            Command::Serve { addr } => assert_eq!(addr, "127.0.0.1:3000".parse().unwrap()),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn route_needs_two_stations() {
        assert!(Cli::try_parse_from(["tube-planner", "route", "Bank"]).is_err());
    }
}
