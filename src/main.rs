use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use sortviz::util::{self, ArrayKind};
use sortviz::{web, Algorithm, Config};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "sortviz", version, about = "Step-by-step sorting traces for visualisation")]
struct Cli {
    /// Config file (defaults to ~/.sortviz/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(flatten)]
    serve: ServeArgs,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Start the HTTP server (the default)
    Serve,
    /// Print the trace for one array as JSON
    Trace(TraceArgs),
}

#[derive(Debug, Args)]
struct ServeArgs {
    /// Address to bind to
    #[arg(long, global = true, env = "SORTVIZ_HOST")]
    host: Option<String>,

    /// Port to listen on
    #[arg(long, global = true, env = "SORTVIZ_PORT")]
    port: Option<u16>,
}

#[derive(Debug, Args)]
struct TraceArgs {
    /// Algorithm to run (bubble, selection, insertion, merge, quick, heap, radix, bucket)
    #[arg(short, long)]
    algorithm: Algorithm,

    /// Values to sort
    #[arg(allow_negative_numbers = true, conflicts_with = "random")]
    values: Vec<i64>,

    /// Sort this many generated values instead
    #[arg(long)]
    random: Option<usize>,

    /// Shape of the generated input (random, nearly-sorted, reversed)
    #[arg(long, default_value = "random")]
    kind: ArrayKind,

    /// Print only the statistics
    #[arg(long)]
    stats_only: bool,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,
}

fn init_logging(default_level: tracing::Level) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_level.to_string())),
        )
        .with_writer(io::stderr)
        .init();
}

fn load_config(path: Option<&PathBuf>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("Failed to load config from {}", path.display())),
        None => Ok(Config::load()),
    }
}

async fn serve(config: Config, args: ServeArgs) -> Result<()> {
    let mut config = config;
    if let Some(host) = args.host {
        config = config.with_host(host);
    }
    if let Some(port) = args.port {
        config = config.with_port(port);
    }

    let server_config = web::ServerConfig::from(&config);
    web::run_server(web::WebAppState::new(config), server_config).await
}

fn trace(config: &Config, args: TraceArgs) -> Result<()> {
    let values = match args.random {
        Some(size) => util::generate(args.kind, size.min(config.engine.max_array_len), 100),
        None => args.values,
    };

    let outcome = sortviz::sort(&values, args.algorithm)?;

    let mut stdout = io::stdout().lock();
    match (args.stats_only, args.pretty) {
        (true, true) => serde_json::to_writer_pretty(&mut stdout, &outcome.stats)?,
        (true, false) => serde_json::to_writer(&mut stdout, &outcome.stats)?,
        (false, true) => serde_json::to_writer_pretty(&mut stdout, &outcome)?,
        (false, false) => serde_json::to_writer(&mut stdout, &outcome)?,
    }
    writeln!(stdout)?;
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Command::Serve);

    let level = match command {
        Command::Serve => tracing::Level::INFO,
        Command::Trace(_) => tracing::Level::WARN,
    };
    init_logging(level);

    let config = load_config(cli.config.as_ref())?;

    match command {
        Command::Serve => serve(config, cli.serve).await,
        Command::Trace(args) => trace(&config, args),
    }
}
