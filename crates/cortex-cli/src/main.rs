//! Cortex CLI - organize projects and artifacts and discover connections.

use anyhow::Context;
use clap::Parser;
use cortex_cli::{commands, Cli, Command};
use cortex_engine::EngineConfig;
use cortex_store::SqliteStore;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read config file '{}'", path))?;
            EngineConfig::from_toml(&raw)?
        }
        None => EngineConfig::default(),
    };
    config.validate()?;

    let mut store = SqliteStore::new(&cli.db)
        .with_context(|| format!("failed to open database '{}'", cli.db))?;

    match cli.command {
        Command::Project { command } => commands::project::execute(command, &mut store),
        Command::Artifact { command } => commands::artifact::execute(command, &mut store),
        Command::Tag { command } => commands::tag::execute(command, &mut store),
        Command::Connect(args) => commands::connect::execute(args, &mut store, &config),
        Command::Graph(args) => commands::graph::execute(args, &store),
    }
}
