mod aggregate;
mod budget;
mod classify;
mod config;
mod db;
mod errors;
mod export;
mod models;
mod narrative;
mod run;
mod status;
mod ui;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::run::args::Cli;

fn main() {
    init_logging();
    if let Err(e) = try_main() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn try_main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::resolve(&cli.global)?;
    let db = db::Database::open(&config.db_path)?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run::dispatch(cli.command, &config, &db, &mut out)
}

/// Logs go to stderr so command output stays clean. `RUST_LOG` overrides the default level.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
