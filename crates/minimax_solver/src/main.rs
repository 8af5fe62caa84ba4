//! Minimax Solver - perfect-play tic-tac-toe from the command line.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use minimax_solver::{Cli, SolverConfig, run};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = SolverConfig::load(&cli.config)?.with_format(cli.format);

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();

    info!(command = ?cli.command, "Starting minimax solver");
    debug!(?config, "Configuration");

    let output = run(&cli, &config)?;
    println!("{}", output);

    Ok(())
}
