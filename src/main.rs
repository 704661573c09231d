//! Strictly 2048 - command-line driver
//!
//! Interactive play and deterministic replay for the 2048 rules engine.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use std::io;
use strictly_2048_cli::{Cli, Command, DriverConfig, Session, parse_moves, play, replay};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = DriverConfig::load(cli.config.as_deref()).context("Failed to load config")?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(io::stderr)
        .init();

    match cli.command {
        Command::Play { seed, stop_on_win } => run_play(config, seed, stop_on_win),
        Command::Replay { seed, moves, json } => run_replay(&config, seed, &moves, json),
    }
}

/// Run an interactive game on stdin/stdout
#[instrument(skip(config))]
fn run_play(config: DriverConfig, seed: Option<u64>, stop_on_win: bool) -> Result<()> {
    let stop_on_win = stop_on_win || *config.stop_on_win();
    let config = config.with_stop_on_win(stop_on_win);

    let mut session = match config.resolve_seed(seed) {
        Some(seed) => {
            info!(seed, "Starting seeded game");
            Session::seeded(seed)
        }
        None => Session::new(),
    };

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let summary = play(&mut session, &config, stdin.lock(), &mut stdout)?;

    println!(
        "Finished after {} moves with max tile {} ({}).",
        summary.moves, summary.max_tile, summary.phase
    );
    Ok(())
}

/// Replay a move script and print the outcome
#[instrument(skip(config, script))]
fn run_replay(config: &DriverConfig, seed: Option<u64>, script: &str, json: bool) -> Result<()> {
    let seed = config
        .resolve_seed(seed)
        .context("Replay needs --seed or `seed` in the config file")?;
    let moves = parse_moves(script).context("Invalid move script")?;
    let summary = replay(seed, &moves)?;

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&summary).context("Failed to serialize summary")?
        );
    } else {
        println!("{}", summary);
    }
    Ok(())
}
