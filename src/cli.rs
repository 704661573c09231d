//! Command-line interface for strictly_2048.

use clap::{Parser, Subcommand};

/// Strictly 2048 - rules engine driver
#[derive(Parser, Debug)]
#[command(name = "strictly_2048")]
#[command(about = "Play or replay 2048 from the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (defaults to ./strictly_2048.toml if present)
    #[arg(short, long, global = true)]
    pub config: Option<std::path::PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively, one command per line
    Play {
        /// RNG seed for a reproducible game
        #[arg(long)]
        seed: Option<u64>,

        /// Stop after the first win instead of playing on
        #[arg(long)]
        stop_on_win: bool,
    },

    /// Apply a move script to a seeded game and print the result
    Replay {
        /// RNG seed; replays are only reproducible with the same seed
        #[arg(long)]
        seed: Option<u64>,

        /// Moves separated by spaces or commas (e.g. "l,u,r,d" or "left up")
        #[arg(short, long)]
        moves: String,

        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },
}
