//! Interactive, line-oriented play.
//!
//! Reads one command per line and prints the board after each. Input and
//! output are generic so the loop can be driven from tests.

use crate::config::DriverConfig;
use anyhow::{Context, Result};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::io::{BufRead, Write};
use std::str::FromStr;
use strictly_2048::{Direction, DirectionParseError, MoveError, Phase, Session, legal_moves};
use tracing::{debug, info, instrument, warn};

const HELP: &str = "Commands: left/right/up/down (or h/l/k/j, a/d/w/s), \
                    u = undo, r = restart, ? = help, q = quit";

/// One line of player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// Slide the tiles.
    Move(Direction),
    /// Restore the board before the last move.
    Undo,
    /// Start a new game.
    Reset,
    /// Print the command list.
    Help,
    /// Leave the loop.
    Quit,
}

impl FromStr for Input {
    type Err = DirectionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "u" | "undo" => Ok(Input::Undo),
            "r" | "reset" | "restart" => Ok(Input::Reset),
            "?" | "help" => Ok(Input::Help),
            "q" | "quit" | "exit" => Ok(Input::Quit),
            other => other.parse().map(Input::Move),
        }
    }
}

/// How an interactive game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaySummary {
    /// Moves that changed the board.
    pub moves: usize,
    /// Largest tile on the final board.
    pub max_tile: u32,
    /// Phase when the loop ended.
    pub phase: Phase,
    /// Whether the winning tile was reached during play.
    pub won: bool,
}

fn write_board<R: Rng, W: Write>(session: &Session<R>, out: &mut W) -> Result<()> {
    writeln!(out, "{}", session.board())?;
    let hints = legal_moves(*session.board())
        .iter()
        .map(|d| d.to_string().to_lowercase())
        .collect::<Vec<_>>();
    if session.phase() == Phase::Playing && !hints.is_empty() {
        writeln!(out, "moves: {}", hints.join(", "))?;
    }
    Ok(())
}

/// Runs the interactive loop until `quit`, end of input, or (with
/// `stop_on_win`) the first win.
#[instrument(skip_all)]
pub fn play<R, I, W>(
    session: &mut Session<R>,
    config: &DriverConfig,
    input: I,
    out: &mut W,
) -> Result<PlaySummary>
where
    R: Rng,
    I: BufRead,
    W: Write,
{
    let mut moves = 0;
    let mut won = false;

    writeln!(out, "{}", HELP)?;
    write_board(session, out)?;

    for line in input.lines() {
        let line = line.context("Failed to read input")?;
        if line.trim().is_empty() {
            continue;
        }

        let command = match line.parse::<Input>() {
            Ok(command) => command,
            Err(e) => {
                debug!(error = %e, "Unrecognized input");
                writeln!(out, "{}", e)?;
                continue;
            }
        };

        match command {
            Input::Move(direction) => match session.apply_move(direction) {
                Ok(report) => {
                    if report.changed {
                        moves += 1;
                    } else {
                        writeln!(out, "Nothing moved.")?;
                    }
                    write_board(session, out)?;
                    won |= report.won;
                    if report.first_win {
                        writeln!(out, "You reached 2048!")?;
                        if *config.stop_on_win() {
                            info!("Stopping after win");
                            break;
                        }
                        writeln!(out, "Keep going for a bigger tile.")?;
                    }
                    if report.game_over {
                        writeln!(
                            out,
                            "Game over: no moves left. Type 'u' to undo or 'r' to restart."
                        )?;
                    }
                }
                Err(MoveError::GameOver) => {
                    writeln!(out, "The game is over. Type 'u' to undo or 'r' to restart.")?;
                }
                Err(e) => {
                    warn!(error = %e, "Move failed");
                    return Err(e).context("Move failed");
                }
            },
            Input::Undo => {
                let report = session.undo();
                if report.ok {
                    writeln!(out, "Undid last move.")?;
                    write_board(session, out)?;
                } else {
                    writeln!(out, "Nothing to undo.")?;
                }
            }
            Input::Reset => {
                session.reset();
                writeln!(out, "New game.")?;
                write_board(session, out)?;
            }
            Input::Help => writeln!(out, "{}", HELP)?,
            Input::Quit => break,
        }
    }

    let summary = PlaySummary {
        moves,
        max_tile: session.board().max_tile(),
        phase: session.phase(),
        won,
    };
    info!(?summary, "Play finished");
    Ok(summary)
}
