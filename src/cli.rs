//! Command-line interface for tictactoe_minimax.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tictactoe_minimax::{Board, Mark, Mode};

/// Tic-tac-toe against an unbeatable computer, or hot-seat with a friend
#[derive(Parser, Debug)]
#[command(name = "tictactoe_minimax")]
#[command(about = "Tic-tac-toe with a minimax opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal
    Play {
        /// Starting mode: "single" (vs computer) or "two" (hot-seat)
        #[arg(short, long)]
        mode: Option<Mode>,

        /// Pause before the computer answers, in milliseconds
        #[arg(long)]
        delay_ms: Option<u64>,

        /// Path to settings file
        #[arg(short, long, default_value = "tictactoe.toml")]
        config: PathBuf,
    },

    /// Print the engine's move for a board layout, e.g. "XX_/OO_/___"
    Solve {
        /// Nine cells: X, O, and . _ - for empty; / | and spaces are ignored
        board: Board,

        /// Mark to move (defaults to whoever's turn it is by mark count)
        #[arg(short, long)]
        mark: Option<Mark>,
    },

    /// Play the engine against itself from an empty board
    Selfplay,
}
