//! tictactoe_minimax - Unified CLI
//!
//! Terminal tic-tac-toe plus non-interactive access to the search engine.

#![warn(missing_docs)]

mod cli;
mod tui;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use std::path::PathBuf;
use tictactoe_minimax::{
    Board, GameOutcome, Mark, Mode, Settings, best_move, best_move_with_stats, evaluate,
};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            mode,
            delay_ms,
            config,
        } => run_play(mode, delay_ms, config).await,
        Command::Solve { board, mark } => {
            initialize_stderr_tracing();
            run_solve(board, mark)
        }
        Command::Selfplay => {
            initialize_stderr_tracing();
            run_selfplay()
        }
    }
}

/// Logs to stderr for the non-interactive commands.
fn initialize_stderr_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .try_init();
}

/// Run the terminal game
async fn run_play(mode: Option<Mode>, delay_ms: Option<u64>, config: PathBuf) -> Result<()> {
    let mut settings = Settings::load_or_default(&config)
        .with_context(|| format!("Failed to load settings from {}", config.display()))?;
    if let Some(mode) = mode {
        settings = settings.with_mode(mode);
    }
    if let Some(delay_ms) = delay_ms {
        settings = settings.with_computer_delay_ms(delay_ms);
    }

    // Log to a file so output never lands on top of the board
    let log_file = std::fs::File::create(settings.log_file())
        .with_context(|| format!("Failed to create log file {}", settings.log_file().display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    info!(?settings, "Starting terminal game");
    tui::run(&settings).await
}

/// Print the engine's choice for one board
#[instrument(skip(board))]
fn run_solve(mut board: Board, mark: Option<Mark>) -> Result<()> {
    println!("{}\n", board.display());

    let outcome = evaluate(&board);
    if outcome.is_terminal() {
        println!("Board is already decided: {}", outcome);
        return Ok(());
    }

    let mark = mark.unwrap_or_else(|| side_to_move(&board));
    let (evaluation, stats) = best_move_with_stats(&mut board, mark);
    match evaluation.index {
        Some(index) => println!(
            "{} plays {} (cell {}), score {:+} ({})",
            mark,
            index,
            index + 1,
            evaluation.score,
            stats
        ),
        None => println!("{} has no move, score {:+}", mark, evaluation.score),
    }
    Ok(())
}

/// X moves whenever the counts are level.
fn side_to_move(board: &Board) -> Mark {
    if board.count(Mark::X) > board.count(Mark::O) {
        Mark::O
    } else {
        Mark::X
    }
}

/// Play the engine against itself
#[instrument]
fn run_selfplay() -> Result<()> {
    let mut board = Board::new();
    let mut mark = Mark::X;

    while evaluate(&board) == GameOutcome::Ongoing {
        let evaluation = best_move(&mut board, mark);
        let index = evaluation
            .index
            .context("Engine returned no move on a live board")?;
        board.place(index, mark)?;
        println!("{} -> {} (score {:+})", mark, index, evaluation.score);
        mark = mark.opponent();
    }

    println!("\n{}\n\n{}", board.display(), evaluate(&board));
    Ok(())
}
