//! Tic-tac-toe with an exhaustive minimax opponent.
//!
//! # Architecture
//!
//! - **Board**: 9-cell grid with checked placement
//! - **Rules**: pure win/draw evaluation over the eight lines
//! - **Search**: full-depth minimax with deterministic tie-breaking
//! - **Coordinator**: turn state machine, scoring and resets, driven by
//!   UI events and reporting through a [`Renderer`]
//! - **Config**: TOML session settings
//!
//! # Example
//!
//! ```
//! use tictactoe_minimax::{Board, Mark, best_move};
//!
//! let mut board: Board = "XX_/OO_/___".parse()?;
//! let evaluation = best_move(&mut board, Mark::O);
//! assert_eq!(evaluation.score, 10);
//! # Ok::<(), tictactoe_minimax::ParseBoardError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
pub mod games;

// Crate-level exports - Configuration
pub use config::{ConfigError, Settings};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Board, CELLS, COMPUTER, ComputerTurn, Evaluation, GameOutcome, InvalidMove, Mark, Mode,
    ParseBoardError, Phase, Position, Renderer, ScoreBoard, SearchStats, Square, TurnCoordinator,
    best_move, best_move_with_stats, evaluate,
};
