//! Session score counters.

use super::mode::Mode;
use super::types::Mark;
use serde::{Deserialize, Serialize};

/// Wins per participant for the current session.
///
/// Survives board resets and mode changes; nothing is persisted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBoard {
    player1: u32,
    player2: u32,
    computer: u32,
}

impl ScoreBoard {
    /// Creates a score board with every counter at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wins for X.
    pub fn player1(&self) -> u32 {
        self.player1
    }

    /// Wins for O while a second human played it.
    pub fn player2(&self) -> u32 {
        self.player2
    }

    /// Wins for O while the computer played it.
    pub fn computer(&self) -> u32 {
        self.computer
    }

    /// Credits one win to whoever played `winner` under `mode`.
    pub fn record_win(&mut self, winner: Mark, mode: Mode) {
        match (winner, mode) {
            (Mark::X, _) => self.player1 += 1,
            (Mark::O, Mode::TwoPlayer) => self.player2 += 1,
            (Mark::O, Mode::SinglePlayer) => self.computer += 1,
        }
    }
}

impl std::fmt::Display for ScoreBoard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Player 1: {} | Player 2: {} | Computer: {}",
            self.player1, self.player2, self.computer
        )
    }
}
