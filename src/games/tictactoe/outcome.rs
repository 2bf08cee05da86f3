//! Outcome of a board position.

use super::types::Mark;
use serde::{Deserialize, Serialize};

/// Result of evaluating a board.
///
/// Always derived from the board, never stored alongside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    /// No line is complete and at least one cell is empty.
    Ongoing,
    /// The mark holds a complete line.
    WinFor(Mark),
    /// Every cell is filled and no line is complete.
    Draw,
}

impl GameOutcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            GameOutcome::WinFor(mark) => Some(*mark),
            GameOutcome::Ongoing | GameOutcome::Draw => None,
        }
    }

    /// Returns true once the round cannot continue.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameOutcome::Ongoing)
    }
}

impl std::fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameOutcome::Ongoing => write!(f, "In progress"),
            GameOutcome::WinFor(mark) => write!(f, "{} wins", mark),
            GameOutcome::Draw => write!(f, "Draw"),
        }
    }
}
