//! Core domain types for tic-tac-toe.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// Number of cells on the board.
pub const CELLS: usize = 9;

/// A player's mark.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    strum::EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum Mark {
    /// Mark X (always moves first).
    X,
    /// Mark O (second human or the computer).
    O,
}

impl Mark {
    /// Returns the opposing mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// A cell on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty cell.
    Empty,
    /// Cell holding a mark.
    Occupied(Mark),
}

/// Rejected placement on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum InvalidMove {
    /// Index outside 0-8.
    #[display("Position {index} is out of bounds (must be 0-8)")]
    OutOfRange {
        /// The offending index.
        index: usize,
    },
    /// Target cell already holds a mark.
    #[display("Square {index} is already occupied")]
    Occupied {
        /// The offending index.
        index: usize,
    },
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order (0-8).
    squares: [Square; CELLS],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; CELLS],
        }
    }

    /// Gets the cell at the given index (0-8).
    pub fn get(&self, index: usize) -> Option<Square> {
        self.squares.get(index).copied()
    }

    /// Returns the mark at the given index, if any.
    pub fn mark_at(&self, index: usize) -> Option<Mark> {
        match self.get(index)? {
            Square::Occupied(mark) => Some(mark),
            Square::Empty => None,
        }
    }

    /// Checks if a cell is empty. Out-of-range indices are never empty.
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Square::Empty))
    }

    /// Places `mark` at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidMove::OutOfRange`] for an index past 8 and
    /// [`InvalidMove::Occupied`] when the cell already holds a mark.
    pub fn place(&mut self, index: usize, mark: Mark) -> Result<(), InvalidMove> {
        let square = self
            .squares
            .get_mut(index)
            .ok_or(InvalidMove::OutOfRange { index })?;
        if *square != Square::Empty {
            return Err(InvalidMove::Occupied { index });
        }
        *square = Square::Occupied(mark);
        Ok(())
    }

    /// Empties a cell. Only the search undoes placements.
    pub(crate) fn vacate(&mut self, index: usize) {
        if let Some(square) = self.squares.get_mut(index) {
            *square = Square::Empty;
        }
    }

    /// Checks if every cell holds a mark.
    pub fn is_full(&self) -> bool {
        self.squares.iter().all(|s| *s != Square::Empty)
    }

    /// Empties every cell.
    pub fn clear(&mut self) {
        self.squares = [Square::Empty; CELLS];
    }

    /// Indices of the empty cells in ascending order.
    pub fn empty_cells(&self) -> Vec<usize> {
        self.squares
            .iter()
            .enumerate()
            .filter(|(_, s)| **s == Square::Empty)
            .map(|(index, _)| index)
            .collect()
    }

    /// Number of cells holding `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        self.squares
            .iter()
            .filter(|s| **s == Square::Occupied(mark))
            .count()
    }

    /// Formats the board as a human-readable string.
    ///
    /// Empty cells show their 1-based key so the grid doubles as a keypad hint.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            let cells: Vec<String> = (0..3)
                .map(|col| {
                    let index = row * 3 + col;
                    match self.squares[index] {
                        Square::Empty => (index + 1).to_string(),
                        Square::Occupied(mark) => mark.to_string(),
                    }
                })
                .collect();
            result.push_str(&cells.join("|"));
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Board layout that could not be parsed.
#[derive(Debug, Clone, Display, Error)]
#[display("Board parse error: {} at {}:{}", message, file, line)]
pub struct ParseBoardError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ParseBoardError {
    /// Creates a new parse error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl FromStr for Board {
    type Err = ParseBoardError;

    /// Parses nine cells such as `"XX_/OO_/___"`.
    ///
    /// `X` and `O` (any case) are marks; `.`, `_` and `-` are empty.
    /// Whitespace, `/` and `|` separate rows and are skipped.
    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut board = Board::new();
        let mut index = 0;
        for c in s.chars() {
            let square = match c {
                'x' | 'X' => Square::Occupied(Mark::X),
                'o' | 'O' => Square::Occupied(Mark::O),
                '.' | '_' | '-' => Square::Empty,
                '/' | '|' => continue,
                c if c.is_whitespace() => continue,
                other => {
                    return Err(ParseBoardError::new(format!(
                        "Unexpected character {:?} in board layout",
                        other
                    )));
                }
            };
            if index == CELLS {
                return Err(ParseBoardError::new("Board layout has more than 9 cells"));
            }
            board.squares[index] = square;
            index += 1;
        }
        if index != CELLS {
            return Err(ParseBoardError::new(format!(
                "Board layout has {} cells, expected 9",
                index
            )));
        }
        Ok(board)
    }
}
