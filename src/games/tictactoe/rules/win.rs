//! Win detection logic for tic-tac-toe.

use super::super::{Board, Mark};

/// The eight winning lines: rows, columns, diagonals.
pub const LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Checks whether `mark` holds all three cells of any line.
pub fn has_won(board: &Board, mark: Mark) -> bool {
    LINES
        .iter()
        .any(|line| line.iter().all(|&index| board.mark_at(index) == Some(mark)))
}

/// Returns the first mark, X before O, that holds a complete line.
pub fn winner(board: &Board) -> Option<Mark> {
    [Mark::X, Mark::O]
        .into_iter()
        .find(|&mark| has_won(board, mark))
}
