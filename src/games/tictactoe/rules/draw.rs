//! Draw detection logic for tic-tac-toe.

use super::super::Board;
use super::win::winner;

/// Checks for a draw: a full board with no complete line.
pub fn is_draw(board: &Board) -> bool {
    board.is_full() && winner(board).is_none()
}
