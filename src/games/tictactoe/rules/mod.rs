//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`]. Nothing here mutates state, so the
//! search can call them at every node.

pub mod draw;
pub mod win;

pub use draw::is_draw;
pub use win::{LINES, has_won, winner};

use super::{Board, GameOutcome};

/// Evaluates a board.
///
/// Each mark is tested on its own, X first, because the search builds
/// boards by assignment rather than strict alternation.
pub fn evaluate(board: &Board) -> GameOutcome {
    if let Some(mark) = winner(board) {
        GameOutcome::WinFor(mark)
    } else if is_draw(board) {
        GameOutcome::Draw
    } else {
        GameOutcome::Ongoing
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Mark;

    #[test]
    fn test_empty_board_is_ongoing() {
        assert_eq!(evaluate(&Board::new()), GameOutcome::Ongoing);
    }

    #[test]
    fn test_win_takes_precedence_over_full_board() {
        let board: Board = "XXX/OOX/OXO".parse().unwrap();
        assert!(board.is_full());
        assert_eq!(evaluate(&board), GameOutcome::WinFor(Mark::X));
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        let board: Board = "XOX/OXX/OXO".parse().unwrap();
        assert!(is_draw(&board));
        assert_eq!(evaluate(&board), GameOutcome::Draw);
    }

    #[test]
    fn test_x_checked_before_o() {
        // Unreachable in play, but the evaluator must not assume alternation.
        let board: Board = "XXX/OOO/___".parse().unwrap();
        assert_eq!(evaluate(&board), GameOutcome::WinFor(Mark::X));
    }
}
