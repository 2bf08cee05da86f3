//! Tests for outcome evaluation.

use tictactoe_minimax::{Board, GameOutcome, Mark, evaluate};

#[test]
fn test_full_diagonal_for_x_is_a_win() {
    let mut board = Board::new();
    for index in [0, 4, 8] {
        board.place(index, Mark::X).unwrap();
    }
    assert_eq!(evaluate(&board), GameOutcome::WinFor(Mark::X));
}

#[test]
fn test_o_win_detected() {
    let board: Board = "XX_/OOO/X__".parse().unwrap();
    assert_eq!(evaluate(&board), GameOutcome::WinFor(Mark::O));
}

#[test]
fn test_full_board_without_line_is_draw() {
    let board: Board = "XXO/OOX/XOX".parse().unwrap();
    assert_eq!(evaluate(&board), GameOutcome::Draw);
}

#[test]
fn test_partial_board_is_ongoing() {
    let board: Board = "XX_/OO_/___".parse().unwrap();
    assert_eq!(evaluate(&board), GameOutcome::Ongoing);
    assert!(!evaluate(&board).is_terminal());
}

#[test]
fn test_evaluate_is_idempotent_and_pure() {
    for layout in ["_________", "XXX/OO_/___", "XXO/OOX/XOX", "X_O/_X_/O__"] {
        let board: Board = layout.parse().unwrap();
        let before = board.clone();
        let first = evaluate(&board);
        let second = evaluate(&board);
        assert_eq!(first, second, "layout {}", layout);
        assert_eq!(board, before, "layout {}", layout);
    }
}

#[test]
fn test_outcome_helpers() {
    assert_eq!(GameOutcome::WinFor(Mark::O).winner(), Some(Mark::O));
    assert_eq!(GameOutcome::Draw.winner(), None);
    assert!(GameOutcome::Draw.is_terminal());
    assert_eq!(GameOutcome::WinFor(Mark::X).to_string(), "X wins");
}
