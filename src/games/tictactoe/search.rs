//! Exhaustive minimax search for the computer's move.
//!
//! The search walks every continuation of the board it is given. Leaves
//! score -10 (X has a line), +10 (O has a line) or 0 (full board), and
//! scores propagate unchanged, so a slow win is worth as much as a fast
//! one. Among equally scored moves the lowest index wins.

use super::rules::has_won;
use super::types::{Board, InvalidMove, Mark};
use derive_more::Display;
use std::ops::{Deref, DerefMut};

/// Score of a board won by the maximizing mark.
pub const WIN_SCORE: i32 = 10;

/// Mark that seeks +10 (the computer).
pub const MAXIMIZER: Mark = Mark::O;

/// Mark that seeks -10 (the human).
pub const MINIMIZER: Mark = Mark::X;

/// A chosen move and the score it leads to under optimal play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_new::new)]
pub struct Evaluation {
    /// Cell to play. `None` when the board was already terminal.
    pub index: Option<usize>,
    /// Minimax score from O's perspective.
    pub score: i32,
}

impl Evaluation {
    /// Evaluation of a board with no move to make.
    pub fn terminal(score: i32) -> Self {
        Self::new(None, score)
    }
}

/// Counters collected during one search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display)]
#[display("{} nodes visited", nodes)]
pub struct SearchStats {
    /// Boards examined, including the root.
    pub nodes: u64,
}

/// A mark placed for the duration of one branch.
///
/// Dropping the guard empties the cell again, so the board is restored
/// on every path out of the branch.
struct Tentative<'a> {
    board: &'a mut Board,
    index: usize,
}

impl<'a> Tentative<'a> {
    fn place(board: &'a mut Board, index: usize, mark: Mark) -> Result<Self, InvalidMove> {
        board.place(index, mark)?;
        Ok(Self { board, index })
    }
}

impl Deref for Tentative<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        &*self.board
    }
}

impl DerefMut for Tentative<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        &mut *self.board
    }
}

impl Drop for Tentative<'_> {
    fn drop(&mut self) {
        self.board.vacate(self.index);
    }
}

/// Returns the optimal move for `mark` and its score.
///
/// The board is borrowed mutably while branches are explored and is left
/// exactly as it was passed in.
pub fn best_move(board: &mut Board, mark: Mark) -> Evaluation {
    best_move_with_stats(board, mark).0
}

/// Like [`best_move`], also reporting how much of the tree was visited.
pub fn best_move_with_stats(board: &mut Board, mark: Mark) -> (Evaluation, SearchStats) {
    let mut stats = SearchStats::default();
    let evaluation = minimax(board, mark, &mut stats);
    (evaluation, stats)
}

fn minimax(board: &mut Board, mark: Mark, stats: &mut SearchStats) -> Evaluation {
    stats.nodes += 1;

    if has_won(board, MINIMIZER) {
        return Evaluation::terminal(-WIN_SCORE);
    }
    if has_won(board, MAXIMIZER) {
        return Evaluation::terminal(WIN_SCORE);
    }
    let empty = board.empty_cells();
    if empty.is_empty() {
        return Evaluation::terminal(0);
    }

    let mut candidates = Vec::with_capacity(empty.len());
    for index in empty {
        let Ok(mut branch) = Tentative::place(board, index, mark) else {
            continue;
        };
        let score = minimax(&mut branch, mark.opponent(), stats).score;
        candidates.push(Evaluation::new(Some(index), score));
    }

    candidates
        .into_iter()
        .reduce(|best, candidate| {
            if improves(mark, candidate.score, best.score) {
                candidate
            } else {
                best
            }
        })
        .unwrap_or(Evaluation::terminal(0))
}

/// Strict comparison; ties keep the earlier candidate.
fn improves(mark: Mark, candidate: i32, best: i32) -> bool {
    if mark == MAXIMIZER {
        candidate > best
    } else {
        candidate < best
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guard_restores_cell_on_drop() {
        let mut board: Board = "X__/_O_/___".parse().unwrap();
        let before = board.clone();
        {
            let branch = Tentative::place(&mut board, 8, Mark::X).unwrap();
            assert_eq!(branch.mark_at(8), Some(Mark::X));
        }
        assert_eq!(board, before);
    }

    #[test]
    fn test_guard_refuses_occupied_cell() {
        let mut board: Board = "X__/___/___".parse().unwrap();
        assert!(Tentative::place(&mut board, 0, Mark::O).is_err());
        assert_eq!(board.mark_at(0), Some(Mark::X));
    }

    #[test]
    fn test_full_board_scores_draw_without_move() {
        let mut board: Board = "XOX/OXX/OXO".parse().unwrap();
        assert_eq!(best_move(&mut board, Mark::O), Evaluation::terminal(0));
    }

    #[test]
    fn test_won_board_short_circuits() {
        let mut board: Board = "XXX/OO_/___".parse().unwrap();
        let (evaluation, stats) = best_move_with_stats(&mut board, Mark::O);
        assert_eq!(evaluation, Evaluation::terminal(-WIN_SCORE));
        assert_eq!(stats.nodes, 1);
    }

    #[test]
    fn test_equal_scores_do_not_improve() {
        assert!(!improves(Mark::O, 0, 0));
        assert!(!improves(Mark::X, 0, 0));
        assert!(improves(Mark::O, 10, 0));
        assert!(improves(Mark::X, -10, 0));
    }
}
