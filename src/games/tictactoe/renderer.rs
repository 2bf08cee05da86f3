//! Output side of the game core.

use super::mode::Mode;
use super::outcome::GameOutcome;
use super::types::Mark;

/// Receives everything a front end needs to draw the game.
///
/// The core calls these synchronously while it handles an event; a
/// renderer should only record or draw, never call back into the core.
pub trait Renderer {
    /// A mark was placed at `index`.
    fn on_board_changed(&mut self, index: usize, mark: Mark);

    /// A round finished. The board is cleared right after.
    fn on_round_ended(&mut self, outcome: GameOutcome);

    /// Score counters changed.
    fn on_scores_changed(&mut self, player1: u32, player2: u32, computer: u32);

    /// Every cell was emptied for a new round.
    fn on_board_cleared(&mut self) {}

    /// The mode switched. Arrives before the board is cleared.
    fn on_mode_changed(&mut self, _mode: Mode) {}
}
