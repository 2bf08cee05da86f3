//! Tic-tac-toe core: board, rules, search and turn coordination.

mod coordinator;
mod mode;
mod outcome;
mod position;
mod renderer;
pub mod rules;
mod scores;
pub mod search;
mod types;

pub use coordinator::{COMPUTER, ComputerTurn, Phase, TurnCoordinator};
pub use mode::Mode;
pub use outcome::GameOutcome;
pub use position::Position;
pub use renderer::Renderer;
pub use rules::evaluate;
pub use scores::ScoreBoard;
pub use search::{Evaluation, SearchStats, best_move, best_move_with_stats};
pub use types::{Board, CELLS, InvalidMove, Mark, ParseBoardError, Square};
