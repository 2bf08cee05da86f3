//! Turn coordination for a play session.
//!
//! [`TurnCoordinator`] owns all session state (board, active mark, mode,
//! scores) and drives it from UI events. It reports changes through a
//! [`Renderer`] and never touches a UI toolkit directly.
//!
//! The computer's reply is deferred: entering [`Phase::ComputerThinking`]
//! makes a [`ComputerTurn`] ticket available, and the host redeems it
//! with [`TurnCoordinator::play_computer_turn`] after whatever pause it
//! likes. Tickets from an earlier round or ply are ignored.

use super::mode::Mode;
use super::outcome::GameOutcome;
use super::renderer::Renderer;
use super::rules::evaluate;
use super::scores::ScoreBoard;
use super::search::{MAXIMIZER, best_move_with_stats};
use super::types::{Board, CELLS, Mark};
use tracing::{debug, info, instrument, warn};

/// Mark placed by the computer in single-player mode.
pub const COMPUTER: Mark = MAXIMIZER;

/// Where the coordinator is in a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
pub enum Phase {
    /// Waiting for a human to pick a cell.
    AwaitingInput,
    /// The computer owes a move; human input is ignored.
    ComputerThinking,
    /// A round just ended. Only observable from inside renderer callbacks.
    RoundOver,
}

/// Claim on one deferred computer move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ComputerTurn {
    round: u64,
    ply: usize,
}

impl ComputerTurn {
    /// Round the ticket was issued in.
    pub fn round(&self) -> u64 {
        self.round
    }

    /// Marks on the board when the ticket was issued.
    pub fn ply(&self) -> usize {
        self.ply
    }
}

/// Orchestrates turns, scoring and resets for one session.
#[derive(Debug)]
pub struct TurnCoordinator<R> {
    board: Board,
    to_move: Mark,
    mode: Mode,
    phase: Phase,
    scores: ScoreBoard,
    round: u64,
    renderer: R,
}

impl<R: Renderer> TurnCoordinator<R> {
    /// Starts a session in `mode` with an empty board and X to move.
    #[instrument(skip(renderer))]
    pub fn new(mode: Mode, renderer: R) -> Self {
        info!(%mode, "Starting session");
        Self {
            board: Board::new(),
            to_move: Mark::X,
            mode,
            phase: Phase::AwaitingInput,
            scores: ScoreBoard::new(),
            round: 1,
            renderer,
        }
    }

    /// Handles a human selecting `index`.
    ///
    /// Occupied or out-of-range cells, and any selection while the computer
    /// owes a move, are ignored. Returns the phase after handling.
    #[instrument(skip(self), fields(round = self.round, to_move = %self.to_move))]
    pub fn on_cell_selected(&mut self, index: usize) -> Phase {
        if self.phase != Phase::AwaitingInput {
            debug!(phase = %self.phase, "Ignoring selection outside the human's turn");
            return self.phase;
        }

        let mark = self.to_move;
        if let Err(error) = self.board.place(index, mark) {
            debug!(%error, "Ignoring invalid move");
            return self.phase;
        }
        self.renderer.on_board_changed(index, mark);

        match evaluate(&self.board) {
            GameOutcome::Ongoing => {
                self.to_move = mark.opponent();
                if self.mode == Mode::SinglePlayer && mark == Mark::X {
                    self.phase = Phase::ComputerThinking;
                    debug!("Computer to move");
                }
            }
            outcome => self.finish_round(outcome),
        }
        self.phase
    }

    /// Ticket for the computer's pending move, if one is owed.
    pub fn pending_computer_turn(&self) -> Option<ComputerTurn> {
        (self.phase == Phase::ComputerThinking).then(|| ComputerTurn {
            round: self.round,
            ply: self.ply(),
        })
    }

    /// Searches for and plays the computer's move.
    ///
    /// Stale tickets are ignored. Returns the phase after handling.
    #[instrument(skip(self), fields(round = self.round))]
    pub fn play_computer_turn(&mut self, ticket: ComputerTurn) -> Phase {
        if self.pending_computer_turn() != Some(ticket) {
            debug!(?ticket, phase = %self.phase, "Ignoring stale computer turn");
            return self.phase;
        }

        let (evaluation, stats) = best_move_with_stats(&mut self.board, COMPUTER);
        debug!(%stats, score = evaluation.score, index = ?evaluation.index, "Search finished");

        let Some(index) = evaluation.index else {
            warn!("Search found no move on a live board");
            let outcome = evaluate(&self.board);
            self.finish_round(outcome);
            return self.phase;
        };
        if let Err(error) = self.board.place(index, COMPUTER) {
            warn!(%error, "Search chose an unplayable cell");
            self.start_round();
            return self.phase;
        }
        self.renderer.on_board_changed(index, COMPUTER);
        info!(index, "Computer played");

        match evaluate(&self.board) {
            GameOutcome::Ongoing => {
                self.to_move = COMPUTER.opponent();
                self.phase = Phase::AwaitingInput;
            }
            outcome => self.finish_round(outcome),
        }
        self.phase
    }

    /// Switches mode and starts a fresh round. Scores are kept.
    #[instrument(skip(self))]
    pub fn on_mode_changed(&mut self, mode: Mode) {
        info!(from = %self.mode, to = %mode, "Mode changed");
        self.mode = mode;
        self.renderer.on_mode_changed(mode);
        self.start_round();
    }

    /// Abandons the current round and starts a fresh one. Scores are kept.
    #[instrument(skip(self))]
    pub fn on_new_round_requested(&mut self) {
        info!(round = self.round, "New round requested");
        self.start_round();
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the mark whose turn it is.
    pub fn to_move(&self) -> Mark {
        self.to_move
    }

    /// Returns the active mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Returns the current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns the session scores.
    pub fn scores(&self) -> &ScoreBoard {
        &self.scores
    }

    /// Returns the 1-based round number.
    pub fn round(&self) -> u64 {
        self.round
    }

    /// Returns the renderer.
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Returns the renderer mutably, for front-end state such as a cursor.
    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    fn ply(&self) -> usize {
        CELLS - self.board.empty_cells().len()
    }

    fn finish_round(&mut self, outcome: GameOutcome) {
        self.phase = Phase::RoundOver;
        info!(round = self.round, %outcome, "Round over");

        if let Some(winner) = outcome.winner() {
            self.scores.record_win(winner, self.mode);
            self.renderer.on_scores_changed(
                self.scores.player1(),
                self.scores.player2(),
                self.scores.computer(),
            );
        }
        self.renderer.on_round_ended(outcome);
        self.start_round();
    }

    fn start_round(&mut self) {
        self.board.clear();
        self.to_move = Mark::X;
        self.phase = Phase::AwaitingInput;
        self.round += 1;
        self.renderer.on_board_cleared();
        debug!(round = self.round, "Round started");
    }
}
