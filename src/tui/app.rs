//! Application state and logic.

use crossterm::event::KeyCode;
use tictactoe_minimax::{Board, GameOutcome, Mark, Mode, Phase, Position, Renderer};
use tracing::{debug, warn};

use super::input::move_cursor;

/// Front-end state: a mirror of what the core has reported, plus the cursor.
#[derive(Debug)]
pub struct App {
    board: Board,
    player1: u32,
    player2: u32,
    computer: u32,
    mode: Mode,
    /// Most recent result and the mode it was played in.
    last_result: Option<(GameOutcome, Mode)>,
    cursor: Position,
}

impl App {
    /// Creates a new application for a session starting in `mode`.
    pub fn new(mode: Mode) -> Self {
        Self {
            board: Board::new(),
            player1: 0,
            player2: 0,
            computer: 0,
            mode,
            last_result: None,
            cursor: Position::Center,
        }
    }

    /// Board as last reported by the core.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Cell under the cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Score counters as last reported by the core.
    pub fn scores(&self) -> (u32, u32, u32) {
        (self.player1, self.player2, self.computer)
    }

    /// Moves the cursor with an arrow key.
    pub fn move_cursor(&mut self, key: KeyCode) {
        self.cursor = move_cursor(self.cursor, key);
    }

    /// One-line status for the current phase.
    pub fn status_line(&self, phase: Phase, to_move: Mark) -> String {
        let prefix = match self.last_result {
            Some((GameOutcome::WinFor(Mark::X), _)) => "Player 1 wins! ".to_string(),
            Some((GameOutcome::WinFor(Mark::O), played_in)) => {
                format!("{} wins! ", played_in.o_player_label())
            }
            Some((GameOutcome::Draw, _)) => "Draw! ".to_string(),
            Some((GameOutcome::Ongoing, _)) | None => String::new(),
        };
        let turn = match (phase, to_move) {
            (Phase::ComputerThinking, _) => "Computer is thinking...".to_string(),
            (_, Mark::X) => "Player 1 (X) to move".to_string(),
            (_, Mark::O) => format!("{} (O) to move", self.mode.o_player_label()),
        };
        format!("{}{}", prefix, turn)
    }
}

impl Renderer for App {
    fn on_board_changed(&mut self, index: usize, mark: Mark) {
        if let Err(error) = self.board.place(index, mark) {
            warn!(%error, "Board mirror out of sync");
        }
        self.last_result = None;
    }

    fn on_round_ended(&mut self, outcome: GameOutcome) {
        debug!(%outcome, mode = %self.mode, "Round ended");
        self.last_result = Some((outcome, self.mode));
    }

    fn on_scores_changed(&mut self, player1: u32, player2: u32, computer: u32) {
        self.player1 = player1;
        self.player2 = player2;
        self.computer = computer;
    }

    fn on_board_cleared(&mut self) {
        self.board.clear();
    }

    fn on_mode_changed(&mut self, mode: Mode) {
        self.mode = mode;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_minimax::TurnCoordinator;

    #[test]
    fn test_mirror_follows_coordinator() {
        let mut coordinator = TurnCoordinator::new(Mode::TwoPlayer, App::new(Mode::TwoPlayer));
        for index in [0, 3, 1, 4] {
            coordinator.on_cell_selected(index);
        }
        assert_eq!(coordinator.renderer().board(), coordinator.board());

        coordinator.on_cell_selected(2);
        let app = coordinator.renderer();
        assert_eq!(app.board(), &Board::new());
        assert_eq!(app.scores(), (1, 0, 0));
        assert_eq!(
            app.status_line(Phase::AwaitingInput, Mark::X),
            "Player 1 wins! Player 1 (X) to move"
        );
    }

    #[test]
    fn test_computer_win_keeps_its_name_after_mode_toggle() {
        let mut coordinator =
            TurnCoordinator::new(Mode::SinglePlayer, App::new(Mode::SinglePlayer));
        for index in [0, 1, 5] {
            coordinator.on_cell_selected(index);
            if let Some(ticket) = coordinator.pending_computer_turn() {
                coordinator.play_computer_turn(ticket);
            }
        }
        assert_eq!(coordinator.renderer().scores(), (0, 0, 1));

        coordinator.on_mode_changed(Mode::TwoPlayer);
        let app = coordinator.renderer();
        assert_eq!(
            app.status_line(coordinator.phase(), coordinator.to_move()),
            "Computer wins! Player 1 (X) to move"
        );
    }

    #[test]
    fn test_o_to_move_follows_new_mode() {
        let mut coordinator = TurnCoordinator::new(Mode::SinglePlayer, App::new(Mode::SinglePlayer));
        coordinator.on_mode_changed(Mode::TwoPlayer);
        coordinator.on_cell_selected(4);
        assert_eq!(
            coordinator
                .renderer()
                .status_line(coordinator.phase(), coordinator.to_move()),
            "Player 2 (O) to move"
        );
    }

    #[test]
    fn test_status_while_computer_thinks() {
        let app = App::new(Mode::SinglePlayer);
        assert_eq!(
            app.status_line(Phase::ComputerThinking, Mark::O),
            "Computer is thinking..."
        );
    }
}
