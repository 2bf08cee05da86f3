//! Terminal front end.

mod app;
mod input;
mod terminal;
mod ui;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use tictactoe_minimax::{ComputerTurn, Settings, TurnCoordinator};
use tokio::time::{Duration, Instant, sleep};
use tracing::{debug, error, info, instrument};

use app::App;
use input::Action;
use terminal::TerminalGuard;

type Term = Terminal<CrosstermBackend<Stdout>>;

const INPUT_POLL: Duration = Duration::from_millis(50);

/// Runs the terminal game until the player quits.
#[instrument(skip_all)]
pub async fn run(settings: &Settings) -> Result<()> {
    info!("Starting terminal UI");

    let guard = TerminalGuard::enter(io::stdout())?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    let mode = *settings.mode();
    let mut coordinator = TurnCoordinator::new(mode, App::new(mode));
    let delay = Duration::from_millis(*settings.computer_delay_ms());
    let res = event_loop(&mut terminal, &mut coordinator, delay).await;

    drop(terminal);
    drop(guard);

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!(scores = %coordinator.scores(), "Session ended");
    res
}

/// Draws, fires due computer turns, and feeds key presses to the coordinator.
async fn event_loop(
    terminal: &mut Term,
    coordinator: &mut TurnCoordinator<App>,
    delay: Duration,
) -> Result<()> {
    let mut scheduled: Option<(ComputerTurn, Instant)> = None;

    loop {
        terminal.draw(|frame| ui::draw(frame, &*coordinator))?;

        // The pause is cosmetic; the ticket decides whether the move still applies.
        match coordinator.pending_computer_turn() {
            Some(ticket) => {
                let due = match scheduled {
                    Some((pending, due)) if pending == ticket => due,
                    _ => {
                        let due = Instant::now() + delay;
                        debug!(?ticket, "Scheduling computer turn");
                        scheduled = Some((ticket, due));
                        due
                    }
                };
                if Instant::now() >= due {
                    scheduled = None;
                    coordinator.play_computer_turn(ticket);
                    continue;
                }
            }
            None => scheduled = None,
        }

        if !event::poll(Duration::ZERO)? {
            sleep(INPUT_POLL).await;
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        let cursor = coordinator.renderer().cursor();
        match input::action_for(key.code, cursor) {
            Some(Action::Quit) => {
                info!("User quit");
                return Ok(());
            }
            Some(Action::Select(index)) => {
                coordinator.on_cell_selected(index);
            }
            Some(Action::Cursor(code)) => coordinator.renderer_mut().move_cursor(code),
            Some(Action::ToggleMode) => {
                let mode = coordinator.mode().toggle();
                coordinator.on_mode_changed(mode);
            }
            Some(Action::NewRound) => coordinator.on_new_round_requested(),
            None => {}
        }
    }
}
