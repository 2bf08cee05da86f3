//! Stateless UI rendering for tic-tac-toe.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use strum::IntoEnumIterator;
use tictactoe_minimax::{Board, Mark, Mode, Position, Square, TurnCoordinator};

use super::app::App;

const CELL_WIDTH: u16 = 9;
const CELL_HEIGHT: u16 = 3;

/// Renders the whole screen.
pub fn draw(frame: &mut Frame, coordinator: &TurnCoordinator<App>) {
    let app = coordinator.renderer();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(12),   // Board
            Constraint::Length(3), // Scores
            Constraint::Length(3), // Status
            Constraint::Length(1), // Help
        ])
        .split(frame.area());

    let title = Paragraph::new(format!(
        "Tic Tac Toe - {} - Round {}",
        coordinator.mode().label(),
        coordinator.round()
    ))
    .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
    .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    draw_board(frame, chunks[1], app.board(), app.cursor());
    draw_scores(frame, chunks[2], app.scores(), coordinator.mode());

    let status = Paragraph::new(app.status_line(coordinator.phase(), coordinator.to_move()))
    .style(Style::default().fg(Color::Yellow))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[3]);

    let help = Paragraph::new("arrows/enter or 1-9: play   m: mode   n: new round   q: quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[4]);
}

fn draw_board(frame: &mut Frame, area: Rect, board: &Board, cursor: Position) {
    let board_area = center_rect(area, CELL_WIDTH * 3 + 2, CELL_HEIGHT * 3 + 2);
    let block = Block::default().borders(Borders::ALL);
    let inner = block.inner(board_area);
    frame.render_widget(block, board_area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(CELL_HEIGHT); 3])
        .split(inner);

    for pos in Position::iter() {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(CELL_WIDTH); 3])
            .split(rows[pos.row()]);
        draw_cell(frame, cols[pos.col()], board, cursor, pos);
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, board: &Board, cursor: Position, pos: Position) {
    let (symbol, base_style) = match board.get(pos.to_index()) {
        Some(Square::Occupied(Mark::X)) => (
            "X".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Some(Square::Occupied(Mark::O)) => (
            "O".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        Some(Square::Empty) | None => (
            (pos.to_index() + 1).to_string(),
            Style::default().fg(Color::DarkGray),
        ),
    };

    let style = if pos == cursor {
        base_style.bg(Color::White).fg(Color::Black)
    } else {
        base_style
    };

    let paragraph = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(format!(" {} ", symbol), style)),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn draw_scores(frame: &mut Frame, area: Rect, scores: (u32, u32, u32), mode: Mode) {
    let (player1, player2, computer) = scores;
    let opponent = match mode {
        Mode::TwoPlayer => format!("Player 2 (O): {}", player2),
        Mode::SinglePlayer => format!("Computer (O): {}", computer),
    };
    let scores = Paragraph::new(format!("Player 1 (X): {}    {}", player1, opponent))
        .alignment(Alignment::Center)
        .block(Block::default().title("Scores").borders(Borders::ALL));
    frame.render_widget(scores, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
