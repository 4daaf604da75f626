//! Stateless screen rendering.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
};

use super::board::{BOARD_HEIGHT, BOARD_WIDTH, BoardWidget, seat_color};
use crate::board::BoardLayout;
use crate::view::ScreenState;

/// Draws the whole screen from `state`.
pub fn draw(frame: &mut Frame, state: &ScreenState, layout: &BoardLayout) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(BOARD_HEIGHT + 2),
            Constraint::Length(3), // Help
        ])
        .split(frame.area());

    let title = Paragraph::new("Ludo")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, chunks[0]);

    let main = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(BOARD_WIDTH + 2), Constraint::Min(24)])
        .split(chunks[1]);

    let board_block = Block::default().borders(Borders::ALL).title("Board");
    let board_area = board_block.inner(main[0]);
    frame.render_widget(board_block, main[0]);
    frame.render_widget(BoardWidget::new(layout, state.pieces()), board_area);

    draw_side_panel(frame, main[1], state);

    let roll_hint = if *state.roll_enabled() {
        "Space: Roll"
    } else {
        "Space: (roll disabled)"
    };
    let help = Paragraph::new(format!("{} | 1-4: Move piece | N: Reset | Q: Quit", roll_hint))
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, chunks[2]);

    if let Some(winner) = state.winner() {
        draw_win_modal(frame, winner);
    }
}

fn draw_side_panel(frame: &mut Frame, area: Rect, state: &ScreenState) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(6), Constraint::Min(3)])
        .split(area);

    let turn = match state.turn() {
        Some((player, name)) => Line::from(vec![
            Span::styled("● ", Style::default().fg(seat_color(*player))),
            Span::styled(name.clone(), Style::default().add_modifier(Modifier::BOLD)),
        ]),
        None => Line::from("Waiting for engine..."),
    };

    let dice_text = if *state.rolling() {
        "rolling...".to_string()
    } else {
        state
            .dice()
            .map(|d| d.to_string())
            .unwrap_or_else(|| "?".to_string())
    };
    let dice = Line::from(vec![
        Span::raw("Dice: "),
        Span::styled(
            format!("[ {} ]", dice_text),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ),
    ]);

    let phase = Line::from(
        state
            .phase()
            .map(|p| p.label())
            .unwrap_or_else(|| "Connecting".to_string()),
    );

    let info = Paragraph::new(vec![turn, dice, phase])
        .block(Block::default().borders(Borders::ALL).title("Turn"));
    frame.render_widget(info, rows[0]);

    // Newest entries last; show as many as fit.
    let capacity = rows[1].height.saturating_sub(2) as usize;
    let log_lines = state.log_lines();
    let skip = log_lines.len().saturating_sub(capacity);
    let items: Vec<ListItem> = log_lines
        .iter()
        .skip(skip)
        .map(|line| ListItem::new(format!("> {}", line)))
        .collect();
    let log = List::new(items).block(Block::default().borders(Borders::ALL).title("Log"));
    frame.render_widget(log, rows[1]);
}

fn draw_win_modal(frame: &mut Frame, winner: &str) {
    let area = center_rect(frame.area(), 40, 7);
    frame.render_widget(Clear, area);

    let text = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("{} wins!", winner),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("Press N to start a new game"),
    ];
    let modal = Paragraph::new(text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Game Over"));
    frame.render_widget(modal, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}
