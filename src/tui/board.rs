//! Ludo board rendering.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::Widget,
};

use crate::board::geometry::GRID_SIZE;
use crate::board::{BoardLayout, CellKind, PlayerColor, PlayerIndex};
use crate::reconcile::{Placement, RenderedPiece};

/// Terminal columns per grid cell.
pub const CELL_WIDTH: u16 = 3;

/// Size of the drawn grid, without borders.
pub const BOARD_WIDTH: u16 = GRID_SIZE as u16 * CELL_WIDTH;
/// Height of the drawn grid, without borders.
pub const BOARD_HEIGHT: u16 = GRID_SIZE as u16;

/// Terminal color of a seat.
pub fn seat_color(player: PlayerIndex) -> Color {
    PlayerColor::from_index(player)
        .map(|c| {
            let (r, g, b) = c.rgb();
            Color::Rgb(r, g, b)
        })
        .unwrap_or(Color::Gray)
}

fn dim(color: Color) -> Color {
    match color {
        Color::Rgb(r, g, b) => Color::Rgb(r / 3, g / 3, b / 3),
        other => other,
    }
}

/// Draws the static board and the pieces on top of it.
pub struct BoardWidget<'a> {
    layout: &'a BoardLayout,
    pieces: &'a [RenderedPiece],
}

impl<'a> BoardWidget<'a> {
    /// Widget for `layout` with `pieces` on it.
    pub fn new(layout: &'a BoardLayout, pieces: &'a [RenderedPiece]) -> Self {
        Self { layout, pieces }
    }
}

impl Widget for BoardWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for lc in self.layout.cells() {
            let x = area.x + u16::from(lc.cell.col) * CELL_WIDTH;
            let y = area.y + u16::from(lc.cell.row);
            if x + CELL_WIDTH > area.right() || y >= area.bottom() {
                continue;
            }
            let (text, style) = cell_look(lc.kind, self.layout.is_base_slot(lc.cell));
            buf.set_string(x, y, text, style);
        }

        for piece in self.pieces {
            let Some(cell) = piece.placement.cell() else {
                continue;
            };
            let offset = match piece.placement {
                Placement::Board { stack, .. } => (stack as u16).min(CELL_WIDTH - 1),
                Placement::Base { .. } => 1,
            };
            let x = area.x + u16::from(cell.col) * CELL_WIDTH + offset;
            let y = area.y + u16::from(cell.row);
            if x >= area.right() || y >= area.bottom() {
                continue;
            }

            let (glyph, modifier) = if piece.interactive {
                let digit = char::from_digit(piece.piece as u32 + 1, 10).unwrap_or('?');
                (digit.to_string(), Modifier::BOLD | Modifier::REVERSED)
            } else if piece.finished {
                ("◆".to_string(), Modifier::BOLD)
            } else {
                ("●".to_string(), Modifier::BOLD)
            };
            if let Some(c) = buf.cell_mut((x, y)) {
                c.set_symbol(&glyph);
                c.set_style(
                    Style::default()
                        .fg(seat_color(piece.player))
                        .add_modifier(modifier),
                );
            }
        }
    }
}

fn cell_look(kind: CellKind, slot: bool) -> (&'static str, Style) {
    match kind {
        CellKind::Base(owner) if slot => ("( )", Style::default().bg(dim(seat_color(owner)))),
        CellKind::Base(owner) => ("   ", Style::default().bg(dim(seat_color(owner)))),
        CellKind::HomeStretch(owner) => ("   ", Style::default().bg(seat_color(owner))),
        CellKind::Start(owner) => (
            " ► ",
            Style::default().bg(seat_color(owner)).fg(Color::Black),
        ),
        CellKind::Safe => (" * ", Style::default().fg(Color::DarkGray).bg(Color::White)),
        CellKind::Center => (" ▲ ", Style::default().fg(Color::White).bg(Color::DarkGray)),
        CellKind::Track => (" · ", Style::default().fg(Color::DarkGray).bg(Color::White)),
        CellKind::OffBoard => ("   ", Style::default()),
    }
}
