//! Terminal-backed implementation of [`GameView`].

use ratatui::{Terminal, backend::Backend};
use tracing::warn;

use super::ui;
use crate::board::{BoardLayout, PlayerIndex};
use crate::protocol::Phase;
use crate::reconcile::RenderedPiece;
use crate::view::{GameView, ScreenState};

/// Keeps a [`ScreenState`] and redraws it on every flush.
pub struct TerminalView<B: Backend> {
    terminal: Terminal<B>,
    state: ScreenState,
    layout: BoardLayout,
}

impl<B: Backend> TerminalView<B> {
    /// Wraps `terminal`; the board layout is built here, once.
    pub fn new(terminal: Terminal<B>) -> Self {
        Self {
            terminal,
            state: ScreenState::new(),
            layout: BoardLayout::new(),
        }
    }

    /// Current screen model.
    pub fn state(&self) -> &ScreenState {
        &self.state
    }

    /// Underlying terminal.
    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    /// Underlying terminal, mutably.
    pub fn terminal_mut(&mut self) -> &mut Terminal<B> {
        &mut self.terminal
    }
}

impl<B: Backend> GameView for TerminalView<B> {
    fn render_turn(&mut self, player: PlayerIndex, name: &str) {
        self.state.render_turn(player, name);
    }

    fn clear_turn(&mut self) {
        self.state.clear_turn();
    }

    fn render_dice(&mut self, value: Option<u8>) {
        self.state.render_dice(value);
    }

    fn set_rolling(&mut self, rolling: bool) {
        self.state.set_rolling(rolling);
    }

    fn set_roll_enabled(&mut self, enabled: bool) {
        self.state.set_roll_enabled(enabled);
    }

    fn render_phase(&mut self, phase: Phase) {
        self.state.render_phase(phase);
    }

    fn replace_pieces(&mut self, pieces: Vec<RenderedPiece>) {
        self.state.replace_pieces(pieces);
    }

    fn show_winner(&mut self, name: &str) {
        self.state.show_winner(name);
    }

    fn hide_winner(&mut self) {
        self.state.hide_winner();
    }

    fn log(&mut self, message: &str) {
        self.state.log(message);
    }

    fn flush(&mut self) {
        let state = &self.state;
        let layout = &self.layout;
        if let Err(e) = self.terminal.draw(|f| ui::draw(f, state, layout)) {
            warn!(error = %e, "Failed to draw screen");
        }
    }
}
