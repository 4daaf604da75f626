//! The rendering capability the client drives.

use derive_getters::Getters;
use tracing::debug;

use crate::board::PlayerIndex;
use crate::protocol::Phase;
use crate::reconcile::RenderedPiece;

/// Number of log lines kept by [`ScreenState`].
pub const LOG_CAPACITY: usize = 200;

/// Everything the client needs from a display surface.
pub trait GameView {
    /// Shows whose turn it is.
    fn render_turn(&mut self, player: PlayerIndex, name: &str);

    /// Blanks the turn indicator.
    fn clear_turn(&mut self);

    /// Shows the die; `None` before the first roll.
    fn render_dice(&mut self, value: Option<u8>);

    /// Starts or stops the rolling animation.
    fn set_rolling(&mut self, rolling: bool);

    /// Enables or disables the roll control.
    fn set_roll_enabled(&mut self, enabled: bool);

    /// Shows the current phase.
    fn render_phase(&mut self, phase: Phase);

    /// Discards all drawn pieces and draws `pieces` instead.
    fn replace_pieces(&mut self, pieces: Vec<RenderedPiece>);

    /// Opens the win modal naming `name`.
    fn show_winner(&mut self, name: &str);

    /// Closes the win modal.
    fn hide_winner(&mut self);

    /// Appends a line to the log panel.
    fn log(&mut self, message: &str);

    /// Presents pending changes. Surfaces that draw immediately need not
    /// override this.
    fn flush(&mut self) {}
}

/// In-memory screen model.
///
/// The terminal front end draws from it, and tests inspect it directly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters)]
pub struct ScreenState {
    turn: Option<(PlayerIndex, String)>,
    dice: Option<u8>,
    rolling: bool,
    roll_enabled: bool,
    phase: Option<Phase>,
    pieces: Vec<RenderedPiece>,
    winner: Option<String>,
    log_lines: Vec<String>,
}

impl ScreenState {
    /// Empty screen: no pieces, roll disabled, empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `piece` of `player` is drawn as interactive.
    pub fn is_interactive(&self, player: PlayerIndex, piece: usize) -> bool {
        self.pieces
            .iter()
            .any(|p| p.player == player && p.piece == piece && p.interactive)
    }

    /// Pieces currently drawn as interactive.
    pub fn interactive_pieces(&self) -> impl Iterator<Item = &RenderedPiece> {
        self.pieces.iter().filter(|p| p.interactive)
    }
}

impl GameView for ScreenState {
    fn render_turn(&mut self, player: PlayerIndex, name: &str) {
        self.turn = Some((player, name.to_string()));
    }

    fn clear_turn(&mut self) {
        self.turn = None;
    }

    fn render_dice(&mut self, value: Option<u8>) {
        self.dice = value;
    }

    fn set_rolling(&mut self, rolling: bool) {
        self.rolling = rolling;
    }

    fn set_roll_enabled(&mut self, enabled: bool) {
        self.roll_enabled = enabled;
    }

    fn render_phase(&mut self, phase: Phase) {
        self.phase = Some(phase);
    }

    fn replace_pieces(&mut self, pieces: Vec<RenderedPiece>) {
        self.pieces = pieces;
    }

    fn show_winner(&mut self, name: &str) {
        self.winner = Some(name.to_string());
    }

    fn hide_winner(&mut self) {
        self.winner = None;
    }

    fn log(&mut self, message: &str) {
        debug!(message, "Log panel");
        self.log_lines.push(message.to_string());
        if self.log_lines.len() > LOG_CAPACITY {
            let excess = self.log_lines.len() - LOG_CAPACITY;
            self.log_lines.drain(..excess);
        }
    }
}
