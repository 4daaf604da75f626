//! Derives the rendered piece set from a snapshot.
//!
//! Reconciliation is a full rebuild: the previous pieces are discarded and
//! every piece is placed again from the snapshot alone.

use std::collections::HashMap;

use derive_new::new;
use tracing::{debug, instrument, warn};

use crate::board::PlayerIndex;
use crate::board::geometry::{self, Cell};
use crate::protocol::{Phase, StateSnapshot};
use crate::view::GameView;

/// Where a piece is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Placement {
    /// Inside the owner's base, in the slot matching the piece index.
    Base {
        /// Base owner.
        player: PlayerIndex,
        /// Slot within the base.
        slot: usize,
    },
    /// On a grid cell. `stack` counts the pieces already drawn there.
    Board {
        /// Grid cell.
        cell: Cell,
        /// Position within the pile on that cell.
        stack: usize,
    },
}

impl Placement {
    /// Grid cell the piece occupies, base slots included.
    pub fn cell(&self) -> Option<Cell> {
        match *self {
            Self::Base { player, slot } => geometry::base_slot(player, slot),
            Self::Board { cell, .. } => Some(cell),
        }
    }
}

/// A piece as drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, new)]
pub struct RenderedPiece {
    /// Owning seat.
    pub player: PlayerIndex,
    /// Index within the seat.
    pub piece: usize,
    /// Where it is drawn.
    pub placement: Placement,
    /// Whether selecting it sends a move.
    pub interactive: bool,
    /// Whether it has reached the center.
    pub finished: bool,
}

/// Whose turn the indicator shows.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct TurnIndicator {
    /// Active seat.
    pub player: PlayerIndex,
    /// Its display name.
    pub name: String,
}

/// Everything one reconciliation pass pushes to the view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderPlan {
    /// Reported phase.
    pub phase: Phase,
    /// Active seat, if the snapshot names an existing one.
    pub turn: Option<TurnIndicator>,
    /// Last die value; `None` before the first roll.
    pub dice: Option<u8>,
    /// Roll control state.
    pub roll_enabled: bool,
    /// The complete piece set.
    pub pieces: Vec<RenderedPiece>,
    /// Winner's name when the game is won.
    pub winner: Option<String>,
}

/// Builds the render plan for `snapshot`.
#[instrument(skip(snapshot), fields(phase = ?snapshot.state, current_turn = snapshot.current_turn))]
pub fn plan(snapshot: &StateSnapshot) -> RenderPlan {
    let phase = snapshot.state;
    let active = snapshot.current_turn;
    let mut piles: HashMap<Cell, usize> = HashMap::new();
    let mut pieces = Vec::new();

    for (player, seat) in snapshot.players.iter().enumerate() {
        for (index, piece) in seat.pieces.iter().enumerate() {
            let placement = if piece.is_in_base() {
                if geometry::base_slot(player, index).is_none() {
                    warn!(player, piece = index, "No base slot for piece, not drawn");
                    continue;
                }
                Placement::Base {
                    player,
                    slot: index,
                }
            } else {
                let Some(cell) = piece.cell() else {
                    warn!(
                        player,
                        piece = index,
                        row = piece.row,
                        col = piece.col,
                        "Piece reported off the grid, not drawn"
                    );
                    continue;
                };
                let pile = piles.entry(cell).or_insert(0);
                let stack = *pile;
                *pile += 1;
                Placement::Board { cell, stack }
            };

            let interactive = phase.allows_move() && player == active;
            pieces.push(RenderedPiece::new(
                player,
                index,
                placement,
                interactive,
                piece.home,
            ));
        }
    }

    let winner = match snapshot.winner_index() {
        Some(index) => {
            let name = snapshot.winner_name().map(str::to_string);
            if name.is_none() {
                warn!(winner = index, "Winner index names no seat");
            }
            name
        }
        None => None,
    };

    let turn = snapshot
        .players
        .get(active)
        .map(|p| TurnIndicator::new(active, p.name.clone()));
    if turn.is_none() {
        warn!(current_turn = active, "Current turn names no seat");
    }

    debug!(pieces = pieces.len(), winner = ?winner, "Render plan built");
    RenderPlan {
        phase,
        turn,
        dice: (snapshot.last_roll != 0).then_some(snapshot.last_roll),
        roll_enabled: phase.allows_roll(),
        pieces,
        winner,
    }
}

/// Pushes `plan` into `view`.
///
/// A plan without a winner leaves the win indicator as it was; only a reset
/// hides it.
pub fn apply<V: GameView + ?Sized>(plan: RenderPlan, view: &mut V) {
    match &plan.turn {
        Some(turn) => view.render_turn(turn.player, &turn.name),
        None => view.clear_turn(),
    }
    view.render_dice(plan.dice);
    view.render_phase(plan.phase);
    view.set_roll_enabled(plan.roll_enabled);
    view.replace_pieces(plan.pieces);
    if let Some(name) = &plan.winner {
        view.show_winner(name);
    }
}

/// Plans and applies `snapshot` in one step.
pub fn reconcile<V: GameView + ?Sized>(snapshot: &StateSnapshot, view: &mut V) {
    apply(plan(snapshot), view);
}
