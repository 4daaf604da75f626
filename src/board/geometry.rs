//! Classification of the fixed 15×15 Ludo grid.
//!
//! Everything here is a pure, total function of `(row, col)`. Coordinates
//! outside the grid are accepted and simply classify as nothing.

use serde::{Deserialize, Serialize};

use super::PlayerIndex;

/// Width and height of the board grid.
pub const GRID_SIZE: u8 = 15;

/// Number of seats around the board.
pub const PLAYER_COUNT: usize = 4;

/// Number of slots in each base.
pub const BASE_SLOTS: usize = 4;

/// Start cell of each player, indexed by player.
pub const START_SPOTS: [Cell; PLAYER_COUNT] = [
    Cell::new(6, 1),
    Cell::new(1, 8),
    Cell::new(8, 13),
    Cell::new(13, 6),
];

/// Cells on which a piece cannot be captured.
pub const SAFE_SPOTS: [Cell; 8] = [
    Cell::new(6, 1),
    Cell::new(8, 3),
    Cell::new(2, 6),
    Cell::new(1, 8),
    Cell::new(6, 12),
    Cell::new(8, 13),
    Cell::new(12, 8),
    Cell::new(13, 6),
];

/// Top-left corner of each player's 6×6 base.
const BASE_ORIGINS: [Cell; PLAYER_COUNT] = [
    Cell::new(0, 0),
    Cell::new(0, 9),
    Cell::new(9, 9),
    Cell::new(9, 0),
];

/// Slot offsets inside a base, relative to its origin.
const SLOT_OFFSETS: [(u8, u8); BASE_SLOTS] = [(1, 1), (1, 4), (4, 1), (4, 4)];

/// A position on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Cell {
    /// Row, 0 at the top.
    pub row: u8,
    /// Column, 0 at the left.
    pub col: u8,
}

impl Cell {
    /// Creates a cell without bounds checking.
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Creates a cell from signed wire coordinates, if they land on the grid.
    pub fn from_signed(row: i32, col: i32) -> Option<Self> {
        let in_range = |v: i32| (0..i32::from(GRID_SIZE)).contains(&v);
        if in_range(row) && in_range(col) {
            Some(Self::new(row as u8, col as u8))
        } else {
            None
        }
    }

    /// Classifies this cell.
    pub fn kind(self) -> CellKind {
        classify(i32::from(self.row), i32::from(self.col))
    }
}

/// Semantic role of a grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellKind {
    /// Ordinary shared track cell.
    Track,
    /// A player's entry cell onto the track.
    Start(PlayerIndex),
    /// Shared track cell where captures do not happen.
    Safe,
    /// A player's final approach into the center.
    HomeStretch(PlayerIndex),
    /// Covered by a player's base.
    Base(PlayerIndex),
    /// Covered by the center home.
    Center,
    /// Outside the 15×15 grid.
    OffBoard,
}

impl CellKind {
    /// Whether pieces can stand on this cell while not in base.
    pub fn is_playable(self) -> bool {
        matches!(
            self,
            Self::Track | Self::Start(_) | Self::Safe | Self::HomeStretch(_)
        )
    }
}

/// True iff the cell lies on one of the four runs leading into the center.
pub fn is_home_stretch(row: i32, col: i32) -> bool {
    let run = |v: i32| (1..=5).contains(&v) || (9..=13).contains(&v);
    (row == 7 && run(col)) || (col == 7 && run(row))
}

/// Which player's final approach a home-stretch cell belongs to.
///
/// Only meaningful when [`is_home_stretch`] holds; other cells on row 7 or
/// column 7 still resolve by quadrant, everything else is `None`.
pub fn stretch_owner(row: i32, col: i32) -> Option<PlayerIndex> {
    if row == 7 && col <= 5 {
        Some(0)
    } else if col == 7 && row <= 5 {
        Some(1)
    } else if row == 7 && col >= 9 {
        Some(2)
    } else if col == 7 && row >= 9 {
        Some(3)
    } else {
        None
    }
}

/// True iff the cell is one of the four start cells.
pub fn is_start_spot(row: i32, col: i32) -> bool {
    start_owner(row, col).is_some()
}

/// Player owning the start cell at `(row, col)`.
pub fn start_owner(row: i32, col: i32) -> Option<PlayerIndex> {
    START_SPOTS
        .iter()
        .position(|s| i32::from(s.row) == row && i32::from(s.col) == col)
}

/// True iff the cell is a capture-free track cell.
pub fn is_safe_spot(row: i32, col: i32) -> bool {
    SAFE_SPOTS
        .iter()
        .any(|s| i32::from(s.row) == row && i32::from(s.col) == col)
}

/// Player whose base covers `(row, col)`.
pub fn base_owner(row: i32, col: i32) -> Option<PlayerIndex> {
    BASE_ORIGINS.iter().position(|origin| {
        let (r0, c0) = (i32::from(origin.row), i32::from(origin.col));
        (r0..r0 + 6).contains(&row) && (c0..c0 + 6).contains(&col)
    })
}

/// True iff the cell is covered by the center home.
pub fn is_center(row: i32, col: i32) -> bool {
    (6..=8).contains(&row) && (6..=8).contains(&col)
}

/// Cell of slot `slot` inside `player`'s base.
pub fn base_slot(player: PlayerIndex, slot: usize) -> Option<Cell> {
    let origin = BASE_ORIGINS.get(player)?;
    let (dr, dc) = SLOT_OFFSETS.get(slot)?;
    Some(Cell::new(origin.row + dr, origin.col + dc))
}

/// Classifies any `(row, col)`, on or off the grid.
pub fn classify(row: i32, col: i32) -> CellKind {
    if Cell::from_signed(row, col).is_none() {
        return CellKind::OffBoard;
    }
    if is_home_stretch(row, col)
        && let Some(owner) = stretch_owner(row, col)
    {
        return CellKind::HomeStretch(owner);
    }
    if let Some(owner) = start_owner(row, col) {
        return CellKind::Start(owner);
    }
    if is_safe_spot(row, col) {
        return CellKind::Safe;
    }
    if let Some(owner) = base_owner(row, col) {
        return CellKind::Base(owner);
    }
    if is_center(row, col) {
        return CellKind::Center;
    }
    CellKind::Track
}
