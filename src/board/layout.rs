//! One-time construction of the static board.

use derive_getters::Getters;
use tracing::{debug, instrument};

use super::PlayerIndex;
use super::geometry::{self, BASE_SLOTS, Cell, CellKind, GRID_SIZE, PLAYER_COUNT};

/// A grid cell together with its classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutCell {
    /// Grid position.
    pub cell: Cell,
    /// Derived role.
    pub kind: CellKind,
}

/// The four slot cells of one player's base.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters)]
pub struct BaseArea {
    owner: PlayerIndex,
    slots: [Cell; BASE_SLOTS],
}

/// Static board: every grid cell, classified, plus the base slots.
///
/// Built once at startup; live state never modifies it.
#[derive(Debug, Clone, Getters)]
pub struct BoardLayout {
    cells: Vec<LayoutCell>,
    bases: Vec<BaseArea>,
}

impl BoardLayout {
    /// Classifies the whole grid.
    #[instrument]
    pub fn new() -> Self {
        let cells: Vec<LayoutCell> = (0..GRID_SIZE)
            .flat_map(|row| (0..GRID_SIZE).map(move |col| Cell::new(row, col)))
            .map(|cell| LayoutCell {
                cell,
                kind: cell.kind(),
            })
            .collect();

        let bases = (0..PLAYER_COUNT)
            .map(|owner| BaseArea {
                owner,
                slots: std::array::from_fn(|slot| {
                    geometry::base_slot(owner, slot).unwrap_or(Cell::new(0, 0))
                }),
            })
            .collect();

        debug!(cells = cells.len(), "Board layout built");
        Self { cells, bases }
    }

    /// Classification of the cell at `cell`.
    pub fn kind_at(&self, cell: Cell) -> CellKind {
        self.cells
            .get(usize::from(cell.row) * usize::from(GRID_SIZE) + usize::from(cell.col))
            .filter(|c| c.cell == cell)
            .map(|c| c.kind)
            .unwrap_or(CellKind::OffBoard)
    }

    /// Whether `cell` is one of the base slots.
    pub fn is_base_slot(&self, cell: Cell) -> bool {
        self.bases.iter().any(|b| b.slots.contains(&cell))
    }
}

impl Default for BoardLayout {
    fn default() -> Self {
        Self::new()
    }
}
