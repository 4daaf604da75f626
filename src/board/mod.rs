//! Static board model: grid geometry, seat colors, and layout.

mod color;
pub mod geometry;
mod layout;

pub use color::PlayerColor;
pub use geometry::{Cell, CellKind};
pub use layout::{BaseArea, BoardLayout, LayoutCell};

/// Positional index of a seat (0–3).
pub type PlayerIndex = usize;
