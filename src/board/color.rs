//! Seat colors.

use strum::{Display, EnumIter};

use super::PlayerIndex;

/// Display color of a seat. Seats are colored by position, not by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum PlayerColor {
    /// Seat 0.
    Green,
    /// Seat 1.
    Red,
    /// Seat 2.
    Blue,
    /// Seat 3.
    Yellow,
}

impl PlayerColor {
    /// Color of the seat at `index`.
    pub fn from_index(index: PlayerIndex) -> Option<Self> {
        match index {
            0 => Some(Self::Green),
            1 => Some(Self::Red),
            2 => Some(Self::Blue),
            3 => Some(Self::Yellow),
            _ => None,
        }
    }

    /// RGB components of the palette entry.
    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            Self::Green => (0x10, 0xb9, 0x81),
            Self::Red => (0xef, 0x44, 0x44),
            Self::Blue => (0x3b, 0x82, 0xf6),
            Self::Yellow => (0xf5, 0x9e, 0x0b),
        }
    }

    /// Palette entry as a `#rrggbb` string.
    pub fn hex(self) -> String {
        let (r, g, b) = self.rgb();
        format!("#{r:02x}{g:02x}{b:02x}")
    }
}
