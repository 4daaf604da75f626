//! Wire types for the game engine's JSON API.
//!
//! Every response is wrapped in an [`Envelope`]:
//!
//! ```json
//! {"status": "success", "data": {...}}
//! {"status": "error", "message": "Not your turn"}
//! ```

use serde::{Deserialize, Serialize};

use crate::board::{Cell, PlayerIndex};
use crate::error::ClientError;

/// Server-assigned identifier scoping one game.
pub type SessionId = String;

/// `status` value of a successful response.
pub const STATUS_SUCCESS: &str = "success";

/// `winner` value meaning nobody has won yet.
pub const NO_WINNER: i32 = -1;

/// `progress` value meaning the piece is still in its base.
pub const IN_BASE: i32 = -1;

/// Response wrapper shared by every call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    /// `"success"` or `"error"`.
    pub status: String,
    /// Payload, present on success for calls that return one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Human-readable failure reason.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> Envelope<T> {
    /// Successful envelope carrying `data`.
    pub fn success(data: T) -> Self {
        Self {
            status: STATUS_SUCCESS.to_string(),
            data: Some(data),
            message: None,
        }
    }

    /// Failed envelope carrying `message`.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: "error".to_string(),
            data: None,
            message: Some(message.into()),
        }
    }

    /// Whether the engine reported success.
    pub fn is_success(&self) -> bool {
        self.status == STATUS_SUCCESS
    }

    /// The engine's failure message, or a placeholder when it sent none.
    pub fn failure_message(&self) -> String {
        self.message
            .clone()
            .unwrap_or_else(|| format!("status '{}'", self.status))
    }

    /// Converts a failure envelope into a server error.
    #[track_caller]
    pub fn into_result(self) -> Result<Option<T>, ClientError> {
        if self.is_success() {
            Ok(self.data)
        } else {
            Err(ClientError::server(self.failure_message()))
        }
    }
}

/// Payload of the create call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateData {
    /// New session identifier.
    #[serde(rename = "gameId")]
    pub game_id: SessionId,
}

/// Payload of a successful roll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollData {
    /// Die value, 1–6.
    pub roll: u8,
}

/// Payload of a successful move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MoveData {
    /// Always true when present.
    #[serde(default)]
    pub moved: bool,
}

/// Body of the roll call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RollRequest {
    /// Seat asking to roll.
    pub player_id: PlayerIndex,
}

/// Body of the move call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveRequest {
    /// Seat moving.
    pub player_id: PlayerIndex,
    /// Piece index within that seat.
    pub piece_id: usize,
}

/// Turn sub-state reported by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "i64", into = "i64")]
pub enum Phase {
    /// Fewer than two seats filled.
    WaitingForPlayers,
    /// The active seat must roll.
    AwaitingRoll,
    /// The active seat must pick a piece to move.
    AwaitingMove,
    /// Someone has won.
    GameOver,
    /// A code this client does not know.
    Unknown(i64),
}

impl Phase {
    /// Whether the roll control is enabled in this phase.
    pub fn allows_roll(self) -> bool {
        self == Self::AwaitingRoll
    }

    /// Whether the active seat's pieces are interactive in this phase.
    pub fn allows_move(self) -> bool {
        self == Self::AwaitingMove
    }

    /// Status-line text.
    pub fn label(self) -> String {
        match self {
            Self::WaitingForPlayers => "Waiting for players".to_string(),
            Self::AwaitingRoll => "Roll the dice".to_string(),
            Self::AwaitingMove => "Pick a piece to move".to_string(),
            Self::GameOver => "Game over".to_string(),
            Self::Unknown(code) => format!("Unknown phase {code}"),
        }
    }
}

impl From<i64> for Phase {
    fn from(code: i64) -> Self {
        match code {
            0 => Self::WaitingForPlayers,
            1 => Self::AwaitingRoll,
            2 => Self::AwaitingMove,
            3 => Self::GameOver,
            other => Self::Unknown(other),
        }
    }
}

impl From<Phase> for i64 {
    fn from(phase: Phase) -> Self {
        match phase {
            Phase::WaitingForPlayers => 0,
            Phase::AwaitingRoll => 1,
            Phase::AwaitingMove => 2,
            Phase::GameOver => 3,
            Phase::Unknown(code) => code,
        }
    }
}

/// One piece as reported by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PieceState {
    /// Resolved row; ignored while in base.
    pub row: i32,
    /// Resolved column; ignored while in base.
    pub col: i32,
    /// Steps travelled, or [`IN_BASE`].
    pub progress: i32,
    /// Reached the center.
    #[serde(default)]
    pub home: bool,
}

impl PieceState {
    /// A piece waiting in base.
    pub fn in_base() -> Self {
        Self {
            row: 0,
            col: 0,
            progress: IN_BASE,
            home: false,
        }
    }

    /// A piece on the board at `(row, col)`.
    pub fn at(row: i32, col: i32, progress: i32) -> Self {
        Self {
            row,
            col,
            progress,
            home: false,
        }
    }

    /// Whether the piece is still in its base.
    pub fn is_in_base(&self) -> bool {
        self.progress == IN_BASE
    }

    /// Grid cell for an on-board piece, if the coordinates are on the grid.
    pub fn cell(&self) -> Option<Cell> {
        Cell::from_signed(self.row, self.col)
    }
}

/// One seat as reported by the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerState {
    /// Seat index as the engine numbers it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
    /// Display name.
    pub name: String,
    /// Engine-side color; the client colors by position instead.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Pieces in order.
    pub pieces: Vec<PieceState>,
}

impl PlayerState {
    /// A seat with the given name and pieces.
    pub fn new(name: impl Into<String>, pieces: Vec<PieceState>) -> Self {
        Self {
            id: None,
            name: name.into(),
            color: None,
            pieces,
        }
    }
}

/// Authoritative game state at one point in time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateSnapshot {
    /// Turn sub-state.
    pub state: Phase,
    /// Seat whose turn it is.
    pub current_turn: PlayerIndex,
    /// Most recent die value, 0 before the first roll.
    pub last_roll: u8,
    /// Seats in order.
    pub players: Vec<PlayerState>,
    /// Winning seat, or [`NO_WINNER`].
    pub winner: i32,
}

impl StateSnapshot {
    /// Index of the winning seat, if any.
    pub fn winner_index(&self) -> Option<PlayerIndex> {
        usize::try_from(self.winner).ok()
    }

    /// Name of the winning seat, if any and if that seat exists.
    pub fn winner_name(&self) -> Option<&str> {
        self.winner_index()
            .and_then(|i| self.players.get(i))
            .map(|p| p.name.as_str())
    }
}
