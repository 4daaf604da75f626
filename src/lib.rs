//! Ludo client - terminal front end for a remote Ludo engine
//!
//! The engine owns every rule: turns, dice, legality, captures, and wins.
//! This crate only mirrors what the engine reports and forwards user actions.
//!
//! # Architecture
//!
//! - **Board**: pure geometry of the 15×15 grid and the static layout
//! - **Protocol / Transport**: JSON envelopes and the HTTP calls that carry them
//! - **Reconcile**: full rebuild of the drawn pieces from one snapshot
//! - **Client**: session lifecycle, actions, and out-of-order protection
//! - **TUI**: ratatui screen implementing the view capability
//!
//! # Example
//!
//! ```no_run
//! use ludo_client::{GameClient, HttpTransport, ScreenState};
//! use std::time::Duration;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let transport = HttpTransport::new("http://localhost:8080", Duration::from_secs(5))?;
//! let mut client = GameClient::new(transport, ScreenState::new());
//! client.create_session().await?;
//! client.roll_dice(client.current_player()).await?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod board;
mod client;
mod config;
mod error;
pub mod protocol;
mod reconcile;
mod transport;
pub mod tui;
mod view;

// Crate-level exports - Client
pub use client::{DEFAULT_ROLL_DELAY, GameClient};

// Crate-level exports - Configuration
pub use config::{ClientConfig, ConfigError, SERVER_URL_ENV};

// Crate-level exports - Errors
pub use error::{ClientError, ClientErrorKind};

// Crate-level exports - Reconciliation
pub use reconcile::{Placement, RenderPlan, RenderedPiece, TurnIndicator, apply, plan, reconcile};

// Crate-level exports - Transport
pub use transport::{GameTransport, HttpTransport};

// Crate-level exports - View
pub use view::{GameView, LOG_CAPACITY, ScreenState};

// Crate-level exports - Board and wire types
pub use board::{BoardLayout, Cell, CellKind, PlayerColor, PlayerIndex};
pub use protocol::{
    CreateData, Envelope, MoveData, Phase, PieceState, PlayerState, RollData, SessionId,
    StateSnapshot,
};
