//! Session lifecycle, engine requests, and reconciliation.

use std::time::Duration;

use tokio::time::sleep;
use tracing::{debug, info, instrument, warn};

use crate::board::PlayerIndex;
use crate::error::ClientError;
use crate::protocol::{SessionId, StateSnapshot};
use crate::reconcile;
use crate::transport::GameTransport;
use crate::view::GameView;

/// Default pause between sending a roll and re-enabling controls.
pub const DEFAULT_ROLL_DELAY: Duration = Duration::from_millis(600);

/// Drives one game session against a remote engine.
///
/// The engine is the only authority on rules: the client renders what the
/// latest snapshot says and forwards user actions without judging them.
///
/// Operations take `&mut self`, so requests from one client never overlap.
/// Every snapshot request still draws a ticket before it is sent, and
/// [`GameClient::apply_snapshot`] rejects any ticket not newer than the last
/// applied one.
pub struct GameClient<T, V> {
    transport: T,
    view: V,
    session: Option<SessionId>,
    snapshot: Option<StateSnapshot>,
    current_player: PlayerIndex,
    next_ticket: u64,
    applied_ticket: u64,
    roll_delay: Duration,
}

impl<T, V> GameClient<T, V>
where
    T: GameTransport,
    V: GameView,
{
    /// Creates a client with no session.
    pub fn new(transport: T, view: V) -> Self {
        Self {
            transport,
            view,
            session: None,
            snapshot: None,
            current_player: 0,
            next_ticket: 1,
            applied_ticket: 0,
            roll_delay: DEFAULT_ROLL_DELAY,
        }
    }

    /// Sets the pause after a roll request.
    pub fn with_roll_delay(mut self, delay: Duration) -> Self {
        self.roll_delay = delay;
        self
    }

    /// Current session, once created.
    pub fn session(&self) -> Option<&str> {
        self.session.as_deref()
    }

    /// Last applied snapshot.
    pub fn snapshot(&self) -> Option<&StateSnapshot> {
        self.snapshot.as_ref()
    }

    /// Seat whose turn the last applied snapshot reported.
    pub fn current_player(&self) -> PlayerIndex {
        self.current_player
    }

    /// The display surface.
    pub fn view(&self) -> &V {
        &self.view
    }

    /// The display surface, mutably.
    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    /// The transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Starts a new game and draws its first snapshot.
    ///
    /// One attempt only; failures are logged and returned.
    #[instrument(skip(self))]
    pub async fn create_session(&mut self) -> Result<SessionId, ClientError> {
        info!("Creating game session");

        let envelope = match self.transport.create_game().await {
            Ok(envelope) => envelope,
            Err(e) => {
                warn!(error = %e, "Session creation failed");
                self.report(&format!("Could not reach engine: {}", e.message()));
                return Err(e);
            }
        };

        let data = match envelope.into_result() {
            Ok(Some(data)) => data,
            Ok(None) => {
                let e = ClientError::transport("create response carried no game id");
                self.report(&e.message());
                return Err(e);
            }
            Err(e) => {
                warn!(error = %e, "Engine refused to create a session");
                self.report(&format!("Session creation failed: {}", e.message()));
                return Err(e);
            }
        };

        let id = data.game_id;
        info!(session_id = %id, "Session created");
        self.session = Some(id.clone());
        self.report(&format!("Engine ready. Session: {}", id));

        if let Err(e) = self.refresh_state().await {
            warn!(error = %e, "First refresh failed");
        }
        Ok(id)
    }

    /// Fetches the latest snapshot and reconciles the view with it.
    ///
    /// Returns whether a snapshot was applied. Without a session this does
    /// nothing. A failure status from the engine leaves the view as it was.
    #[instrument(skip(self), fields(session_id = ?self.session))]
    pub async fn refresh_state(&mut self) -> Result<bool, ClientError> {
        let Some(session) = self.session.clone() else {
            debug!("No session yet, skipping refresh");
            return Ok(false);
        };

        let ticket = self.issue_ticket();
        let envelope = self
            .transport
            .get_state(&session)
            .await
            .inspect_err(|e| warn!(error = %e, ticket, "State fetch failed"))?;

        if !envelope.is_success() {
            warn!(message = %envelope.failure_message(), "Engine reported a state failure");
            return Ok(false);
        }
        let Some(snapshot) = envelope.data else {
            warn!("State response carried no snapshot");
            return Ok(false);
        };

        Ok(self.apply_snapshot(ticket, snapshot))
    }

    /// Reserves the ticket for the next snapshot request.
    pub fn issue_ticket(&mut self) -> u64 {
        let ticket = self.next_ticket;
        self.next_ticket += 1;
        ticket
    }

    /// Applies `snapshot` if `ticket` is newer than the last applied one.
    #[instrument(skip(self, snapshot))]
    pub fn apply_snapshot(&mut self, ticket: u64, snapshot: StateSnapshot) -> bool {
        if ticket <= self.applied_ticket {
            debug!(
                ticket,
                applied = self.applied_ticket,
                "Discarding out-of-order snapshot"
            );
            return false;
        }

        self.applied_ticket = ticket;
        self.current_player = snapshot.current_turn;
        reconcile::reconcile(&snapshot, &mut self.view);
        self.view.flush();
        self.snapshot = Some(snapshot);
        true
    }

    /// Asks the engine to roll for `player`.
    ///
    /// The roll control is disabled before the request goes out. Whatever
    /// the outcome, the rolling animation runs for the configured delay
    /// before controls are restored.
    #[instrument(skip(self))]
    pub async fn roll_dice(&mut self, player: PlayerIndex) -> Result<u8, ClientError> {
        let Some(session) = self.session.clone() else {
            self.report("Cannot roll: no active session");
            return Err(ClientError::no_session());
        };

        self.view.set_roll_enabled(false);
        self.view.set_rolling(true);
        self.view.flush();

        let outcome = self.transport.roll(&session, player).await;
        sleep(self.roll_delay).await;
        self.view.set_rolling(false);

        let result = outcome.and_then(|envelope| {
            envelope.into_result()?.ok_or_else(|| {
                ClientError::transport("roll response carried no die value")
            })
        });

        match result {
            Ok(data) => {
                info!(player, roll = data.roll, "Rolled");
                self.report(&format!("Player {} rolled a {}", player, data.roll));
                let refreshed = self.refresh_state().await.unwrap_or_else(|e| {
                    warn!(error = %e, "Refresh after roll failed");
                    false
                });
                if !refreshed {
                    self.restore_roll_control();
                }
                Ok(data.roll)
            }
            Err(e) => {
                warn!(error = %e, "Roll failed");
                self.report(&format!("Roll failed: {}", e.message()));
                self.view.set_roll_enabled(true);
                self.view.flush();
                Err(e)
            }
        }
    }

    /// Asks the engine to move `piece` of the current seat.
    ///
    /// No legality check happens here; the engine rejects illegal moves.
    #[instrument(skip(self), fields(player = self.current_player))]
    pub async fn move_piece(&mut self, piece: usize) -> Result<(), ClientError> {
        let Some(session) = self.session.clone() else {
            self.report("Cannot move: no active session");
            return Err(ClientError::no_session());
        };
        let player = self.current_player;

        let result = self
            .transport
            .move_piece(&session, player, piece)
            .await
            .and_then(|envelope| envelope.into_result().map(|_| ()));

        match result {
            Ok(()) => {
                info!(player, piece, "Moved");
                if let Err(e) = self.refresh_state().await {
                    warn!(error = %e, "Refresh after move failed");
                }
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, piece, "Move rejected");
                self.report(&format!("Invalid move: {}", e.message()));
                Err(e)
            }
        }
    }

    /// Restarts the game and redraws from scratch.
    ///
    /// This is the only way the win modal closes, and only when the engine
    /// accepts the reset.
    #[instrument(skip(self))]
    pub async fn reset_game(&mut self) -> Result<(), ClientError> {
        let Some(session) = self.session.clone() else {
            self.report("Cannot reset: no active session");
            return Err(ClientError::no_session());
        };

        let result = self
            .transport
            .reset(&session)
            .await
            .and_then(|envelope| envelope.into_result().map(|_| ()));

        if let Err(e) = &result {
            warn!(error = %e, "Reset failed");
            self.report(&format!("Reset failed: {}", e.message()));
        } else {
            info!("Game reset");
            self.view.hide_winner();
            self.report("Game reset");
        }

        if let Err(e) = self.refresh_state().await {
            warn!(error = %e, "Refresh after reset failed");
            self.view.flush();
        }
        result
    }

    /// Puts the roll control back the way the last applied snapshot had it.
    fn restore_roll_control(&mut self) {
        let enabled = self
            .snapshot
            .as_ref()
            .is_none_or(|s| s.state.allows_roll());
        self.view.set_roll_enabled(enabled);
        self.view.flush();
    }

    fn report(&mut self, message: &str) {
        self.view.log(message);
        self.view.flush();
    }
}
