//! Requests to the remote game engine.

use std::time::Duration;

use serde::de::DeserializeOwned;
use tracing::{debug, info, instrument, warn};

use crate::board::PlayerIndex;
use crate::error::ClientError;
use crate::protocol::{
    CreateData, Envelope, MoveData, MoveRequest, RollData, RollRequest, StateSnapshot,
};

/// The five calls the engine exposes.
///
/// Implementations return the engine's envelope untouched; deciding what a
/// failure status means is the client's job.
#[async_trait::async_trait]
pub trait GameTransport: Send + Sync {
    /// Starts a new game.
    async fn create_game(&self) -> Result<Envelope<CreateData>, ClientError>;

    /// Fetches the authoritative snapshot of `session`.
    async fn get_state(&self, session: &str) -> Result<Envelope<StateSnapshot>, ClientError>;

    /// Asks the engine to roll for `player`.
    async fn roll(
        &self,
        session: &str,
        player: PlayerIndex,
    ) -> Result<Envelope<RollData>, ClientError>;

    /// Asks the engine to move `piece` of `player`.
    async fn move_piece(
        &self,
        session: &str,
        player: PlayerIndex,
        piece: usize,
    ) -> Result<Envelope<MoveData>, ClientError>;

    /// Restarts the game in `session`.
    async fn reset(&self, session: &str) -> Result<Envelope<serde_json::Value>, ClientError>;
}

/// reqwest-backed transport speaking the engine's `/api/v1` routes.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    base_url: String,
    client: reqwest::Client,
}

impl HttpTransport {
    /// Creates a transport for the engine at `base_url`.
    #[instrument(skip_all, fields(timeout_ms = timeout.as_millis() as u64))]
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ClientError> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        info!(base_url = %base_url, "HTTP transport ready");
        Ok(Self { base_url, client })
    }

    /// Engine base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn game_url(&self, session: &str, action: &str) -> String {
        format!("{}/api/v1/game/{}/{}", self.base_url, session, action)
    }

    /// Reads an envelope regardless of HTTP status; the engine sends error
    /// envelopes with 404.
    async fn decode<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<Envelope<T>, ClientError> {
        let status = response.status();
        let body = response.text().await?;
        debug!(status = %status, body = %body, "Engine response");

        serde_json::from_str(&body).map_err(|e| {
            warn!(status = %status, error = %e, "Undecodable engine response");
            ClientError::transport(format!("HTTP {}: undecodable response ({})", status, e))
        })
    }
}

#[async_trait::async_trait]
impl GameTransport for HttpTransport {
    #[instrument(skip(self))]
    async fn create_game(&self) -> Result<Envelope<CreateData>, ClientError> {
        let url = format!("{}/api/v1/game/create", self.base_url);
        let response = self.client.post(&url).send().await?;
        Self::decode(response).await
    }

    #[instrument(skip(self))]
    async fn get_state(&self, session: &str) -> Result<Envelope<StateSnapshot>, ClientError> {
        let response = self
            .client
            .get(self.game_url(session, "state"))
            .send()
            .await?;
        Self::decode(response).await
    }

    #[instrument(skip(self))]
    async fn roll(
        &self,
        session: &str,
        player: PlayerIndex,
    ) -> Result<Envelope<RollData>, ClientError> {
        let response = self
            .client
            .post(self.game_url(session, "roll"))
            .json(&RollRequest { player_id: player })
            .send()
            .await?;
        Self::decode(response).await
    }

    #[instrument(skip(self))]
    async fn move_piece(
        &self,
        session: &str,
        player: PlayerIndex,
        piece: usize,
    ) -> Result<Envelope<MoveData>, ClientError> {
        let response = self
            .client
            .post(self.game_url(session, "move"))
            .json(&MoveRequest {
                player_id: player,
                piece_id: piece,
            })
            .send()
            .await?;
        Self::decode(response).await
    }

    #[instrument(skip(self))]
    async fn reset(&self, session: &str) -> Result<Envelope<serde_json::Value>, ClientError> {
        let response = self
            .client
            .post(self.game_url(session, "reset"))
            .send()
            .await?;
        Self::decode(response).await
    }
}
