//! Client error types.

use derive_more::{Display, Error};
use tracing::instrument;

/// What went wrong while talking to the game engine.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ClientErrorKind {
    /// The request never produced a usable response (connection, HTTP, or
    /// an undecodable body).
    #[display("transport failure: {_0}")]
    Transport(String),
    /// The engine answered with a non-success status and a message.
    #[display("engine rejected request: {_0}")]
    Server(String),
    /// An operation needed a session but none has been created yet.
    #[display("no active session")]
    NoSession,
}

/// Client error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Client error: {} at {}:{}", kind, file, line)]
pub struct ClientError {
    /// Error category.
    pub kind: ClientErrorKind,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ClientError {
    /// Creates a new client error with caller location tracking.
    #[track_caller]
    #[instrument(skip(kind))]
    pub fn new(kind: ClientErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }

    /// Transport-level failure.
    #[track_caller]
    pub fn transport(message: impl Into<String>) -> Self {
        Self::new(ClientErrorKind::Transport(message.into()))
    }

    /// Engine-reported failure.
    #[track_caller]
    pub fn server(message: impl Into<String>) -> Self {
        Self::new(ClientErrorKind::Server(message.into()))
    }

    /// No session has been created.
    #[track_caller]
    pub fn no_session() -> Self {
        Self::new(ClientErrorKind::NoSession)
    }

    /// The human-readable message shown in the log panel.
    pub fn message(&self) -> String {
        match &self.kind {
            ClientErrorKind::Transport(msg) | ClientErrorKind::Server(msg) => msg.clone(),
            ClientErrorKind::NoSession => "No active session".to_string(),
        }
    }
}

impl From<reqwest::Error> for ClientError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        Self::transport(format!("HTTP request failed: {}", err))
    }
}
