//! Typed HTTP client for the game API.

use crate::api::{ErrorBody, MoveRequest};
use crate::registry::GameId;
use derive_more::{Display, From};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use tictactoe_engine::GameState;
use tracing::{debug, instrument};

/// Error returned by [`GameClient`] calls.
#[derive(Debug, Display, From)]
pub enum ClientError {
    /// Server answered 400.
    #[display("Invalid move: {_0}")]
    InvalidMove(String),

    /// Server answered 404.
    #[display("Not found: {_0}")]
    NotFound(String),

    /// Server answered with any other failure status.
    #[display("Server returned {status}: {message}")]
    Server {
        /// HTTP status code.
        status: u16,
        /// Error message from the body, or the raw body.
        message: String,
    },

    /// The request never produced a response.
    #[display("Transport error: {_0}")]
    #[from]
    Transport(reqwest::Error),
}

impl std::error::Error for ClientError {}

/// HTTP client for one game server.
#[derive(Debug, Clone)]
pub struct GameClient {
    base_url: String,
    client: reqwest::Client,
}

impl GameClient {
    /// Creates a client for the server at `base_url` (e.g. `http://127.0.0.1:3000`).
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    /// Starts a new game and returns its id.
    #[instrument(skip(self), fields(base_url = %self.base_url))]
    pub async fn new_game(&self) -> Result<GameId, ClientError> {
        let response = self
            .client
            .get(format!("{}/api/game/new", self.base_url))
            .send()
            .await?;
        Self::decode(response).await
    }

    /// Fetches the current state of a game.
    #[instrument(skip(self), fields(base_url = %self.base_url))]
    pub async fn state(&self, id: &GameId) -> Result<GameState, ClientError> {
        let response = self
            .client
            .get(format!("{}/api/game/{}", self.base_url, id))
            .send()
            .await?;
        Self::decode(response).await
    }

    /// Posts a move and returns the updated state.
    #[instrument(skip(self), fields(base_url = %self.base_url))]
    pub async fn make_move(&self, id: &GameId, x: i64, y: i64) -> Result<GameState, ClientError> {
        let response = self
            .client
            .post(format!("{}/api/game/{}/move", self.base_url, id))
            .json(&MoveRequest(x, y))
            .send()
            .await?;
        Self::decode(response).await
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ClientError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response.json().await?);
        }

        let text = response.text().await?;
        let message = serde_json::from_str::<ErrorBody>(&text)
            .map(|body| body.message)
            .unwrap_or(text);
        debug!(%status, %message, "Request failed");

        Err(match status {
            StatusCode::BAD_REQUEST => ClientError::InvalidMove(message),
            StatusCode::NOT_FOUND => ClientError::NotFound(message),
            other => ClientError::Server {
                status: other.as_u16(),
                message,
            },
        })
    }
}
