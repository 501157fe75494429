//! JSON HTTP API.
//!
//! | Method | Path                   | Body     | Success            |
//! |--------|------------------------|----------|--------------------|
//! | GET    | `/api/game/new`        |          | game id (string)   |
//! | GET    | `/api/game/{id}`       |          | `GameState`        |
//! | POST   | `/api/game/{id}/move`  | `[x, y]` | updated `GameState`|
//!
//! Invalid moves and malformed bodies answer 400, unknown ids 404.

use crate::registry::{GameId, GameRegistry, RegistryError};
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Request, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tictactoe_engine::GameState;
use tower::ServiceBuilder;
use tracing::{debug, error, info, instrument, warn};

/// Body of a move request: `[x, y]`.
///
/// Signed so that negative coordinates reach the handler and are rejected
/// as invalid moves rather than as unparsable JSON.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRequest(pub i64, pub i64);

/// Body of every error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Machine-readable error code.
    pub error: String,
    /// Human-readable description.
    pub message: String,
}

/// Error returned by handlers, mapped to a status code at the boundary.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ApiError {
    /// The engine rejected the move.
    #[display("Invalid move: {_0}")]
    InvalidMove(String),

    /// The request body could not be understood.
    #[display("Bad request: {_0}")]
    BadRequest(String),

    /// No game has the requested id.
    #[display("Game {_0} not found")]
    NotFound(String),

    /// A defect on the server side.
    #[display("Internal error: {_0}")]
    Internal(String),
}

impl std::error::Error for ApiError {}

impl ApiError {
    /// Returns the HTTP status for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidMove(_) | ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Returns the machine-readable error code.
    pub fn code(&self) -> &'static str {
        match self {
            ApiError::InvalidMove(_) => "invalid_move",
            ApiError::BadRequest(_) => "bad_request",
            ApiError::NotFound(_) => "game_not_found",
            ApiError::Internal(_) => "internal_error",
        }
    }
}

impl From<RegistryError> for ApiError {
    fn from(err: RegistryError) -> Self {
        match err {
            RegistryError::NotFound(id) => ApiError::NotFound(id.to_string()),
            RegistryError::Move(e) if e.is_invalid_move() => ApiError::InvalidMove(e.to_string()),
            RegistryError::Move(e) => ApiError::Internal(e.to_string()),
            RegistryError::Poisoned => ApiError::Internal(RegistryError::Poisoned.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::InvalidMove(_) | ApiError::BadRequest(_) => {
                warn!(error = %self, "Rejected request")
            }
            ApiError::NotFound(_) => debug!(error = %self, "Unknown game"),
            ApiError::Internal(_) => error!(error = %self, "Internal error"),
        }

        let body = ErrorBody {
            error: self.code().to_string(),
            message: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}

/// Builds the API router over a shared registry.
pub fn router(registry: Arc<GameRegistry>) -> Router {
    Router::new()
        .route("/api/game/new", get(new_game))
        .route("/api/game/{id}", get(game_state))
        .route("/api/game/{id}/move", post(make_move))
        .layer(ServiceBuilder::new().map_request(log_request))
        .with_state(registry)
}

fn log_request(req: Request) -> Request {
    info!(method = %req.method(), uri = %req.uri(), "Incoming HTTP request");
    req
}

fn parse_id(raw: &str) -> Result<GameId, ApiError> {
    raw.parse().map_err(|_| ApiError::NotFound(raw.to_string()))
}

fn coordinate(value: i64, request: MoveRequest) -> Result<usize, ApiError> {
    usize::try_from(value).map_err(|_| {
        ApiError::InvalidMove(format!(
            "Coordinates ({}, {}) are out of range (must be 0-2)",
            request.0, request.1
        ))
    })
}

#[instrument(skip_all)]
async fn new_game(State(registry): State<Arc<GameRegistry>>) -> Result<Json<GameId>, ApiError> {
    let id = registry.create()?;
    Ok(Json(id))
}

#[instrument(skip_all, fields(game_id = %id))]
async fn game_state(
    State(registry): State<Arc<GameRegistry>>,
    Path(id): Path<String>,
) -> Result<Json<GameState>, ApiError> {
    let id = parse_id(&id)?;
    Ok(Json(registry.state(&id)?))
}

#[instrument(skip_all, fields(game_id = %id))]
async fn make_move(
    State(registry): State<Arc<GameRegistry>>,
    Path(id): Path<String>,
    body: Result<Json<MoveRequest>, JsonRejection>,
) -> Result<Json<GameState>, ApiError> {
    let id = parse_id(&id)?;
    let entry = registry.get(&id)?;

    let Json(request) = body.map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;
    let x = coordinate(request.0, request)?;
    let y = coordinate(request.1, request)?;

    let state = entry.apply_move(x, y)?;
    debug!(game_id = %id, x, y, status = %state.status(), "Move accepted");
    Ok(Json(state))
}
