//! Tic-tac-toe game server.
//!
//! Hosts many [`tictactoe_engine::MatchEngine`] instances behind a JSON HTTP
//! API.
//!
//! # Architecture
//!
//! - **Registry**: owns every game, one lock per game
//! - **API**: axum router mapping requests onto the registry
//! - **Client**: typed reqwest client for the same API
//! - **Server**: listener, tracing, idle-game eviction, shutdown
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use tictactoe_server::{router, GameRegistry};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let app = router(Arc::new(GameRegistry::new()));
//! let listener = tokio::net::TcpListener::bind("127.0.0.1:3000").await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod api;
mod client;
mod config;
mod registry;
mod server;

pub mod cli;

// Crate-level exports - HTTP API
pub use api::{router, ApiError, ErrorBody, MoveRequest};

// Crate-level exports - Client
pub use client::{ClientError, GameClient};

// Crate-level exports - Configuration
pub use config::{ConfigError, ServerConfig};

// Crate-level exports - Game storage
pub use registry::{GameEntry, GameId, GameRegistry, RegistryError};

// Crate-level exports - Server lifecycle
pub use server::{init_tracing, run, serve_on, spawn_eviction};
