//! Command-line interface for tictactoe_server.

use crate::config::{ConfigError, ServerConfig};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Tic-tac-toe game server with a JSON HTTP API
#[derive(Parser, Debug)]
#[command(name = "tictactoe_server")]
#[command(about = "Hosts tic-tac-toe matches over JSON HTTP", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the HTTP game server
    Serve(ServeArgs),

    /// Parse and validate a config file, then print the effective config
    CheckConfig {
        /// Path to the TOML config file
        #[arg(short, long)]
        config: PathBuf,
    },
}

/// Flags for `serve`; each one overrides the config file.
#[derive(Args, Debug, Default)]
pub struct ServeArgs {
    /// Path to a TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Host to bind to
    #[arg(long)]
    pub host: Option<String>,

    /// Port to bind to
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Evict games idle for this many seconds
    #[arg(long)]
    pub idle_ttl: Option<u64>,
}

impl ServeArgs {
    /// Resolves the effective config: flags over file over defaults.
    pub fn resolve(&self) -> Result<ServerConfig, ConfigError> {
        let mut config = ServerConfig::load(self.config.as_deref())?;
        if let Some(host) = &self.host {
            config = config.with_host(host.clone());
        }
        if let Some(port) = self.port {
            config = config.with_port(port);
        }
        if let Some(ttl) = self.idle_ttl {
            config = config.with_idle_ttl_secs(Some(ttl));
        }
        config.validate()?;
        Ok(config)
    }
}
