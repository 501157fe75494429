//! Server configuration.
//!
//! Values come from built-in defaults, then an optional TOML file, then
//! command-line flags, each layer overriding the previous one.

use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Configuration for the game server.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
#[serde(default)]
pub struct ServerConfig {
    /// Host to bind to.
    host: String,

    /// Port to bind to (0 picks a free port).
    port: u16,

    /// Tracing filter used when `RUST_LOG` is unset.
    log_filter: String,

    /// Evict games idle for longer than this many seconds. Unset keeps
    /// games for the life of the process.
    #[serde(skip_serializing_if = "Option::is_none")]
    idle_ttl_secs: Option<u64>,

    /// Seconds between eviction sweeps.
    sweep_interval_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            log_filter: "info,tictactoe_server=debug".to_string(),
            idle_ttl_secs: None,
            sweep_interval_secs: 60,
        }
    }
}

impl ServerConfig {
    /// Loads configuration from a TOML file; missing keys take defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;

        info!(host = %config.host, port = config.port, "Config loaded successfully");
        Ok(config)
    }

    /// Loads from `path` if given, otherwise returns defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Rejects values the server cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.host.trim().is_empty() {
            return Err(ConfigError::new("host must not be empty"));
        }
        if self.sweep_interval_secs == 0 {
            return Err(ConfigError::new("sweep_interval_secs must be positive"));
        }
        if self.idle_ttl_secs == Some(0) {
            return Err(ConfigError::new("idle_ttl_secs must be positive when set"));
        }
        Ok(())
    }

    /// Returns the `host:port` address to bind.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Returns the idle TTL, if eviction is enabled.
    pub fn idle_ttl(&self) -> Option<Duration> {
        self.idle_ttl_secs.map(Duration::from_secs)
    }

    /// Returns the interval between eviction sweeps.
    pub fn sweep_interval(&self) -> Duration {
        Duration::from_secs(self.sweep_interval_secs)
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_disable_eviction() {
        let config = ServerConfig::default();
        assert_eq!(config.bind_addr(), "127.0.0.1:3000");
        assert_eq!(config.idle_ttl(), None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_setters_override() {
        let config = ServerConfig::default()
            .with_port(8080)
            .with_idle_ttl_secs(Some(600));
        assert_eq!(*config.port(), 8080);
        assert_eq!(config.idle_ttl(), Some(Duration::from_secs(600)));
    }

    #[test]
    fn test_zero_values_rejected() {
        assert!(ServerConfig::default().with_sweep_interval_secs(0).validate().is_err());
        assert!(ServerConfig::default().with_idle_ttl_secs(Some(0)).validate().is_err());
        assert!(ServerConfig::default().with_host(" ".to_string()).validate().is_err());
    }

    #[test]
    fn test_error_records_location() {
        let err = ConfigError::new("boom");
        assert!(err.file.ends_with("config.rs"));
        assert!(err.to_string().contains("boom"));
    }
}
