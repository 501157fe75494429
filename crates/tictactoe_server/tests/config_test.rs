//! Tests for config loading and command-line precedence.

use clap::Parser;
use std::io::Write;
use std::time::Duration;
use tictactoe_server::cli::{Cli, Command};
use tictactoe_server::ServerConfig;

fn write_config(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

fn serve_args(args: &[&str]) -> tictactoe_server::cli::ServeArgs {
    let mut argv = vec!["tictactoe_server", "serve"];
    argv.extend_from_slice(args);
    match Cli::try_parse_from(argv).unwrap().command {
        Command::Serve(args) => args,
        other => panic!("Expected serve, got {:?}", other),
    }
}

#[test]
fn test_partial_file_keeps_defaults() {
    let file = write_config("port = 4000\nidle_ttl_secs = 900\n");
    let config = ServerConfig::from_file(file.path()).unwrap();

    assert_eq!(*config.port(), 4000);
    assert_eq!(config.host(), "127.0.0.1");
    assert_eq!(config.idle_ttl(), Some(Duration::from_secs(900)));
    assert_eq!(config.sweep_interval(), Duration::from_secs(60));
}

#[test]
fn test_bad_file_reports_error() {
    let file = write_config("port = \"not a number\"\n");
    let err = ServerConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.contains("Failed to parse config"));

    let missing = ServerConfig::from_file("/nonexistent/tictactoe.toml").unwrap_err();
    assert!(missing.message.contains("Failed to read config file"));
}

#[test]
fn test_invalid_values_rejected() {
    let file = write_config("sweep_interval_secs = 0\n");
    assert!(ServerConfig::from_file(file.path()).is_err());
}

#[test]
fn test_flags_override_file() {
    let file = write_config("host = \"0.0.0.0\"\nport = 4000\n");
    let path = file.path().to_str().unwrap();

    let config = serve_args(&["--config", path, "--port", "5000"])
        .resolve()
        .unwrap();
    assert_eq!(config.host(), "0.0.0.0");
    assert_eq!(*config.port(), 5000);
    assert_eq!(config.idle_ttl(), None);
}

#[test]
fn test_no_config_uses_defaults() {
    let config = serve_args(&["--idle-ttl", "30"]).resolve().unwrap();
    assert_eq!(config.bind_addr(), "127.0.0.1:3000");
    assert_eq!(config.idle_ttl(), Some(Duration::from_secs(30)));
}

#[test]
fn test_config_serializes_back_to_toml() {
    let config = ServerConfig::default().with_port(8123);
    let text = toml::to_string(&config).unwrap();
    let parsed: ServerConfig = toml::from_str(&text).unwrap();
    assert_eq!(parsed, config);
}
