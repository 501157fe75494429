//! Tic-tac-toe game server binary.

use anyhow::Result;
use clap::Parser;
use tictactoe_server::cli::{Cli, Command};
use tictactoe_server::{init_tracing, run, ServerConfig};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Serve(args) => {
            let config = args.resolve()?;
            init_tracing(&config);
            run(config).await
        }
        Command::CheckConfig { config } => {
            let config = ServerConfig::from_file(&config)?;
            print!("{}", toml::to_string(&config)?);
            Ok(())
        }
    }
}
