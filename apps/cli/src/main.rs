//! McpBridge command-line entry point
//!
//! Wires configuration, logging and the bridge service together, then prints
//! each operation's response as JSON. Bridge failures are printed as an
//! `{"error", "details"}` document and exit with status 1.

use clap::Parser;
use mcpbridge_core::{branding, BridgeError, ErrorResponse};
use mcpbridge_gateway::BridgeService;
use serde::Serialize;
use tracing::debug;

mod cli;
mod logging;

use cli::{Cli, Command};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let guard = logging::init_tracing(cli.verbose, cli.log_dir.as_deref())?;

    let config = cli.bridge_config()?;
    debug!(?config, "Starting {}", branding::DISPLAY_NAME);
    let service = BridgeService::from_config(&config);

    let outcome = execute(&service, cli.command).await;
    match outcome {
        Ok(body) => {
            println!("{}", body);
            Ok(())
        }
        Err(e) => match e.downcast_ref::<BridgeError>() {
            Some(bridge_error) => {
                println!("{}", to_json(&ErrorResponse::from(bridge_error))?);
                // process::exit skips destructors; flush the file writer first
                drop(guard);
                std::process::exit(1);
            }
            None => Err(e),
        },
    }
}

async fn execute(service: &BridgeService, command: Command) -> anyhow::Result<String> {
    match command {
        Command::List => to_json(&service.list().await?),
        Command::Add(args) => to_json(&service.add(&args.into_request()).await?),
        Command::Remove { name } => to_json(&service.remove(&name).await?),
        Command::Get { name } => to_json(&service.get(&name).await?),
        Command::Servers { scope, fallback } => {
            if fallback {
                to_json(&service.list_or_fallback(scope).await?)
            } else {
                to_json(&service.servers(scope).await)
            }
        }
        Command::TestConfig(args) => to_json(&service.test_config(&args.into_request())),
    }
}

fn to_json<T: Serialize>(value: &T) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}
