//! McpBridge Gateway
//!
//! Drives the MCP command-line tool on behalf of a routing layer:
//! - Argument construction for each CLI operation
//! - Request validation before any process is spawned
//! - Output parsing into structured responses
//! - Config-file fallback when the CLI is unavailable

pub mod args;
pub mod config;
pub mod service;

pub use args::{build_add_args, get_args, list_args, remove_args};
pub use config::BridgeConfig;
pub use service::BridgeService;
