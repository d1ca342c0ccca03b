//! # McpBridge Core Library
//!
//! Domain types and pure logic for bridging the MCP command-line tool.
//!
//! ## Modules
//!
//! - `branding` - Tool and file naming constants (generated from branding.toml)
//! - `domain` - Server records, transports, request/response shapes
//! - `error` - Error kinds surfaced to callers
//! - `parser` - Conversions from CLI text output to records
//! - `config` - Config-file fallback resolution
//! - `validation` - Request validation before any process is spawned

pub mod branding;
pub mod config;
pub mod domain;
pub mod error;
pub mod parser;
pub mod validation;

// Re-export commonly used types
pub use config::{ConfigFileResolver, ConfigSource, SourceKind};
pub use domain::*;
pub use error::{BridgeError, BridgeResult, ErrorResponse};
pub use parser::{parse_detail, parse_listing};
