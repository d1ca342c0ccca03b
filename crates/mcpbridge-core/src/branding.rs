//! Centralized branding constants
//!
//! Product naming and the external tool's file conventions come from this
//! module. Generated from branding.toml at build time.
//!
//! # Usage
//!
//! ```rust
//! use mcpbridge_core::branding;
//!
//! println!("Driving `{}`", branding::CLI_PROGRAM);
//! ```

// Include generated constants from build.rs
include!(concat!(env!("OUT_DIR"), "/branding_generated.rs"));

/// Subcommand namespace every CLI invocation starts with
pub const CLI_SUBCOMMAND: &str = "mcp";

/// Headline used when the CLI ran and failed
pub fn cli_failure_headline() -> String {
    format!("{} CLI command failed", capitalized_program())
}

/// Headline used when the CLI could not be started at all
pub fn cli_spawn_headline() -> String {
    format!("Failed to run {} CLI", capitalized_program())
}

fn capitalized_program() -> String {
    let mut chars = CLI_PROGRAM.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
