//! # McpBridge Process Library
//!
//! Runs the external CLI as a child process and hands back its buffered output.
//!
//! - `ProcessRunner` - the seam the gateway drives (swap in a double for tests)
//! - `TokioProcessRunner` - production implementation on `tokio::process`
//! - `shell_env` - login-shell PATH resolution for GUI-launched hosts

mod platform;
mod runner;
pub mod shell_env;

pub use platform::configure_child_process_platform;
pub use runner::{ProcessOutput, ProcessRunner, TokioProcessRunner};
