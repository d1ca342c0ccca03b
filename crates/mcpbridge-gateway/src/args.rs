//! Argument vectors for the CLI's `mcp` subcommands
//!
//! Every value is its own argv element; nothing is quoted or joined for a
//! shell.

use mcpbridge_core::branding::CLI_SUBCOMMAND;
use mcpbridge_core::AddServerRequest;

fn subcommand(action: &str) -> Vec<String> {
    vec![CLI_SUBCOMMAND.to_string(), action.to_string()]
}

pub fn list_args() -> Vec<String> {
    subcommand("list")
}

pub fn get_args(name: &str) -> Vec<String> {
    let mut args = subcommand("get");
    args.push(name.to_string());
    args
}

pub fn remove_args(name: &str) -> Vec<String> {
    let mut args = subcommand("remove");
    args.push(name.to_string());
    args
}

/// Build `mcp add` arguments for an already validated request.
///
/// Remote transports pass `--transport <type> <name> <url>` followed by one
/// `--header "Key: Value"` per header. Stdio passes the name, one
/// `-e KEY=VALUE` per variable, then the command and its arguments.
pub fn build_add_args(request: &AddServerRequest) -> Vec<String> {
    let mut args = subcommand("add");

    if request.transport_type.is_remote() {
        args.push("--transport".to_string());
        args.push(request.transport_type.as_str().to_string());
        args.push(request.name.clone());
        args.push(request.url.clone().unwrap_or_default());
        for (key, value) in &request.headers {
            args.push("--header".to_string());
            args.push(format!("{}: {}", key, value));
        }
    } else {
        args.push(request.name.clone());
        for (key, value) in &request.env {
            args.push("-e".to_string());
            args.push(format!("{}={}", key, value));
        }
        args.push(request.command.clone().unwrap_or_default());
        args.extend(request.args.iter().cloned());
    }

    args
}
