//! Command-line definition

use std::collections::BTreeMap;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use mcpbridge_core::{AddServerRequest, Scope, TestConfigRequest, TestServerConfig, TransportType};
use mcpbridge_gateway::config::parse_timeout_secs;
use mcpbridge_gateway::BridgeConfig;

/// Manage MCP servers through the Claude CLI, with config-file fallback.
///
/// Every command prints a JSON document on stdout.
#[derive(Debug, Parser)]
#[command(name = "mcpbridge")]
#[command(version)]
pub struct Cli {
    /// CLI executable to drive (default: claude)
    #[arg(long, global = true)]
    pub program: Option<String>,

    /// Home directory used to locate config files
    #[arg(long, global = true)]
    pub home: Option<PathBuf>,

    /// Kill the CLI after this many seconds (0 disables)
    #[arg(long = "timeout", value_name = "SECS", global = true)]
    pub timeout_secs: Option<String>,

    /// Look the CLI up on the login shell's PATH
    #[arg(long, global = true)]
    pub login_shell_path: bool,

    /// Also write logs to a daily file in this directory
    #[arg(long, env = "MCPBRIDGE_LOG_DIR", global = true)]
    pub log_dir: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List servers known to the CLI
    List,

    /// Register a server
    Add(AddArgs),

    /// Unregister a server
    Remove {
        name: String,
    },

    /// Show one server's details
    Get {
        name: String,
    },

    /// List servers declared in the config files
    Servers {
        /// Accepted for compatibility; not used for filtering
        #[arg(long)]
        scope: Option<Scope>,

        /// Ask the CLI first and read the config files only if it fails
        #[arg(long)]
        fallback: bool,
    },

    /// Check a server configuration without contacting the CLI
    TestConfig(TestConfigArgs),
}

#[derive(Debug, Args)]
pub struct AddArgs {
    pub name: String,

    /// Transport: stdio, http or sse
    #[arg(long = "type", default_value = "stdio")]
    pub transport: TransportType,

    /// Executable for stdio servers
    #[arg(long)]
    pub command: Option<String>,

    /// Endpoint for http and sse servers
    #[arg(long)]
    pub url: Option<String>,

    /// HTTP header as "Key: Value" (repeatable)
    #[arg(long = "header", value_parser = parse_header)]
    pub headers: Vec<(String, String)>,

    /// Environment variable as KEY=VALUE (repeatable)
    #[arg(short = 'e', long = "env", value_parser = parse_env)]
    pub env: Vec<(String, String)>,

    /// Arguments passed to the command, after `--`
    #[arg(last = true)]
    pub args: Vec<String>,
}

impl AddArgs {
    pub fn into_request(self) -> AddServerRequest {
        AddServerRequest {
            name: self.name,
            transport_type: self.transport,
            command: self.command,
            args: self.args,
            url: self.url,
            headers: self.headers.into_iter().collect(),
            env: self.env.into_iter().collect(),
        }
    }
}

#[derive(Debug, Args)]
pub struct TestConfigArgs {
    #[arg(long)]
    pub name: Option<String>,

    /// Transport name, checked as given
    #[arg(long = "type")]
    pub transport: Option<String>,

    #[arg(long)]
    pub command: Option<String>,

    #[arg(long)]
    pub url: Option<String>,

    #[arg(short = 'e', long = "env", value_parser = parse_env)]
    pub env: Vec<(String, String)>,

    #[arg(last = true)]
    pub args: Vec<String>,
}

impl TestConfigArgs {
    pub fn into_request(self) -> TestConfigRequest {
        TestConfigRequest {
            name: self.name,
            transport_type: self.transport,
            config: TestServerConfig {
                command: self.command,
                url: self.url,
                args: self.args,
                env: self.env.into_iter().collect::<BTreeMap<_, _>>(),
            },
        }
    }
}

impl Cli {
    /// Environment configuration with command-line flags applied on top
    pub fn bridge_config(&self) -> anyhow::Result<BridgeConfig> {
        let mut config = BridgeConfig::from_env()?;

        if let Some(program) = &self.program {
            config.program = program.clone();
        }
        if let Some(home) = &self.home {
            config.home_dir = Some(home.clone());
        }
        if let Some(secs) = &self.timeout_secs {
            config.timeout = parse_timeout_secs(secs)?;
        }
        if self.login_shell_path {
            config.use_login_shell_path = true;
        }

        Ok(config)
    }
}

fn parse_env(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => Ok((key.trim().to_string(), value.to_string())),
        _ => Err(format!("expected KEY=VALUE, got '{}'", raw)),
    }
}

fn parse_header(raw: &str) -> Result<(String, String), String> {
    match raw.split_once(':') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), value.trim().to_string()))
        }
        _ => Err(format!("expected \"Key: Value\", got '{}'", raw)),
    }
}
