//! Bridge service
//!
//! Maps each caller operation onto one CLI invocation, converts the output
//! into structured responses, and falls back to the config files when the
//! CLI cannot produce a listing.

use std::sync::Arc;

use mcpbridge_core::validation::{check_config, validate_add_request, validate_server_name};
use mcpbridge_core::{
    parse_detail, parse_listing, AddServerRequest, BridgeResult, CommandResponse,
    ConfigFileResolver, GetResponse, ListResponse, Scope, ServerListing, ServersResponse,
    TestConfigRequest, TestConfigResponse,
};
use mcpbridge_process::{ProcessOutput, ProcessRunner, TokioProcessRunner};
use tracing::{debug, info, warn};

use crate::args::{build_add_args, get_args, list_args, remove_args};
use crate::config::BridgeConfig;

/// Stateless front for the CLI; safe to share across tasks.
#[derive(Clone)]
pub struct BridgeService {
    runner: Arc<dyn ProcessRunner>,
    resolver: ConfigFileResolver,
    program: String,
}

impl BridgeService {
    pub fn new(
        runner: Arc<dyn ProcessRunner>,
        resolver: ConfigFileResolver,
        program: impl Into<String>,
    ) -> Self {
        Self {
            runner,
            resolver,
            program: program.into(),
        }
    }

    /// Service backed by real processes and the configured home directory
    pub fn from_config(config: &BridgeConfig) -> Self {
        let runner = TokioProcessRunner::new()
            .with_login_shell_path(config.use_login_shell_path)
            .with_timeout(config.timeout);
        let resolver = match &config.home_dir {
            Some(home) => ConfigFileResolver::new(home),
            None => ConfigFileResolver::from_home_dir(),
        };

        Self::new(Arc::new(runner), resolver, config.program.clone())
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// `mcp list`
    pub async fn list(&self) -> BridgeResult<ListResponse> {
        let output = self.invoke(list_args()).await?;
        let servers = parse_listing(&output.stdout);
        debug!(count = servers.len(), "[BridgeService] Parsed server listing");

        Ok(ListResponse {
            success: true,
            output: output.stdout,
            servers,
        })
    }

    /// `mcp add`; the request is validated before anything is spawned
    pub async fn add(&self, request: &AddServerRequest) -> BridgeResult<CommandResponse> {
        validate_add_request(request).map_err(|e| {
            warn!(server = %request.name, "[BridgeService] Rejected add request: {}", e);
            e
        })?;

        let output = self.invoke(build_add_args(request)).await?;
        info!(
            server = %request.name,
            transport = %request.transport_type,
            "[BridgeService] Server added"
        );

        Ok(CommandResponse {
            success: true,
            output: output.stdout,
            message: format!("MCP server \"{}\" added successfully", request.name),
        })
    }

    /// `mcp remove`
    pub async fn remove(&self, name: &str) -> BridgeResult<CommandResponse> {
        validate_server_name(name)?;

        let output = self.invoke(remove_args(name)).await?;
        info!(server = %name, "[BridgeService] Server removed");

        Ok(CommandResponse {
            success: true,
            output: output.stdout,
            message: format!("MCP server \"{}\" removed successfully", name),
        })
    }

    /// `mcp get`; the record is whatever `parse_detail` recovers
    pub async fn get(&self, name: &str) -> BridgeResult<GetResponse> {
        validate_server_name(name)?;

        let output = self.invoke(get_args(name)).await?;
        let server = parse_detail(&output.stdout);

        Ok(GetResponse {
            success: true,
            output: output.stdout,
            server,
        })
    }

    /// Servers declared in the config files. Never invokes the CLI.
    ///
    /// `scope` is accepted for interface compatibility and only logged.
    pub async fn servers(&self, scope: Option<Scope>) -> ServersResponse {
        if let Some(scope) = scope {
            debug!(%scope, "[BridgeService] Scope hint ignored for config file listing");
        }

        ServersResponse {
            success: true,
            servers: self.resolver.resolve().await,
            diagnostic: None,
        }
    }

    /// CLI listing, degrading to the config files when the CLI fails.
    pub async fn list_or_fallback(&self, scope: Option<Scope>) -> BridgeResult<ServerListing> {
        match self.list().await {
            Ok(listing) => Ok(ServerListing::Cli(listing)),
            Err(e) if e.is_fallback_eligible() => {
                warn!(error = %e, "[BridgeService] CLI listing failed, reading config files");
                let mut response = self.servers(scope).await;
                response.diagnostic = Some(format!("{}: {}", e.summary(), e.details().trim()));
                Ok(ServerListing::ConfigFiles(response))
            }
            Err(e) => Err(e),
        }
    }

    /// Static validation of a candidate configuration. Never invokes the CLI.
    pub fn test_config(&self, request: &TestConfigRequest) -> TestConfigResponse {
        let test_result = check_config(request);
        debug!(
            success = test_result.success,
            message = %test_result.message,
            "[BridgeService] Checked configuration"
        );
        TestConfigResponse { test_result }
    }

    async fn invoke(&self, args: Vec<String>) -> BridgeResult<ProcessOutput> {
        let output = self.runner.run(&self.program, &args).await?;
        if !output.success() {
            warn!(
                program = %self.program,
                exit_code = ?output.exit_code,
                stderr = %output.stderr.trim(),
                "[BridgeService] CLI command failed"
            );
        }
        output.into_result()
    }
}
