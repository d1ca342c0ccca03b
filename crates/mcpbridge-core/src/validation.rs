//! Request validation performed before any process is spawned

use crate::domain::{AddServerRequest, TestConfigRequest, TestResult, TransportType};
use crate::error::{BridgeError, BridgeResult};

/// Reject an empty server name
pub fn validate_server_name(name: &str) -> BridgeResult<()> {
    if name.trim().is_empty() {
        return Err(BridgeError::validation("Server name is required"));
    }
    Ok(())
}

/// Check an `add` request against its transport's requirements.
pub fn validate_add_request(request: &AddServerRequest) -> BridgeResult<()> {
    validate_server_name(&request.name)?;

    match request.transport_type {
        TransportType::Stdio => {
            if is_blank(request.command.as_deref()) {
                return Err(BridgeError::validation(
                    "Command is required for stdio transport",
                ));
            }
        }
        TransportType::Http | TransportType::Sse => {
            let url = request
                .url
                .as_deref()
                .filter(|u| !u.trim().is_empty())
                .ok_or_else(|| BridgeError::validation("URL is required for SSE/HTTP transport"))?;
            url::Url::parse(url)
                .map_err(|e| BridgeError::validation(format!("URL is not valid: {}", e)))?;
        }
    }

    Ok(())
}

/// Validate a candidate configuration without touching the CLI.
pub fn check_config(request: &TestConfigRequest) -> TestResult {
    let name = request.name.as_deref().filter(|n| !n.trim().is_empty());
    let raw_type = request.transport_type.as_deref().filter(|t| !t.trim().is_empty());

    let (Some(_), Some(raw_type)) = (name, raw_type) else {
        return failed("Server name and type are required");
    };

    let transport = match raw_type.parse::<TransportType>() {
        Ok(transport) => transport,
        Err(e) => return failed(e.to_string()),
    };

    let config = &request.config;
    let target = match transport {
        TransportType::Stdio => match config.command.as_deref() {
            Some(command) if !command.trim().is_empty() => format!("Command: {}", command),
            _ => return failed("Command is required for stdio transport"),
        },
        TransportType::Http | TransportType::Sse => match config.url.as_deref() {
            Some(url) if !url.trim().is_empty() => {
                if let Err(e) = url::Url::parse(url) {
                    return failed(format!("URL is not valid: {}", e));
                }
                format!("URL: {}", url)
            }
            _ => return failed("URL is required for SSE/HTTP transport"),
        },
    };

    let mut details = vec![format!("Transport: {}", transport), target];
    if !config.args.is_empty() {
        details.push(format!("Args: {} argument(s)", config.args.len()));
    }
    if !config.env.is_empty() {
        details.push(format!("Env: {} variable(s)", config.env.len()));
    }

    TestResult {
        success: true,
        message: "Configuration appears valid".to_string(),
        details,
    }
}

fn failed(message: impl Into<String>) -> TestResult {
    TestResult {
        success: false,
        message: message.into(),
        details: vec![],
    }
}

fn is_blank(value: Option<&str>) -> bool {
    value.map_or(true, |v| v.trim().is_empty())
}
