//! Request and response shapes exchanged with the routing layer

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

use super::server::{ParsedListEntry, ServerRecord, TransportType};

/// Parameters for registering a server through the CLI
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddServerRequest {
    pub name: String,

    #[serde(rename = "type", default)]
    pub transport_type: TransportType,

    #[serde(default)]
    pub command: Option<String>,

    #[serde(default)]
    pub args: Vec<String>,

    #[serde(default)]
    pub url: Option<String>,

    #[serde(default)]
    pub headers: BTreeMap<String, String>,

    #[serde(default)]
    pub env: BTreeMap<String, String>,
}

impl AddServerRequest {
    pub fn stdio(name: impl Into<String>, command: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            transport_type: TransportType::Stdio,
            command: Some(command.into()),
            ..Default::default()
        }
    }

    pub fn remote(name: impl Into<String>, transport_type: TransportType, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            transport_type,
            url: Some(url.into()),
            ..Default::default()
        }
    }

    pub fn with_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args = args.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.insert(key.into(), value.into());
        self
    }

    pub fn with_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }
}

/// Candidate configuration checked by `test_config`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestConfigRequest {
    #[serde(default)]
    pub name: Option<String>,

    /// Raw transport name; kept as text so unsupported values can be reported
    #[serde(rename = "type", default)]
    pub transport_type: Option<String>,

    #[serde(default)]
    pub config: TestServerConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestServerConfig {
    #[serde(default)]
    pub command: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub args: Vec<String>,
    #[serde(default)]
    pub env: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestResult {
    pub success: bool,
    pub message: String,
    pub details: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestConfigResponse {
    pub test_result: TestResult,
}

/// Result of `mcp list`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListResponse {
    pub success: bool,
    pub output: String,
    pub servers: Vec<ParsedListEntry>,
}

/// Result of a mutating CLI command (`mcp add`, `mcp remove`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandResponse {
    pub success: bool,
    pub output: String,
    pub message: String,
}

/// Result of `mcp get`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GetResponse {
    pub success: bool,
    pub output: String,
    pub server: Map<String, Value>,
}

/// Servers read from the config files
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServersResponse {
    pub success: bool,
    pub servers: Vec<ServerRecord>,
    /// Why the CLI path was skipped, when this is a fallback result
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diagnostic: Option<String>,
}

/// A server listing from whichever source answered
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ServerListing {
    Cli(ListResponse),
    ConfigFiles(ServersResponse),
}

impl ServerListing {
    pub fn is_fallback(&self) -> bool {
        matches!(self, ServerListing::ConfigFiles(_))
    }
}
