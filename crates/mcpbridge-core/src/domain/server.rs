use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Default per-server timeout when a config entry does not set one
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransportType {
    #[default]
    Stdio,
    Http,
    Sse,
}

impl TransportType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransportType::Stdio => "stdio",
            TransportType::Http => "http",
            TransportType::Sse => "sse",
        }
    }

    /// Whether this transport is addressed by URL rather than by command
    pub fn is_remote(&self) -> bool {
        matches!(self, TransportType::Http | TransportType::Sse)
    }
}

impl fmt::Display for TransportType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unrecognized transport name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownTransport(pub String);

impl fmt::Display for UnknownTransport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unsupported transport type: {}", self.0)
    }
}

impl std::error::Error for UnknownTransport {}

impl FromStr for TransportType {
    type Err = UnknownTransport;

    /// Case-insensitive; accepts the streamable-HTTP spellings as `http`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "stdio" => Ok(TransportType::Stdio),
            "http" | "streamable-http" | "streamablehttp" | "streamable_http" => {
                Ok(TransportType::Http)
            }
            "sse" => Ok(TransportType::Sse),
            _ => Err(UnknownTransport(s.to_string())),
        }
    }
}

/// Which configuration scope a server was registered in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scope {
    User,
    Project,
}

impl Scope {
    pub fn as_str(&self) -> &'static str {
        match self {
            Scope::User => "user",
            Scope::Project => "project",
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Scope {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "user" => Ok(Scope::User),
            "project" => Ok(Scope::Project),
            other => Err(format!("Unknown scope: {}", other)),
        }
    }
}

/// A server as seen through the config files.
///
/// Constructed fresh per request; the files remain the system of record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerRecord {
    /// Registry key; identical to `name`
    pub id: String,

    pub name: String,

    #[serde(rename = "type")]
    pub transport_type: TransportType,

    pub scope: Scope,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,

    #[serde(default)]
    pub args: Vec<String>,

    #[serde(default)]
    pub env: BTreeMap<String, String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(default)]
    pub headers: BTreeMap<String, String>,

    pub timeout_ms: u64,

    /// Config file this record was read from
    pub source: PathBuf,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ServerRecord {
    /// Check the transport invariants.
    ///
    /// Returns every violation found; an empty list means the record is usable.
    pub fn validate(&self) -> Vec<String> {
        let mut problems = Vec::new();

        match self.transport_type {
            TransportType::Stdio => {
                if self.command.as_deref().map_or(true, |c| c.trim().is_empty()) {
                    problems.push(format!("Server '{}': command is required for stdio transport", self.name));
                }
            }
            TransportType::Http | TransportType::Sse => match self.url.as_deref() {
                Some(url) if !url.trim().is_empty() => {
                    if let Err(e) = url::Url::parse(url) {
                        problems.push(format!("Server '{}': invalid URL '{}': {}", self.name, url, e));
                    }
                }
                _ => problems.push(format!(
                    "Server '{}': url is required for {} transport",
                    self.name, self.transport_type
                )),
            },
        }

        problems
    }
}

/// Status reported for entries of the CLI listing.
///
/// The listing carries no richer signal, so every entry is `active`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryStatus {
    #[default]
    Active,
}

/// One server line of the CLI listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedListEntry {
    pub name: String,
    #[serde(rename = "type")]
    pub transport_type: TransportType,
    pub status: EntryStatus,
}

impl ParsedListEntry {
    pub fn new(name: impl Into<String>, transport_type: TransportType) -> Self {
        Self {
            name: name.into(),
            transport_type,
            status: EntryStatus::Active,
        }
    }
}
