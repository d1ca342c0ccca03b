use chrono::{DateTime, Utc};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{debug, warn};

use crate::domain::{Scope, ServerRecord, TransportType, DEFAULT_TIMEOUT_MS};

/// A single server entry under the registry key.
///
/// This follows the standard MCP config format used by the CLI and the desktop
/// app: transport fields (command/args/env OR url/headers) sit at the top level.
/// Files are hand-edited, so every field is read leniently from the raw JSON
/// and a badly typed field never costs the whole entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigServerEntry {
    // --- Stdio Transport (command-based) ---
    pub command: Option<String>,
    pub args: Vec<String>,
    pub env: BTreeMap<String, String>,

    // --- HTTP/SSE Transport (URL-based) ---
    pub url: Option<String>,
    pub headers: BTreeMap<String, String>,

    // --- Common ---
    /// Explicit transport name (`transport`, or `type` as newer CLI versions write it)
    pub transport: Option<String>,
    pub timeout_ms: u64,
}

impl ConfigServerEntry {
    /// Read an entry field by field.
    ///
    /// Scalars are stringified where strings are expected, non-scalar list and
    /// map members are dropped, and a timeout that is not a positive integer
    /// becomes the default. A non-object entry yields an empty entry.
    pub fn from_value(name: &str, raw: &Value) -> Self {
        let empty = Map::new();
        let fields = raw.as_object().unwrap_or_else(|| {
            warn!(server = %name, "Server entry is not an object, using defaults");
            &empty
        });

        Self {
            command: string_field(fields, "command"),
            args: string_list(name, fields.get("args")),
            env: string_map(name, "env", fields.get("env")),
            url: string_field(fields, "url"),
            headers: string_map(name, "headers", fields.get("headers")),
            transport: string_field(fields, "transport").or_else(|| string_field(fields, "type")),
            timeout_ms: timeout_ms(name, fields.get("timeout")),
        }
    }

    pub fn to_server_record(
        &self,
        name: &str,
        scope: Scope,
        source: &Path,
        resolved_at: DateTime<Utc>,
    ) -> ServerRecord {
        ServerRecord {
            id: name.to_string(),
            name: name.to_string(),
            transport_type: self.detect_transport(name),
            scope,
            command: self.command.clone(),
            args: self.args.clone(),
            env: self.env.clone(),
            url: self.url.clone(),
            headers: self.headers.clone(),
            timeout_ms: self.timeout_ms,
            source: source.to_path_buf(),
            created_at: resolved_at,
            updated_at: resolved_at,
        }
    }

    /// Explicit transport field, then URL shape, then stdio.
    fn detect_transport(&self, name: &str) -> TransportType {
        if let Some(raw) = self.transport.as_deref() {
            match raw.parse::<TransportType>() {
                Ok(transport) => return transport,
                Err(e) => warn!(server = %name, "{}; inferring from fields", e),
            }
        }

        match self.url.as_deref() {
            Some(url) if url.contains("/sse") => TransportType::Sse,
            Some(_) => TransportType::Http,
            None => TransportType::Stdio,
        }
    }
}

/// Strings as-is, numbers and booleans in their JSON spelling
fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn string_field(fields: &Map<String, Value>, key: &str) -> Option<String> {
    fields
        .get(key)
        .and_then(scalar_to_string)
        .filter(|s| !s.is_empty())
}

fn string_list(name: &str, value: Option<&Value>) -> Vec<String> {
    match value {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(items)) => items.iter().filter_map(scalar_to_string).collect(),
        Some(other) => {
            debug!(server = %name, value = %other, "Ignoring args that are not a list");
            Vec::new()
        }
    }
}

fn string_map(name: &str, key: &str, value: Option<&Value>) -> BTreeMap<String, String> {
    match value {
        None | Some(Value::Null) => BTreeMap::new(),
        Some(Value::Object(map)) => map
            .iter()
            .filter_map(|(k, v)| scalar_to_string(v).map(|v| (k.clone(), v)))
            .collect(),
        Some(other) => {
            debug!(server = %name, field = key, value = %other, "Ignoring field that is not an object");
            BTreeMap::new()
        }
    }
}

/// Positive integer milliseconds, given as a number or a numeric string
fn timeout_ms(name: &str, value: Option<&Value>) -> u64 {
    let parsed = match value {
        None | Some(Value::Null) => return DEFAULT_TIMEOUT_MS,
        Some(Value::Number(n)) => n.as_u64(),
        Some(Value::String(s)) => s.trim().parse::<u64>().ok(),
        Some(_) => None,
    };

    match parsed.filter(|ms| *ms > 0) {
        Some(ms) => ms,
        None => {
            debug!(server = %name, value = ?value, "Invalid timeout, using default");
            DEFAULT_TIMEOUT_MS
        }
    }
}
