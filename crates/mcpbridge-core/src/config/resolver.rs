//! Merges the server registries of every readable candidate config file.
//!
//! This is a best-effort scan: missing, unreadable or malformed files are
//! skipped, every entry of a readable registry becomes a record, and
//! duplicate server names across files are all kept.

use chrono::{DateTime, Utc};
use futures::future::join_all;
use serde_json::Value;
use std::path::PathBuf;
use tracing::{debug, info, warn};

use super::entry::ConfigServerEntry;
use super::source::{default_sources, ConfigSource};
use crate::branding;
use crate::domain::ServerRecord;

#[derive(Debug, Clone)]
pub struct ConfigFileResolver {
    sources: Vec<ConfigSource>,
}

impl ConfigFileResolver {
    /// Resolver over the fixed candidate list rooted at `home`
    pub fn new(home: impl Into<PathBuf>) -> Self {
        Self {
            sources: default_sources(&home.into()),
        }
    }

    /// Resolver rooted at the current user's home directory.
    ///
    /// Without a home directory there is nothing to probe and every
    /// resolution is empty.
    pub fn from_home_dir() -> Self {
        match dirs::home_dir() {
            Some(home) => Self::new(home),
            None => {
                warn!("Could not determine home directory; config fallback disabled");
                Self::with_sources(Vec::new())
            }
        }
    }

    pub fn with_sources(sources: Vec<ConfigSource>) -> Self {
        Self { sources }
    }

    pub fn sources(&self) -> &[ConfigSource] {
        &self.sources
    }

    /// Read every candidate and accumulate their entries in candidate order.
    pub async fn resolve(&self) -> Vec<ServerRecord> {
        let resolved_at = Utc::now();
        let per_source = join_all(
            self.sources
                .iter()
                .map(|source| read_source(source, resolved_at)),
        )
        .await;

        let mut contributing = 0;
        let mut servers = Vec::new();
        for records in per_source.into_iter().flatten() {
            contributing += 1;
            servers.extend(records);
        }

        if contributing == 0 {
            info!("No MCP config files found");
        } else {
            info!(
                files = contributing,
                servers = servers.len(),
                "Resolved MCP servers from config files"
            );
        }

        servers
    }
}

/// Records from one file, or `None` if the file does not declare a registry.
async fn read_source(source: &ConfigSource, resolved_at: DateTime<Utc>) -> Option<Vec<ServerRecord>> {
    let path = &source.path;

    let content = match tokio::fs::read_to_string(path).await {
        Ok(content) => content,
        Err(e) => {
            debug!(path = %path.display(), error = %e, "Config file not found or unreadable");
            return None;
        }
    };

    let config: Value = match serde_json::from_str(&content) {
        Ok(config) => config,
        Err(e) => {
            debug!(path = %path.display(), error = %e, "Config file is not valid JSON");
            return None;
        }
    };

    let registry = config.get(branding::REGISTRY_KEY)?.as_object()?;

    let records = registry
        .iter()
        .map(|(name, raw)| {
            let record = ConfigServerEntry::from_value(name, raw).to_server_record(
                name,
                source.scope(),
                path,
                resolved_at,
            );
            // incomplete entries are still listed
            for problem in record.validate() {
                debug!(path = %path.display(), "{}", problem);
            }
            record
        })
        .collect::<Vec<_>>();

    debug!(path = %path.display(), count = records.len(), "Loaded servers from config file");
    Some(records)
}
