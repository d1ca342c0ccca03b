//! Parser for `mcp list` output.
//!
//! The CLI prints one server per line as `name: <command or url>`, sometimes
//! followed by a transport tag such as `(SSE)`. Banner lines without a colon
//! are skipped.

use lazy_static::lazy_static;
use regex::Regex;
use tracing::debug;

use crate::domain::{ParsedListEntry, TransportType};

lazy_static! {
    static ref TRANSPORT_TAG_REGEX: Regex = Regex::new(r"\(([A-Za-z0-9_]+)\)\s*$").unwrap();
}

/// Convert raw listing text into entries, preserving line order.
pub fn parse_listing(output: &str) -> Vec<ParsedListEntry> {
    let servers: Vec<ParsedListEntry> = output
        .lines()
        .filter(|line| !line.trim().is_empty())
        .filter_map(parse_listing_line)
        .collect();

    debug!(count = servers.len(), "Parsed CLI server listing");
    servers
}

fn parse_listing_line(line: &str) -> Option<ParsedListEntry> {
    let (name, description) = line.split_once(':')?;
    let name = name.trim();
    if name.is_empty() {
        return None;
    }

    Some(ParsedListEntry::new(name, detect_transport(description.trim())))
}

/// Explicit trailing tag wins, then a URL means `http`, otherwise `stdio`.
fn detect_transport(description: &str) -> TransportType {
    let tagged = TRANSPORT_TAG_REGEX
        .captures(description)
        .and_then(|caps| caps[1].parse::<TransportType>().ok());

    match tagged {
        Some(transport) => transport,
        None if description.starts_with("http://") || description.starts_with("https://") => {
            TransportType::Http
        }
        None => TransportType::Stdio,
    }
}
