//! Parser for `mcp get <name>` output.

use serde_json::{Map, Value};
use tracing::debug;

/// Labels recognized on the line-oriented path, in priority order.
///
/// A line is matched against at most one label.
const DETAIL_LABELS: [(&str, &str); 4] = [
    ("Name:", "name"),
    ("Type:", "type"),
    ("Command:", "command"),
    ("URL:", "url"),
];

pub const RAW_OUTPUT_KEY: &str = "raw_output";
pub const PARSE_ERROR_KEY: &str = "parse_error";

/// Convert raw detail text into a record.
///
/// An embedded JSON object is returned verbatim. Otherwise labelled fields
/// are extracted line by line and the input is kept under `raw_output`; if a
/// JSON-looking span failed to parse, the error text is kept under
/// `parse_error`, alongside any fields extracted from the labelled lines.
/// Never fails.
pub fn parse_detail(output: &str) -> Map<String, Value> {
    let parse_error = match json_span(output) {
        Some(span) => match serde_json::from_str::<Map<String, Value>>(span) {
            Ok(record) => return record,
            Err(e) => {
                debug!(error = %e, "Detail output contains malformed JSON, extracting fields");
                Some(e.to_string())
            }
        },
        None => None,
    };

    let mut record = Map::new();
    record.insert(RAW_OUTPUT_KEY.to_string(), Value::String(output.to_string()));

    for line in output.lines() {
        if let Some((key, value)) = extract_labelled(line) {
            record.insert(key.to_string(), Value::String(value.to_string()));
        }
    }

    if let Some(message) = parse_error {
        record.insert(PARSE_ERROR_KEY.to_string(), Value::String(message));
    }

    record
}

/// Span from the first `{` to the last `}`
fn json_span(output: &str) -> Option<&str> {
    let start = output.find('{')?;
    let end = output.rfind('}')?;
    (end > start).then(|| &output[start..=end])
}

fn extract_labelled(line: &str) -> Option<(&'static str, &str)> {
    DETAIL_LABELS.iter().find_map(|(label, key)| {
        let pos = line.find(label)?;
        Some((*key, line[pos + label.len()..].trim()))
    })
}
