//! Build script that generates branding constants from branding.toml
//!
//! This reads the workspace-level branding.toml and generates Rust constants
//! that are included at compile time.

use std::env;
use std::fs;
use std::path::Path;

fn main() {
    // Re-run if branding.toml changes
    println!("cargo:rerun-if-changed=../../branding.toml");

    // Find branding.toml relative to this crate (2 levels up to workspace root)
    let manifest_dir = env::var("CARGO_MANIFEST_DIR").unwrap();
    let workspace_root = Path::new(&manifest_dir).parent().unwrap().parent().unwrap();
    let branding_path = workspace_root.join("branding.toml");

    let content = fs::read_to_string(&branding_path).unwrap_or_default();

    let display_name = extract_toml_string(&content, "display_name").unwrap_or("MCP Bridge");
    let cli_program = extract_toml_string(&content, "cli_program").unwrap_or("claude");
    let registry_key = extract_toml_string(&content, "registry_key").unwrap_or("mcpServers");
    let user_config_file =
        extract_toml_string(&content, "user_config_file").unwrap_or(".claude.json");
    let desktop_app_dir = extract_toml_string(&content, "desktop_app_dir").unwrap_or("Claude");
    let desktop_config_file = extract_toml_string(&content, "desktop_config_file")
        .unwrap_or("claude_desktop_config.json");
    let log_prefix = extract_toml_string(&content, "log_prefix").unwrap_or("mcpbridge");

    let out_dir = env::var("OUT_DIR").unwrap();
    let rust_path = Path::new(&out_dir).join("branding_generated.rs");

    let rust_code = format!(
        r#"// Auto-generated branding constants from branding.toml
// DO NOT EDIT - regenerate with `cargo build`

/// User-facing display name
pub const DISPLAY_NAME: &str = {display_name:?};

/// External CLI program the bridge drives
pub const CLI_PROGRAM: &str = {cli_program:?};

/// Top-level key holding the server registry in config files
pub const REGISTRY_KEY: &str = {registry_key:?};

/// User-level config file name, relative to the home directory
pub const USER_CONFIG_FILE: &str = {user_config_file:?};

/// Desktop app directory name inside each platform's config location
pub const DESKTOP_APP_DIR: &str = {desktop_app_dir:?};

/// Desktop app config file name
pub const DESKTOP_CONFIG_FILE: &str = {desktop_config_file:?};

/// Log file prefix
pub const LOG_PREFIX: &str = {log_prefix:?};
"#
    );

    fs::write(&rust_path, rust_code).expect("Failed to write branding_generated.rs");
}

/// Extract a string value from TOML content (simple parser, no dependencies)
fn extract_toml_string<'a>(content: &'a str, key: &str) -> Option<&'a str> {
    for line in content.lines() {
        let line = line.trim();
        let Some(rest) = line.strip_prefix(key) else {
            continue;
        };
        let Some(value) = rest.trim_start().strip_prefix('=') else {
            continue;
        };
        let value = value.trim();
        if value.starts_with('"') && value.ends_with('"') && value.len() >= 2 {
            return Some(&value[1..value.len() - 1]);
        }
    }
    None
}
