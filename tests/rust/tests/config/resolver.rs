//! ConfigFileResolver across all candidate files

use mcpbridge_core::{ConfigFileResolver, SourceKind};
use pretty_assertions::assert_eq;
use serde_json::json;
use tempfile::TempDir;
use tests::fixtures::*;
use tests::*;

fn names(servers: &[ServerRecord]) -> Vec<(&str, Scope)> {
    servers.iter().map(|s| (s.name.as_str(), s.scope)).collect()
}

fn find<'a>(servers: &'a [ServerRecord], name: &str) -> &'a ServerRecord {
    servers
        .iter()
        .find(|s| s.name == name)
        .unwrap_or_else(|| panic!("missing {}", name))
}

#[tokio::test]
async fn test_empty_home_yields_nothing() {
    let home = TempDir::new().unwrap();
    let servers = ConfigFileResolver::new(home.path()).resolve().await;
    assert!(servers.is_empty());
}

#[tokio::test]
async fn test_candidates_in_fixed_order() {
    let home = TempDir::new().unwrap();
    let resolver = ConfigFileResolver::new(home.path());

    let kinds: Vec<_> = resolver.sources().iter().map(|s| s.kind).collect();
    assert_eq!(
        kinds,
        vec![
            SourceKind::UserConfig,
            SourceKind::DesktopMacos,
            SourceKind::DesktopLinux,
            SourceKind::DesktopWindows,
        ]
    );

    let paths: Vec<_> = resolver.sources().iter().map(|s| s.path.clone()).collect();
    assert_eq!(
        paths,
        vec![
            home.path().join(user_config_path()),
            home.path().join(macos_desktop_path()),
            home.path().join(linux_desktop_path()),
            home.path().join(windows_desktop_path()),
        ]
    );
}

#[tokio::test]
async fn test_all_four_files_merged_in_order() {
    let home = TempDir::new().unwrap();
    // written out of order on purpose
    write_registry(home.path(), windows_desktop_path(), json!({"win": {"command": "w"}}));
    write_registry(home.path(), user_config_path(), json!({"cli": {"command": "c"}}));
    write_registry(home.path(), linux_desktop_path(), json!({"linux": {"command": "l"}}));
    write_registry(home.path(), macos_desktop_path(), json!({"mac": {"command": "m"}}));

    let servers = ConfigFileResolver::new(home.path()).resolve().await;

    assert_eq!(
        names(&servers),
        vec![
            ("cli", Scope::Project),
            ("mac", Scope::User),
            ("linux", Scope::User),
            ("win", Scope::User),
        ]
    );
}

#[tokio::test]
async fn test_each_entry_once_with_file_key_order() {
    let home = TempDir::new().unwrap();
    let path = write_config(
        home.path(),
        user_config_path(),
        r#"{"mcpServers": {"zeta": {"command": "z"}, "alpha": {"command": "a"}, "mid": {"command": "m"}}}"#,
    );

    let servers = ConfigFileResolver::new(home.path()).resolve().await;

    let order: Vec<_> = servers.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(order, vec!["zeta", "alpha", "mid"]);
    assert!(servers.iter().all(|s| s.source == path && s.id == s.name));
}

#[tokio::test]
async fn test_duplicate_names_not_reconciled() {
    let home = TempDir::new().unwrap();
    write_registry(home.path(), user_config_path(), json!({"fs": {"command": "one"}}));
    write_registry(home.path(), macos_desktop_path(), json!({"fs": {"command": "two"}}));

    let servers = ConfigFileResolver::new(home.path()).resolve().await;

    let commands: Vec<_> = servers.iter().map(|s| s.command.as_deref()).collect();
    assert_eq!(commands, vec![Some("one"), Some("two")]);
}

#[tokio::test]
async fn test_transport_detection_and_defaults() {
    let home = TempDir::new().unwrap();
    write_registry(
        home.path(),
        linux_desktop_path(),
        json!({
            "explicit": {"transport": "http", "url": "https://h/sse"},
            "newer_cli": {"type": "sse", "url": "https://h/events"},
            "streamable": {"type": "streamable-http", "url": "https://h/mcp"},
            "sse_url": {"url": "https://h/sse", "headers": {"Authorization": "Bearer t"}},
            "http_url": {"url": "https://h/mcp", "timeout": 5000},
            "local": {"command": "node", "args": ["s.js"], "env": {"K": "V"}},
            "unknown": {"transport": "websocket", "command": "x"},
        }),
    );

    let servers = ConfigFileResolver::new(home.path()).resolve().await;
    let by_name = |name: &str| find(&servers, name).clone();

    assert_eq!(by_name("explicit").transport_type, TransportType::Http);
    assert_eq!(by_name("newer_cli").transport_type, TransportType::Sse);
    assert_eq!(by_name("streamable").transport_type, TransportType::Http);
    assert_eq!(by_name("sse_url").transport_type, TransportType::Sse);
    assert_eq!(by_name("sse_url").headers["Authorization"], "Bearer t");
    assert_eq!(by_name("http_url").transport_type, TransportType::Http);
    assert_eq!(by_name("http_url").timeout_ms, 5000);
    assert_eq!(by_name("local").timeout_ms, 30_000);
    assert_eq!(by_name("local").args, vec!["s.js"]);
    assert_eq!(by_name("unknown").transport_type, TransportType::Stdio);
}

#[tokio::test]
async fn test_unusable_files_skipped() {
    let home = TempDir::new().unwrap();
    write_config(home.path(), user_config_path(), "{\"mcpServers\": ");
    write_config(home.path(), macos_desktop_path(), r#"{"mcpServers": ["not", "an", "object"]}"#);
    // a directory where a file is expected cannot be read
    std::fs::create_dir_all(home.path().join(linux_desktop_path())).unwrap();
    write_registry(home.path(), windows_desktop_path(), json!({"ok": {"command": "run"}}));

    let servers = ConfigFileResolver::new(home.path()).resolve().await;

    assert_eq!(names(&servers), vec![("ok", Scope::User)]);
}

#[tokio::test]
async fn test_records_serialize_camel_case() {
    let home = TempDir::new().unwrap();
    write_registry(home.path(), user_config_path(), json!({"fs": {"command": "npx"}}));

    let servers = ConfigFileResolver::new(home.path()).resolve().await;
    let json = serde_json::to_value(&servers[0]).unwrap();

    assert_eq!(json["type"], json!("stdio"));
    assert_eq!(json["scope"], json!("project"));
    assert_eq!(json["timeoutMs"], json!(30_000));
    assert!(json.get("createdAt").is_some());
    assert!(json.get("url").is_none());
}

#[tokio::test]
async fn test_loosely_typed_fields_keep_every_entry() {
    let home = TempDir::new().unwrap();
    write_registry(
        home.path(),
        user_config_path(),
        json!({
            "num_env": {"command": "srv", "env": {"PORT": 8080}},
            "str_timeout": {"command": "srv", "timeout": "60000"},
            "float_timeout": {"command": "srv", "timeout": 1500.5},
            "zero": {"command": "srv", "timeout": 0},
        }),
    );

    let servers = ConfigFileResolver::new(home.path()).resolve().await;

    let resolved: Vec<_> = servers.iter().map(|s| (s.name.as_str(), s.timeout_ms)).collect();
    assert_eq!(
        resolved,
        vec![
            ("num_env", 30_000),
            ("str_timeout", 60_000),
            ("float_timeout", 30_000),
            ("zero", 30_000),
        ]
    );
    assert_eq!(find(&servers, "num_env").env["PORT"], "8080");
}
