//! CLI listing with config-file fallback

use pretty_assertions::assert_eq;
use serde_json::json;
use tests::fixtures::*;
use tests::*;

#[tokio::test]
async fn test_servers_reads_config_files_without_cli() {
    let harness = BridgeTestHarness::new();
    write_registry(
        harness.home.path(),
        user_config_path(),
        json!({"fs": {"command": "npx", "args": ["-y", "server-fs"]}}),
    );

    let response = harness.service.servers(Some(Scope::User)).await;

    assert!(response.success);
    assert!(response.diagnostic.is_none());
    assert_eq!(response.servers.len(), 1);
    // the scope hint does not filter
    assert_eq!(response.servers[0].scope, Scope::Project);
    assert_eq!(harness.runner.call_count(), 0);
}

#[tokio::test]
async fn test_fallback_when_cli_missing() {
    let harness = BridgeTestHarness::with_runner(
        RecordingRunner::new().with_spawn_failure("Command not found: claude"),
    );
    write_registry(
        harness.home.path(),
        linux_desktop_path(),
        json!({"docs": {"url": "https://docs.example.com/sse"}}),
    );

    let listing = harness.service.list_or_fallback(None).await.unwrap();

    let ServerListing::ConfigFiles(response) = listing else {
        panic!("expected config file listing");
    };
    assert_eq!(response.servers.len(), 1);
    assert_eq!(response.servers[0].name, "docs");
    assert_eq!(response.servers[0].transport_type, TransportType::Sse);
    assert_eq!(
        response.diagnostic.as_deref(),
        Some("Failed to run Claude CLI: Command not found: claude")
    );
}

#[tokio::test]
async fn test_fallback_when_cli_exits_nonzero() {
    let harness = BridgeTestHarness::with_runner(RecordingRunner::new().with_exit(1, "", "crashed"));

    let listing = harness.service.list_or_fallback(None).await.unwrap();

    assert!(listing.is_fallback());
    let json = serde_json::to_value(&listing).unwrap();
    assert_eq!(json["servers"], json!([]));
    assert_eq!(json["diagnostic"], json!("Claude CLI command failed: crashed"));
}

#[tokio::test]
async fn test_cli_listing_used_when_available() {
    let harness = BridgeTestHarness::with_runner(RecordingRunner::new().with_stdout("fs: npx server-fs\n"));
    write_registry(
        harness.home.path(),
        user_config_path(),
        json!({"other": {"command": "x"}}),
    );

    let listing = harness.service.list_or_fallback(Some(Scope::Project)).await.unwrap();

    let ServerListing::Cli(response) = listing else {
        panic!("expected CLI listing");
    };
    assert_eq!(response.servers.len(), 1);
    assert_eq!(response.servers[0].name, "fs");
}
