//! TokioProcessRunner against real programs

#![cfg(unix)]

use std::io;
use std::time::Duration;

use mcpbridge_process::TokioProcessRunner;
use pretty_assertions::assert_eq;
use tests::*;

fn sh(script: &str) -> Vec<String> {
    vec!["-c".to_string(), script.to_string()]
}

#[tokio::test]
async fn test_captures_stdout() {
    let output = TokioProcessRunner::new()
        .run("sh", &sh("printf 'fs: npx server-fs\\n'"))
        .await
        .unwrap();

    assert_eq!(output.exit_code, Some(0));
    assert_eq!(output.stdout, "fs: npx server-fs\n");
    assert_eq!(output.stderr, "");
    assert!(output.success());
}

#[tokio::test]
async fn test_nonzero_exit_is_not_an_error() {
    let output = TokioProcessRunner::new()
        .run("sh", &sh("echo 'No MCP server found' >&2; exit 3"))
        .await
        .unwrap();

    assert_eq!(output.exit_code, Some(3));
    assert_eq!(output.stderr, "No MCP server found\n");

    let err = output.into_result().unwrap_err();
    assert!(matches!(err, BridgeError::Tool { exit_code: Some(3), .. }));
}

#[tokio::test]
async fn test_arguments_are_not_shell_interpreted() {
    let args = vec!["%s|".to_string(), "$(whoami); ls *".to_string()];
    let output = TokioProcessRunner::new().run("printf", &args).await.unwrap();

    assert_eq!(output.stdout, "$(whoami); ls *|");
}

#[tokio::test]
async fn test_killed_by_signal_has_no_exit_code() {
    let output = TokioProcessRunner::new()
        .run("sh", &sh("kill -9 $$"))
        .await
        .unwrap();

    assert_eq!(output.exit_code, None);
    assert!(!output.success());
}

#[tokio::test]
async fn test_missing_program_is_spawn_failure() {
    let err = TokioProcessRunner::new()
        .run("mcpbridge-no-such-program", &[])
        .await
        .unwrap_err();

    match err {
        BridgeError::Spawn { program, source } => {
            assert_eq!(program, "mcpbridge-no-such-program");
            assert_eq!(source.kind(), io::ErrorKind::NotFound);
        }
        other => panic!("expected spawn failure, got {:?}", other),
    }
}

#[tokio::test]
async fn test_search_path_restricts_lookup() {
    let empty = tempfile::TempDir::new().unwrap();
    let err = TokioProcessRunner::new()
        .with_search_path(empty.path().as_os_str())
        .run("sh", &sh("true"))
        .await
        .unwrap_err();

    assert!(matches!(err, BridgeError::Spawn { .. }));
}

#[tokio::test]
async fn test_timeout_kills_slow_child() {
    let err = TokioProcessRunner::new()
        .with_timeout(Some(Duration::from_millis(200)))
        .run("sh", &sh("sleep 5"))
        .await
        .unwrap_err();

    match err {
        BridgeError::Timeout { program, after } => {
            assert_eq!(program, "sh");
            assert_eq!(after, Duration::from_millis(200));
        }
        other => panic!("expected timeout, got {:?}", other),
    }
}

#[tokio::test]
async fn test_fast_child_within_timeout() {
    let output = TokioProcessRunner::new()
        .with_timeout(Some(Duration::from_secs(10)))
        .run("sh", &sh("echo done"))
        .await
        .unwrap();

    assert_eq!(output.stdout, "done\n");
}
