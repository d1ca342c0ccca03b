//! Runner spawn settings across platforms
//!
//! `TokioProcessRunner` applies the platform flags (CREATE_NO_WINDOW on
//! Windows) and a null stdin to every child.

use mcpbridge_process::TokioProcessRunner;
use pretty_assertions::assert_eq;
use tests::*;

#[tokio::test]
async fn test_runner_captures_output_with_platform_flags() {
    #[cfg(windows)]
    let (program, args) = ("cmd.exe", vec!["/C".to_string(), "echo hello".to_string()]);
    #[cfg(unix)]
    let (program, args) = ("echo", vec!["hello".to_string()]);

    let output = TokioProcessRunner::new().run(program, &args).await.unwrap();

    assert!(output.success(), "child failed: {:?}", output);
    assert_eq!(output.stdout.trim(), "hello");
}

/// A child that reads stdin sees EOF at once instead of waiting on the caller
#[cfg(unix)]
#[tokio::test]
async fn test_runner_child_stdin_is_closed() {
    let output = TokioProcessRunner::new()
        .with_timeout(Some(std::time::Duration::from_secs(10)))
        .run("cat", &[])
        .await
        .unwrap();

    assert_eq!(output.exit_code, Some(0));
    assert_eq!(output.stdout, "");
}
