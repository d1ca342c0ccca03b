//! Login-shell PATH resolution
//!
//! Hosts launched from a desktop environment (Finder, Dock, a .desktop file)
//! inherit a minimal PATH, so tools installed through npm, Homebrew, nvm or
//! Volta are not found. This module asks the user's login shell for its PATH
//! once and caches the merged result for the life of the process.

use std::ffi::{OsStr, OsString};
use std::sync::OnceLock;
use tracing::{debug, info, warn};

static LOGIN_SHELL_PATH: OnceLock<Option<OsString>> = OnceLock::new();

/// PATH as the user's login shell sees it, merged with the process PATH.
///
/// Returns `None` on Windows (GUI apps get the full PATH from the registry)
/// and when the shell cannot be queried.
pub fn login_shell_path() -> Option<&'static OsStr> {
    LOGIN_SHELL_PATH
        .get_or_init(|| {
            #[cfg(unix)]
            {
                query_login_shell()
            }
            #[cfg(not(unix))]
            {
                None
            }
        })
        .as_deref()
}

#[cfg(unix)]
fn query_login_shell() -> Option<OsString> {
    let shell = std::env::var("SHELL").unwrap_or_else(|_| "/bin/sh".to_string());
    debug!(shell = %shell, "Querying login shell for PATH");

    // Interactive first: nvm/Volta/fnm initialise in the rc files
    let shell_path = read_shell_path(&shell, &["-l", "-i", "-c"])
        .or_else(|| read_shell_path(&shell, &["-l", "-c"]));

    let Some(shell_path) = shell_path else {
        warn!(shell = %shell, "Could not read PATH from login shell, keeping process PATH");
        return None;
    };

    let process_path = std::env::var_os("PATH").unwrap_or_default();
    let merged = merge_paths(OsStr::new(&shell_path), &process_path)?;

    info!(
        entries = std::env::split_paths(&merged).count(),
        "Using login shell PATH for CLI invocations"
    );
    Some(merged)
}

#[cfg(unix)]
fn read_shell_path(shell: &str, flags: &[&str]) -> Option<String> {
    use std::process::{Command, Stdio};

    let output = Command::new(shell)
        .args(flags)
        .arg(r#"printf "%s" "$PATH""#)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .output();

    match output {
        Ok(output) if output.status.success() => {
            let path = String::from_utf8_lossy(&output.stdout).trim().to_string();
            (!path.is_empty()).then_some(path)
        }
        Ok(output) => {
            debug!(status = %output.status, ?flags, "Login shell exited unsuccessfully");
            None
        }
        Err(e) => {
            debug!(shell = %shell, error = %e, "Failed to spawn login shell");
            None
        }
    }
}

/// Join two PATH values, `primary` entries first, dropping empties and duplicates.
pub fn merge_paths(primary: &OsStr, secondary: &OsStr) -> Option<OsString> {
    let mut seen = std::collections::HashSet::new();
    let entries: Vec<_> = std::env::split_paths(primary)
        .chain(std::env::split_paths(secondary))
        .filter(|entry| !entry.as_os_str().is_empty())
        .filter(|entry| seen.insert(entry.clone()))
        .collect();

    std::env::join_paths(entries).ok()
}
