//! Child process execution
//!
//! One OS process per call. Arguments are passed as discrete argv elements and
//! never go through a shell. stdout and stderr are buffered fully, so this is
//! not meant for tools with unbounded output.

use std::ffi::{OsStr, OsString};
use std::io;
use std::path::PathBuf;
use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use mcpbridge_core::{BridgeError, BridgeResult};
use tokio::process::Command;
use tracing::{debug, error, warn};

use crate::platform::configure_child_process_platform;
use crate::shell_env;

/// Buffered result of a child process that ran to completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessOutput {
    /// `None` when the child was terminated by a signal
    pub exit_code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl ProcessOutput {
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }

    /// Turn a nonzero exit into a tool failure carrying stderr
    pub fn into_result(self) -> BridgeResult<Self> {
        if self.success() {
            Ok(self)
        } else {
            Err(BridgeError::Tool {
                exit_code: self.exit_code,
                stderr: self.stderr,
            })
        }
    }
}

/// Runs an external program and collects its output.
///
/// `Err` means the program could not be run at all (or timed out); a program
/// that ran and failed is an `Ok` with a nonzero exit code.
#[async_trait]
pub trait ProcessRunner: Send + Sync {
    async fn run(&self, program: &str, args: &[String]) -> BridgeResult<ProcessOutput>;
}

/// `ProcessRunner` on top of `tokio::process`
#[derive(Debug, Clone, Default)]
pub struct TokioProcessRunner {
    /// PATH used for lookup and handed to the child; process PATH when unset
    search_path: Option<OsString>,
    timeout: Option<Duration>,
}

impl TokioProcessRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look programs up on the login shell's PATH instead of the process PATH
    pub fn with_login_shell_path(mut self, enabled: bool) -> Self {
        self.search_path = if enabled {
            shell_env::login_shell_path().map(OsStr::to_os_string)
        } else {
            None
        };
        self
    }

    pub fn with_search_path(mut self, path: impl Into<OsString>) -> Self {
        self.search_path = Some(path.into());
        self
    }

    /// Kill the child and fail if it runs longer than `limit`
    pub fn with_timeout(mut self, limit: Option<Duration>) -> Self {
        self.timeout = limit;
        self
    }

    fn resolve_program(&self, program: &str) -> BridgeResult<PathBuf> {
        let lookup = match &self.search_path {
            Some(path) => std::env::current_dir()
                .ok()
                .and_then(|cwd| which::which_in(program, Some(path), cwd).ok()),
            None => which::which(program).ok(),
        };

        lookup.ok_or_else(|| BridgeError::Spawn {
            program: program.to_string(),
            source: io::Error::new(
                io::ErrorKind::NotFound,
                format!("Command not found: {}. Ensure it's installed and in PATH.", program),
            ),
        })
    }
}

#[async_trait]
impl ProcessRunner for TokioProcessRunner {
    async fn run(&self, program: &str, args: &[String]) -> BridgeResult<ProcessOutput> {
        let resolved = self.resolve_program(program).map_err(|e| {
            error!(program = %program, "{}", e);
            e
        })?;

        debug!(program = %program, path = ?resolved, ?args, "Running CLI command");

        let mut cmd = Command::new(&resolved);
        cmd.args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);
        if let Some(path) = &self.search_path {
            cmd.env("PATH", path);
        }
        configure_child_process_platform(&mut cmd);

        let pending = cmd.output();
        let output = match self.timeout {
            Some(limit) => match tokio::time::timeout(limit, pending).await {
                Ok(result) => result,
                Err(_) => {
                    warn!(program = %program, ?limit, "CLI command timed out, child killed");
                    return Err(BridgeError::Timeout {
                        program: program.to_string(),
                        after: limit,
                    });
                }
            },
            None => pending.await,
        };

        let output = output.map_err(|source| {
            error!(program = %program, error = %source, "Failed to spawn CLI command");
            BridgeError::Spawn {
                program: program.to_string(),
                source,
            }
        })?;

        let result = ProcessOutput {
            exit_code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        };

        debug!(
            program = %program,
            exit_code = ?result.exit_code,
            stdout_bytes = output.stdout.len(),
            stderr_bytes = output.stderr.len(),
            "CLI command finished"
        );

        Ok(result)
    }
}
