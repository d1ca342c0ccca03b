//! Runtime configuration for the bridge

use std::path::PathBuf;
use std::time::Duration;

use mcpbridge_core::{branding, BridgeError, BridgeResult};

pub const ENV_PROGRAM: &str = "MCPBRIDGE_PROGRAM";
pub const ENV_HOME: &str = "MCPBRIDGE_HOME";
pub const ENV_TIMEOUT_SECS: &str = "MCPBRIDGE_TIMEOUT_SECS";
pub const ENV_LOGIN_SHELL_PATH: &str = "MCPBRIDGE_LOGIN_SHELL_PATH";

/// Bridge configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BridgeConfig {
    /// Executable invoked for every CLI operation
    pub program: String,
    /// Root for the config-file fallback; the user's home directory when unset
    pub home_dir: Option<PathBuf>,
    /// Kill the CLI after this long; no limit when unset
    pub timeout: Option<Duration>,
    /// Resolve the program on the login shell's PATH
    pub use_login_shell_path: bool,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            program: branding::CLI_PROGRAM.to_string(),
            home_dir: None,
            timeout: None,
            use_login_shell_path: false,
        }
    }
}

impl BridgeConfig {
    /// Defaults overridden by `MCPBRIDGE_*` environment variables
    pub fn from_env() -> BridgeResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an injectable variable source
    pub fn from_lookup<F>(lookup: F) -> BridgeResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        let value = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        if let Some(program) = value(ENV_PROGRAM) {
            config.program = program;
        }
        if let Some(home) = value(ENV_HOME) {
            config.home_dir = Some(PathBuf::from(home));
        }
        if let Some(secs) = value(ENV_TIMEOUT_SECS) {
            config.timeout = parse_timeout_secs(&secs)?;
        }
        if let Some(flag) = value(ENV_LOGIN_SHELL_PATH) {
            config.use_login_shell_path = parse_flag(ENV_LOGIN_SHELL_PATH, &flag)?;
        }

        Ok(config)
    }
}

/// Seconds to a timeout; `0` disables it
pub fn parse_timeout_secs(raw: &str) -> BridgeResult<Option<Duration>> {
    let secs: u64 = raw.trim().parse().map_err(|_| {
        BridgeError::validation(format!("{} must be a whole number of seconds, got '{}'", ENV_TIMEOUT_SECS, raw))
    })?;
    Ok((secs > 0).then(|| Duration::from_secs(secs)))
}

fn parse_flag(key: &str, raw: &str) -> BridgeResult<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(BridgeError::validation(format!(
            "{} must be true or false, got '{}'",
            key, raw
        ))),
    }
}
