//! Shared test utilities and fixtures for McpBridge integration tests.

pub use mcpbridge_core::{
    AddServerRequest, BridgeError, Scope, ServerListing, ServerRecord, TransportType,
};
pub use mcpbridge_process::{ProcessOutput, ProcessRunner};

/// Scripted process runner
pub mod mocks;
pub use mocks::RecordingRunner;

pub use services::BridgeTestHarness;

/// Config file fixtures
pub mod fixtures {
    use mcpbridge_core::branding;
    use serde_json::{Map, Value};
    use std::path::{Path, PathBuf};

    /// Relative paths of the four candidate files, in probe order
    pub fn user_config_path() -> PathBuf {
        PathBuf::from(branding::USER_CONFIG_FILE)
    }

    pub fn macos_desktop_path() -> PathBuf {
        Path::new("Library/Application Support")
            .join(branding::DESKTOP_APP_DIR)
            .join(branding::DESKTOP_CONFIG_FILE)
    }

    pub fn linux_desktop_path() -> PathBuf {
        Path::new(".config")
            .join(branding::DESKTOP_APP_DIR)
            .join(branding::DESKTOP_CONFIG_FILE)
    }

    pub fn windows_desktop_path() -> PathBuf {
        Path::new("AppData/Roaming")
            .join(branding::DESKTOP_APP_DIR)
            .join(branding::DESKTOP_CONFIG_FILE)
    }

    /// Wrap server entries in a config document
    pub fn registry(servers: Value) -> Value {
        let mut document = Map::new();
        document.insert(branding::REGISTRY_KEY.to_string(), servers);
        Value::Object(document)
    }

    /// Write `content` to `home/relative`, creating parent directories
    pub fn write_config(home: &Path, relative: impl AsRef<Path>, content: &str) -> PathBuf {
        let path = home.join(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create config directory");
        }
        std::fs::write(&path, content).expect("Failed to write config file");
        path
    }

    pub fn write_registry(home: &Path, relative: impl AsRef<Path>, servers: Value) -> PathBuf {
        write_config(home, relative, &registry(servers).to_string())
    }
}
