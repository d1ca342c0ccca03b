//! Candidate config-file locations

use std::path::{Path, PathBuf};

use crate::branding;
use crate::domain::Scope;

/// Which convention a candidate file follows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    /// Home-directory dotfile written by the CLI
    UserConfig,
    DesktopMacos,
    DesktopLinux,
    DesktopWindows,
}

impl SourceKind {
    /// The CLI's home dotfile is reported as `project`, desktop files as `user`.
    pub fn scope(&self) -> Scope {
        match self {
            SourceKind::UserConfig => Scope::Project,
            SourceKind::DesktopMacos | SourceKind::DesktopLinux | SourceKind::DesktopWindows => {
                Scope::User
            }
        }
    }
}

/// One candidate file path with its scope tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigSource {
    pub path: PathBuf,
    pub kind: SourceKind,
}

impl ConfigSource {
    pub fn new(path: impl Into<PathBuf>, kind: SourceKind) -> Self {
        Self {
            path: path.into(),
            kind,
        }
    }

    pub fn scope(&self) -> Scope {
        self.kind.scope()
    }
}

/// Fixed candidate list, in resolution order.
///
/// Every platform's desktop location is probed regardless of the host OS.
pub fn default_sources(home: &Path) -> Vec<ConfigSource> {
    let desktop = |base: PathBuf| base.join(branding::DESKTOP_APP_DIR).join(branding::DESKTOP_CONFIG_FILE);

    vec![
        ConfigSource::new(home.join(branding::USER_CONFIG_FILE), SourceKind::UserConfig),
        ConfigSource::new(
            desktop(home.join("Library").join("Application Support")),
            SourceKind::DesktopMacos,
        ),
        ConfigSource::new(desktop(home.join(".config")), SourceKind::DesktopLinux),
        ConfigSource::new(
            desktop(home.join("AppData").join("Roaming")),
            SourceKind::DesktopWindows,
        ),
    ]
}
