//! Bridge configuration.
//!
//! Settings are plain values resolved once at startup; the only environment
//! override is the npm executable path, mirroring how operators point the
//! bridge at a non-PATH npm.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Environment variable overriding the npm executable path.
pub const NPM_EXECUTABLE_ENV: &str = "UNIMCP_NPM_EXECUTABLE";

/// Configuration for one bridge instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BridgeSettings {
    /// Root of the host project whose server installation we manage.
    pub project_root: PathBuf,

    /// Explicit npm executable; when absent, PATH-based resolution with
    /// platform augmentation is used.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub npm_executable: Option<PathBuf>,

    /// Home directory override, used by tests and unusual setups.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub home_dir: Option<PathBuf>,
}

impl BridgeSettings {
    /// Settings for a project, picking up environment overrides.
    pub fn for_project(project_root: impl Into<PathBuf>) -> Self {
        Self {
            project_root: project_root.into(),
            npm_executable: std::env::var_os(NPM_EXECUTABLE_ENV).map(PathBuf::from),
            home_dir: None,
        }
    }

    /// Set an explicit npm executable.
    #[must_use]
    pub fn with_npm_executable(mut self, path: impl Into<PathBuf>) -> Self {
        self.npm_executable = Some(path.into());
        self
    }

    /// Override the home directory.
    #[must_use]
    pub fn with_home_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.home_dir = Some(path.into());
        self
    }

    /// Effective home directory: the override, or the OS home.
    pub fn home(&self) -> Option<PathBuf> {
        self.home_dir.clone().or_else(dirs::home_dir)
    }

    /// Root of the host project.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }
}
