//! The located MCP server bundle.
//!
//! A `ServerInstallation` is recomputed on every synchronization request so
//! it always reflects the current on-disk state; nothing caches it.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Registration key for the server inside client config documents.
pub const SERVER_NAME: &str = "mcp-unity";

/// Launcher the clients invoke to start the server.
pub const SERVER_COMMAND: &str = "node";

/// Entry point of the built server, relative to the bundle directory.
pub const SERVER_ENTRY_POINT: &str = "build/index.js";

/// Package-registry identifier of the server package.
pub const SERVER_PACKAGE_ID: &str = "com.gamelovers.mcp-unity";

/// Name of the directory holding the server bundle inside the package.
pub const SERVER_BUNDLE_DIR: &str = "Server~";

/// Build-configuration marker used to find a loose-asset installation.
pub const SERVER_MARKER_FILE: &str = "tsconfig.json";

/// How the server bundle got onto disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InstallMode {
    /// Installed through the package registry.
    Registry,
    /// Present as a loose asset inside the host project.
    LooseAsset,
}

/// A resolved server bundle: normalized absolute path plus install mode.
///
/// The path invariant holds from construction on: forward slashes only,
/// no repeated separators, no leading `~` artifact. Normalization happens
/// here, per path segment, so serialized fragments never need (and never
/// get) textual post-processing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerInstallation {
    path: String,
    mode: InstallMode,
}

impl ServerInstallation {
    /// Create an installation from a raw resolved path.
    pub fn new(path: impl AsRef<Path>, mode: InstallMode) -> Self {
        Self {
            path: normalize_path(path.as_ref()),
            mode,
        }
    }

    /// Normalized absolute path of the server bundle directory.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// How the bundle was installed.
    pub const fn mode(&self) -> InstallMode {
        self.mode
    }

    /// Path of the built server entry point launched by clients.
    pub fn entry_point(&self) -> String {
        format!("{}/{SERVER_ENTRY_POINT}", self.path)
    }

    /// Directory containing the bundle, used as the project key by
    /// project-scoped clients.
    pub fn parent_dir(&self) -> Option<&str> {
        self.path
            .rsplit_once('/')
            .map(|(parent, _)| if parent.is_empty() { "/" } else { parent })
    }
}

/// Normalize a resolved path into the canonical textual form.
///
/// Backslashes are replaced with forward slashes, a single leading `~`
/// artifact is stripped, relative paths are made absolute, and repeated
/// separators are collapsed segment-wise.
fn normalize_path(path: &Path) -> String {
    let text = path.to_string_lossy().replace('\\', "/");
    let text = text.strip_prefix('~').unwrap_or(&text).to_string();

    let text = if is_absolute_text(&text) {
        text
    } else {
        std::path::absolute(Path::new(&text))
            .map(|p| p.to_string_lossy().replace('\\', "/"))
            .unwrap_or(text)
    };

    let rooted = text.starts_with('/');
    let joined = text
        .split('/')
        .filter(|segment| !segment.is_empty())
        .collect::<Vec<_>>()
        .join("/");

    if rooted { format!("/{joined}") } else { joined }
}

/// Absolute in the textual sense: Unix-rooted or Windows drive-rooted.
/// Checked textually so foreign-OS paths normalize the same way everywhere.
fn is_absolute_text(text: &str) -> bool {
    if text.starts_with('/') {
        return true;
    }
    let bytes = text.as_bytes();
    bytes.len() >= 3 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':' && bytes[2] == b'/'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backslashes_become_forward_slashes() {
        let install = ServerInstallation::new(r"C:\Users\dev\proj\Server~", InstallMode::Registry);
        assert_eq!(install.path(), "C:/Users/dev/proj/Server~");
    }

    #[test]
    fn test_repeated_separators_collapse() {
        let install = ServerInstallation::new("/home//dev///proj/Server~", InstallMode::LooseAsset);
        assert_eq!(install.path(), "/home/dev/proj/Server~");
    }

    #[test]
    fn test_leading_tilde_artifact_is_stripped() {
        let install = ServerInstallation::new("~/opt/proj/Server~", InstallMode::Registry);
        assert_eq!(install.path(), "/opt/proj/Server~");
    }

    #[test]
    fn test_interior_tilde_is_preserved() {
        let install = ServerInstallation::new("/opt/proj/Server~", InstallMode::Registry);
        assert_eq!(install.path(), "/opt/proj/Server~");
    }

    #[test]
    fn test_entry_point_and_parent_dir() {
        let install = ServerInstallation::new("/opt/proj/Server~", InstallMode::Registry);
        assert_eq!(install.entry_point(), "/opt/proj/Server~/build/index.js");
        assert_eq!(install.parent_dir(), Some("/opt/proj"));
    }
}
