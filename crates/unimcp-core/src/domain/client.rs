//! Descriptors for the AI-tool clients whose configuration we synchronize.
//!
//! Each client is pure data: where its config file lives per OS, and which
//! merge strategy its document shape requires. Adding a client is a data
//! change in the table (`unimcp_sync::clients`), never a new code path.

use serde::Serialize;

/// Desktop operating systems the client path table is defined for.
///
/// Anything else (Linux, BSD, ...) is an unsupported platform for config
/// synchronization and resolves to `None` rather than a guessed path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HostOs {
    Windows,
    MacOs,
}

impl HostOs {
    /// Detect the host OS, or `None` when the path table does not cover
    /// the current platform.
    pub fn current() -> Option<Self> {
        if cfg!(target_os = "windows") {
            Some(Self::Windows)
        } else if cfg!(target_os = "macos") {
            Some(Self::MacOs)
        } else {
            None
        }
    }
}

impl std::fmt::Display for HostOs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Windows => write!(f, "Windows"),
            Self::MacOs => write!(f, "macOS"),
        }
    }
}

/// How a client's configuration file is located on disk.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum ConfigLocation {
    /// A config file inside a per-OS directory under the user's home.
    ///
    /// `windows` is relative to `%USERPROFILE%` (so `%APPDATA%` targets are
    /// expressed as `AppData/Roaming/...`), `macos` is relative to `~`.
    HomeRelative {
        windows: &'static str,
        macos: &'static str,
        file: &'static str,
    },
    /// A single fixed dot-file directly under the home directory,
    /// identical on every supported OS.
    HomeFile { file: &'static str },
    /// A config file inside the current project/workspace.
    ProjectRelative {
        dir: &'static str,
        file: &'static str,
    },
}

/// Where the server registration lands inside the client's document.
///
/// The strategy is part of the descriptor so that the merger selects
/// behavior by data, never by comparing display names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MergeStrategy {
    /// `mcpServers` lives at the document root.
    FlatRoot,
    /// `mcpServers` lives under `projects[<project key>]`. The `projects`
    /// object and the specific project entry must already exist; the merger
    /// never invents that structure.
    ProjectScoped,
}

/// Descriptor for one supported AI-tool client.
#[derive(Debug, Clone, Serialize)]
pub struct McpClient {
    /// Stable identifier used on the CLI and in logs.
    pub id: &'static str,
    /// Product name as users know it.
    pub display_name: &'static str,
    /// Where the client's config file lives.
    pub location: ConfigLocation,
    /// Which document shape the client uses.
    pub merge_strategy: MergeStrategy,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_host_os_display() {
        assert_eq!(HostOs::Windows.to_string(), "Windows");
        assert_eq!(HostOs::MacOs.to_string(), "macOS");
    }

    #[test]
    fn test_descriptor_serializes_with_location_kind() {
        let client = McpClient {
            id: "cursor",
            display_name: "Cursor",
            location: ConfigLocation::HomeRelative {
                windows: ".cursor",
                macos: ".cursor",
                file: "mcp.json",
            },
            merge_strategy: MergeStrategy::FlatRoot,
        };

        let json = serde_json::to_string(&client).unwrap();
        assert!(json.contains("\"kind\":\"home_relative\""));
        assert!(json.contains("\"merge_strategy\":\"flat_root\""));
    }
}
