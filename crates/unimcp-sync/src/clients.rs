//! The client path table.
//!
//! One row per supported AI-tool client. Adding a client means adding a
//! row; path resolution and merging need no new code.

use std::path::{Path, PathBuf};

use unimcp_core::{ConfigLocation, HostOs, McpClient, MergeStrategy};

/// All clients the synchronizer knows how to target.
pub const CLIENTS: &[McpClient] = &[
    McpClient {
        id: "windsurf",
        display_name: "Windsurf",
        location: ConfigLocation::HomeRelative {
            windows: ".codeium/windsurf",
            macos: "Library/Application Support/.codeium/windsurf",
            file: "mcp_config.json",
        },
        merge_strategy: MergeStrategy::FlatRoot,
    },
    McpClient {
        id: "claude_desktop",
        display_name: "Claude Desktop",
        location: ConfigLocation::HomeRelative {
            windows: "AppData/Roaming/Claude",
            macos: "Library/Application Support/Claude",
            file: "claude_desktop_config.json",
        },
        merge_strategy: MergeStrategy::FlatRoot,
    },
    McpClient {
        id: "cursor",
        display_name: "Cursor",
        location: ConfigLocation::HomeRelative {
            windows: ".cursor",
            macos: ".cursor",
            file: "mcp.json",
        },
        merge_strategy: MergeStrategy::FlatRoot,
    },
    McpClient {
        id: "claude_code",
        display_name: "Claude Code",
        location: ConfigLocation::HomeFile {
            file: ".claude.json",
        },
        merge_strategy: MergeStrategy::ProjectScoped,
    },
    McpClient {
        id: "vscode",
        display_name: "VS Code",
        location: ConfigLocation::ProjectRelative {
            dir: ".vscode",
            file: "mcp.json",
        },
        merge_strategy: MergeStrategy::FlatRoot,
    },
];

/// Look up a client descriptor by its stable id.
pub fn client_by_id(id: &str) -> Option<&'static McpClient> {
    CLIENTS.iter().find(|client| client.id == id)
}

/// Resolve the absolute path of a client's config file.
///
/// Total for the supported OSes; unsupported platforms are rejected before
/// this point (`HostOs::current` returning `None`).
pub fn resolve_config_path(
    client: &McpClient,
    os: HostOs,
    home: &Path,
    project_root: &Path,
) -> PathBuf {
    match client.location {
        ConfigLocation::HomeRelative {
            windows,
            macos,
            file,
        } => {
            let base = match os {
                HostOs::Windows => windows,
                HostOs::MacOs => macos,
            };
            home.join(base).join(file)
        }
        ConfigLocation::HomeFile { file } => home.join(file),
        ConfigLocation::ProjectRelative { dir, file } => project_root.join(dir).join(file),
    }
}
