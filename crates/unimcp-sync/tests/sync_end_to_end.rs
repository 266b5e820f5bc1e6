//! End-to-end synchronization scenarios against real files.
//!
//! Each test composes a `SyncService` with mocked resolution sources, a
//! temporary home directory and a pinned host OS, then drives the boolean
//! `sync_client` surface the editor UI uses.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Value, json};

use unimcp_core::{
    AssetIndex, BridgeSettings, HostOs, InstallMode, PackageRegistry, SERVER_BUNDLE_DIR,
    ServerInstallation,
};
use unimcp_sync::{IndentStyle, ServerFragment, SyncService};

struct MockRegistry {
    path: Option<PathBuf>,
}

impl PackageRegistry for MockRegistry {
    fn resolve_package(&self, _package_id: &str) -> Option<PathBuf> {
        self.path.clone()
    }
}

struct EmptyIndex;

impl AssetIndex for EmptyIndex {
    fn find_marker_files(&self, _file_name: &str) -> Vec<PathBuf> {
        Vec::new()
    }
}

/// Service resolving the server from `package_root`, with home and project
/// pinned to temp directories and the host OS pinned to macOS.
fn service(home: &Path, project: &Path, package_root: &Path) -> SyncService {
    let settings = BridgeSettings::for_project(project).with_home_dir(home);
    SyncService::with_sources(
        settings,
        Box::new(MockRegistry {
            path: Some(package_root.to_path_buf()),
        }),
        Box::new(EmptyIndex),
    )
    .with_host_os(HostOs::MacOs)
}

fn expected_installation(package_root: &Path) -> ServerInstallation {
    ServerInstallation::new(package_root.join(SERVER_BUNDLE_DIR), InstallMode::Registry)
}

#[test]
fn test_new_cursor_config_equals_raw_fragment_text() {
    let home = tempfile::tempdir().unwrap();
    let project = tempfile::tempdir().unwrap();
    fs::create_dir(home.path().join(".cursor")).unwrap();

    let service = service(home.path(), project.path(), project.path());
    assert!(service.sync_client("cursor", IndentStyle::Spaces));

    let written = fs::read_to_string(home.path().join(".cursor/mcp.json")).unwrap();
    let expected = ServerFragment::new(&expected_installation(project.path()))
        .render(IndentStyle::Spaces)
        .unwrap();
    assert_eq!(written, expected);
}

#[test]
fn test_flat_root_merge_preserves_existing_servers() {
    let home = tempfile::tempdir().unwrap();
    let project = tempfile::tempdir().unwrap();
    let config_dir = home.path().join("Library/Application Support/Claude");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(
        config_dir.join("claude_desktop_config.json"),
        r#"{"globalShortcut":"Ctrl+Space","mcpServers":{"other-tool":{"command":"x"}}}"#,
    )
    .unwrap();

    let service = service(home.path(), project.path(), project.path());
    assert!(service.sync_client("claude_desktop", IndentStyle::Tabs));

    let written =
        fs::read_to_string(config_dir.join("claude_desktop_config.json")).unwrap();
    let document: Value = serde_json::from_str(&written).unwrap();

    assert_eq!(document["globalShortcut"], "Ctrl+Space");
    assert_eq!(document["mcpServers"]["other-tool"]["command"], "x");
    assert_eq!(document["mcpServers"]["mcp-unity"]["command"], "node");
    assert_eq!(document["mcpServers"].as_object().unwrap().len(), 2);
    assert!(written.contains('\t'));
}

#[test]
fn test_project_scoped_sync_lands_in_project_entry() {
    let home = tempfile::tempdir().unwrap();
    let project = tempfile::tempdir().unwrap();
    let installation = expected_installation(project.path());
    let project_key = installation.parent_dir().unwrap();

    fs::write(
        home.path().join(".claude.json"),
        serde_json::to_string(&json!({
            "numStartups": 3,
            "projects": { project_key: { "allowedTools": [] } }
        }))
        .unwrap(),
    )
    .unwrap();

    let service = service(home.path(), project.path(), project.path());
    assert!(service.sync_client("claude_code", IndentStyle::Spaces));

    let written = fs::read_to_string(home.path().join(".claude.json")).unwrap();
    let document: Value = serde_json::from_str(&written).unwrap();

    let entry = &document["projects"][project_key];
    assert_eq!(entry["allowedTools"], json!([]));
    assert_eq!(
        entry["mcpServers"]["mcp-unity"]["args"][0],
        format!("{}/build/index.js", installation.path())
    );
    assert_eq!(document["numStartups"], 3);
}

#[test]
fn test_project_scoped_sync_fails_without_projects_key() {
    let home = tempfile::tempdir().unwrap();
    let project = tempfile::tempdir().unwrap();
    let original = r#"{"numStartups":3}"#;
    fs::write(home.path().join(".claude.json"), original).unwrap();

    let service = service(home.path(), project.path(), project.path());
    assert!(!service.sync_client("claude_code", IndentStyle::Spaces));

    // File left byte-for-byte untouched
    assert_eq!(
        fs::read_to_string(home.path().join(".claude.json")).unwrap(),
        original
    );
}

#[test]
fn test_project_scoped_sync_fails_without_project_entry() {
    let home = tempfile::tempdir().unwrap();
    let project = tempfile::tempdir().unwrap();
    let original = r#"{"projects":{"/some/other/project":{}}}"#;
    fs::write(home.path().join(".claude.json"), original).unwrap();

    let service = service(home.path(), project.path(), project.path());
    assert!(!service.sync_client("claude_code", IndentStyle::Spaces));

    assert_eq!(
        fs::read_to_string(home.path().join(".claude.json")).unwrap(),
        original
    );
}

#[test]
fn test_sync_fails_when_client_directory_is_missing() {
    let home = tempfile::tempdir().unwrap();
    let project = tempfile::tempdir().unwrap();

    let service = service(home.path(), project.path(), project.path());
    assert!(!service.sync_client("cursor", IndentStyle::Spaces));
    assert!(!home.path().join(".cursor/mcp.json").exists());
}

#[test]
fn test_workspace_scoped_client_writes_into_project() {
    let home = tempfile::tempdir().unwrap();
    let project = tempfile::tempdir().unwrap();
    fs::create_dir(project.path().join(".vscode")).unwrap();

    let service = service(home.path(), project.path(), project.path());
    assert!(service.sync_client("vscode", IndentStyle::Spaces));

    let written = fs::read_to_string(project.path().join(".vscode/mcp.json")).unwrap();
    let document: Value = serde_json::from_str(&written).unwrap();
    assert!(document["mcpServers"]["mcp-unity"]["args"][0]
        .as_str()
        .unwrap()
        .ends_with("build/index.js"));
}

#[test]
fn test_unknown_client_id_fails() {
    let home = tempfile::tempdir().unwrap();
    let project = tempfile::tempdir().unwrap();

    let service = service(home.path(), project.path(), project.path());
    assert!(!service.sync_client("zed", IndentStyle::Spaces));
}
