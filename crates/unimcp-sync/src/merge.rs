//! Config merger and the sync service facade.
//!
//! A client's config file belongs to that client; the merger only ever
//! touches `mcpServers["mcp-unity"]` (or its project-scoped equivalent)
//! and leaves every other byte of structure alone. Files are not locked;
//! concurrent syncs of the same file are not a supported scenario.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use unimcp_core::{
    AssetIndex, BridgeSettings, HostOs, McpClient, MergeStrategy, PackageRegistry, SERVER_NAME,
    ServerInstallation, SyncError,
};

use crate::clients::{self, CLIENTS};
use crate::fragment::{IndentStyle, ServerFragment, render_value};
use crate::install::{PackageCacheRegistry, ProjectAssetIndex, resolve_server_path};

const MCP_SERVERS_KEY: &str = "mcpServers";
const PROJECTS_KEY: &str = "projects";

/// Merge the fragment's server entry into a parsed client document.
///
/// For flat-root clients the merge root is the document's top level; for
/// project-scoped clients it is `projects[<project_key>]`, which must
/// already exist — this function never invents that structure.
pub fn merge_fragment(
    document: &mut Value,
    strategy: MergeStrategy,
    fragment: &ServerFragment,
    project_key: &str,
    path: &Path,
) -> Result<(), SyncError> {
    let shape_err = |message: String| SyncError::DocumentShape {
        path: path.to_path_buf(),
        message,
    };

    let top = document
        .as_object_mut()
        .ok_or_else(|| shape_err("top level is not a JSON object".into()))?;

    let merge_root = match strategy {
        MergeStrategy::FlatRoot => top,
        MergeStrategy::ProjectScoped => top
            .get_mut(PROJECTS_KEY)
            .ok_or_else(|| {
                shape_err(format!(
                    "no '{PROJECTS_KEY}' key; the client has not been initialized for any project"
                ))
            })?
            .as_object_mut()
            .ok_or_else(|| shape_err(format!("'{PROJECTS_KEY}' is not an object")))?
            .get_mut(project_key)
            .ok_or_else(|| {
                shape_err(format!(
                    "no '{PROJECTS_KEY}' entry for '{project_key}'; open the project with the \
                     client once before syncing"
                ))
            })?
            .as_object_mut()
            .ok_or_else(|| shape_err(format!("project entry '{project_key}' is not an object")))?,
    };

    let servers = merge_root
        .entry(MCP_SERVERS_KEY.to_string())
        .or_insert_with(|| Value::Object(Map::new()))
        .as_object_mut()
        .ok_or_else(|| shape_err(format!("'{MCP_SERVERS_KEY}' is not an object")))?;

    servers.insert(SERVER_NAME.to_string(), fragment.server_entry().clone());
    Ok(())
}

/// Load-or-create, merge and rewrite one client's config file.
pub fn sync_to_path(
    config_path: &Path,
    client: &McpClient,
    fragment: &ServerFragment,
    installation: &ServerInstallation,
    indent: IndentStyle,
) -> Result<(), SyncError> {
    if config_path.exists() {
        let raw =
            fs::read_to_string(config_path).map_err(|e| SyncError::io(config_path, e))?;
        let mut document: Value =
            serde_json::from_str(&raw).map_err(|e| SyncError::Parse {
                path: config_path.to_path_buf(),
                message: e.to_string(),
            })?;

        let project_key = installation.parent_dir().unwrap_or(installation.path());
        merge_fragment(
            &mut document,
            client.merge_strategy,
            fragment,
            project_key,
            config_path,
        )?;

        let rendered =
            render_value(&document, indent).map_err(|e| SyncError::io(config_path, e))?;
        return fs::write(config_path, rendered).map_err(|e| SyncError::io(config_path, e));
    }

    // The project-scoped document is owned by the client's own init flow;
    // a missing file is a setup problem, not a fresh install.
    if client.merge_strategy == MergeStrategy::ProjectScoped {
        return Err(SyncError::DocumentShape {
            path: config_path.to_path_buf(),
            message: format!(
                "{} has no configuration file yet; run the client once before syncing",
                client.display_name
            ),
        });
    }

    match config_path.parent() {
        Some(parent) if parent.is_dir() => {
            let rendered = fragment.render(indent).map_err(|e| SyncError::io(config_path, e))?;
            fs::write(config_path, rendered).map_err(|e| SyncError::io(config_path, e))
        }
        Some(parent) => Err(SyncError::io(
            parent,
            format!(
                "directory does not exist; is {} installed?",
                client.display_name
            ),
        )),
        None => Err(SyncError::io(config_path, "config path has no parent directory")),
    }
}

/// High-level synchronization API used by the editor surface and the CLI.
///
/// Owns the installation-resolution sources; both the installation and the
/// fragment are recomputed on every call so syncs always reflect the
/// current disk state.
pub struct SyncService {
    settings: BridgeSettings,
    registry: Box<dyn PackageRegistry>,
    index: Box<dyn AssetIndex>,
    host_os: Option<HostOs>,
}

impl SyncService {
    /// Service with the production filesystem adapters.
    pub fn new(settings: BridgeSettings) -> Self {
        let registry = Box::new(PackageCacheRegistry::new(settings.project_root.clone()));
        let index = Box::new(ProjectAssetIndex::new(settings.project_root.clone()));
        Self::with_sources(settings, registry, index)
    }

    /// Service with injected resolution sources (tests, embeddings).
    pub fn with_sources(
        settings: BridgeSettings,
        registry: Box<dyn PackageRegistry>,
        index: Box<dyn AssetIndex>,
    ) -> Self {
        Self {
            settings,
            registry,
            index,
            host_os: HostOs::current(),
        }
    }

    /// Override the detected host OS.
    #[must_use]
    pub const fn with_host_os(mut self, os: HostOs) -> Self {
        self.host_os = Some(os);
        self
    }

    pub const fn settings(&self) -> &BridgeSettings {
        &self.settings
    }

    /// Resolve the current server installation.
    pub fn resolve_installation(&self) -> Result<ServerInstallation, SyncError> {
        let install = resolve_server_path(self.registry.as_ref(), self.index.as_ref())?;
        tracing::info!(
            path = %install.path(),
            mode = ?install.mode(),
            "Resolved MCP server installation"
        );
        Ok(install)
    }

    /// Resolve a client's config file path on this host.
    pub fn config_path(&self, client: &McpClient) -> Result<PathBuf, SyncError> {
        let Some(os) = self.host_os else {
            tracing::warn!(
                client = client.display_name,
                "No config path for this platform; skipping"
            );
            return Err(SyncError::UnsupportedPlatform {
                client: client.display_name.to_string(),
            });
        };
        let home = self.settings.home().ok_or_else(|| {
            SyncError::Resolution("could not determine the user home directory".into())
        })?;
        Ok(clients::resolve_config_path(
            client,
            os,
            &home,
            self.settings.project_root(),
        ))
    }

    /// Synchronize one client, propagating the failure cause.
    pub fn try_sync_client(
        &self,
        client: &McpClient,
        indent: IndentStyle,
    ) -> Result<(), SyncError> {
        let installation = self.resolve_installation()?;
        let config_path = self.config_path(client)?;
        let fragment = ServerFragment::new(&installation);
        sync_to_path(&config_path, client, &fragment, &installation, indent)
    }

    /// Synchronize one client by id; the boolean surface used by UI code.
    /// Failure detail goes to the log channel.
    pub fn sync_client(&self, id: &str, indent: IndentStyle) -> bool {
        let Some(client) = clients::client_by_id(id) else {
            tracing::error!(client = id, "Unknown MCP client id");
            return false;
        };

        match self.try_sync_client(client, indent) {
            Ok(()) => {
                tracing::info!(
                    client = client.display_name,
                    "Synchronized MCP server configuration"
                );
                true
            }
            Err(e) => {
                tracing::error!(
                    client = client.display_name,
                    error = %e,
                    "Failed to synchronize MCP server configuration"
                );
                false
            }
        }
    }

    /// Synchronize every known client, returning per-client outcomes.
    pub fn sync_all(&self, indent: IndentStyle) -> Vec<(&'static str, bool)> {
        CLIENTS
            .iter()
            .map(|client| (client.id, self.sync_client(client.id, indent)))
            .collect()
    }
}
