//! Installation resolver: find the server bundle on disk.
//!
//! Resolution is recomputed on every request so it always reflects the
//! current state of the project. Search order:
//! 1. Package registry lookup by the known package id
//! 2. Unique build-configuration marker in the project's assets
//! 3. Multiple markers, disambiguated by the bundle directory name
//! 4. Explicit failure with a human-readable diagnostic

use std::fs;
use std::path::{Path, PathBuf};

use unimcp_core::{
    AssetIndex, InstallMode, PackageRegistry, SERVER_BUNDLE_DIR, SERVER_MARKER_FILE,
    SERVER_PACKAGE_ID, ServerInstallation, SyncError,
};

/// Resolve the server installation from the injected sources.
pub fn resolve_server_path(
    registry: &dyn PackageRegistry,
    index: &dyn AssetIndex,
) -> Result<ServerInstallation, SyncError> {
    if let Some(package_root) = registry.resolve_package(SERVER_PACKAGE_ID) {
        if !package_root.as_os_str().is_empty() {
            let install = ServerInstallation::new(
                package_root.join(SERVER_BUNDLE_DIR),
                InstallMode::Registry,
            );
            tracing::debug!(path = %install.path(), "Resolved server from package registry");
            return Ok(install);
        }
    }

    let markers = index.find_marker_files(SERVER_MARKER_FILE);
    match markers.as_slice() {
        [] => Err(SyncError::Resolution(format!(
            "package '{SERVER_PACKAGE_ID}' is not installed and no '{SERVER_MARKER_FILE}' \
             marker was found in the project assets"
        ))),
        [only] => Ok(loose_install(only)),
        candidates => candidates
            .iter()
            .find(|marker| {
                marker
                    .parent()
                    .and_then(|dir| dir.file_name())
                    .and_then(|name| name.to_str())
                    == Some(SERVER_BUNDLE_DIR)
            })
            .map(|marker| loose_install(marker))
            .ok_or_else(|| {
                SyncError::Resolution(format!(
                    "{} '{SERVER_MARKER_FILE}' candidates found, none inside a \
                     '{SERVER_BUNDLE_DIR}' directory",
                    candidates.len()
                ))
            }),
    }
}

fn loose_install(marker: &Path) -> ServerInstallation {
    let dir = marker.parent().unwrap_or(marker);
    let install = ServerInstallation::new(dir, InstallMode::LooseAsset);
    tracing::debug!(path = %install.path(), "Resolved server from loose asset marker");
    install
}

/// Registry adapter over the host project's package cache.
///
/// Embedded packages (`Packages/<id>`) take precedence over cached ones
/// (`Library/PackageCache/<id>@<version>`); among cached versions the
/// lexically highest wins.
pub struct PackageCacheRegistry {
    project_root: PathBuf,
}

impl PackageCacheRegistry {
    pub fn new(project_root: impl Into<PathBuf>) -> Self {
        Self {
            project_root: project_root.into(),
        }
    }
}

impl PackageRegistry for PackageCacheRegistry {
    fn resolve_package(&self, package_id: &str) -> Option<PathBuf> {
        let embedded = self.project_root.join("Packages").join(package_id);
        if embedded.is_dir() {
            return Some(embedded);
        }

        let cache = self.project_root.join("Library").join("PackageCache");
        let entries = fs::read_dir(&cache).ok()?;
        let prefix = format!("{package_id}@");

        let mut candidates: Vec<PathBuf> = entries
            .filter_map(Result::ok)
            .map(|entry| entry.path())
            .filter(|path| {
                path.is_dir()
                    && path
                        .file_name()
                        .and_then(|name| name.to_str())
                        .is_some_and(|name| name.starts_with(&prefix))
            })
            .collect();
        candidates.sort();
        candidates.pop()
    }
}

/// Asset-index adapter: a recursive scan of the project's `Assets` tree.
pub struct ProjectAssetIndex {
    project_root: PathBuf,
}

impl ProjectAssetIndex {
    pub fn new(project_root: impl Into<PathBuf>) -> Self {
        Self {
            project_root: project_root.into(),
        }
    }
}

impl AssetIndex for ProjectAssetIndex {
    fn find_marker_files(&self, file_name: &str) -> Vec<PathBuf> {
        let mut matches = Vec::new();
        let mut pending = vec![self.project_root.join("Assets")];

        while let Some(dir) = pending.pop() {
            let Ok(entries) = fs::read_dir(&dir) else {
                continue;
            };
            for entry in entries.flatten() {
                let path = entry.path();
                if path.is_dir() {
                    pending.push(path);
                } else if path.file_name().and_then(|name| name.to_str()) == Some(file_name) {
                    matches.push(path);
                }
            }
        }

        matches.sort();
        matches
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct MockRegistry {
        path: Option<PathBuf>,
    }

    impl PackageRegistry for MockRegistry {
        fn resolve_package(&self, _package_id: &str) -> Option<PathBuf> {
            self.path.clone()
        }
    }

    struct MockIndex {
        markers: Vec<PathBuf>,
    }

    impl AssetIndex for MockIndex {
        fn find_marker_files(&self, _file_name: &str) -> Vec<PathBuf> {
            self.markers.clone()
        }
    }

    #[test]
    fn test_registry_lookup_wins() {
        let registry = MockRegistry {
            path: Some(PathBuf::from("/proj/Library/PackageCache/com.gamelovers.mcp-unity@1.2")),
        };
        let index = MockIndex {
            markers: vec![PathBuf::from("/proj/Assets/Other/tsconfig.json")],
        };

        let install = resolve_server_path(&registry, &index).unwrap();
        assert_eq!(install.mode(), InstallMode::Registry);
        assert_eq!(
            install.path(),
            "/proj/Library/PackageCache/com.gamelovers.mcp-unity@1.2/Server~"
        );
    }

    #[test]
    fn test_unique_marker_resolves_loose_install() {
        let registry = MockRegistry { path: None };
        let index = MockIndex {
            markers: vec![PathBuf::from("/proj/Assets/McpUnity/Server~/tsconfig.json")],
        };

        let install = resolve_server_path(&registry, &index).unwrap();
        assert_eq!(install.mode(), InstallMode::LooseAsset);
        assert_eq!(install.path(), "/proj/Assets/McpUnity/Server~");
    }

    #[test]
    fn test_multiple_markers_disambiguated_by_bundle_dir() {
        let registry = MockRegistry { path: None };
        let index = MockIndex {
            markers: vec![
                PathBuf::from("/proj/Assets/WebApp/tsconfig.json"),
                PathBuf::from("/proj/Assets/McpUnity/Server~/tsconfig.json"),
            ],
        };

        let install = resolve_server_path(&registry, &index).unwrap();
        assert_eq!(install.path(), "/proj/Assets/McpUnity/Server~");
    }

    #[test]
    fn test_no_marker_fails_with_diagnostic() {
        let registry = MockRegistry { path: None };
        let index = MockIndex { markers: vec![] };

        let err = resolve_server_path(&registry, &index).unwrap_err();
        assert!(matches!(err, SyncError::Resolution(_)));
        assert!(err.to_string().contains("tsconfig.json"));
    }

    #[test]
    fn test_ambiguous_markers_without_bundle_dir_fail() {
        let registry = MockRegistry { path: None };
        let index = MockIndex {
            markers: vec![
                PathBuf::from("/proj/Assets/A/tsconfig.json"),
                PathBuf::from("/proj/Assets/B/tsconfig.json"),
            ],
        };

        let err = resolve_server_path(&registry, &index).unwrap_err();
        assert!(err.to_string().contains("2 'tsconfig.json' candidates"));
    }

    #[test]
    fn test_package_cache_registry_prefers_embedded_package() {
        let temp = tempfile::tempdir().unwrap();
        let embedded = temp.path().join("Packages").join(SERVER_PACKAGE_ID);
        std::fs::create_dir_all(&embedded).unwrap();
        std::fs::create_dir_all(
            temp.path()
                .join("Library/PackageCache")
                .join(format!("{SERVER_PACKAGE_ID}@1.0.0")),
        )
        .unwrap();

        let registry = PackageCacheRegistry::new(temp.path());
        assert_eq!(registry.resolve_package(SERVER_PACKAGE_ID), Some(embedded));
    }

    #[test]
    fn test_package_cache_registry_picks_highest_cached_version() {
        let temp = tempfile::tempdir().unwrap();
        let cache = temp.path().join("Library/PackageCache");
        std::fs::create_dir_all(cache.join(format!("{SERVER_PACKAGE_ID}@1.0.0"))).unwrap();
        std::fs::create_dir_all(cache.join(format!("{SERVER_PACKAGE_ID}@1.2.0"))).unwrap();
        std::fs::create_dir_all(cache.join("com.other.package@9.9.9")).unwrap();

        let registry = PackageCacheRegistry::new(temp.path());
        let resolved = registry.resolve_package(SERVER_PACKAGE_ID).unwrap();
        assert!(
            resolved
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap()
                .ends_with("@1.2.0")
        );
    }

    #[test]
    fn test_asset_index_finds_nested_markers() {
        let temp = tempfile::tempdir().unwrap();
        let deep = temp.path().join("Assets/Vendor/McpUnity/Server~");
        std::fs::create_dir_all(&deep).unwrap();
        std::fs::write(deep.join("tsconfig.json"), "{}").unwrap();
        std::fs::write(temp.path().join("Assets/readme.txt"), "n/a").unwrap();

        let index = ProjectAssetIndex::new(temp.path());
        let markers = index.find_marker_files("tsconfig.json");
        assert_eq!(markers, vec![deep.join("tsconfig.json")]);
    }
}
