//! Installation-resolution source traits (injectable for testing).

use std::path::PathBuf;

/// Lookup of installed packages in the host's package registry.
pub trait PackageRegistry: Send + Sync {
    /// Resolve a package id to its on-disk root, if installed.
    fn resolve_package(&self, package_id: &str) -> Option<PathBuf>;
}

/// Search over the host project's asset index.
pub trait AssetIndex: Send + Sync {
    /// All files in the project with the given file name.
    fn find_marker_files(&self, file_name: &str) -> Vec<PathBuf>;
}
