//! Domain types and ports for the Unity MCP bridge.
//!
//! This crate holds everything the adapter crates share: the client
//! descriptor table data model, the resolved server-installation type,
//! the injectable ports (package registry, asset index, console-log
//! source) and the sync error taxonomy. It has no I/O of its own.

pub mod domain;
pub mod ports;
pub mod settings;

// Re-export commonly used types for convenience
pub use domain::{
    ConfigLocation, HostOs, InstallMode, LogEntry, McpClient, MergeStrategy, ServerInstallation,
    SERVER_BUNDLE_DIR, SERVER_COMMAND, SERVER_ENTRY_POINT, SERVER_MARKER_FILE, SERVER_NAME,
    SERVER_PACKAGE_ID,
};
pub use ports::{
    AssetIndex, ConsoleLogSource, LogSourceError, PackageRegistry, ProcessOutcome, SyncError,
};
pub use settings::BridgeSettings;
