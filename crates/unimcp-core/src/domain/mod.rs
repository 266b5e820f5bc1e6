//! Domain model: client descriptors, server installation, console logs.

mod client;
mod install;
mod logs;

pub use client::{ConfigLocation, HostOs, McpClient, MergeStrategy};
pub use install::{
    InstallMode, ServerInstallation, SERVER_BUNDLE_DIR, SERVER_COMMAND, SERVER_ENTRY_POINT,
    SERVER_MARKER_FILE, SERVER_NAME, SERVER_PACKAGE_ID,
};
pub use logs::LogEntry;
