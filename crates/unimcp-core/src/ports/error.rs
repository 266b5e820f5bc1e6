//! Error taxonomy for synchronization operations.

use std::path::PathBuf;

use thiserror::Error;

/// Failure kinds for sync-one-client and related operations.
///
/// Each variant is one user-distinguishable cause. Document-shape failures
/// are deliberately separate from parse failures: the former means the
/// client's own setup step has not run yet (user-correctable), the latter
/// means the file is corrupt.
#[derive(Debug, Error)]
pub enum SyncError {
    /// A required path (server installation, home directory) could not be
    /// determined.
    #[error("resolution failure: {0}")]
    Resolution(String),

    /// The current platform has no defined config path for this client.
    #[error("{client}: no config path on this platform (Windows and macOS only)")]
    UnsupportedPlatform { client: String },

    /// Target file or directory missing, unreadable or unwritable.
    #[error("I/O failure on {}: {message}", path.display())]
    Io { path: PathBuf, message: String },

    /// Existing config file is not valid JSON.
    #[error("{} is not valid JSON: {message}", path.display())]
    Parse { path: PathBuf, message: String },

    /// Valid JSON, but the expected nested structure is absent.
    #[error("unexpected document shape in {}: {message}", path.display())]
    DocumentShape { path: PathBuf, message: String },

    /// External build/install command failed to start or exited non-zero.
    #[error("external process failed: {0}")]
    Process(String),
}

impl SyncError {
    /// Convenience constructor for I/O failures.
    pub fn io(path: impl Into<PathBuf>, message: impl ToString) -> Self {
        Self::Io {
            path: path.into(),
            message: message.to_string(),
        }
    }
}
