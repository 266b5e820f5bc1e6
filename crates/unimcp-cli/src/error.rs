//! CLI-specific error types and mappings.
//!
//! Maps synchronization failures to exit codes and user-facing messages.

use thiserror::Error;
use unimcp_core::SyncError;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Synchronization failed; detail already logged.
    #[error("{0}")]
    Sync(String),

    /// Argument parsing error.
    #[error("Invalid arguments: {0}")]
    Arguments(String),

    /// IO error (file not found, permission denied, etc.).
    #[error("IO error: {0}")]
    Io(String),

    /// Configuration error (unresolvable paths, malformed documents).
    #[error("Configuration error: {0}")]
    Config(String),

    /// Process execution error.
    #[error("Process error: {0}")]
    Process(String),
}

impl CliError {
    /// Map error to appropriate exit code.
    ///
    /// Exit codes follow Unix conventions:
    /// - 0: Success
    /// - 1: General error
    /// - 2: Misuse of shell command (invalid arguments)
    /// - 64-78: Reserved for specific error categories (see sysexits.h)
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Sync(_) => 1,
            Self::Arguments(_) => 2, // EX_USAGE
            Self::Io(_) => 74,       // EX_IOERR
            Self::Config(_) => 78,   // EX_CONFIG
            Self::Process(_) => 71,  // EX_OSERR
        }
    }
}

impl From<SyncError> for CliError {
    fn from(err: SyncError) -> Self {
        match err {
            SyncError::Io { .. } => Self::Io(err.to_string()),
            SyncError::Process(_) => Self::Process(err.to_string()),
            SyncError::Resolution(_)
            | SyncError::UnsupportedPlatform { .. }
            | SyncError::Parse { .. }
            | SyncError::DocumentShape { .. } => Self::Config(err.to_string()),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}
