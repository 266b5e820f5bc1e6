//! Outcome of running an external build/install command.

use serde::{Deserialize, Serialize};

/// Captured result of a run-to-completion subprocess.
///
/// Exit code 0 is the only success signal; a process that never started
/// has no exit code and is a failure carrying the launch error in stderr.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessOutcome {
    /// Exit code of the process, `None` when it could not be launched.
    pub exit_code: Option<i32>,
    /// Complete captured standard output.
    pub stdout: String,
    /// Complete captured standard error.
    pub stderr: String,
}

impl ProcessOutcome {
    /// Whether the process ran and exited cleanly.
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }

    /// Outcome for a process that failed to launch at all.
    pub fn spawn_failure(message: impl Into<String>) -> Self {
        Self {
            exit_code: None,
            stdout: String::new(),
            stderr: message.into(),
        }
    }
}
