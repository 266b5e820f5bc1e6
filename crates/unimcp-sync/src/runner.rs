//! External npm invocation.
//!
//! One blocking run-to-completion subprocess per call: output is captured
//! in full before the call returns and there is no timeout, so a hung npm
//! hangs the caller. Arguments are always passed as a structured list;
//! nothing is ever interpolated into a shell command line.

use std::path::{Path, PathBuf};
use std::process::Command;

use unimcp_core::{BridgeSettings, ProcessOutcome, ServerInstallation, SyncError};

#[cfg(not(windows))]
const PATH_SEPARATOR: &str = ":";

/// Install locations prepended to PATH on Unix so npm is found even when
/// the parent process environment lacks it (GUI-launched editors).
#[cfg(not(windows))]
const UNIX_FALLBACK_PATHS: &[&str] = &["/opt/homebrew/bin", "/usr/local/bin", "/usr/bin", "/bin"];

/// Runs npm commands against the server bundle.
pub struct NpmRunner {
    executable: Option<PathBuf>,
}

impl NpmRunner {
    /// Runner using PATH-based npm resolution.
    pub const fn new() -> Self {
        Self { executable: None }
    }

    /// Runner honoring the settings' npm executable override.
    pub fn from_settings(settings: &BridgeSettings) -> Self {
        Self {
            executable: settings.npm_executable.clone(),
        }
    }

    /// Runner with an explicit executable.
    pub fn with_executable(path: impl Into<PathBuf>) -> Self {
        Self {
            executable: Some(path.into()),
        }
    }

    /// Run one npm command to completion in `working_dir`.
    ///
    /// Launch failures are caught and reported as a failed outcome; they
    /// never propagate. Results are logged either way.
    pub fn run(&self, args: &[&str], working_dir: &Path) -> ProcessOutcome {
        let mut command = self.build_command(args);
        command.current_dir(working_dir);

        let outcome = match command.output() {
            Ok(output) => ProcessOutcome {
                exit_code: output.status.code(),
                stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            },
            Err(e) => ProcessOutcome::spawn_failure(format!("failed to launch npm: {e}")),
        };

        if outcome.success() {
            tracing::info!(
                args = ?args,
                working_dir = %working_dir.display(),
                stdout = %outcome.stdout.trim(),
                "npm command succeeded"
            );
        } else {
            tracing::error!(
                args = ?args,
                working_dir = %working_dir.display(),
                exit_code = ?outcome.exit_code,
                stderr = %outcome.stderr.trim(),
                "npm command failed"
            );
        }

        outcome
    }

    /// Build and install the server bundle (`npm install`, `npm run build`).
    pub fn install_server(&self, installation: &ServerInstallation) -> Result<(), SyncError> {
        let dir = PathBuf::from(installation.path());

        for args in [&["install"][..], &["run", "build"][..]] {
            let outcome = self.run(args, &dir);
            if !outcome.success() {
                return Err(SyncError::Process(format!(
                    "npm {} failed in {}: {}",
                    args.join(" "),
                    installation.path(),
                    failure_detail(&outcome)
                )));
            }
        }

        Ok(())
    }

    fn build_command(&self, args: &[&str]) -> Command {
        if let Some(exe) = &self.executable {
            let mut command = Command::new(exe);
            command.args(args);
            return command;
        }

        #[cfg(windows)]
        {
            // cmd resolves npm.cmd; the arguments stay a structured list.
            let mut command = Command::new("cmd");
            command.arg("/c").arg("npm").args(args);
            command
        }

        #[cfg(not(windows))]
        {
            let mut command = Command::new("npm");
            command.args(args);
            command.env("PATH", augmented_path());
            command
        }
    }
}

impl Default for NpmRunner {
    fn default() -> Self {
        Self::new()
    }
}

fn failure_detail(outcome: &ProcessOutcome) -> String {
    match outcome.exit_code {
        Some(code) => format!("exit code {code}: {}", outcome.stderr.trim()),
        None => outcome.stderr.trim().to_string(),
    }
}

/// Fallback install locations, then the current PATH, deduplicated.
#[cfg(not(windows))]
fn augmented_path() -> std::ffi::OsString {
    let mut entries: Vec<String> = UNIX_FALLBACK_PATHS
        .iter()
        .map(|entry| (*entry).to_string())
        .collect();

    if let Some(current) = std::env::var_os("PATH") {
        if let Some(text) = current.to_str() {
            for entry in text.split(PATH_SEPARATOR) {
                if !entry.is_empty() {
                    entries.push(entry.to_string());
                }
            }
        }
    }

    let mut seen = std::collections::HashSet::new();
    let deduped: Vec<String> = entries
        .into_iter()
        .filter(|entry| seen.insert(entry.clone()))
        .collect();

    std::ffi::OsString::from(deduped.join(PATH_SEPARATOR))
}
