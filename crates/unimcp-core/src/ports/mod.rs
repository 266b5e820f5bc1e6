//! Ports: injectable boundaries to the host project and the editor runtime.
//!
//! The editor's package manager, its asset database and its console capture
//! are external collaborators; the traits here are their seams, with
//! production adapters living in `unimcp-sync`/`unimcp-tools` and
//! hand-rolled mocks in tests.

mod error;
mod log_source;
mod process;
mod sources;

pub use error::SyncError;
pub use log_source::{ConsoleLogSource, LogSourceError};
pub use process::ProcessOutcome;
pub use sources::{AssetIndex, PackageRegistry};
