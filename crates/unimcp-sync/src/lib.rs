//! MCP client configuration synchronizer.
//!
//! Locates the MCP server installation on disk (package registry or loose
//! asset), builds the canonical registration fragment, and merges it into
//! the config files of the supported AI-tool clients without disturbing
//! anything else those files contain. Also runs the npm build/install of
//! the server bundle.
//!
//! All operations here are synchronous and run on the calling thread;
//! see `runner` for the one deliberately blocking subprocess wait.

pub mod clients;
pub mod fragment;
pub mod install;
pub mod merge;
pub mod runner;

pub use clients::{CLIENTS, client_by_id, resolve_config_path};
pub use fragment::{IndentStyle, ServerFragment};
pub use install::{PackageCacheRegistry, ProjectAssetIndex, resolve_server_path};
pub use merge::SyncService;
pub use runner::NpmRunner;
