//! CLI adapter for the Unity MCP bridge.
//!
//! Thin wiring over `unimcp-sync`: parse arguments, compose the sync
//! service, print outcomes. All synchronization logic lives in the
//! library crates.

pub mod commands;
pub mod error;
pub mod parser;

pub use commands::Commands;
pub use error::CliError;
pub use parser::Cli;

use tracing_subscriber as _; // Used by main.rs binary
