//! Main CLI parser and top-level argument handling.

use std::path::PathBuf;

use clap::Parser;

use crate::commands::Commands;

/// Command-line interface definition for the Unity MCP bridge tool.
///
/// This is the top-level parser that handles global options and dispatches
/// to subcommands.
#[derive(Parser)]
#[command(name = "unimcp")]
#[command(about = "Sync the Unity MCP server into AI-tool client configs")]
#[command(version)]
pub struct Cli {
    /// Root of the host project containing the server installation
    #[arg(long = "project-root", global = true, default_value = ".")]
    pub project_root: PathBuf,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
