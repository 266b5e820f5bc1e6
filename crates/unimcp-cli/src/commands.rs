//! Subcommand definitions.

use clap::Subcommand;

/// Available commands for the Unity MCP bridge tool.
#[derive(Subcommand)]
pub enum Commands {
    /// List the supported clients and their resolved config paths
    Clients,

    /// Print the resolved server installation path
    Resolve,

    /// Merge the server registration into a client's configuration
    Sync {
        /// Client id to synchronize (see `clients`)
        client: Option<String>,

        /// Synchronize every known client
        #[arg(long)]
        all: bool,

        /// Indent written JSON with tabs instead of two spaces
        #[arg(long)]
        tabs: bool,
    },

    /// Install and build the server bundle (npm install + npm run build)
    Install,
}
