//! CLI entry point - the composition root.
//!
//! This is the only place where the sync service, the npm runner and the
//! terminal are wired together. Command dispatch stays thin; all behavior
//! lives in the library crates.

use clap::Parser;

use unimcp_cli::{Cli, CliError, Commands};
use unimcp_core::BridgeSettings;
use unimcp_sync::{CLIENTS, IndentStyle, NpmRunner, SyncService};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let Some(command) = cli.command else {
        // No command provided - show help
        use clap::CommandFactory;
        Cli::command().print_help()?;
        return Ok(());
    };

    let settings = BridgeSettings::for_project(cli.project_root);
    let service = SyncService::new(settings);

    if let Err(e) = dispatch(&service, &command) {
        eprintln!("Error: {e}");
        std::process::exit(e.exit_code());
    }
    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "info" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn dispatch(service: &SyncService, command: &Commands) -> Result<(), CliError> {
    match command {
        Commands::Clients => {
            for client in CLIENTS {
                match service.config_path(client) {
                    Ok(path) => println!(
                        "{:<16} {:<16} {}",
                        client.id,
                        client.display_name,
                        path.display()
                    ),
                    Err(e) => println!("{:<16} {:<16} ({e})", client.id, client.display_name),
                }
            }
            Ok(())
        }

        Commands::Resolve => {
            let installation = service.resolve_installation()?;
            println!("{} ({:?})", installation.path(), installation.mode());
            Ok(())
        }

        Commands::Sync { client, all, tabs } => {
            let indent = if *tabs {
                IndentStyle::Tabs
            } else {
                IndentStyle::Spaces
            };
            sync(service, client.as_deref(), *all, indent)
        }

        Commands::Install => {
            let installation = service.resolve_installation()?;
            let runner = NpmRunner::from_settings(service.settings());
            runner.install_server(&installation)?;
            println!("Built MCP server at {}", installation.path());
            Ok(())
        }
    }
}

fn sync(
    service: &SyncService,
    client: Option<&str>,
    all: bool,
    indent: IndentStyle,
) -> Result<(), CliError> {
    if all {
        let results = service.sync_all(indent);
        let failed = results.iter().filter(|(_, ok)| !ok).count();
        for (id, ok) in &results {
            println!("{:<16} {}", id, if *ok { "synced" } else { "failed" });
        }
        if failed > 0 {
            return Err(CliError::Sync(format!(
                "{failed} of {} clients failed to sync; see log output",
                results.len()
            )));
        }
        return Ok(());
    }

    let Some(id) = client else {
        return Err(CliError::Arguments(
            "pass a client id or --all (run `unimcp clients` for the list)".into(),
        ));
    };

    if service.sync_client(id, indent) {
        println!("{id:<16} synced");
        Ok(())
    } else {
        Err(CliError::Sync(format!(
            "failed to sync '{id}'; see log output"
        )))
    }
}
