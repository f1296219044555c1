//! README sync CLI tool

use anyhow::Result;
use clap::Parser;
use readme_sync::config::SyncConfig;
use readme_sync::sync::Synchronizer;

mod cli;
mod commands;

use cli::{Cli, Commands};
use commands::*;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match SyncConfig::load(cli.workspace_root.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            readme_sync::errors::print_error_with_suggestion(
                "Failed to load configuration",
                &e,
                &format!(
                    "Check {} in the workspace root",
                    readme_sync::constants::CONFIG_FILENAME
                ),
            );
            std::process::exit(1);
        }
    };

    if let Some(site_dir) = cli.site_dir {
        config.site_dir = site_dir;
    }

    let command = cli.command.unwrap_or(Commands::Sync { dry_run: false });

    let result = match command {
        Commands::Sync { dry_run } => {
            sync_readmes(&Synchronizer::new(config).dry_run(dry_run), cli.quiet)
        }
        Commands::List => list_packages(&Synchronizer::new(config)),
    };

    if let Err(e) = result {
        readme_sync::errors::print_error("README sync failed", &e);
        std::process::exit(1);
    }

    Ok(())
}
