//! Recipes CLI
//!
//! Browse the recipe catalog, search it and keep a list of favorites.

#![warn(clippy::all)]
#![forbid(unsafe_code)]

use anyhow::Result;
use clap::Parser;
use recipe_cli::browse::run_browse;
use recipe_cli::cli::{Cli, Command};
use recipe_cli::commands::{cmd_favorite, cmd_favorites, cmd_list, cmd_show, list_query};
use recipe_cli::config::BrowserConfig;
use recipe_cli::config_handlers::handle_config_command;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr; stdout carries command output.
    let default_filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("Recipe browser loaded");

    let command = cli.command.unwrap_or(Command::List(Default::default()));
    if let Command::Config { action } = command {
        handle_config_command(cli.config.as_deref(), action)?;
        return Ok(());
    }

    let config =
        BrowserConfig::load(cli.config.as_deref())?.with_overrides(cli.catalog, cli.favorites_dir);
    let catalog = config.load_catalog()?;
    tracing::debug!(recipes = catalog.len(), "Catalog ready");

    let mut stdout = std::io::stdout().lock();
    match command {
        Command::List(args) => {
            let query = list_query(&config, &args);
            cmd_list(&catalog, config.open_favorites()?, query, args.json, &mut stdout)?;
        }
        Command::Show { id } => {
            cmd_show(&catalog, &config.open_favorites()?, id, &mut stdout)?;
        }
        Command::Favorite { id } => {
            let mut favorites = config.open_favorites()?;
            cmd_favorite(&catalog, &mut favorites, id, &mut stdout)?;
        }
        Command::Favorites => {
            cmd_favorites(&catalog, &config.open_favorites()?, &mut stdout)?;
        }
        Command::Browse => {
            drop(stdout);
            run_browse(&config, &catalog).await?;
        }
        Command::Config { .. } => {}
    }

    Ok(())
}
