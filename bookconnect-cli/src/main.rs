//! BookConnect - browse a book catalog from the terminal

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;

use bookconnect_cli::cli::{Cli, Command};
use bookconnect_cli::commands::{self, open_store};
use bookconnect_cli::logging::initialize_tracing;
use bookconnect_core::catalog::FilterForm;
use bookconnect_core::config::BrowserConfig;
use bookconnect_core::theme::ThemeMode;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    initialize_tracing(cli.log_level, cli.log_json, cli.command.is_interactive());
    debug!(command = cli.command.name(), "Starting bookconnect");

    let config = BrowserConfig::load(cli.config.as_deref())
        .context("Failed to load configuration")?
        .with_overrides(cli.overrides())
        .context("Invalid configuration")?;

    let mut out = std::io::stdout();

    match cli.command {
        Command::List { pages, json } => {
            commands::execute_list(&mut out, &mut open_store(&config)?, pages, json)
        }
        Command::Search {
            title,
            author,
            genre,
            pages,
            json,
        } => {
            let form = FilterForm {
                title,
                author,
                genre,
            };
            commands::execute_search(&mut out, &mut open_store(&config)?, form, pages, json)
        }
        Command::Show { id, json } => {
            commands::execute_show(&mut out, &open_store(&config)?, &id, json)
        }
        Command::Authors { json } => {
            commands::execute_authors(&mut out, &open_store(&config)?, json)
        }
        Command::Genres { json } => {
            commands::execute_genres(&mut out, &open_store(&config)?, json)
        }
        Command::Theme { mode } => {
            let mode = mode.map(ThemeMode::from).unwrap_or_else(|| config.initial_theme());
            commands::execute_theme(&mut out, mode)
        }
        #[cfg(feature = "tui")]
        Command::Browse { .. } => {
            let store = open_store(&config)?;
            bookconnect_cli::tui::run_browser(store, config.initial_theme()).await
        }
    }
}
