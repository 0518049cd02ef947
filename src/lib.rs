//! hrportal library root.
//! Exposes the CLI parser, the high-level run() function and the modules
//! behind each command.

pub mod api;
pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod models;
pub mod notify;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use std::path::PathBuf;

/// Resolved configuration handed to every command.
pub struct AppContext {
    pub config: Config,
    pub config_path: PathBuf,
}

/// Central command dispatcher
pub fn dispatch(cli: &Cli, ctx: &AppContext) -> AppResult<()> {
    use crate::cli::commands;

    match &cli.command {
        Commands::Init { .. } => commands::init::handle(&cli.command, ctx),
        Commands::Config { .. } => commands::config::handle(&cli.command, ctx),
        Commands::Login { .. } => commands::login::handle(&cli.command, ctx),
        Commands::Summary { .. } => commands::summary::handle(&cli.command, ctx),
        Commands::Export { .. } => commands::export::handle(&cli.command, ctx),
        Commands::Tickets { .. } => commands::tickets::handle(&cli.command, ctx),
        Commands::Schedule { .. } => commands::schedule::handle(&cli.command, ctx),
        Commands::Nte { .. } => commands::nte::handle(&cli.command, ctx),
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };

    // a second init (e.g. from tests) is harmless
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .ok();
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    let config_path = cli
        .config
        .as_deref()
        .map(utils::path::expand_tilde)
        .unwrap_or_else(Config::config_file);

    let mut config = Config::load(Some(&config_path))?;
    if let Some(api) = &cli.api {
        config.api_base_url = api.clone();
    }

    tracing::debug!(config = %config_path.display(), api = %config.api_base_url, "configuration loaded");

    dispatch(
        &cli,
        &AppContext {
            config,
            config_path,
        },
    )
}
