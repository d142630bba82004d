//! rBikeshare library root.
//! Exposes CLI parser, high-level run() function, and internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Some(Commands::Init) => cli::commands::init::handle(cli),
        Some(cmd @ Commands::Config { .. }) => cli::commands::config::handle(cmd, cfg),
        Some(cmd @ Commands::Stats { .. }) => cli::commands::stats::handle(cmd, cfg),
        Some(Commands::Explore) | None => cli::commands::explore::handle(cfg),
    }
}

fn init_logging() {
    // diagnostics go to stderr; stdout stays reserved for reports
    let env = env_logger::Env::default().filter_or("RBIKESHARE_LOG", "warn");
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .try_init();
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    init_logging();

    let cli = Cli::parse();

    // load config once
    let mut cfg = Config::load()?;

    // command-line override of the data directory
    if let Some(dir) = &cli.data_dir {
        cfg.data_dir = dir.clone();
    }

    log::debug!("data dir: {}", cfg.data_path().display());
    dispatch(&cli, &cfg)
}
