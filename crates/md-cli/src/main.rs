use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use md_store::JsonStore;
use tracing_subscriber::EnvFilter;

use md_cli::commands::{add, calc, delete, reset, summary, switch};
use md_cli::{Cli, Commands, Config};

/// Load config and point a store at the configured ledger file.
fn open_store(config_path: Option<&Path>) -> Result<JsonStore> {
    let config = Config::load_from(config_path).context("failed to load configuration")?;
    tracing::debug!(?config, "loaded configuration");
    Ok(JsonStore::new(config.data_file))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing with verbose flag support
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    // Use try_init to avoid panic if tracing is already initialized (e.g., in tests)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();

    let mut stdout = std::io::stdout().lock();

    match (&cli.command, &cli.time) {
        (Some(Commands::Calc(args)), _) => {
            // Calc is a pure conversion and never touches the ledger
            calc::run(&mut stdout, args)?;
        }
        (Some(Commands::Switch(args)), _) => {
            let store = open_store(cli.config.as_deref())?;
            switch::run(&mut stdout, &store, args)?;
        }
        (Some(Commands::Delete(args)), _) => {
            let store = open_store(cli.config.as_deref())?;
            delete::run(&mut stdout, &store, args)?;
        }
        (Some(Commands::Reset(args)), _) => {
            let store = open_store(cli.config.as_deref())?;
            reset::run(&mut stdout, &store, args)?;
        }
        (None, Some(time)) => {
            let store = open_store(cli.config.as_deref())?;
            add::run(&mut stdout, &store, time)?;
        }
        (None, None) => {
            let store = open_store(cli.config.as_deref())?;
            summary::run(&mut stdout, &store)?;
        }
    }

    stdout.flush()?;
    Ok(())
}
