//! slidedeck - asset pipeline and navigation controller for HTML slide decks.

mod build;
mod cli;
mod compiler;
mod config;
mod init;
mod logger;
mod nav;
mod navigator;
mod utils;

use anyhow::Result;
use build::build_site;
use clap::Parser;
use cli::{Cli, Commands};
use config::SiteConfig;
use init::new_config;
use nav::simulate_page;
use std::{path::Path, process::ExitCode};

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            logger::error(&err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = load_config(cli)?;

    match &cli.command {
        Commands::Init => new_config(&config),
        Commands::Build { .. } => build_site(&config).map(|_| ()),
        Commands::Nav { page, events, .. } => simulate_page(&config, page, events),
    }
}

/// Load configuration (if present) and apply CLI overrides.
///
/// A missing config file means defaults; `init` skips validation since it
/// only writes the defaults out.
fn load_config(cli: &Cli) -> Result<SiteConfig> {
    let root = cli.root.as_deref().unwrap_or(Path::new("./"));
    let config_path = root.join(&cli.config);

    let mut config = if config_path.exists() && !cli.is_init() {
        SiteConfig::from_path(&config_path)?
    } else {
        SiteConfig::default()
    };
    config.update_with_cli(cli);

    if !cli.is_init() {
        config.validate()?;
    }

    Ok(config)
}
