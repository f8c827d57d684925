//! Deck initialization.
//!
//! Writes a default `slidedeck.toml` describing the conventional layout.

use crate::{config::SiteConfig, log};
use anyhow::{Context, Result, bail};
use std::fs;

/// Write the default configuration to `config.config_path`.
///
/// Refuses to overwrite an existing file.
pub fn new_config(config: &SiteConfig) -> Result<()> {
    let path = &config.config_path;
    if path.exists() {
        bail!(
            "Config file `{}` already exists. Remove it manually or init in a different path.",
            path.display()
        );
    }

    let content = toml::to_string_pretty(&SiteConfig::default())?;
    fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))?;

    log!("init"; "wrote {}", path.display());
    Ok(())
}
