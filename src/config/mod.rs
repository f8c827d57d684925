//! Deck configuration management for `slidedeck.toml`.
//!
//! # Sections
//!
//! | Section   | Purpose                                           |
//! |-----------|---------------------------------------------------|
//! | `[build]` | Directory layout, minification, inlined tags      |
//! | `[nav]`   | Slide count, jump targets, swipe/transition tuning |
//!
//! The file is optional: without it every field takes its default, which
//! matches the conventional deck layout (`slides/`, `css/`, `js/`,
//! `Recursos/`, `index.html` → `dist/`).

mod build;
pub mod defaults;
mod error;
mod nav;

pub use build::BuildConfig;
pub use error::ConfigError;
pub use nav::{NavConfig, SlideSet};

use crate::cli::{Cli, Commands};
use anyhow::{Context, Result, bail};
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::{
    borrow::Cow,
    fs,
    path::{Path, PathBuf},
};

/// Critical CSS inlined into every slide unless `[build.critical_css]` is set.
const CRITICAL_CSS: &str = include_str!("../embed/critical.css");

/// Root configuration structure representing slidedeck.toml
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct SiteConfig {
    /// Absolute path to the config file (set after loading)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Asset pipeline settings
    #[serde(default)]
    pub build: BuildConfig,

    /// Navigator settings
    #[serde(default)]
    pub nav: NavConfig,
}

impl SiteConfig {
    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: SiteConfig = toml::from_str(content).map_err(ConfigError::from)?;
        Ok(config)
    }

    /// Load configuration from file path
    pub fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        Self::from_str(&content)
    }

    /// Get the root directory path
    pub fn get_root(&self) -> &Path {
        self.build.root.as_deref().unwrap_or(Path::new("./"))
    }

    /// Set the root directory path
    pub fn set_root(&mut self, path: &Path) {
        self.build.root = Some(path.to_path_buf())
    }

    /// Critical CSS source text, from `[build.critical_css]` or the built-in block.
    pub fn critical_css(&self) -> Result<Cow<'static, str>> {
        match &self.build.critical_css {
            Some(path) => fs::read_to_string(path)
                .map(Cow::Owned)
                .with_context(|| format!("Failed to read critical CSS `{}`", path.display())),
            None => Ok(Cow::Borrowed(CRITICAL_CSS)),
        }
    }

    /// Update configuration with CLI arguments
    pub fn update_with_cli(&mut self, cli: &Cli) {
        let root = cli
            .root
            .clone()
            .unwrap_or_else(|| self.get_root().to_owned());

        Self::update_option(&mut self.build.output, cli.output.as_ref());

        match &cli.command {
            Commands::Build { slides, minify } => {
                Self::update_option(&mut self.build.slides, slides.as_ref());
                Self::update_option(&mut self.build.minify, minify.as_ref());
            }
            Commands::Nav { total, .. } => {
                Self::update_option(&mut self.nav.total, total.as_ref());
            }
            Commands::Init => {}
        }

        self.update_path_with_root(&root, &cli.config);
    }

    /// Update config option if CLI value is provided
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    /// Resolve all paths against the root directory and normalize to absolute paths
    fn update_path_with_root(&mut self, root: &Path, config_file: &Path) {
        let root = Self::normalize_path(root);
        self.set_root(&root);
        self.config_path = Self::normalize_path(&root.join(config_file));

        let build = &mut self.build;
        build.slides = Self::normalize_path(&root.join(&build.slides));
        build.output = Self::normalize_path(&root.join(&build.output));
        build.css = Self::normalize_path(&root.join(&build.css));
        build.js = Self::normalize_path(&root.join(&build.js));
        build.index = Self::normalize_path(&root.join(&build.index));
        for dir in &mut build.assets {
            *dir = Self::normalize_path(&root.join(&*dir));
        }
        if let Some(path) = build.critical_css.as_ref() {
            build.critical_css = Some(Self::normalize_path(&root.join(path)));
        }
    }

    /// Normalize a path to absolute, using canonicalize if the path exists
    fn normalize_path(path: &Path) -> PathBuf {
        path.canonicalize().unwrap_or_else(|_| {
            // For non-existent paths, manually make them absolute
            if path.is_absolute() {
                path.to_path_buf()
            } else {
                std::env::current_dir()
                    .map(|cwd| cwd.join(path))
                    .unwrap_or_else(|_| path.to_path_buf())
            }
        })
    }

    /// Validate settings that serde cannot check on its own
    pub fn validate(&self) -> Result<()> {
        let nav = &self.nav;

        if nav.total == 0 {
            bail!(ConfigError::Validation("[nav.total] must be at least 1".into()));
        }

        if !(1..=nav.total).contains(&nav.fallback) {
            bail!(ConfigError::Validation(format!(
                "[nav.fallback] must be within 1..={}",
                nav.total
            )));
        }

        if let Some(slide) = nav
            .slides
            .iter()
            .flatten()
            .find(|n| !(1..=nav.total).contains(*n))
        {
            bail!(ConfigError::Validation(format!(
                "[nav.slides] contains {slide}, outside 1..={}",
                nav.total
            )));
        }

        if !nav.swipe_threshold.is_finite() || nav.swipe_threshold < 0.0 {
            bail!(ConfigError::Validation(
                "[nav.swipe_threshold] must be a non-negative number".into()
            ));
        }

        if self.build.inline.stylesheet.is_empty() {
            bail!(ConfigError::Validation(
                "[build.inline.stylesheet] must not be empty".into()
            ));
        }

        let output = self.build.output.as_path();
        if self.build.static_dirs().contains(&output) {
            bail!(ConfigError::Validation(
                "[build.output] must differ from the copied directories".into()
            ));
        }

        Ok(())
    }
}
