//! Command-line interface definitions.
//!
//! Defines all CLI arguments and subcommands using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Slide deck asset pipeline CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Project root directory
    #[arg(short, long)]
    pub root: Option<PathBuf>,

    /// Output directory path (relative to project root)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Config file name (default: slidedeck.toml)
    #[arg(short = 'C', long, default_value = "slidedeck.toml")]
    pub config: PathBuf,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Write a default config file into the project root
    Init,

    /// Optimize slides and index page, copy static assets into the output directory
    Build {
        /// Slides directory (relative to project root)
        #[arg(short, long)]
        slides: Option<PathBuf>,

        /// Minify the html content
        #[arg(short, long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
        minify: Option<bool>,
    },

    /// Replay input events against a slide page and print what the navigator does
    ///
    /// Events: ArrowLeft, ArrowRight, Space, Enter, Home, End, f,
    /// swipe:<start_x>:<end_x>, pinch, click, fullscreenchange
    Nav {
        /// Slide page to load (e.g. slides/slide-02.html)
        page: PathBuf,

        /// Input events, applied in order
        events: Vec<String>,

        /// Override the total slide count
        #[arg(short, long)]
        total: Option<u32>,
    },
}

impl Cli {
    pub const fn is_init(&self) -> bool {
        matches!(self.command, Commands::Init)
    }
}
