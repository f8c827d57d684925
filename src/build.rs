//! Deck building orchestration.
//!
//! # Architecture
//!
//! ```text
//! build_site()
//!     │
//!     ├── prepare_output()  ──► dist/, dist/slides/
//!     │
//!     ├── copy_dir() × N    ──► dist/Recursos, dist/css, dist/js
//!     │
//!     ├── optimize_index()  ──► dist/index.html
//!     │
//!     ├── optimize_slide()  ──► dist/slides/*.html  (one at a time)
//!     │
//!     └── BuildStats        ──► console report
//! ```
//!
//! Every step runs in sequence and the first failure aborts the build.
//! Nothing already written is cleaned up.

use crate::{
    compiler::{
        BuildStats, collect_slides, copy_dir, file_name, optimize_index, optimize_slide,
        pages::SLIDES_DIR,
    },
    config::SiteConfig,
    log,
    utils::inline::Inliner,
};
use anyhow::{Context, Result};
use std::{fs, path::Path};

/// Build the deck into `config.build.output`.
///
/// Returns the collected statistics after printing them.
pub fn build_site(config: &SiteConfig) -> Result<BuildStats> {
    let output = &config.build.output;
    log!("build"; "optimizing slides...");

    prepare_output(output)?;

    log!("assets"; "copying static assets...");
    for dir in config.build.static_dirs() {
        let count = copy_dir(dir, output)?;
        log!("assets"; "{} ({} files)", file_name(dir)?, count);
    }

    log!("index"; "optimizing {}...", file_name(&config.build.index)?);
    optimize_index(config)?;

    let inliner = Inliner::new(&config.build, &config.critical_css()?);
    let slides = collect_slides(&config.build.slides)?;
    log!("slides"; "found {} pages, {} substitution rules", slides.len(), inliner.rules().len());

    let mut optimized = Vec::with_capacity(slides.len());
    for slide in &slides {
        log!("slides"; "optimizing {}...", file_name(slide)?);
        optimized.push(optimize_slide(slide, config, &inliner)?);
    }

    let stats = BuildStats::collect(
        slides
            .iter()
            .map(|p| p.as_path())
            .zip(optimized.iter().map(|p| p.as_path())),
    )?;

    log!("done"; "optimization complete");
    for line in stats.report() {
        log!("stats"; "{}", line);
    }
    log!("done"; "output written to {}", output.display());

    Ok(stats)
}

/// Create the output directory and its slides subdirectory.
fn prepare_output(output: &Path) -> Result<()> {
    let slides = output.join(SLIDES_DIR);
    fs::create_dir_all(&slides)
        .with_context(|| format!("Failed to create output directory: {}", slides.display()))
}
