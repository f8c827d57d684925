//! Page optimization and asset copying.
//!
//! - **pages**: rewrite and minify the index and slide pages
//! - **assets**: copy static directories verbatim
//! - **stats**: before/after sizes of the optimized slides
//!
//! # Build Flow
//!
//! ```text
//! copy_dir() ──► optimize_index() ──► optimize_slide() ──► BuildStats::collect()
//!     │                │                    │                      │
//!     ▼                ▼                    ▼                      ▼
//! dist/<dir>     dist/index.html    dist/slides/*.html      console report
//! ```

pub mod assets;
pub mod pages;
pub mod stats;

use anyhow::{Context, Result};
use std::{
    fs,
    path::{Path, PathBuf},
};
use walkdir::WalkDir;

// ============================================================================
// Public API
// ============================================================================

pub use assets::copy_dir;
pub use pages::{optimize_index, optimize_slide};
pub use stats::BuildStats;

// ============================================================================
// Shared utilities
// ============================================================================

/// Files to ignore during directory traversal
const IGNORED_FILES: &[&str] = &[".DS_Store"];

/// Collect all files from a directory recursively.
///
/// Unlike a lenient walk, any unreadable entry (or a missing root) is an error.
pub fn collect_all_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = entry.with_context(|| format!("Failed to walk {}", dir.display()))?;
        let name = entry.file_name().to_str().unwrap_or_default();
        if entry.file_type().is_file() && !IGNORED_FILES.contains(&name) {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}

/// Collect slide pages: `*.html` files directly inside `dir`, sorted by name.
pub fn collect_slides(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir)
        .with_context(|| format!("Failed to read slides directory {}", dir.display()))?;

    let mut slides = Vec::new();
    for entry in entries {
        let path = entry?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "html") {
            slides.push(path);
        }
    }
    slides.sort();
    Ok(slides)
}

/// File name of `path` for display and output naming.
pub fn file_name(path: &Path) -> Result<&str> {
    path.file_name()
        .and_then(|name| name.to_str())
        .with_context(|| format!("Invalid file name: {}", path.display()))
}
