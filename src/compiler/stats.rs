//! Size statistics for optimized slides.
//!
//! Sizes come from filesystem metadata after every slide has been written,
//! so they reflect exactly what landed on disk.

use crate::compiler::file_name;
use anyhow::{Context, Result};
use std::{fs, path::Path};

/// Before/after sizes of a single slide.
#[derive(Debug, Clone, PartialEq)]
pub struct FileStats {
    pub name: String,
    pub original: u64,
    pub optimized: u64,
}

impl FileStats {
    /// Size reduction in percent, rounded to two decimals.
    pub fn reduction(&self) -> f64 {
        reduction(self.original, self.optimized)
    }
}

/// Accumulated sizes over all slides.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BuildStats {
    pub original_size: u64,
    pub optimized_size: u64,
    pub files: Vec<FileStats>,
}

impl BuildStats {
    /// Stat every `(original, optimized)` pair in order.
    pub fn collect<'a>(pairs: impl IntoIterator<Item = (&'a Path, &'a Path)>) -> Result<Self> {
        let mut stats = Self::default();
        for (original, optimized) in pairs {
            stats.push(FileStats {
                name: file_name(original)?.to_owned(),
                original: file_size(original)?,
                optimized: file_size(optimized)?,
            });
        }
        Ok(stats)
    }

    pub fn push(&mut self, file: FileStats) {
        self.original_size += file.original;
        self.optimized_size += file.optimized;
        self.files.push(file);
    }

    /// Total reduction in percent, rounded to two decimals.
    pub fn reduction(&self) -> f64 {
        reduction(self.original_size, self.optimized_size)
    }

    /// Report lines: totals first, then one line per file.
    pub fn report(&self) -> Vec<String> {
        let mut lines = vec![
            format!("original size: {:.2} KB", kib(self.original_size)),
            format!("optimized size: {:.2} KB", kib(self.optimized_size)),
            format!("total reduction: {:.2}%", self.reduction()),
        ];
        lines.extend(
            self.files
                .iter()
                .map(|file| format!("{}: {:.2}% reduction", file.name, file.reduction())),
        );
        lines
    }
}

/// `(1 - optimized / original) * 100`, rounded to two decimals.
///
/// An empty original counts as no reduction.
fn reduction(original: u64, optimized: u64) -> f64 {
    if original == 0 {
        return 0.0;
    }
    let percent = (1.0 - optimized as f64 / original as f64) * 100.0;
    (percent * 100.0).round() / 100.0
}

fn kib(bytes: u64) -> f64 {
    bytes as f64 / 1024.0
}

fn file_size(path: &Path) -> Result<u64> {
    Ok(fs::metadata(path)
        .with_context(|| format!("Failed to stat {}", path.display()))?
        .len())
}
