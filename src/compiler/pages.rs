use crate::compiler::file_name;
use crate::config::SiteConfig;
use crate::utils::inline::Inliner;
use crate::utils::minify::{MinifyType, minify};
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Subdirectory of the output holding the slide pages.
pub const SLIDES_DIR: &str = "slides";

/// Minify the landing page into the output root.
pub fn optimize_index(config: &SiteConfig) -> Result<PathBuf> {
    let source = &config.build.index;
    let dest = config.build.output.join(file_name(source)?);

    let content = read_page(source)?;
    let minified = minify(MinifyType::Index(content.as_bytes()), config);
    write_page(&dest, &minified)?;

    Ok(dest)
}

/// Rewrite a slide's tags, minify it and write it to `<output>/slides/`.
///
/// Returns the path of the written file.
pub fn optimize_slide(path: &Path, config: &SiteConfig, inliner: &Inliner) -> Result<PathBuf> {
    let dest = config
        .build
        .output
        .join(SLIDES_DIR)
        .join(file_name(path)?);

    let mut content = read_page(path)?;
    inliner.apply(&mut content);
    let minified = minify(MinifyType::Slide(content.as_bytes()), config);
    write_page(&dest, &minified)?;

    Ok(dest)
}

fn read_page(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

fn write_page(path: &Path, content: &[u8]) -> Result<()> {
    fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))
}
