use crate::compiler::{collect_all_files, file_name};
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Copy `source` recursively into `output_root/<source name>`.
///
/// Returns the number of files copied. A missing source directory fails.
pub fn copy_dir(source: &Path, output_root: &Path) -> Result<usize> {
    let dest_root = output_root.join(file_name(source)?);
    let files = collect_all_files(source)?;

    fs::create_dir_all(&dest_root)
        .with_context(|| format!("Failed to create {}", dest_root.display()))?;

    for path in &files {
        let dest = dest_path(path, source, &dest_root)?;
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::copy(path, &dest).with_context(|| {
            format!("Failed to copy {} to {}", path.display(), dest.display())
        })?;
    }

    Ok(files.len())
}

fn dest_path(path: &Path, source: &Path, dest_root: &Path) -> Result<PathBuf> {
    let rel_path = path.strip_prefix(source)?;
    Ok(dest_root.join(rel_path))
}
