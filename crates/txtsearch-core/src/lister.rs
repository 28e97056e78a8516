//! Flat directory listing.

use crate::error::{Result, TxtSearchError};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// List every non-directory entry directly inside `dir`, sorted by path.
///
/// Subdirectories are skipped, not descended into. The entry's own file type
/// is used, so a symlink is listed even if it points at a directory.
pub fn list_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir).map_err(|e| TxtSearchError::directory_read(dir, e))?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| TxtSearchError::directory_read(dir, e))?;
        let file_type = entry
            .file_type()
            .map_err(|e| TxtSearchError::directory_read(dir, e))?;

        if file_type.is_dir() {
            continue;
        }
        files.push(dir.join(entry.file_name()));
    }

    // All paths share `dir` as a prefix, so this is lexicographic on the full path.
    files.sort();

    debug!(dir = %dir.display(), files = files.len(), "Listed directory");
    Ok(files)
}
