//! Copying matched files into an output directory.
//!
//! Copies happen one file at a time in the order given. A failure stops the
//! batch; files already copied are left in place.

use crate::error::{Result, TxtSearchError};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// What to do when the output directory already exists.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputDirPolicy {
    /// Create the directory; an existing one is an error
    #[default]
    CreateNew,

    /// Create the directory (and parents) if missing, otherwise reuse it
    ReuseExisting,
}

/// Make `dir` ready to receive copied files according to `policy`.
pub fn prepare_output_dir(dir: &Path, policy: OutputDirPolicy) -> Result<()> {
    match policy {
        OutputDirPolicy::CreateNew => {
            fs::create_dir(dir).map_err(|e| TxtSearchError::directory_create(dir, e))?;
            debug!(dir = %dir.display(), "Created output directory");
        }
        OutputDirPolicy::ReuseExisting => {
            if dir.is_dir() {
                warn!(dir = %dir.display(), "Reusing existing output directory");
                return Ok(());
            }
            fs::create_dir_all(dir).map_err(|e| TxtSearchError::directory_create(dir, e))?;
            debug!(dir = %dir.display(), "Created output directory");
        }
    }

    Ok(())
}

/// Copy each of `sources` to `dest_dir/<file name>`, creating or truncating
/// the destination. Returns the number of files copied.
///
/// Sources sharing a file name overwrite each other; the last one wins.
/// A source whose destination is the source file itself is rejected before
/// anything is truncated.
pub fn copy_files<P: AsRef<Path>>(sources: &[P], dest_dir: &Path) -> Result<usize> {
    for source in sources {
        let source = source.as_ref();
        let dest = destination_for(source, dest_dir)?;

        if is_same_file(source, &dest) {
            return Err(TxtSearchError::FileCopy {
                source_path: source.to_path_buf(),
                dest_path: dest,
                source: io::Error::new(
                    io::ErrorKind::InvalidInput,
                    "source and destination are the same file",
                ),
            });
        }

        let bytes = fs::copy(source, &dest).map_err(|e| TxtSearchError::FileCopy {
            source_path: source.to_path_buf(),
            dest_path: dest.clone(),
            source: e,
        })?;
        debug!(from = %source.display(), to = %dest.display(), bytes, "Copied file");
    }

    info!(
        dir = %dest_dir.display(),
        count = sources.len(),
        "Copied matched files"
    );
    Ok(sources.len())
}

/// Whether `dest` already exists and resolves to the same file as `source`.
fn is_same_file(source: &Path, dest: &Path) -> bool {
    match (fs::canonicalize(source), fs::canonicalize(dest)) {
        (Ok(source), Ok(dest)) => source == dest,
        _ => false,
    }
}

fn destination_for(source: &Path, dest_dir: &Path) -> Result<PathBuf> {
    match source.file_name() {
        Some(name) => Ok(dest_dir.join(name)),
        None => Err(TxtSearchError::FileCopy {
            source_path: source.to_path_buf(),
            dest_path: dest_dir.to_path_buf(),
            source: io::Error::new(io::ErrorKind::InvalidInput, "source has no file name"),
        }),
    }
}
