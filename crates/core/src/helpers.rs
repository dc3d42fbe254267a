//! Filesystem helpers.

use crate::{BidsError, BidsResult};
use std::fs;
use std::path::Path;

/// Creates `path` and any missing parents.
///
/// With `overwrite`, an existing directory at `path` is removed recursively first so the result
/// is empty. Without it, an existing directory is left untouched.
///
/// # Errors
///
/// Returns [`BidsError::DirRemoval`] if the existing directory cannot be removed and
/// [`BidsError::DirCreation`] if creation fails, including when `path` exists as a file.
pub fn make_dir_all(path: &Path, overwrite: bool) -> BidsResult<()> {
    if overwrite && path.is_dir() {
        fs::remove_dir_all(path).map_err(|source| BidsError::DirRemoval {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::info!("Overwriting path: {}", path.display());
    }

    let existed = path.is_dir();
    fs::create_dir_all(path).map_err(|source| BidsError::DirCreation {
        path: path.to_path_buf(),
        source,
    })?;
    if !existed {
        tracing::info!("Creating folder: {}", path.display());
    }

    Ok(())
}
