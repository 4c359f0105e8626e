//! Copying source files into the staging workspace

use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

/// Copy `source` to `dest`, creating missing parent directories.
///
/// The source is resolved with [`dunce::canonicalize`] before copying, so a
/// missing or unreadable source fails here rather than mid-copy.
pub fn copy_into(source: &Path, dest: &Path) -> Result<()> {
    let resolved = dunce::canonicalize(source).map_err(|e| Error::stage(source, dest, e))?;
    if let Some(parent) = dest.parent()
        && !parent.exists()
    {
        fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }
    fs::copy(&resolved, dest).map_err(|e| Error::stage(source, dest, e))?;
    tracing::debug!(source = %source.display(), dest = %dest.display(), "staged file");
    Ok(())
}
