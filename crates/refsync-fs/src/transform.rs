//! Destination rewriting for staged files
//!
//! Controls where a source file lands inside the cloned workspace: strip a
//! fixed number of leading components from its path, then prepend a
//! subdirectory.

use crate::error::{Error, Result};
use crate::path::NormalizedPath;

/// Strip `count` leading components from `path`.
///
/// Stripping zero components returns the path unchanged. Stripping all of
/// the components or more is an error because the remainder would no longer
/// name a file.
pub fn strip_components(path: &NormalizedPath, count: usize) -> Result<NormalizedPath> {
    if count == 0 {
        return Ok(path.clone());
    }
    let available = path.component_count();
    if count >= available {
        return Err(Error::StripTooDeep {
            path: path.as_str().to_string(),
            requested: count,
            available,
        });
    }
    let remainder: Vec<&str> = path.components().skip(count).collect();
    Ok(NormalizedPath::new(remainder.join("/")))
}

/// Prepend `prefix` to `path` with a single separator.
///
/// An empty prefix returns the path unchanged.
pub fn prepend_path(path: &NormalizedPath, prefix: &str) -> NormalizedPath {
    if prefix.is_empty() {
        return path.clone();
    }
    NormalizedPath::new(prefix).join(path.as_str())
}

/// Compute the workspace-relative destination for a staged source file.
///
/// Applies [`strip_components`] then [`prepend_path`]. The result is always
/// relative to the workspace root: the root of an absolute source path is
/// not a component and never survives into the destination.
pub fn destination(source: &NormalizedPath, strip: usize, prefix: &str) -> Result<NormalizedPath> {
    let stripped = strip_components(source, strip)?;
    Ok(prepend_path(&stripped.relative(), prefix))
}
