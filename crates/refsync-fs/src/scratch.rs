//! Scratch workspaces for clone-and-push cycles

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::error::{Error, Result};

/// A disposable directory that a repository is cloned into.
///
/// The directory is removed when the value is dropped; [`close`](Self::close)
/// removes it eagerly and surfaces any removal error. Temporary scratch
/// directories live under the system temp root; explicit ones reserve the
/// caller-supplied path and fail if it already exists.
#[derive(Debug)]
pub struct ScratchDir {
    inner: Inner,
}

#[derive(Debug)]
enum Inner {
    Temp(TempDir),
    Explicit(ExplicitDir),
}

impl ScratchDir {
    /// Create a scratch directory under the system temp root.
    pub fn in_temp() -> Result<Self> {
        let dir = tempfile::Builder::new()
            .prefix("refsync-")
            .tempdir()
            .map_err(|e| Error::io(std::env::temp_dir(), e))?;
        tracing::debug!(path = %dir.path().display(), "created scratch directory");
        Ok(Self {
            inner: Inner::Temp(dir),
        })
    }

    /// Reserve `path` as the scratch directory.
    ///
    /// Creation is atomic: if the path already exists, even as an empty
    /// directory left by a concurrent run, this fails with
    /// [`Error::ScratchExists`].
    pub fn at_path(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        match fs::create_dir(&path) {
            Ok(()) => {
                tracing::debug!(path = %path.display(), "created scratch directory");
                Ok(Self {
                    inner: Inner::Explicit(ExplicitDir { path }),
                })
            }
            Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => {
                Err(Error::ScratchExists { path })
            }
            Err(e) => Err(Error::io(path, e)),
        }
    }

    /// The directory the workspace lives at.
    pub fn path(&self) -> &Path {
        match &self.inner {
            Inner::Temp(dir) => dir.path(),
            Inner::Explicit(dir) => &dir.path,
        }
    }

    /// Remove the directory now, reporting removal errors.
    pub fn close(self) -> Result<()> {
        match self.inner {
            Inner::Temp(dir) => {
                let path = dir.path().to_path_buf();
                dir.close().map_err(|e| Error::io(path, e))
            }
            Inner::Explicit(dir) => dir.close(),
        }
    }
}

#[derive(Debug)]
struct ExplicitDir {
    path: PathBuf,
}

impl ExplicitDir {
    fn close(mut self) -> Result<()> {
        let path = std::mem::take(&mut self.path);
        // Skip Drop so removal happens exactly once, with the error surfaced.
        std::mem::forget(self);
        fs::remove_dir_all(&path).map_err(|e| Error::io(&path, e))
    }
}

impl Drop for ExplicitDir {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.path);
    }
}
