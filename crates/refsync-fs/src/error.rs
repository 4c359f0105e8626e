//! Error types for refsync-fs

use std::path::PathBuf;

/// Result type for refsync-fs operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in refsync-fs operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot strip {requested} component(s) from '{path}': only {available} available")]
    StripTooDeep {
        path: String,
        requested: usize,
        available: usize,
    },

    #[error("Failed to stage {source_path} as {dest}: {source}")]
    Stage {
        source_path: PathBuf,
        dest: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Scratch directory {path} already exists")]
    ScratchExists { path: PathBuf },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn stage(
        source_path: impl Into<PathBuf>,
        dest: impl Into<PathBuf>,
        source: std::io::Error,
    ) -> Self {
        Self::Stage {
            source_path: source_path.into(),
            dest: dest.into(),
            source,
        }
    }
}
