//! Error types for refsync-core

use std::path::PathBuf;

/// Result type for refsync-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading or running a sync job
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Job file missing or unreadable
    #[error("Failed to read job file {path}: {source}")]
    JobRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // Transparent wrappers for underlying errors

    /// Filesystem error from refsync-fs
    #[error(transparent)]
    Fs(#[from] refsync_fs::Error),

    /// Git error from refsync-git
    #[error(transparent)]
    Git(#[from] refsync_git::Error),

    /// TOML deserialization error
    #[error(transparent)]
    TomlDe(#[from] toml::de::Error),
}
