//! Error types for refsync-git

/// Result type for refsync-git operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in refsync-git operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Failed to spawn {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("`git {args}` failed with exit code {code}: {stderr}")]
    CommandFailed {
        args: String,
        code: i32,
        stderr: String,
    },

    #[error("Cloning {url} failed: {stderr}")]
    CloneFailed { url: String, stderr: String },

    #[error("Ref '{refname}' does not exist in origin")]
    RefNotFound { refname: String },

    #[error("Checking '{refname}' in origin failed with exit code {code}: {stderr}")]
    RefCheckFailed {
        refname: String,
        code: i32,
        stderr: String,
    },

    #[error("Commit failed: {stderr}")]
    CommitFailed { stderr: String },

    #[error("Pushing {refspec} failed: {stderr}")]
    PushFailed { refspec: String, stderr: String },
}
