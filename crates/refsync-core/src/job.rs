//! Sync job definition
//!
//! A job names the repository and ref to synchronize, the files to stage
//! into it, how their paths are rewritten on the way in, and the commit to
//! produce when the staged tree differs from the ref tip. Jobs are built
//! in code or loaded from a TOML file.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use refsync_git::Identity;

use crate::error::{Error, Result};

fn default_ref() -> String {
    "master".to_string()
}

/// One synchronization job.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyncJob {
    /// Clone URL of the repository to synchronize.
    pub repo: String,

    /// Ref to synchronize, e.g. `master` or `refs/meta/config`.
    #[serde(rename = "ref", default = "default_ref")]
    pub ref_name: String,

    /// Create the ref as a new history when origin does not have it.
    #[serde(default)]
    pub create_ref: bool,

    /// Source files to stage into the clone.
    pub files: Vec<PathBuf>,

    /// Leading components stripped from each source path.
    #[serde(default)]
    pub strip_path_components: usize,

    /// Subdirectory the rewritten paths are placed under.
    #[serde(default)]
    pub prepend_path: String,

    /// Message for the commit produced when anything changed.
    pub commit_message: String,

    /// Author and committer override for the produced commit.
    #[serde(flatten)]
    pub identity: Identity,

    /// Explicit scratch directory instead of a system temp one.
    ///
    /// The path must not exist yet. It is removed when the run finishes,
    /// whether the run succeeded or not.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scratch_dir: Option<PathBuf>,
}

impl SyncJob {
    /// Job with the required fields set and everything else defaulted.
    pub fn new(repo: impl Into<String>, commit_message: impl Into<String>) -> Self {
        Self {
            repo: repo.into(),
            ref_name: default_ref(),
            create_ref: false,
            files: Vec::new(),
            strip_path_components: 0,
            prepend_path: String::new(),
            commit_message: commit_message.into(),
            identity: Identity::default(),
            scratch_dir: None,
        }
    }

    /// Parse a job from TOML content.
    ///
    /// # Example
    ///
    /// ```
    /// use refsync_core::SyncJob;
    ///
    /// let job = SyncJob::from_toml_str(
    ///     r#"
    ///     repo = "ssh://admin@review.example.com:29418/All-Projects"
    ///     ref = "refs/meta/config"
    ///     files = ["render/All-Projects/project.config"]
    ///     strip_path_components = 1
    ///     commit_message = "Update access rules"
    ///     "#,
    /// )
    /// .unwrap();
    ///
    /// assert_eq!(job.ref_name, "refs/meta/config");
    /// assert_eq!(job.strip_path_components, 1);
    /// assert!(!job.create_ref);
    /// ```
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let job = toml::from_str(content)?;
        Ok(job)
    }

    /// Load a job from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| Error::JobRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_toml_str(&content)
    }
}
