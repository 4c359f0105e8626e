//! The synchronization workflow
//!
//! Runs one job end to end: create a scratch workspace, clone the target
//! repository into it, materialize the requested ref, stage the job's
//! files, commit when the staged tree differs from the ref tip, and push
//! the result back to origin.

use serde::{Deserialize, Serialize};

use refsync_fs::{NormalizedPath, ScratchDir, stage, transform};
use refsync_git::{GitRunner, GitWorkdir};

use crate::Result;
use crate::job::SyncJob;

/// Local branch the target ref is materialized on inside the workspace.
const LOCAL_REF: &str = "local";

/// Outcome of one synchronization run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyncReport {
    /// Whether a commit was pushed
    pub changed: bool,
    /// Commit id that was pushed, when `changed`
    pub commit: Option<String>,
    /// Workspace-relative paths that were staged
    pub staged: Vec<String>,
}

impl SyncReport {
    /// Report for a run that pushed `commit`.
    pub fn pushed(commit: String, staged: Vec<String>) -> Self {
        Self {
            changed: true,
            commit: Some(commit),
            staged,
        }
    }

    /// Report for a run that found nothing to push.
    pub fn unchanged(staged: Vec<String>) -> Self {
        Self {
            changed: false,
            commit: None,
            staged,
        }
    }
}

/// Run `job` end to end.
///
/// The scratch workspace is torn down on every exit path: eagerly with
/// removal errors surfaced when the run succeeds, by `Drop` when any
/// step fails.
pub fn run_sync(job: &SyncJob) -> Result<SyncReport> {
    let scratch = match &job.scratch_dir {
        Some(path) => ScratchDir::at_path(path)?,
        None => ScratchDir::in_temp()?,
    };
    tracing::info!(
        workspace = %scratch.path().display(),
        repo = %job.repo,
        refname = %job.ref_name,
        "starting sync"
    );

    let outcome = execute(job, &scratch);
    match outcome {
        Ok(report) => {
            scratch.close()?;
            Ok(report)
        }
        // The scratch workspace is dropped here, removing it best effort.
        Err(e) => Err(e),
    }
}

fn execute(job: &SyncJob, scratch: &ScratchDir) -> Result<SyncReport> {
    let workdir = GitWorkdir::clone(GitRunner::new(), &job.repo, scratch.path())?;
    workdir.checkout_ref(&job.ref_name, LOCAL_REF, job.create_ref)?;

    let mut staged = Vec::with_capacity(job.files.len());
    for source in &job.files {
        let rel = transform::destination(
            &NormalizedPath::new(source),
            job.strip_path_components,
            &job.prepend_path,
        )?;
        let dest = workdir.root().to_native().join(rel.to_native());
        stage::copy_into(source, &dest)?;
        staged.push(rel.as_str().to_string());
    }
    workdir.stage(&staged)?;
    tracing::debug!(count = staged.len(), "staged files");

    if !workdir.has_pending_changes()? {
        tracing::info!(refname = %job.ref_name, "staged tree matches the ref tip, nothing to push");
        return Ok(SyncReport::unchanged(staged));
    }

    workdir.commit(&job.identity, &job.commit_message)?;
    let commit = workdir.head_commit()?;
    workdir.push(&job.repo, LOCAL_REF, &job.ref_name)?;
    tracing::info!(%commit, refname = %job.ref_name, "pushed");

    Ok(SyncReport::pushed(commit, staged))
}
