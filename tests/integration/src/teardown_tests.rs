//! Scratch workspace teardown guarantees
//!
//! The workflow must remove its scratch workspace on success and on every
//! failure path, and must refuse to run in a directory it did not create.

use std::fs;
use std::path::Path;

use pretty_assertions::assert_eq;
use tempfile::TempDir;

use refsync_core::{Error, SyncJob, run_sync};
use refsync_fs::{Error as FsError, NormalizedPath};
use refsync_git::Error as GitError;
use refsync_test_utils::git::{file_at_ref, ref_tip, seeded_remote};

fn bot_identity() -> refsync_git::Identity {
    refsync_git::Identity {
        author_name: Some("Config Bot".to_string()),
        author_email: Some("bot@review.invalid".to_string()),
        committer_name: Some("Config Bot".to_string()),
        committer_email: Some("bot@review.invalid".to_string()),
    }
}

fn one_file_job(remote: &Path, sources: &TempDir) -> SyncJob {
    let mut job = SyncJob::new(remote.to_str().unwrap(), "Sync configuration");
    job.files = vec![sources.path().join("project.config")];
    job.strip_path_components = NormalizedPath::new(sources.path()).component_count();
    job.identity = bot_identity();
    job
}

#[test]
fn test_scratch_removed_after_successful_push() {
    let remote = TempDir::new().unwrap();
    seeded_remote(remote.path(), &[("project.config", "v1\n")]);
    let sources = TempDir::new().unwrap();
    fs::write(sources.path().join("project.config"), "v2\n").unwrap();
    let parent = TempDir::new().unwrap();
    let scratch = parent.path().join("work");

    let mut job = one_file_job(remote.path(), &sources);
    job.scratch_dir = Some(scratch.clone());

    let report = run_sync(&job).unwrap();

    assert!(report.changed);
    assert!(!scratch.exists());
}

#[test]
fn test_scratch_removed_after_clone_failure() {
    let sources = TempDir::new().unwrap();
    fs::write(sources.path().join("project.config"), "v2\n").unwrap();
    let parent = TempDir::new().unwrap();
    let scratch = parent.path().join("work");

    let mut job = one_file_job(Path::new("/refsync/definitely/missing.git"), &sources);
    job.scratch_dir = Some(scratch.clone());

    let err = run_sync(&job).unwrap_err();

    assert!(matches!(err, Error::Git(GitError::CloneFailed { .. })));
    assert!(!scratch.exists());
}

#[test]
fn test_scratch_removed_after_missing_ref_failure() {
    let remote = TempDir::new().unwrap();
    seeded_remote(remote.path(), &[("README.md", "# seed\n")]);
    let sources = TempDir::new().unwrap();
    fs::write(sources.path().join("project.config"), "v2\n").unwrap();
    let parent = TempDir::new().unwrap();
    let scratch = parent.path().join("work");

    let mut job = one_file_job(remote.path(), &sources);
    job.ref_name = "refs/meta/config".to_string();
    job.scratch_dir = Some(scratch.clone());

    let err = run_sync(&job).unwrap_err();

    assert!(matches!(err, Error::Git(GitError::RefNotFound { .. })));
    assert!(!scratch.exists());
}

#[test]
fn test_scratch_removed_after_staging_failure() {
    let remote = TempDir::new().unwrap();
    seeded_remote(remote.path(), &[("project.config", "v1\n")]);
    let sources = TempDir::new().unwrap();
    // No source file is written, so staging fails.
    let parent = TempDir::new().unwrap();
    let scratch = parent.path().join("work");

    let mut job = one_file_job(remote.path(), &sources);
    job.scratch_dir = Some(scratch.clone());

    let err = run_sync(&job).unwrap_err();

    assert!(matches!(err, Error::Fs(FsError::Stage { .. })));
    assert!(!scratch.exists());
    // The failed run pushed nothing.
    assert_eq!(
        file_at_ref(remote.path(), "refs/heads/master", "project.config").unwrap(),
        "v1\n"
    );
}

#[test]
fn test_scratch_path_is_reusable_after_teardown() {
    let remote = TempDir::new().unwrap();
    seeded_remote(remote.path(), &[("project.config", "v1\n")]);
    let sources = TempDir::new().unwrap();
    fs::write(sources.path().join("project.config"), "v2\n").unwrap();
    let parent = TempDir::new().unwrap();
    let scratch = parent.path().join("work");

    let mut job = one_file_job(remote.path(), &sources);
    job.scratch_dir = Some(scratch.clone());

    run_sync(&job).unwrap();
    // The path is free again, so a second run can reserve it.
    let second = run_sync(&job).unwrap();

    assert!(!second.changed);
    assert!(!scratch.exists());
}

#[test]
fn test_existing_scratch_path_is_refused_and_kept() {
    let remote = TempDir::new().unwrap();
    seeded_remote(remote.path(), &[("project.config", "v1\n")]);
    let tip_before = ref_tip(remote.path(), "refs/heads/master").unwrap();
    let sources = TempDir::new().unwrap();
    fs::write(sources.path().join("project.config"), "v2\n").unwrap();
    let parent = TempDir::new().unwrap();
    let scratch = parent.path().join("work");
    fs::create_dir(&scratch).unwrap();
    fs::write(scratch.join("keep"), "not ours\n").unwrap();

    let mut job = one_file_job(remote.path(), &sources);
    job.scratch_dir = Some(scratch.clone());

    let err = run_sync(&job).unwrap_err();

    assert!(matches!(err, Error::Fs(FsError::ScratchExists { .. })));
    // The occupied directory and its contents are left alone.
    assert!(scratch.join("keep").exists());
    assert_eq!(ref_tip(remote.path(), "refs/heads/master").unwrap(), tip_before);
}
