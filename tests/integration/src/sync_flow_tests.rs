//! End-to-end synchronization flows
//!
//! These tests exercise the complete pipeline: job definition, scratch
//! clone, path rewriting, staging, change detection, and push, asserted
//! against bare remotes through an independent read path.

use std::fs;
use std::path::Path;

use pretty_assertions::assert_eq;
use tempfile::TempDir;

use refsync_core::{SyncJob, run_sync};
use refsync_fs::NormalizedPath;
use refsync_git::Identity;
use refsync_test_utils::git::{
    author_at_ref, file_at_ref, message_at_ref, parent_count, ref_tip, seeded_remote,
};

fn bot_identity() -> Identity {
    Identity {
        author_name: Some("Config Bot".to_string()),
        author_email: Some("bot@review.invalid".to_string()),
        committer_name: Some("Config Bot".to_string()),
        committer_email: Some("bot@review.invalid".to_string()),
    }
}

fn component_count(path: &Path) -> usize {
    NormalizedPath::new(path).component_count()
}

/// The Gerrit shape this tool exists for: bootstrap `refs/meta/config`
/// on a project whose default branch must stay untouched.
#[test]
fn test_meta_config_bootstrap_flow() {
    let remote = TempDir::new().unwrap();
    seeded_remote(remote.path(), &[("README.md", "# All-Projects\n")]);
    let master_before = ref_tip(remote.path(), "refs/heads/master").unwrap();

    let sources = TempDir::new().unwrap();
    let render = sources.path().join("render");
    fs::create_dir(&render).unwrap();
    fs::write(render.join("groups"), "global:Anonymous-Users\n").unwrap();
    fs::write(render.join("project.config"), "[access]\n").unwrap();

    let mut job = SyncJob::new(
        remote.path().to_str().unwrap(),
        "Update Gerrit top-level project configuration",
    );
    job.ref_name = "refs/meta/config".to_string();
    job.create_ref = true;
    job.files = vec![render.join("groups"), render.join("project.config")];
    job.strip_path_components = component_count(&render);
    job.identity = bot_identity();

    let report = run_sync(&job).unwrap();

    assert!(report.changed);
    assert_eq!(
        report.staged,
        vec!["groups".to_string(), "project.config".to_string()]
    );
    assert_eq!(
        file_at_ref(remote.path(), "refs/meta/config", "groups").unwrap(),
        "global:Anonymous-Users\n"
    );
    assert_eq!(
        file_at_ref(remote.path(), "refs/meta/config", "project.config").unwrap(),
        "[access]\n"
    );
    assert_eq!(parent_count(remote.path(), "refs/meta/config"), Some(0));
    assert_eq!(
        author_at_ref(remote.path(), "refs/meta/config").unwrap(),
        ("Config Bot".to_string(), "bot@review.invalid".to_string())
    );
    assert_eq!(
        message_at_ref(remote.path(), "refs/meta/config").unwrap(),
        "Update Gerrit top-level project configuration\n"
    );
    // The default branch is untouched.
    assert_eq!(
        ref_tip(remote.path(), "refs/heads/master").unwrap(),
        master_before
    );
}

/// Repeated runs converge: push, no-op, push again on new content.
#[test]
fn test_incremental_update_flow() {
    let remote = TempDir::new().unwrap();
    seeded_remote(remote.path(), &[("project.config", "v1\n")]);
    let sources = TempDir::new().unwrap();
    fs::write(sources.path().join("project.config"), "v2\n").unwrap();

    let mut job = SyncJob::new(remote.path().to_str().unwrap(), "Update project config");
    job.files = vec![sources.path().join("project.config")];
    job.strip_path_components = component_count(sources.path());
    job.identity = bot_identity();

    let first = run_sync(&job).unwrap();
    assert!(first.changed);
    let tip_after_first = ref_tip(remote.path(), "refs/heads/master").unwrap();
    assert_eq!(first.commit.as_deref(), Some(tip_after_first.as_str()));

    // Same content again: nothing to push, tip stays.
    let second = run_sync(&job).unwrap();
    assert!(!second.changed);
    assert_eq!(second.commit, None);
    assert_eq!(
        ref_tip(remote.path(), "refs/heads/master").unwrap(),
        tip_after_first
    );

    // New content: a new commit on top of the previous one.
    fs::write(sources.path().join("project.config"), "v3\n").unwrap();
    let third = run_sync(&job).unwrap();
    assert!(third.changed);
    let tip_after_third = ref_tip(remote.path(), "refs/heads/master").unwrap();
    assert_ne!(tip_after_third, tip_after_first);
    assert_eq!(parent_count(remote.path(), "refs/heads/master"), Some(1));
    assert_eq!(
        file_at_ref(remote.path(), "refs/heads/master", "project.config").unwrap(),
        "v3\n"
    );
}

/// Path rewriting end to end: strip the source prefix, prepend a
/// subdirectory, and find the file at the rewritten path in the pushed
/// tree.
#[test]
fn test_strip_and_prepend_rewrite_flow() {
    let remote = TempDir::new().unwrap();
    seeded_remote(remote.path(), &[("README.md", "hello\n")]);

    let sources = TempDir::new().unwrap();
    let nested = sources.path().join("a").join("b");
    fs::create_dir_all(&nested).unwrap();
    fs::write(nested.join("config.yaml"), "key: value\n").unwrap();

    let mut job = SyncJob::new(remote.path().to_str().unwrap(), "Relocate config");
    job.files = vec![nested.join("config.yaml")];
    // Strip everything above and including `a`, keep `b/config.yaml`.
    job.strip_path_components = component_count(sources.path()) + 1;
    job.prepend_path = "sub".to_string();
    job.identity = bot_identity();

    let report = run_sync(&job).unwrap();

    assert_eq!(report.staged, vec!["sub/b/config.yaml".to_string()]);
    assert_eq!(
        file_at_ref(remote.path(), "refs/heads/master", "sub/b/config.yaml").unwrap(),
        "key: value\n"
    );
}

/// A job loaded from TOML behaves exactly like one built in code.
#[test]
fn test_job_file_round_trip_flow() {
    let remote = TempDir::new().unwrap();
    seeded_remote(remote.path(), &[("project.config", "v1\n")]);
    let sources = TempDir::new().unwrap();
    fs::write(sources.path().join("project.config"), "v2\n").unwrap();

    let job_file = sources.path().join("job.toml");
    fs::write(
        &job_file,
        format!(
            r#"
repo = "{}"
files = ["{}"]
strip_path_components = {}
commit_message = "Update project config"
author_name = "Config Bot"
author_email = "bot@review.invalid"
committer_name = "Config Bot"
committer_email = "bot@review.invalid"
"#,
            remote.path().display(),
            sources.path().join("project.config").display(),
            component_count(sources.path()),
        ),
    )
    .unwrap();

    let job = SyncJob::load(&job_file).unwrap();
    let report = run_sync(&job).unwrap();

    assert!(report.changed);
    assert_eq!(
        file_at_ref(remote.path(), "refs/heads/master", "project.config").unwrap(),
        "v2\n"
    );
}
