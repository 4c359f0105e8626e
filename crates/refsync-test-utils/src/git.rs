//! Bare-remote fixtures and ref probes.
//!
//! Fixtures shell out to the `git` CLI so seeded history is exactly what a
//! production remote would hold; probes use `git2` so assertions do not go
//! through the code under test.

use std::fs;
use std::path::Path;
use std::process::Command;

use tempfile::TempDir;

/// Initialises a bare repository to act as a remote.
///
/// The remote starts with no refs: probing any ref reports absence, and a
/// clone of it has an unborn HEAD.
///
/// # Panics
/// Panics if `git2::Repository::init_bare` fails.
pub fn bare_remote(path: &Path) -> git2::Repository {
    git2::Repository::init_bare(path).unwrap_or_else(|e| {
        panic!(
            "bare_remote: failed to init bare repository at {}: {e}",
            path.display()
        )
    })
}

/// Initialises a bare remote whose `refs/heads/master` holds one commit
/// containing `files`.
///
/// # Panics
/// Panics if any git operation fails.
pub fn seeded_remote(path: &Path, files: &[(&str, &str)]) -> git2::Repository {
    let repo = bare_remote(path);
    seed_ref(path, "refs/heads/master", files);
    repo
}

/// Seeds `refname` in a bare remote with one commit containing `files`.
///
/// Builds the commit in a throwaway workdir over the `git` CLI and pushes it
/// as `HEAD:<refname>`. Each `(path, contents)` pair may use nested paths;
/// parent directories are created. Seed a given ref at most once per remote;
/// a second seed from a fresh workdir would be rejected as a non-fast-forward.
///
/// # Panics
/// Panics if any git operation fails.
pub fn seed_ref(remote: &Path, refname: &str, files: &[(&str, &str)]) {
    let workdir =
        TempDir::new().unwrap_or_else(|e| panic!("seed_ref: failed to create workdir: {e}"));
    let run = |args: &[&str]| {
        let output = Command::new("git")
            .args(args)
            .current_dir(workdir.path())
            .output()
            .unwrap_or_else(|e| panic!("seed_ref: failed to run `git {args:?}`: {e}"));
        if !output.status.success() {
            panic!(
                "seed_ref: `git {args:?}` failed:\n{}",
                String::from_utf8_lossy(&output.stderr)
            );
        }
    };

    run(&["init"]);
    run(&["config", "user.email", "seed@test.invalid"]);
    run(&["config", "user.name", "Seed"]);
    run(&["config", "commit.gpgsign", "false"]);

    for (rel, contents) in files {
        let target = workdir.path().join(rel);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)
                .unwrap_or_else(|e| panic!("seed_ref: failed to create {}: {e}", parent.display()));
        }
        fs::write(&target, contents)
            .unwrap_or_else(|e| panic!("seed_ref: failed to write {}: {e}", target.display()));
    }

    run(&["add", "."]);
    run(&["commit", "--allow-empty", "-m", &format!("Seed {refname}")]);

    let remote_str = remote
        .to_str()
        .unwrap_or_else(|| panic!("seed_ref: remote path {} is not UTF-8", remote.display()));
    run(&["push", "--quiet", remote_str, &format!("HEAD:{refname}")]);
}

/// The commit id at `refname`, or `None` when the ref does not exist.
///
/// Accepts any repository path (bare remote or workdir clone); `refname` may
/// be symbolic, e.g. `HEAD`.
///
/// # Panics
/// Panics if the repository cannot be opened.
pub fn ref_tip(repo_path: &Path, refname: &str) -> Option<String> {
    let repo = open(repo_path);
    let commit = repo.find_reference(refname).ok()?.peel_to_commit().ok()?;
    Some(commit.id().to_string())
}

/// The UTF-8 contents of `file` in the tree at `refname`.
///
/// `None` when the ref or the file does not exist.
///
/// # Panics
/// Panics if the repository cannot be opened.
pub fn file_at_ref(repo_path: &Path, refname: &str, file: &str) -> Option<String> {
    let repo = open(repo_path);
    let commit = repo.find_reference(refname).ok()?.peel_to_commit().ok()?;
    let tree = commit.tree().ok()?;
    let entry = tree.get_path(Path::new(file)).ok()?;
    let object = entry.to_object(&repo).ok()?;
    let blob = object.as_blob()?;
    String::from_utf8(blob.content().to_vec()).ok()
}

/// Number of parents of the commit at `refname`, or `None` when the ref does
/// not exist.
///
/// # Panics
/// Panics if the repository cannot be opened.
pub fn parent_count(repo_path: &Path, refname: &str) -> Option<usize> {
    let repo = open(repo_path);
    let commit = repo.find_reference(refname).ok()?.peel_to_commit().ok()?;
    Some(commit.parent_count())
}

/// Author name and email of the commit at `refname`.
///
/// # Panics
/// Panics if the repository cannot be opened.
pub fn author_at_ref(repo_path: &Path, refname: &str) -> Option<(String, String)> {
    let repo = open(repo_path);
    let commit = repo.find_reference(refname).ok()?.peel_to_commit().ok()?;
    let author = commit.author();
    Some((
        author.name().unwrap_or_default().to_string(),
        author.email().unwrap_or_default().to_string(),
    ))
}

/// Message of the commit at `refname`.
///
/// # Panics
/// Panics if the repository cannot be opened.
pub fn message_at_ref(repo_path: &Path, refname: &str) -> Option<String> {
    let repo = open(repo_path);
    let commit = repo.find_reference(refname).ok()?.peel_to_commit().ok()?;
    commit.message().map(str::to_string)
}

fn open(path: &Path) -> git2::Repository {
    git2::Repository::open(path)
        .unwrap_or_else(|e| panic!("failed to open repository at {}: {e}", path.display()))
}
