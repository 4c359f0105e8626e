//! Clone workspaces and the git operations performed inside them

use std::path::Path;

use refsync_fs::NormalizedPath;

use crate::error::{Error, Result};
use crate::identity::Identity;
use crate::probe::{RefPresence, RemoteRefChecker};
use crate::runner::{GitOutput, GitRunner};

/// A repository cloned into a scratch directory.
///
/// Created by [`clone`](Self::clone) with `--no-checkout`, so the worktree
/// stays empty until [`checkout_ref`](Self::checkout_ref) materializes the
/// ref being synchronized. The workdir does not own the directory; the
/// caller controls its lifetime.
#[derive(Debug)]
pub struct GitWorkdir {
    root: NormalizedPath,
    runner: GitRunner,
}

impl GitWorkdir {
    /// Clone `url` into `target` without checking out a worktree.
    ///
    /// `target` must be an existing empty directory.
    pub fn clone(runner: GitRunner, url: &str, target: &Path) -> Result<Self> {
        let output = runner.run(target, &["clone", "--quiet", "--no-checkout", url, "."], &[])?;
        if !output.success() {
            return Err(Error::CloneFailed {
                url: url.to_string(),
                stderr: output.stderr.trim().to_string(),
            });
        }
        tracing::debug!(url, target = %target.display(), "cloned repository");
        Ok(Self {
            root: NormalizedPath::new(target),
            runner,
        })
    }

    /// Workspace root the clone lives at.
    pub fn root(&self) -> &NormalizedPath {
        &self.root
    }

    /// Materialize `refname` on the local branch `local`.
    ///
    /// An existing remote ref is fetched and checked out. A missing one is
    /// either started as an empty orphan branch (`create` set) or reported
    /// as [`Error::RefNotFound`]. An indeterminate probe fails with
    /// [`Error::RefCheckFailed`] and is never treated as absence.
    pub fn checkout_ref(&self, refname: &str, local: &str, create: bool) -> Result<()> {
        self.checkout_ref_with(self, refname, local, create)
    }

    /// [`checkout_ref`](Self::checkout_ref) with an explicit probe.
    pub fn checkout_ref_with(
        &self,
        remote_refs: &dyn RemoteRefChecker,
        refname: &str,
        local: &str,
        create: bool,
    ) -> Result<()> {
        match remote_refs.probe_ref(refname)? {
            RefPresence::Found => {
                let refspec = format!("{refname}:{local}");
                self.run_checked(&["fetch", "--quiet", "origin", &refspec])?;
                self.run_checked(&["checkout", "--quiet", local])?;
                tracing::debug!(refname, local, "checked out existing ref");
            }
            RefPresence::NotFound if create => {
                self.run_checked(&["checkout", "--quiet", "--orphan", local])?;
                // The orphan checkout stages the previous HEAD's tree; drop
                // it so the new ref starts empty.
                self.run_checked(&["rm", "--quiet", "-r", "--force", "--ignore-unmatch", "."])?;
                tracing::debug!(refname, local, "started orphan branch for new ref");
            }
            RefPresence::NotFound => {
                return Err(Error::RefNotFound {
                    refname: refname.to_string(),
                });
            }
            RefPresence::Unknown { code, stderr } => {
                return Err(Error::RefCheckFailed {
                    refname: refname.to_string(),
                    code,
                    stderr,
                });
            }
        }
        Ok(())
    }

    /// Stage workspace-relative `paths` into the index.
    ///
    /// An empty list is a no-op.
    pub fn stage(&self, paths: &[String]) -> Result<()> {
        if paths.is_empty() {
            return Ok(());
        }
        let mut args = vec!["add", "--"];
        args.extend(paths.iter().map(String::as_str));
        self.run_checked(&args)?;
        Ok(())
    }

    /// Whether the index differs from the current HEAD.
    ///
    /// On an unborn HEAD (fresh orphan branch, clone of an empty remote)
    /// any staged entry counts as a pending change.
    pub fn has_pending_changes(&self) -> Result<bool> {
        let head = self.run(&["rev-parse", "--verify", "--quiet", "HEAD"])?;
        match head.code {
            0 => {
                let diff = self.run(&["diff-index", "--quiet", "--cached", "HEAD"])?;
                match diff.code {
                    0 => Ok(false),
                    1 => Ok(true),
                    code => Err(Error::CommandFailed {
                        args: "diff-index --quiet --cached HEAD".to_string(),
                        code,
                        stderr: diff.stderr.trim().to_string(),
                    }),
                }
            }
            1 => {
                let listing = self.run_checked(&["ls-files", "--cached"])?;
                Ok(!listing.stdout.trim().is_empty())
            }
            code => Err(Error::CommandFailed {
                args: "rev-parse --verify --quiet HEAD".to_string(),
                code,
                stderr: head.stderr.trim().to_string(),
            }),
        }
    }

    /// Commit the index with `message`, applying `identity` to this call
    /// only.
    pub fn commit(&self, identity: &Identity, message: &str) -> Result<()> {
        let output = self.runner.run(
            &self.root.to_native(),
            &["commit", "--quiet", "--message", message],
            &identity.env_entries(),
        )?;
        if !output.success() {
            return Err(Error::CommitFailed {
                stderr: output.stderr.trim().to_string(),
            });
        }
        Ok(())
    }

    /// Commit id of HEAD.
    pub fn head_commit(&self) -> Result<String> {
        let output = self.run_checked(&["rev-parse", "HEAD"])?;
        Ok(output.stdout_trimmed().to_string())
    }

    /// Push the local branch `local` to `remote_ref` at `url`.
    pub fn push(&self, url: &str, local: &str, remote_ref: &str) -> Result<()> {
        let refspec = format!("{local}:{remote_ref}");
        let output = self.run(&["push", "--quiet", url, &refspec])?;
        if !output.success() {
            return Err(Error::PushFailed {
                refspec,
                stderr: output.stderr.trim().to_string(),
            });
        }
        tracing::debug!(url, %refspec, "pushed");
        Ok(())
    }

    fn run(&self, args: &[&str]) -> Result<GitOutput> {
        self.runner.run(&self.root.to_native(), args, &[])
    }

    fn run_checked(&self, args: &[&str]) -> Result<GitOutput> {
        self.runner.run_checked(&self.root.to_native(), args, &[])
    }
}

impl RemoteRefChecker for GitWorkdir {
    fn probe_ref(&self, refname: &str) -> Result<RefPresence> {
        let output = self.run(&["ls-remote", "--exit-code", "origin", refname])?;
        let presence = match output.code {
            0 => RefPresence::Found,
            2 => RefPresence::NotFound,
            code => RefPresence::Unknown {
                code,
                stderr: output.stderr.trim().to_string(),
            },
        };
        tracing::debug!(refname, ?presence, "probed remote ref");
        Ok(presence)
    }
}
