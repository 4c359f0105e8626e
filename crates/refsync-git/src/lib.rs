//! Git plumbing for refsync
//!
//! Drives the external `git` binary through the clone, checkout, stage,
//! commit and push cycle. Exit codes carry meaning for several subcommands
//! (`ls-remote --exit-code`, `diff-index --quiet`), so everything goes
//! through [`GitRunner`], which reports codes instead of collapsing them
//! into pass or fail.

pub mod error;
pub mod identity;
pub mod probe;
pub mod runner;
pub mod workdir;

pub use error::{Error, Result};
pub use identity::Identity;
pub use probe::{RefPresence, RemoteRefChecker};
pub use runner::{GitOutput, GitRunner};
pub use workdir::GitWorkdir;
