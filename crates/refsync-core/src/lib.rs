//! Core orchestration layer for refsync
//!
//! Runs synchronization jobs: clone the target repository into a scratch
//! workspace, materialize the requested ref, stage files with their paths
//! rewritten, commit only when the staged tree differs from the ref tip,
//! and push the result back. The scratch workspace is removed on every
//! exit path.
//!
//! # Architecture
//!
//! `refsync-core` sits between the CLI and the plumbing crates:
//!
//! ```text
//!     refsync-cli
//!          |
//!     refsync-core
//!       |      |
//! refsync-fs  refsync-git
//! ```

pub mod error;
pub mod job;
pub mod workflow;

pub use error::{Error, Result};
pub use job::SyncJob;
pub use workflow::{SyncReport, run_sync};
