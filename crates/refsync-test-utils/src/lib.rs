//! Shared test utilities for the refsync workspace.
//!
//! Provides git fixtures for exercising the sync workflow against real
//! repositories: bare remotes seeded over the `git` CLI, plus git2-backed
//! probes for asserting what a push actually produced. Dev-dependency only,
//! never published.
//!
//! # Modules
//!
//! - [`git`]: bare-remote fixtures and ref/blob probes

pub mod git;
