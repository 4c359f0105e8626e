//! Remote ref probing

use crate::error::Result;

/// Presence of a ref in the remote a workspace was cloned from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RefPresence {
    /// The ref exists in origin.
    Found,
    /// Origin answered authoritatively that the ref does not exist.
    NotFound,
    /// The check itself failed; absence must not be assumed.
    Unknown { code: i32, stderr: String },
}

/// Capability to ask a remote whether a ref exists.
///
/// `git ls-remote --exit-code` distinguishes the three outcomes by exit
/// code: 0 when the ref matched, 2 when the listing succeeded without a
/// match, anything else when the listing itself failed. Implementations
/// must keep the third outcome separate instead of folding it into
/// absence.
pub trait RemoteRefChecker {
    /// Probe `refname` in the remote.
    fn probe_ref(&self, refname: &str) -> Result<RefPresence>;
}
