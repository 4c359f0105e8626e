//! Commit identity passed per call

use serde::{Deserialize, Serialize};

/// Author and committer override for a single commit.
///
/// Unset fields fall back to the git configuration visible to the child
/// process. The override travels as environment entries on the one
/// `git commit` invocation; the parent process environment is never
/// mutated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub committer_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub committer_email: Option<String>,
}

impl Identity {
    /// Environment entries for one `git commit` invocation.
    pub fn env_entries(&self) -> Vec<(&'static str, &str)> {
        let mut entries = Vec::new();
        if let Some(name) = &self.author_name {
            entries.push(("GIT_AUTHOR_NAME", name.as_str()));
        }
        if let Some(email) = &self.author_email {
            entries.push(("GIT_AUTHOR_EMAIL", email.as_str()));
        }
        if let Some(name) = &self.committer_name {
            entries.push(("GIT_COMMITTER_NAME", name.as_str()));
        }
        if let Some(email) = &self.committer_email {
            entries.push(("GIT_COMMITTER_EMAIL", email.as_str()));
        }
        entries
    }
}
