use serde::{Deserialize, Serialize};

use crate::repo::SyncStatus;

/// A connected repository as reported by the backend.
///
/// Owned by the backend; the client mirrors it read-only and recomputes the
/// displayed subset on every refresh instead of mutating records in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repo {
    /// Opaque backend reference, e.g. `github.com/owner/name`.
    #[serde(rename = "ref")]
    pub reference: String,
    pub name: String,
    pub sync_status: SyncStatus,
}

impl Repo {
    pub fn new(reference: impl Into<String>, name: impl Into<String>, sync_status: SyncStatus) -> Self {
        Self {
            reference: reference.into(),
            name: name.into(),
            sync_status,
        }
    }
}

/// Source kind selectable in the add-repository panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AddRepoSource {
    Local,
    GitHub,
    Public,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repo_round_trips_with_ref_field() {
        let repo = Repo::new("github.com/acme/widgets", "widgets", SyncStatus::Done);
        let json = serde_json::to_string(&repo).unwrap();
        assert!(json.contains("\"ref\":\"github.com/acme/widgets\""));

        let parsed: Repo = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, repo);
    }
}
