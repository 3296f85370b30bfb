use serde::{Deserialize, Serialize};

/// Backend-reported lifecycle stage of a repository's indexing process.
///
/// The client holds a read-only mirror of this value, refreshed wholesale on
/// every poll tick; it never drives transitions itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SyncStatus {
    /// Registered on the backend but never scheduled for indexing.
    Uninitialized,

    /// Waiting for an indexing worker.
    Queued,

    /// Initial index build in progress.
    Indexing,

    /// Incremental re-sync in progress.
    Syncing,

    /// Index is up to date.
    Done,

    /// Last indexing attempt failed.
    Error,

    /// Removed locally; awaiting cleanup.
    Removed,

    /// Deleted on the remote provider.
    RemoteRemoved,
}

impl SyncStatus {
    /// Check if indexing is currently in progress.
    pub fn is_active(self) -> bool {
        matches!(self, Self::Queued | Self::Indexing | Self::Syncing)
    }

    /// Check if the backend has settled on a final answer for this repo.
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Done | Self::Error | Self::RemoteRemoved)
    }

    /// Transient states that must never reach the displayed list.
    pub fn is_hidden(self) -> bool {
        matches!(self, Self::Uninitialized | Self::Removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn active_states_are_not_terminal() {
        for status in [SyncStatus::Queued, SyncStatus::Indexing, SyncStatus::Syncing] {
            assert!(status.is_active());
            assert!(!status.is_terminal());
        }
    }

    #[test]
    fn hidden_states_are_exactly_uninitialized_and_removed() {
        assert!(SyncStatus::Uninitialized.is_hidden());
        assert!(SyncStatus::Removed.is_hidden());
        assert!(!SyncStatus::Done.is_hidden());
        assert!(!SyncStatus::RemoteRemoved.is_hidden());
    }

    #[test]
    fn serializes_as_snake_case() {
        let json = serde_json::to_string(&SyncStatus::RemoteRemoved).unwrap();
        assert_eq!(json, "\"remote_removed\"");

        let status: SyncStatus = serde_json::from_str("\"uninitialized\"").unwrap();
        assert_eq!(status, SyncStatus::Uninitialized);
    }
}
