use async_trait::async_trait;
use serde_json::Value;

/// Durable key→value store shared across sessions.
///
/// Two value scopes: plain strings and JSON blobs. Values survive a full
/// process restart and are only removed explicitly. Reads and writes carry no
/// transactional guarantee; last write wins, which is acceptable because
/// writes happen on rare user-triggered or session-boundary events.
#[async_trait]
pub trait FlagStorePort: Send + Sync {
    async fn get_plain(&self, key: &str) -> anyhow::Result<Option<String>>;

    async fn save_plain(&self, key: &str, value: &str) -> anyhow::Result<()>;

    async fn get_json(&self, key: &str) -> anyhow::Result<Option<Value>>;

    async fn save_json(&self, key: &str, value: &Value) -> anyhow::Result<()>;

    async fn remove(&self, key: &str) -> anyhow::Result<()>;
}
