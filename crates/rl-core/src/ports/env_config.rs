use async_trait::async_trait;

use crate::config::EnvConfig;

/// Fetch the backend environment snapshot.
#[async_trait]
pub trait EnvConfigPort: Send + Sync {
    async fn fetch(&self) -> anyhow::Result<EnvConfig>;
}
