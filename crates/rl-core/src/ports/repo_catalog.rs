use async_trait::async_trait;

use crate::repo::Repo;

/// Repository listing as reported by the backend.
///
/// The backend makes no ordering promise; callers run the result through the
/// reconciler before display.
#[async_trait]
pub trait RepoCatalogPort: Send + Sync {
    async fn list_repos(&self) -> anyhow::Result<Vec<Repo>>;
}
