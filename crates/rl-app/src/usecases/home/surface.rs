use std::ops::ControlFlow;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{Mutex, RwLock};
use tracing::debug;

use rl_core::ports::RepoCatalogPort;
use rl_core::repo::{reconcile, AddRepoSource, Repo};

use crate::poller::StatusPoller;
use crate::usecases::home::SyncBanner;

/// Cadence of the repository listing refresh.
pub const REPO_POLL_INTERVAL: Duration = Duration::from_secs(10);

/// Home repository surface: keeps a display-ready repository list fresh.
///
/// On activation it fetches and reconciles once, then every
/// [`REPO_POLL_INTERVAL`] via the shared [`StatusPoller`]. Reconciliation is
/// last-write-wins and idempotent, so a slow tick resolving late cannot
/// corrupt the list.
pub struct HomeSurface {
    catalog: Arc<dyn RepoCatalogPort>,
    repos: Arc<RwLock<Vec<Repo>>>,
    poller: StatusPoller,
    banner: SyncBanner,
    add_panel: Mutex<Option<AddRepoSource>>,
}

impl HomeSurface {
    pub fn new(catalog: Arc<dyn RepoCatalogPort>) -> Self {
        Self {
            catalog,
            repos: Arc::new(RwLock::new(Vec::new())),
            poller: StatusPoller::new(),
            banner: SyncBanner::new(),
            add_panel: Mutex::new(None),
        }
    }

    /// Start the recurring fetch-and-reconcile loop.
    pub async fn activate(&self) {
        let catalog = self.catalog.clone();
        let repos = self.repos.clone();
        self.poller
            .start(
                REPO_POLL_INTERVAL,
                move || {
                    let catalog = catalog.clone();
                    async move { catalog.list_repos().await }
                },
                move |list| {
                    let repos = repos.clone();
                    async move {
                        *repos.write().await = reconcile(Some(list));
                        ControlFlow::Continue(())
                    }
                },
            )
            .await;
    }

    /// Stop polling and drop the banner together with its pending timer.
    pub async fn deactivate(&self) {
        self.poller.stop().await;
        self.banner.dismiss().await;
    }

    /// Snapshot of the display-ready repository list.
    pub async fn repos(&self) -> Vec<Repo> {
        self.repos.read().await.clone()
    }

    /// Called when an add-repository dialog reports a completed submission:
    /// refresh immediately and raise the transient banner.
    pub async fn on_repo_added(&self) {
        if let Err(err) = self.refresh_now().await {
            debug!(error = %err, "post-add refresh failed");
        }
        self.banner.show().await;
    }

    /// One off-schedule fetch-and-reconcile.
    pub async fn refresh_now(&self) -> anyhow::Result<()> {
        let list = self.catalog.list_repos().await?;
        *self.repos.write().await = reconcile(Some(list));
        Ok(())
    }

    pub fn banner(&self) -> &SyncBanner {
        &self.banner
    }

    pub async fn open_add_panel(&self, source: AddRepoSource) {
        *self.add_panel.lock().await = Some(source);
    }

    pub async fn close_add_panel(&self) {
        *self.add_panel.lock().await = None;
    }

    pub async fn add_panel(&self) -> Option<AddRepoSource> {
        *self.add_panel.lock().await
    }
}
