use std::ops::ControlFlow;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{Mutex, RwLock};
use tokio::task::AbortHandle;
use tokio::time::sleep;
use tracing::debug;

use rl_core::config::EnvConfig;
use rl_core::ports::EnvConfigPort;

use crate::poller::StatusPoller;

/// Cadence of the environment refresh while waiting for the GitHub login.
pub const LINK_POLL_INTERVAL: Duration = Duration::from_millis(500);

/// Upper bound on the wait; elapsing it abandons the watch silently.
pub const LINK_WAIT_TIMEOUT: Duration = Duration::from_secs(30);

/// Bounded watcher for the GitHub login appearing in the environment config.
///
/// Polls every [`LINK_POLL_INTERVAL`], replacing the shared snapshot
/// wholesale on each result, and stops on the first of three triggers:
/// the login turning non-empty, [`LINK_WAIT_TIMEOUT`] elapsing, or an
/// explicit [`stop`](Self::stop). Each trigger is a safe no-op against the
/// others; cancelling an already-cancelled timer does nothing.
pub struct LinkReadinessWatcher {
    env_config: Arc<dyn EnvConfigPort>,
    snapshot: Arc<RwLock<EnvConfig>>,
    poller: Arc<StatusPoller>,
    timeout: Mutex<Option<AbortHandle>>,
}

impl LinkReadinessWatcher {
    pub fn new(env_config: Arc<dyn EnvConfigPort>, snapshot: Arc<RwLock<EnvConfig>>) -> Self {
        Self {
            env_config,
            snapshot,
            poller: Arc::new(StatusPoller::new()),
            timeout: Mutex::new(None),
        }
    }

    /// Begin watching. A no-op when the cached snapshot already carries a
    /// login; re-starting replaces both the poll loop and the timeout.
    pub async fn start(&self) {
        if self.snapshot.read().await.has_github_login() {
            return;
        }

        let mut guard = self.timeout.lock().await;
        if let Some(previous) = guard.take() {
            previous.abort();
        }
        let timeout_poller = self.poller.clone();
        let timeout_handle = tokio::spawn(async move {
            sleep(LINK_WAIT_TIMEOUT).await;
            debug!("github link wait timed out, abandoning watch");
            timeout_poller.stop().await;
        });
        *guard = Some(timeout_handle.abort_handle());
        drop(guard);

        let env_config = self.env_config.clone();
        let snapshot = self.snapshot.clone();
        self.poller
            .start(
                LINK_POLL_INTERVAL,
                move || {
                    let env_config = env_config.clone();
                    async move { env_config.fetch().await }
                },
                move |config: EnvConfig| {
                    let snapshot = snapshot.clone();
                    async move {
                        let ready = config.has_github_login();
                        *snapshot.write().await = config;
                        if ready {
                            debug!("github login visible, watch complete");
                            ControlFlow::Break(())
                        } else {
                            ControlFlow::Continue(())
                        }
                    }
                },
            )
            .await;
    }

    /// Tear down both timers. Safe to call at any point, any number of
    /// times.
    pub async fn stop(&self) {
        if let Some(timeout) = self.timeout.lock().await.take() {
            timeout.abort();
        }
        self.poller.stop().await;
    }
}
