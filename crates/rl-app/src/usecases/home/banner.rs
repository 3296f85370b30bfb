use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::task::AbortHandle;
use tokio::time::sleep;

/// How long the "syncing repository" banner stays up on its own.
pub const BANNER_AUTO_DISMISS: Duration = Duration::from_secs(3);

/// Transient success banner shown after a repository addition completes.
///
/// Auto-dismisses after [`BANNER_AUTO_DISMISS`]; explicit dismissal races
/// safely against the timer, and dismissing twice is a no-op.
pub struct SyncBanner {
    visible: Arc<AtomicBool>,
    dismiss_timer: Mutex<Option<AbortHandle>>,
}

impl SyncBanner {
    pub fn new() -> Self {
        Self {
            visible: Arc::new(AtomicBool::new(false)),
            dismiss_timer: Mutex::new(None),
        }
    }

    /// Show the banner and arm the auto-dismiss timer, replacing any timer
    /// still pending from a previous show.
    pub async fn show(&self) {
        self.visible.store(true, Ordering::SeqCst);

        let mut guard = self.dismiss_timer.lock().await;
        if let Some(previous) = guard.take() {
            previous.abort();
        }

        let visible = self.visible.clone();
        let handle = tokio::spawn(async move {
            sleep(BANNER_AUTO_DISMISS).await;
            visible.store(false, Ordering::SeqCst);
        });
        *guard = Some(handle.abort_handle());
    }

    /// Hide the banner and cancel the pending auto-dismiss, if any.
    pub async fn dismiss(&self) {
        self.visible.store(false, Ordering::SeqCst);
        if let Some(timer) = self.dismiss_timer.lock().await.take() {
            timer.abort();
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible.load(Ordering::SeqCst)
    }
}

impl Default for SyncBanner {
    fn default() -> Self {
        Self::new()
    }
}
