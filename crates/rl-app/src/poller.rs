//! Interval-driven fetch-and-reconcile primitive.
//!
//! Every polling consumer (home surface, link readiness watcher) goes
//! through this type instead of hand-rolling interval/timeout pairs, so all
//! of them share one cancellation story.

use std::future::Future;
use std::ops::ControlFlow;
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::task::AbortHandle;
use tracing::debug;

/// Owns at most one timer task.
///
/// `start` invokes the producer immediately and again every interval,
/// handing each successful result to the reconcile step. Re-starting an
/// active poller replaces the previous task; timers never stack. `stop`
/// aborts the pending timer and is a safe no-op on an inactive or
/// already-finished poller.
pub struct StatusPoller {
    task: Mutex<Option<AbortHandle>>,
}

impl StatusPoller {
    pub fn new() -> Self {
        Self {
            task: Mutex::new(None),
        }
    }

    /// Activate the poller.
    ///
    /// A failed producer call is skipped (logged at debug) and the next
    /// scheduled tick proceeds normally. The reconcile step returns
    /// [`ControlFlow`]: `Break` ends the polling loop from within, which is
    /// how bounded watchers cancel themselves on success.
    pub async fn start<T, P, PFut, R, RFut>(&self, period: Duration, mut produce: P, mut reconcile: R)
    where
        T: Send + 'static,
        P: FnMut() -> PFut + Send + 'static,
        PFut: Future<Output = anyhow::Result<T>> + Send + 'static,
        R: FnMut(T) -> RFut + Send + 'static,
        RFut: Future<Output = ControlFlow<()>> + Send + 'static,
    {
        let mut guard = self.task.lock().await;
        if let Some(previous) = guard.take() {
            previous.abort();
        }

        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            loop {
                interval.tick().await;
                match produce().await {
                    Ok(value) => {
                        if reconcile(value).await.is_break() {
                            break;
                        }
                    }
                    Err(err) => {
                        debug!(error = %err, "poll tick failed, skipping");
                    }
                }
            }
        });

        *guard = Some(handle.abort_handle());
    }

    /// Deactivate the poller. No reconciliation call is dispatched after
    /// this returns.
    pub async fn stop(&self) {
        if let Some(task) = self.task.lock().await.take() {
            task.abort();
        }
    }
}

impl Default for StatusPoller {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::future::{ready, Ready};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use tokio::time::advance;

    fn counting_producer(
        calls: Arc<AtomicUsize>,
    ) -> impl FnMut() -> Ready<anyhow::Result<()>> + Send {
        move || {
            calls.fetch_add(1, Ordering::SeqCst);
            ready(Ok(()))
        }
    }

    fn keep_polling(_: ()) -> Ready<ControlFlow<()>> {
        ready(ControlFlow::Continue(()))
    }

    #[tokio::test(start_paused = true)]
    async fn fires_immediately_then_every_interval() {
        let poller = StatusPoller::new();
        let calls = Arc::new(AtomicUsize::new(0));

        poller
            .start(
                Duration::from_secs(10),
                counting_producer(calls.clone()),
                keep_polling,
            )
            .await;
        tokio::task::yield_now().await;

        assert_eq!(calls.load(Ordering::SeqCst), 1);

        advance(Duration::from_secs(30)).await;
        tokio::task::yield_now().await;

        assert_eq!(calls.load(Ordering::SeqCst), 4);
    }

    #[tokio::test(start_paused = true)]
    async fn stop_prevents_further_calls() {
        let poller = StatusPoller::new();
        let calls = Arc::new(AtomicUsize::new(0));

        poller
            .start(
                Duration::from_secs(5),
                counting_producer(calls.clone()),
                keep_polling,
            )
            .await;
        tokio::task::yield_now().await;
        poller.stop().await;

        advance(Duration::from_secs(60)).await;
        tokio::task::yield_now().await;

        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn restart_replaces_the_previous_timer() {
        let poller = StatusPoller::new();
        let first = Arc::new(AtomicUsize::new(0));
        let second = Arc::new(AtomicUsize::new(0));

        poller
            .start(
                Duration::from_secs(5),
                counting_producer(first.clone()),
                keep_polling,
            )
            .await;
        tokio::task::yield_now().await;

        poller
            .start(
                Duration::from_secs(5),
                counting_producer(second.clone()),
                keep_polling,
            )
            .await;
        tokio::task::yield_now().await;

        advance(Duration::from_secs(10)).await;
        tokio::task::yield_now().await;

        // The first loop stopped at its single immediate call.
        assert_eq!(first.load(Ordering::SeqCst), 1);
        assert_eq!(second.load(Ordering::SeqCst), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn failed_ticks_are_skipped_without_stopping_the_loop() {
        let poller = StatusPoller::new();
        let attempts = Arc::new(AtomicUsize::new(0));
        let reconciled = Arc::new(AtomicUsize::new(0));

        let produce_attempts = attempts.clone();
        let reconcile_count = reconciled.clone();
        poller
            .start(
                Duration::from_secs(1),
                move || {
                    let attempt = produce_attempts.fetch_add(1, Ordering::SeqCst);
                    async move {
                        if attempt % 2 == 0 {
                            Err(anyhow::anyhow!("transient"))
                        } else {
                            Ok(attempt)
                        }
                    }
                },
                move |_| {
                    reconcile_count.fetch_add(1, Ordering::SeqCst);
                    ready(ControlFlow::Continue(()))
                },
            )
            .await;
        tokio::task::yield_now().await;

        advance(Duration::from_secs(3)).await;
        tokio::task::yield_now().await;

        assert_eq!(attempts.load(Ordering::SeqCst), 4);
        assert_eq!(reconciled.load(Ordering::SeqCst), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn reconcile_break_ends_the_loop() {
        let poller = StatusPoller::new();
        let calls = Arc::new(AtomicUsize::new(0));

        poller
            .start(
                Duration::from_secs(1),
                counting_producer(calls.clone()),
                |_| ready(ControlFlow::Break(())),
            )
            .await;
        tokio::task::yield_now().await;

        advance(Duration::from_secs(10)).await;
        tokio::task::yield_now().await;

        assert_eq!(calls.load(Ordering::SeqCst), 1);

        // Stopping after self-cancellation stays a no-op.
        poller.stop().await;
    }

    #[tokio::test]
    async fn stop_without_start_is_a_no_op() {
        let poller = StatusPoller::new();
        poller.stop().await;
        poller.stop().await;
    }
}
