//! Fixed-interval quote re-polling.
//!
//! The first poll fires immediately, then one per interval. Each poll runs
//! in its own task, so a slow provider never delays the next tick; ordering
//! between overlapping polls is settled by the [`QuoteFeed`] generation check.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info, warn};

use super::feed::{FeedUpdate, QuoteFeed};
use crate::port::outbound::quote::QuoteProvider;

/// Default re-poll interval.
pub const DEFAULT_REFRESH_INTERVAL: Duration = Duration::from_secs(300);

/// Periodic driver for a [`QuoteProvider`].
pub struct QuotePoller {
    provider: Arc<dyn QuoteProvider>,
    feed: Arc<QuoteFeed>,
    interval: Duration,
}

/// Handle to a running poller.
pub struct PollerHandle {
    shutdown: watch::Sender<bool>,
    task: JoinHandle<()>,
}

impl PollerHandle {
    /// Stop ticking and wait for the loop to exit. In-flight fetches still
    /// complete into the feed.
    pub async fn stop(self) {
        let _ = self.shutdown.send(true);
        let _ = self.task.await;
    }
}

impl QuotePoller {
    #[must_use]
    pub fn new(provider: Arc<dyn QuoteProvider>, feed: Arc<QuoteFeed>, interval: Duration) -> Self {
        Self {
            provider,
            feed,
            interval,
        }
    }

    /// Replace the poll interval.
    #[must_use]
    pub const fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    #[must_use]
    pub const fn interval(&self) -> Duration {
        self.interval
    }

    /// Spawn the poll loop; every completion is sent on `updates`.
    #[must_use]
    pub fn spawn(self, updates: mpsc::UnboundedSender<FeedUpdate>) -> PollerHandle {
        let (shutdown, signal) = watch::channel(false);
        let task = tokio::spawn(self.run(updates, signal));
        PollerHandle { shutdown, task }
    }

    /// Run the poll loop until `shutdown` flips to `true` or its sender drops.
    pub async fn run(
        self,
        updates: mpsc::UnboundedSender<FeedUpdate>,
        mut shutdown: watch::Receiver<bool>,
    ) {
        let mut ticker = tokio::time::interval(self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        info!(
            provider = self.provider.name(),
            interval_secs = self.interval.as_secs(),
            "Quote poller started"
        );

        loop {
            tokio::select! {
                _ = ticker.tick() => self.poll_once(&updates),
                changed = shutdown.changed() => {
                    if changed.is_err() || *shutdown.borrow() {
                        break;
                    }
                }
            }
        }

        info!("Quote poller stopped");
    }

    fn poll_once(&self, updates: &mpsc::UnboundedSender<FeedUpdate>) {
        let ticket = self.feed.begin();
        let provider = Arc::clone(&self.provider);
        let feed = Arc::clone(&self.feed);
        let updates = updates.clone();
        debug!(generation = ticket.generation(), "Polling quote provider");

        tokio::spawn(async move {
            let result = provider.fetch().await;
            let update = feed.complete(ticket, result);
            match &update {
                FeedUpdate::Applied { generation, .. } => {
                    info!(generation, "Quote applied");
                }
                FeedUpdate::Failed { generation, reason } => {
                    warn!(generation, error = %reason, "Quote fetch failed");
                }
                FeedUpdate::Stale {
                    generation,
                    current,
                } => {
                    debug!(generation, current, "Discarded stale quote");
                }
            }
            let _ = updates.send(update);
        });
    }
}
