//! Cycle driver
//!
//! Repeats scheduler cycles forever on a fixed interval. Every cycle gets a
//! fresh visited set, so a URL crawled in cycle K is crawled again in cycle
//! K+1. A shutdown handle lets callers stop the driver between cycles while
//! the in-flight cycle drains normally.

use crate::crawler::scheduler::CrawlScheduler;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Notify;
use url::Url;

/// Shared shutdown flag between driver and handle
#[derive(Default)]
struct Shutdown {
    requested: AtomicBool,
    wake: Notify,
}

impl Shutdown {
    fn is_requested(&self) -> bool {
        self.requested.load(Ordering::SeqCst)
    }
}

/// Requests a clean stop: no new cycles, in-flight cycle drains
#[derive(Clone)]
pub struct ShutdownHandle {
    inner: Arc<Shutdown>,
}

impl ShutdownHandle {
    pub fn shutdown(&self) {
        self.inner.requested.store(true, Ordering::SeqCst);
        self.inner.wake.notify_waiters();
    }
}

impl std::fmt::Debug for ShutdownHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShutdownHandle")
            .field("requested", &self.inner.is_requested())
            .finish()
    }
}

/// Runs crawl cycles on a fixed interval until shut down
pub struct CycleDriver {
    scheduler: CrawlScheduler,
    seeds: Vec<Url>,
    max_depth: u32,
    interval: Duration,
    max_cycles: Option<u64>,
    shutdown: Arc<Shutdown>,
}

impl std::fmt::Debug for CycleDriver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CycleDriver")
            .field("seeds", &self.seeds)
            .field("max_depth", &self.max_depth)
            .field("interval", &self.interval)
            .field("max_cycles", &self.max_cycles)
            .finish_non_exhaustive()
    }
}

impl CycleDriver {
    /// Creates a driver and its shutdown handle
    ///
    /// # Arguments
    ///
    /// * `scheduler` - The scheduler used for every cycle
    /// * `seeds` - Seed URLs crawled at depth 0 each cycle
    /// * `max_depth` - Inclusive depth bound per cycle
    /// * `interval` - Pause between the end of one cycle and the next
    /// * `max_cycles` - Stop after this many cycles; `None` runs forever
    pub fn new(
        scheduler: CrawlScheduler,
        seeds: Vec<Url>,
        max_depth: u32,
        interval: Duration,
        max_cycles: Option<u64>,
    ) -> (Self, ShutdownHandle) {
        let shutdown = Arc::new(Shutdown::default());
        let handle = ShutdownHandle {
            inner: shutdown.clone(),
        };
        (
            Self {
                scheduler,
                seeds,
                max_depth,
                interval,
                max_cycles,
                shutdown,
            },
            handle,
        )
    }

    /// Runs cycles until shutdown is requested or `max_cycles` is reached
    ///
    /// The cycle count increases monotonically and exists only for logging;
    /// no other state survives from one cycle to the next.
    pub async fn run(self) {
        let mut cycle: u64 = 0;

        loop {
            cycle += 1;
            tracing::info!(cycle, seeds = self.seeds.len(), "starting crawl cycle");
            let started = Instant::now();

            let stats = self.scheduler.run_cycle(&self.seeds, self.max_depth).await;

            tracing::info!(
                cycle,
                fetched = stats.pages_fetched,
                failed = stats.pages_failed,
                summaries = stats.summaries_emitted,
                enqueued = stats.links_enqueued,
                dropped = stats.links_dropped,
                elapsed_ms = started.elapsed().as_millis() as u64,
                "crawl cycle complete"
            );

            if let Some(limit) = self.max_cycles {
                if cycle >= limit {
                    tracing::info!(cycle, "cycle limit reached, stopping");
                    return;
                }
            }

            // Register for the shutdown wakeup before checking the flag: a
            // shutdown landing during the cycle or between these lines skips
            // the sleep instead of waiting out the interval.
            let woken = self.shutdown.wake.notified();

            if self.shutdown.is_requested() {
                tracing::info!("shutdown requested, not starting another cycle");
                return;
            }

            tracing::debug!(interval_secs = self.interval.as_secs(), "sleeping until next cycle");

            tokio::select! {
                _ = tokio::time::sleep(self.interval) => {}
                _ = woken => {}
            }

            if self.shutdown.is_requested() {
                tracing::info!("shutdown requested, not starting another cycle");
                return;
            }
        }
    }
}
