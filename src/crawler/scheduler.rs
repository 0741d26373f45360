//! Crawl task scheduler
//!
//! The scheduler owns the per-cycle traversal state: the frontier of pending
//! tasks, the visited set, and the depth bound. A fixed pool of worker tasks
//! drains the frontier; workers may enqueue new tasks while processing, so
//! cycle completion is detected with an outstanding-work counter rather than
//! an empty-queue check.

use crate::crawler::extractor::ContentExtractor;
use crate::crawler::fetcher::PageFetcher;
use crate::output::{ResultSink, SummaryRecord};
use crate::relevance::KeywordFilter;
use crate::summarize::Summarizer;
use chrono::Utc;
use std::collections::{HashSet, VecDeque};
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;
use tokio::task::JoinSet;
use url::Url;

/// A unit of crawl work: one URL at a known distance from a seed
#[derive(Debug, Clone)]
pub struct CrawlTask {
    pub url: Url,
    pub depth: u32,
}

/// Set of URLs already claimed this cycle
///
/// Insertion is an atomic check-and-set under one lock, so concurrent
/// discovery of the same URL from multiple pages yields exactly one task.
#[derive(Debug, Default)]
pub struct VisitedSet {
    inner: Mutex<HashSet<String>>,
}

impl VisitedSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claims `url`, returning true iff it was not previously seen this cycle
    pub fn insert(&self, url: &str) -> bool {
        self.inner.lock().unwrap().insert(url.to_string())
    }
}

/// Concurrent frontier with drain detection
///
/// `pending` counts tasks that have been enqueued but not fully processed.
/// It is incremented at push and decremented by `task_done` only after the
/// worker has finished the task, including any child enqueues, so a zero
/// count means the cycle is drained.
struct Frontier {
    queue: Mutex<VecDeque<CrawlTask>>,
    pending: AtomicUsize,
    wake: Notify,
}

impl Frontier {
    fn new() -> Self {
        Self {
            queue: Mutex::new(VecDeque::new()),
            pending: AtomicUsize::new(0),
            wake: Notify::new(),
        }
    }

    fn push(&self, task: CrawlTask) {
        self.pending.fetch_add(1, Ordering::SeqCst);
        self.queue.lock().unwrap().push_back(task);
        self.wake.notify_one();
    }

    /// Marks one task fully processed; wakes all idle workers on the zero
    /// transition so they observe the drained frontier and exit
    fn task_done(&self) {
        if self.pending.fetch_sub(1, Ordering::SeqCst) == 1 {
            self.wake.notify_waiters();
        }
    }

    fn outstanding(&self) -> usize {
        self.pending.load(Ordering::SeqCst)
    }

    /// Returns the next task, or None once the frontier is drained
    ///
    /// The Notified future is created before the empty-check: a push or the
    /// final task_done that lands in between still wakes this worker.
    async fn next(&self) -> Option<CrawlTask> {
        loop {
            let notified = self.wake.notified();

            if let Some(task) = self.queue.lock().unwrap().pop_front() {
                return Some(task);
            }

            if self.outstanding() == 0 {
                return None;
            }

            notified.await;
        }
    }
}

/// Counters accumulated over one cycle
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CycleStats {
    /// Pages fetched successfully
    pub pages_fetched: u64,
    /// Tasks abandoned on fetch or extract failure
    pub pages_failed: u64,
    /// Summary records delivered to the sink
    pub summaries_emitted: u64,
    /// Links that won the visited-set insert and were enqueued
    pub links_enqueued: u64,
    /// Links dropped because the frontier cap was reached
    pub links_dropped: u64,
}

#[derive(Default)]
struct CycleCounters {
    pages_fetched: AtomicU64,
    pages_failed: AtomicU64,
    summaries_emitted: AtomicU64,
    links_enqueued: AtomicU64,
    links_dropped: AtomicU64,
}

impl CycleCounters {
    fn snapshot(&self) -> CycleStats {
        CycleStats {
            pages_fetched: self.pages_fetched.load(Ordering::Relaxed),
            pages_failed: self.pages_failed.load(Ordering::Relaxed),
            summaries_emitted: self.summaries_emitted.load(Ordering::Relaxed),
            links_enqueued: self.links_enqueued.load(Ordering::Relaxed),
            links_dropped: self.links_dropped.load(Ordering::Relaxed),
        }
    }
}

/// Per-worker view of the cycle state, cloned into each worker task
#[derive(Clone)]
struct WorkerCtx {
    frontier: Arc<Frontier>,
    visited: Arc<VisitedSet>,
    counters: Arc<CycleCounters>,
    fetcher: Arc<dyn PageFetcher>,
    extractor: Arc<dyn ContentExtractor>,
    summarizer: Arc<dyn Summarizer>,
    sink: Arc<dyn ResultSink>,
    filter: Arc<KeywordFilter>,
    max_depth: u32,
    frontier_limit: usize,
}

/// Dispatches fetch/extract/filter work for one crawl cycle at a time
///
/// The scheduler itself holds no cycle state; `run_cycle` creates a fresh
/// visited set and frontier each call, so consecutive cycles are independent.
pub struct CrawlScheduler {
    fetcher: Arc<dyn PageFetcher>,
    extractor: Arc<dyn ContentExtractor>,
    summarizer: Arc<dyn Summarizer>,
    sink: Arc<dyn ResultSink>,
    filter: Arc<KeywordFilter>,
    workers: usize,
    frontier_limit: usize,
}

impl CrawlScheduler {
    pub fn new(
        fetcher: Arc<dyn PageFetcher>,
        extractor: Arc<dyn ContentExtractor>,
        summarizer: Arc<dyn Summarizer>,
        sink: Arc<dyn ResultSink>,
        filter: Arc<KeywordFilter>,
        workers: usize,
        frontier_limit: usize,
    ) -> Self {
        Self {
            fetcher,
            extractor,
            summarizer,
            sink,
            filter,
            workers: workers.max(1),
            frontier_limit: frontier_limit.max(1),
        }
    }

    /// Runs one full crawl cycle, returning once the frontier is drained
    ///
    /// Each seed is claimed in the visited set at enqueue time, so duplicate
    /// seeds collapse into one task. Tasks at `depth == max_depth` are still
    /// fetched, filtered and summarized but enqueue no further links.
    pub async fn run_cycle(&self, seeds: &[Url], max_depth: u32) -> CycleStats {
        let frontier = Arc::new(Frontier::new());
        let visited = Arc::new(VisitedSet::new());
        let counters = Arc::new(CycleCounters::default());

        for seed in seeds {
            if visited.insert(seed.as_str()) {
                frontier.push(CrawlTask {
                    url: seed.clone(),
                    depth: 0,
                });
            } else {
                tracing::debug!(url = %seed, "duplicate seed skipped");
            }
        }

        let mut pool = JoinSet::new();
        for worker in 0..self.workers {
            let ctx = WorkerCtx {
                frontier: frontier.clone(),
                visited: visited.clone(),
                counters: counters.clone(),
                fetcher: self.fetcher.clone(),
                extractor: self.extractor.clone(),
                summarizer: self.summarizer.clone(),
                sink: self.sink.clone(),
                filter: self.filter.clone(),
                max_depth,
                frontier_limit: self.frontier_limit,
            };
            pool.spawn(async move {
                worker_loop(worker, ctx).await;
            });
        }

        while let Some(joined) = pool.join_next().await {
            if let Err(e) = joined {
                tracing::error!(error = %e, "crawl worker panicked");
            }
        }

        counters.snapshot()
    }
}

/// Drains the frontier until the cycle is complete
async fn worker_loop(worker: usize, ctx: WorkerCtx) {
    while let Some(task) = ctx.frontier.next().await {
        process_task(&ctx, &task).await;
        ctx.frontier.task_done();
    }
    tracing::trace!(worker, "frontier drained, worker exiting");
}

/// Runs the fetch/extract/filter/summarize pipeline for one task
///
/// Every failure here is task-local: it is logged with the URL and the task
/// is abandoned without retry, leaving the rest of the frontier untouched.
async fn process_task(ctx: &WorkerCtx, task: &CrawlTask) {
    tracing::debug!(url = %task.url, depth = task.depth, "processing task");

    let raw = match ctx.fetcher.fetch(&task.url).await {
        Ok(raw) => raw,
        Err(e) => {
            tracing::warn!(url = %task.url, error = %e, "fetch failed, abandoning task");
            ctx.counters.pages_failed.fetch_add(1, Ordering::Relaxed);
            return;
        }
    };

    let content = match ctx.extractor.extract(&raw, &task.url) {
        Ok(content) => content,
        Err(e) => {
            tracing::warn!(url = %task.url, error = %e, "extract failed, abandoning task");
            ctx.counters.pages_failed.fetch_add(1, Ordering::Relaxed);
            return;
        }
    };
    ctx.counters.pages_fetched.fetch_add(1, Ordering::Relaxed);

    // Relevance gates summarization only, never traversal.
    if ctx.filter.is_relevant(task.url.as_str()) && !content.text.trim().is_empty() {
        match ctx.summarizer.summarize(&content.text) {
            Ok(summary) => {
                let record = SummaryRecord {
                    url: task.url.to_string(),
                    heading: summary.heading,
                    body: summary.body,
                    emitted_at: Utc::now(),
                };
                match ctx.sink.publish(&record) {
                    Ok(()) => {
                        ctx.counters.summaries_emitted.fetch_add(1, Ordering::Relaxed);
                    }
                    Err(e) => {
                        tracing::warn!(url = %task.url, error = %e, "sink rejected record");
                    }
                }
            }
            Err(e) => {
                // "No summary" is an expected outcome, dropped silently.
                tracing::debug!(url = %task.url, error = %e, "summarization declined");
            }
        }
    }

    if task.depth < ctx.max_depth {
        for link in content.links {
            if ctx.frontier.outstanding() >= ctx.frontier_limit {
                tracing::debug!(url = %link, "frontier cap reached, dropping link");
                ctx.counters.links_dropped.fetch_add(1, Ordering::Relaxed);
                continue;
            }
            if ctx.visited.insert(link.as_str()) {
                ctx.counters.links_enqueued.fetch_add(1, Ordering::Relaxed);
                ctx.frontier.push(CrawlTask {
                    url: link,
                    depth: task.depth + 1,
                });
            }
        }
    }
}
