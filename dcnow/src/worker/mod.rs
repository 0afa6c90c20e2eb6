// dcnow-rs/dcnow/src/worker/mod.rs

//! Background worker driving the blocking connect and fetch operations.
//!
//! The caller's thread (typically a UI loop) never blocks: it starts an
//! operation, then calls [`Worker::poll`] once per frame until a terminal
//! [`Progress`] value hands the outcome back and reclaims the worker to
//! idle. Shared state lives behind one mutex and every access is a short
//! lock-copy-unlock, so the render loop cannot stall on the worker.

use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crate::cache::StatusCache;
use crate::config::{DialConfig, FetchConfig};
use crate::constants::MAX_STATUS_LEN;
use crate::ops;
use crate::status::StatusSink;
use crate::transport::http::HttpTransport;
use crate::transport::link::LinkTransport;
use crate::types::{BoundedString, FetchResult, WorkerState};
use crate::utils;
use crate::{Error, Result};

/// What one `poll()` observed. Terminal variants (`Connected`, `Fetched`,
/// `Failed`) are delivered exactly once; the poll that returns them
/// reclaims the worker to `Idle`.
#[derive(Debug)]
pub enum Progress {
    Idle,
    Connecting,
    Fetching,
    /// Bring-up finished; the link is ready for fetches.
    Connected,
    /// A fetch finished and this is its result (also cached).
    Fetched(Box<FetchResult>),
    Failed(Error),
}

#[derive(Default)]
struct Inner {
    state: WorkerState,
    status: BoundedString<MAX_STATUS_LEN>,
    cancel_requested: bool,
    /// Set by the worker thread together with the terminal state.
    /// `Ok(None)` = connect finished, `Ok(Some(..))` = fetch finished.
    outcome: Option<Result<Option<Box<FetchResult>>>>,
}

/// Publishes operation progress into the shared status line.
struct ContextSink {
    inner: Arc<Mutex<Inner>>,
}

impl StatusSink for ContextSink {
    fn publish(&self, message: &str) {
        log::debug!("worker: {}", message);
        utils::lock(&self.inner).status.set(message);
    }
}

/// Owns the worker thread and the shared context.
///
/// One operation runs at a time; starting a second while the first is in
/// flight fails with [`Error::Busy`]. The link transport is shared with
/// the thread and locked for the duration of a bring-up, which is what
/// makes concurrent bring-ups structurally impossible.
pub struct Worker {
    inner: Arc<Mutex<Inner>>,
    link: Arc<Mutex<Box<dyn LinkTransport>>>,
    http_factory: Arc<dyn Fn() -> Box<dyn HttpTransport> + Send + Sync>,
    cache: Arc<StatusCache>,
    dial: DialConfig,
    fetch: FetchConfig,
    handle: Option<JoinHandle<()>>,
}

impl Worker {
    pub fn new<F>(link: Box<dyn LinkTransport>, http_factory: F, dial: DialConfig, fetch: FetchConfig) -> Self
    where
        F: Fn() -> Box<dyn HttpTransport> + Send + Sync + 'static,
    {
        Self {
            inner: Arc::new(Mutex::new(Inner::default())),
            link: Arc::new(Mutex::new(link)),
            http_factory: Arc::new(http_factory),
            cache: Arc::new(StatusCache::new()),
            dial,
            fetch,
            handle: None,
        }
    }

    /// Start bringing the dial-up link online.
    pub fn start_connect(&mut self) -> Result<()> {
        self.arm(WorkerState::Connecting, "Connecting...")?;

        let inner = Arc::clone(&self.inner);
        let link = Arc::clone(&self.link);
        let cfg = self.dial.clone();
        self.handle = Some(thread::spawn(move || {
            let sink = ContextSink {
                inner: Arc::clone(&inner),
            };
            let flag = Arc::clone(&inner);
            let cancelled = move || utils::lock(&flag).cancel_requested;
            let outcome = {
                let mut link = utils::lock(&link);
                ops::bring_up(link.as_mut(), &cfg, &sink, &cancelled)
            };
            finish(&inner, outcome.map(|()| None));
        }));
        Ok(())
    }

    /// Start fetching the live status. `timeout` overrides the configured
    /// receive timeout for this fetch only.
    pub fn start_fetch(&mut self, timeout: Option<Duration>) -> Result<()> {
        self.arm(WorkerState::Fetching, "Fetching status...")?;

        let inner = Arc::clone(&self.inner);
        let factory = Arc::clone(&self.http_factory);
        let cache = Arc::clone(&self.cache);
        let mut cfg = self.fetch.clone();
        if let Some(t) = timeout {
            cfg.timeout = t;
        }
        self.handle = Some(thread::spawn(move || {
            let sink = ContextSink {
                inner: Arc::clone(&inner),
            };
            let flag = Arc::clone(&inner);
            let cancelled = move || utils::lock(&flag).cancel_requested;
            let mut http = factory();
            let outcome = ops::fetch_status(http.as_mut(), &cfg, &cache, &sink, &cancelled);
            finish(&inner, outcome.map(|r| Some(Box::new(r))));
        }));
        Ok(())
    }

    /// Observe the worker without blocking. A terminal observation moves
    /// the payload out and reclaims the worker to `Idle`.
    pub fn poll(&mut self) -> Progress {
        let observed = {
            let mut guard = utils::lock(&self.inner);
            match guard.state {
                WorkerState::Idle => return Progress::Idle,
                WorkerState::Connecting => return Progress::Connecting,
                WorkerState::Fetching => return Progress::Fetching,
                WorkerState::Done | WorkerState::Error => {
                    guard.state = WorkerState::Idle;
                    guard.outcome.take()
                }
            }
        };
        self.reap();
        match observed {
            Some(Ok(None)) => Progress::Connected,
            Some(Ok(Some(result))) => Progress::Fetched(result),
            Some(Err(e)) => Progress::Failed(e),
            // Terminal state with no outcome cannot be produced by the
            // worker thread; treat it as already reclaimed.
            None => Progress::Idle,
        }
    }

    /// Ask the running operation to stop at its next check point. No-op
    /// when idle.
    pub fn cancel(&self) {
        let mut guard = utils::lock(&self.inner);
        if guard.state != WorkerState::Idle {
            guard.cancel_requested = true;
        }
    }

    pub fn state(&self) -> WorkerState {
        utils::lock(&self.inner).state
    }

    pub fn is_busy(&self) -> bool {
        self.state() != WorkerState::Idle
    }

    /// Current status line, e.g. `"Dialing 555..."`.
    pub fn status_text(&self) -> String {
        utils::lock(&self.inner).status.as_str().to_string()
    }

    /// Last successfully fetched result, surviving later failures.
    pub fn cached(&self) -> Option<FetchResult> {
        self.cache.get()
    }

    /// Cancel any in-flight operation, wait for the thread, and drop the
    /// cached result.
    pub fn shutdown(&mut self) {
        self.cancel();
        self.reap();
        let mut guard = utils::lock(&self.inner);
        guard.state = WorkerState::Idle;
        guard.outcome = None;
        guard.cancel_requested = false;
        drop(guard);
        self.cache.clear();
    }

    /// Gate for starting an operation: must be idle, and the previous
    /// thread (if any) already observed terminal and joined.
    fn arm(&mut self, state: WorkerState, status: &str) -> Result<()> {
        {
            let mut guard = utils::lock(&self.inner);
            if guard.state != WorkerState::Idle {
                return Err(Error::Busy);
            }
            guard.state = state;
            guard.status.set(status);
            guard.cancel_requested = false;
            guard.outcome = None;
        }
        self.reap();
        Ok(())
    }

    fn reap(&mut self) {
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for Worker {
    fn drop(&mut self) {
        self.shutdown();
    }
}

/// Record an operation's outcome and flip to the matching terminal state.
/// This is the thread's last write; everything after it is observation.
fn finish(inner: &Arc<Mutex<Inner>>, outcome: Result<Option<Box<FetchResult>>>) {
    let mut guard = utils::lock(inner);
    match &outcome {
        Ok(_) => guard.state = WorkerState::Done,
        Err(e) => {
            guard.status.set(&format!("Error: {}", e));
            guard.state = WorkerState::Error;
        }
    }
    guard.outcome = Some(outcome);
}
