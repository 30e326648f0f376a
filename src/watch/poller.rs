// src/watch/poller.rs

use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::errors::WatchError;
use crate::watch::event::{ChangeEvent, ChangeKind};
use crate::watch::patterns::ExcludeSet;
use crate::watch::snapshot::{Snapshot, take_snapshot};

/// Immutable configuration for one watch root.
#[derive(Debug, Clone)]
pub struct WatchSpec {
    /// Directory under which entries are tracked.
    pub root: PathBuf,

    /// Whether to walk into subdirectories or only the immediate children.
    pub recursive: bool,

    /// Minimum delay between poll ticks. Must be greater than zero.
    pub interval: Duration,

    /// Patterns excluded from tracking (and from the walk).
    pub excludes: ExcludeSet,
}

impl WatchSpec {
    pub fn new(root: impl Into<PathBuf>, recursive: bool, interval: Duration) -> Self {
        Self {
            root: root.into(),
            recursive,
            interval,
            excludes: ExcludeSet::empty(),
        }
    }

    pub fn with_excludes(mut self, excludes: ExcludeSet) -> Self {
        self.excludes = excludes;
        self
    }
}

/// Polling change detector for a single directory tree.
///
/// The poller exclusively owns its current snapshot. `poll()` builds the
/// replacement in a local value and swaps it in as its final step, so there
/// is never a half-updated snapshot to observe.
#[derive(Debug)]
pub struct DirectoryPoller {
    spec: WatchSpec,
    snapshot: Snapshot,
}

impl DirectoryPoller {
    /// Validate the spec and take the baseline snapshot.
    ///
    /// Fails with [`WatchError::InvalidRoot`] when the root is missing or
    /// not a directory, and [`WatchError::ZeroInterval`] for a zero
    /// interval. These are the only fatal errors in the watch core.
    pub fn new(spec: WatchSpec) -> Result<Self, WatchError> {
        if spec.interval.is_zero() {
            return Err(WatchError::ZeroInterval);
        }

        match fs::metadata(&spec.root) {
            Ok(meta) if meta.is_dir() => {}
            _ => return Err(WatchError::InvalidRoot(spec.root.clone())),
        }

        let snapshot = take_snapshot(&spec.root, spec.recursive, &spec.excludes);
        info!(root = ?spec.root, entries = snapshot.len(), "baseline snapshot taken");

        Ok(Self { spec, snapshot })
    }

    pub fn spec(&self) -> &WatchSpec {
        &self.spec
    }

    /// Number of entries in the current snapshot.
    pub fn tracked_count(&self) -> usize {
        self.snapshot.len()
    }

    /// One poll tick: enumerate, diff against the previous snapshot, swap,
    /// and return the classified changes.
    ///
    /// Created/Modified events come first, in snapshot (sorted path) order,
    /// followed by Deleted events in previous-snapshot order. A root that
    /// vanished since the last tick enumerates to an empty snapshot, so
    /// every previously tracked entry is reported deleted instead of
    /// raising an error.
    ///
    /// A rewrite that lands within the same mtime-granularity tick produces
    /// no event; timestamp comparison is the only modification signal.
    pub fn poll(&mut self) -> Vec<ChangeEvent> {
        let next = take_snapshot(&self.spec.root, self.spec.recursive, &self.spec.excludes);

        let mut events = Vec::new();

        for (path, mtime) in next.iter() {
            match self.snapshot.modified_at(path) {
                None => events.push(ChangeEvent::new(ChangeKind::Created, path.clone())),
                Some(prev) if prev != *mtime => {
                    events.push(ChangeEvent::new(ChangeKind::Modified, path.clone()));
                }
                Some(_) => {}
            }
        }

        for (path, _) in self.snapshot.iter() {
            if !next.contains(path) {
                events.push(ChangeEvent::new(ChangeKind::Deleted, path.clone()));
            }
        }

        debug!(
            changes = events.len(),
            tracked = next.len(),
            "poll tick complete"
        );

        self.snapshot = next;
        events
    }

    /// Long-running wrapper around [`poll`](Self::poll).
    ///
    /// Sleeps for the configured interval, polls, and invokes `on_event`
    /// once per change, until a message arrives on `shutdown_rx` (or the
    /// channel closes). Shutdown is only observed at the sleep boundary; an
    /// in-flight poll always completes. The interval is a minimum delay
    /// between ticks — a slow poll delays the next tick rather than
    /// stacking up catch-up polls.
    pub async fn run<F>(&mut self, mut on_event: F, mut shutdown_rx: mpsc::Receiver<()>) -> Result<()>
    where
        F: FnMut(&ChangeEvent),
    {
        info!(root = ?self.spec.root, interval = ?self.spec.interval, "poller started");

        loop {
            tokio::select! {
                _ = tokio::time::sleep(self.spec.interval) => {
                    for event in self.poll() {
                        on_event(&event);
                    }
                }
                _ = shutdown_rx.recv() => {
                    info!("shutdown requested, stopping poller");
                    break;
                }
            }
        }

        Ok(())
    }
}
