// src/watch/mod.rs

//! Polling change detection.
//!
//! This module is responsible for:
//! - Enumerating the watch root into [`Snapshot`]s (regular files only).
//! - Diffing consecutive snapshots into created/modified/deleted
//!   [`ChangeEvent`]s.
//! - Driving the enumerate-compare-classify-swap cycle on an interval.
//!
//! It does **not** know about the CLI or the config file; it only turns
//! directory state into change events.

pub mod event;
pub mod patterns;
pub mod poller;
pub mod snapshot;

pub use event::{ChangeEvent, ChangeKind};
pub use patterns::ExcludeSet;
pub use poller::{DirectoryPoller, WatchSpec};
pub use snapshot::{EntryKind, Snapshot};
