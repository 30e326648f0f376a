// src/errors.rs

//! Crate-wide error types.
//!
//! Application-level plumbing (config loading, the run loop) uses `anyhow`;
//! the watch core has a small structured taxonomy so that construction
//! failures stay match-able for callers.

use std::path::PathBuf;

use thiserror::Error;

pub use anyhow::{Error, Result};

/// Fatal errors raised while building a [`DirectoryPoller`].
///
/// Everything that can go wrong *after* construction (an entry vanishing
/// mid-scan, the whole root disappearing) is absorbed into change detection
/// instead of surfacing here: a missing entry simply drops out of the next
/// snapshot and is reported as deleted.
///
/// [`DirectoryPoller`]: crate::watch::DirectoryPoller
#[derive(Debug, Error)]
pub enum WatchError {
    /// The watch root does not exist or is not a directory.
    #[error("invalid watch root (missing or not a directory): {}", .0.display())]
    InvalidRoot(PathBuf),

    /// The poll interval must be greater than zero.
    #[error("poll interval must be greater than zero")]
    ZeroInterval,

    /// An exclude pattern failed to compile as a glob.
    #[error("invalid exclude pattern {pattern:?}: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },
}
