// src/watch/snapshot.rs

use std::collections::BTreeMap;
use std::fs::FileType;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use tracing::debug;
use walkdir::WalkDir;

use crate::watch::patterns::ExcludeSet;

/// Classification of a directory entry encountered during enumeration.
///
/// Only `File` entries become snapshot keys. Directories are recursed into
/// (when the walk is recursive) but never tracked, and symlinks are neither
/// followed nor tracked. Keeping the decision in one place makes the
/// entry-type policy explicit instead of a side effect of the traversal API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
    Symlink,
    Other,
}

impl EntryKind {
    pub fn classify(file_type: &FileType) -> Self {
        if file_type.is_symlink() {
            Self::Symlink
        } else if file_type.is_dir() {
            Self::Directory
        } else if file_type.is_file() {
            Self::File
        } else {
            Self::Other
        }
    }

    /// Whether entries of this kind are tracked in a snapshot.
    pub fn is_tracked(self) -> bool {
        matches!(self, Self::File)
    }
}

/// The complete map of tracked entries under a watch root at one point in
/// time: root-relative path → last-modification timestamp.
///
/// Iteration order is sorted by path, which doubles as the stable
/// enumeration order for change events.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    entries: BTreeMap<PathBuf, SystemTime>,
}

impl Snapshot {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.entries.contains_key(path)
    }

    /// Last-modification timestamp recorded for `path`, if tracked.
    pub fn modified_at(&self, path: &Path) -> Option<SystemTime> {
        self.entries.get(path).copied()
    }

    /// Entries in sorted path order.
    pub fn iter(&self) -> impl Iterator<Item = (&PathBuf, &SystemTime)> {
        self.entries.iter()
    }

    pub(crate) fn insert(&mut self, path: PathBuf, mtime: SystemTime) {
        self.entries.insert(path, mtime);
    }
}

/// Enumerate the watch root and build a fresh snapshot.
///
/// Degradations are deliberate and local:
/// - entries that cannot be read or stat'ed are skipped,
/// - a root that no longer exists yields an empty snapshot.
///
/// Either way the caller's diff turns a missing entry into a `Deleted`
/// event, so enumeration never needs to fail.
pub(crate) fn take_snapshot(root: &Path, recursive: bool, excludes: &ExcludeSet) -> Snapshot {
    let mut snapshot = Snapshot::default();

    let mut walker = WalkDir::new(root).follow_links(false);
    if !recursive {
        walker = walker.max_depth(1);
    }

    let entries = walker.into_iter().filter_entry(|entry| {
        // Never prune the root itself; prune excluded entries so the walk
        // skips whole excluded subtrees.
        match entry.path().strip_prefix(root) {
            Ok(rel) if !rel.as_os_str().is_empty() => !excludes.is_match(rel),
            _ => true,
        }
    });

    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                debug!("skipping unreadable entry: {err}");
                continue;
            }
        };

        if !EntryKind::classify(&entry.file_type()).is_tracked() {
            continue;
        }

        let rel = match entry.path().strip_prefix(root) {
            Ok(rel) => rel.to_path_buf(),
            Err(_) => continue,
        };

        let mtime = match entry.metadata() {
            Ok(meta) => match meta.modified() {
                Ok(mtime) => mtime,
                Err(err) => {
                    debug!(path = ?entry.path(), "skipping entry without mtime: {err}");
                    continue;
                }
            },
            Err(err) => {
                debug!(path = ?entry.path(), "skipping entry that vanished mid-scan: {err}");
                continue;
            }
        };

        snapshot.insert(rel, mtime);
    }

    snapshot
}
