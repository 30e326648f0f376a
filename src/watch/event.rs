// src/watch/event.rs

use std::fmt;
use std::path::PathBuf;

/// Kind of change detected between two snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChangeKind {
    /// The file is present now but was not in the previous snapshot.
    Created,
    /// The file is present in both snapshots with different timestamps.
    Modified,
    /// The file was in the previous snapshot but is gone now.
    Deleted,
}

impl fmt::Display for ChangeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Created => write!(f, "created"),
            Self::Modified => write!(f, "modified"),
            Self::Deleted => write!(f, "deleted"),
        }
    }
}

/// A single classified filesystem change.
///
/// `path` is relative to the watch root.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ChangeEvent {
    pub kind: ChangeKind,
    pub path: PathBuf,
}

impl ChangeEvent {
    pub fn new(kind: ChangeKind, path: impl Into<PathBuf>) -> Self {
        Self {
            kind,
            path: path.into(),
        }
    }
}

impl fmt::Display for ChangeEvent {
    /// One line per event, e.g. `created src/a.txt`.
    ///
    /// Forward slashes regardless of platform, so CLI output is stable.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let path = self.path.to_string_lossy().replace('\\', "/");
        write!(f, "{} {}", self.kind, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_one_line_kind_then_path() {
        let event = ChangeEvent::new(ChangeKind::Created, "sub/a.txt");
        assert_eq!(event.to_string(), "created sub/a.txt");

        let event = ChangeEvent::new(ChangeKind::Deleted, "b.txt");
        assert_eq!(event.to_string(), "deleted b.txt");
    }
}
