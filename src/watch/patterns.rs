// src/watch/patterns.rs

use std::fmt;
use std::path::Path;

use globset::{Glob, GlobSet, GlobSetBuilder};

use crate::errors::WatchError;

/// Compiled exclude glob patterns for a watch root.
///
/// Patterns are matched against paths relative to the watch root, with
/// forward slashes (e.g. `"src/main.rs"`), so the same pattern list behaves
/// the same on every platform. A directory that matches is pruned from the
/// walk entirely.
#[derive(Clone, Default)]
pub struct ExcludeSet {
    set: Option<GlobSet>,
}

impl fmt::Debug for ExcludeSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExcludeSet")
            .field("empty", &self.set.is_none())
            .finish_non_exhaustive()
    }
}

impl ExcludeSet {
    /// An exclude set that matches nothing.
    pub fn empty() -> Self {
        Self { set: None }
    }

    /// Compile string patterns into a matcher.
    ///
    /// An empty pattern list compiles to [`ExcludeSet::empty`].
    pub fn compile(patterns: &[String]) -> Result<Self, WatchError> {
        if patterns.is_empty() {
            return Ok(Self::empty());
        }

        let mut builder = GlobSetBuilder::new();
        for pat in patterns {
            let glob = Glob::new(pat).map_err(|source| WatchError::InvalidPattern {
                pattern: pat.clone(),
                source,
            })?;
            builder.add(glob);
        }

        let set = builder
            .build()
            .map_err(|source| WatchError::InvalidPattern {
                pattern: patterns.join(", "),
                source,
            })?;

        Ok(Self { set: Some(set) })
    }

    /// Returns true if the given root-relative path is excluded.
    pub fn is_match(&self, rel_path: &Path) -> bool {
        match &self.set {
            Some(set) => set.is_match(relative_str(rel_path)),
            None => false,
        }
    }
}

/// Render a root-relative path with forward slashes for glob matching.
fn relative_str(rel: &Path) -> String {
    rel.to_string_lossy().replace('\\', "/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_set_matches_nothing() {
        let set = ExcludeSet::empty();
        assert!(!set.is_match(Path::new("a.txt")));
        assert!(!set.is_match(Path::new("sub/b.txt")));
    }

    #[test]
    fn patterns_match_relative_paths() {
        let set = ExcludeSet::compile(&["*.tmp".to_string(), "build/**".to_string()])
            .expect("valid patterns");

        assert!(set.is_match(Path::new("scratch.tmp")));
        assert!(set.is_match(Path::new("build/out.bin")));
        assert!(!set.is_match(Path::new("src/main.rs")));
    }

    #[test]
    fn invalid_pattern_is_rejected() {
        let err = ExcludeSet::compile(&["[".to_string()]).unwrap_err();
        assert!(matches!(err, WatchError::InvalidPattern { .. }));
    }
}
