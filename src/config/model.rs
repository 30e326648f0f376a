// src/config/model.rs

use serde::Deserialize;

/// Top-level configuration as read from a TOML file.
///
/// ```toml
/// [watch]
/// interval_ms = 500
/// recursive = true
/// exclude = ["**/*.tmp", "**/.git/**"]
/// ```
///
/// Every section and field is optional; unset values fall back to CLI flags
/// and then to built-in defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigFile {
    /// Watch settings from `[watch]`.
    #[serde(default)]
    pub watch: WatchSection,
}

/// `[watch]` section.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WatchSection {
    /// Poll interval in milliseconds.
    ///
    /// If `None`, the CLI flag or the built-in default (1000 ms) applies.
    #[serde(default)]
    pub interval_ms: Option<u64>,

    /// Whether to watch subdirectories.
    ///
    /// If `None`, the CLI flag decides (default: non-recursive).
    #[serde(default)]
    pub recursive: Option<bool>,

    /// Exclude glob patterns, relative to the watch root.
    ///
    /// CLI `--exclude` patterns are appended to this list.
    #[serde(default)]
    pub exclude: Vec<String>,
}
