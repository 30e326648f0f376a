// src/lib.rs

pub mod cli;
pub mod config;
pub mod errors;
pub mod logging;
pub mod watch;

use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use tokio::sync::mpsc;
use tracing::debug;

use crate::cli::CliArgs;
use crate::config::loader::{default_config_path, load_and_validate};
use crate::config::model::ConfigFile;
use crate::watch::{DirectoryPoller, ExcludeSet, WatchSpec};

/// Built-in poll interval when neither the CLI nor the config sets one.
const DEFAULT_INTERVAL_MS: u64 = 1000;

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - config loading
/// - merging CLI flags and config into a `WatchSpec`
/// - poller construction (fatal on an invalid root)
/// - Ctrl-C handling
/// - the polling loop, printing one line per detected change
pub async fn run(args: CliArgs) -> Result<()> {
    let cfg = load_config(args.config.as_deref())?;
    let spec = effective_spec(&args, &cfg)?;

    let mut poller = DirectoryPoller::new(spec)?;

    if args.dry_run {
        print_dry_run(&poller);
        return Ok(());
    }

    // Ctrl-C → graceful shutdown, observed at the next sleep boundary.
    let (shutdown_tx, shutdown_rx) = mpsc::channel::<()>(1);
    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            eprintln!("failed to listen for Ctrl+C: {e}");
            return;
        }
        let _ = shutdown_tx.send(()).await;
    });

    poller.run(|event| println!("{event}"), shutdown_rx).await
}

/// Load the config file, tolerating a missing file at the default path.
///
/// An explicitly given `--config` path must exist; the implicit
/// `Dirpoll.toml` is optional.
fn load_config(explicit: Option<&Path>) -> Result<ConfigFile> {
    match explicit {
        Some(path) => {
            load_and_validate(path).with_context(|| format!("loading config from {path:?}"))
        }
        None => {
            let path = default_config_path();
            if path.exists() {
                load_and_validate(&path)
            } else {
                debug!("no {:?} found, using built-in defaults", path);
                Ok(ConfigFile::default())
            }
        }
    }
}

/// Merge CLI flags over config values over built-in defaults.
///
/// Precedence per setting: CLI flag, then config file, then default.
/// Exclude patterns are additive: CLI patterns extend the config list.
fn effective_spec(args: &CliArgs, cfg: &ConfigFile) -> Result<WatchSpec> {
    let interval_ms = args
        .interval_ms
        .or(cfg.watch.interval_ms)
        .unwrap_or(DEFAULT_INTERVAL_MS);
    let recursive = args.recursive || cfg.watch.recursive.unwrap_or(false);

    let mut patterns = cfg.watch.exclude.clone();
    patterns.extend(args.exclude.iter().cloned());
    let excludes = ExcludeSet::compile(&patterns)?;

    let spec = WatchSpec::new(&args.path, recursive, Duration::from_millis(interval_ms))
        .with_excludes(excludes);
    Ok(spec)
}

/// Simple dry-run output: print the effective watch settings and stop.
fn print_dry_run(poller: &DirectoryPoller) {
    print!("{}", dry_run_summary(poller));
}

fn dry_run_summary(poller: &DirectoryPoller) -> String {
    let spec = poller.spec();
    format!(
        "dirpoll dry-run\n  root      = {}\n  recursive = {}\n  interval  = {:?}\n  tracked   = {} file(s) in baseline snapshot\n",
        spec.root.display(),
        spec.recursive,
        spec.interval,
        poller.tracked_count()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    use tempfile::tempdir;

    #[test]
    fn dry_run_summary_reports_baseline_count() {
        let dir = tempdir().expect("create temp dir");
        fs::write(dir.path().join("a.txt"), "a").expect("write a.txt");
        fs::write(dir.path().join("b.txt"), "b").expect("write b.txt");

        let spec = WatchSpec::new(dir.path(), false, Duration::from_millis(10));
        let poller = DirectoryPoller::new(spec).expect("build poller");

        let summary = dry_run_summary(&poller);
        assert!(summary.starts_with("dirpoll dry-run"));
        assert!(summary.contains("recursive = false"));
        assert!(summary.contains("2 file(s) in baseline snapshot"));
    }
}
