// src/cli.rs

//! CLI argument parsing using `clap`.
//!
//! NOTE: this expects `clap` to be built with the `derive` feature, e.g.:
//! `clap = { version = "4.5.53", features = ["derive"] }` in `Cargo.toml`.

use std::path::PathBuf;

use clap::error::ErrorKind;
use clap::{Parser, ValueEnum};

/// Command-line arguments for `dirpoll`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "dirpoll",
    version,
    about = "Report created/modified/deleted files under a directory by polling.",
    long_about = None
)]
pub struct CliArgs {
    /// Directory to watch.
    #[arg(value_name = "PATH")]
    pub path: PathBuf,

    /// Also watch files inside subdirectories.
    #[arg(short, long)]
    pub recursive: bool,

    /// Poll interval in milliseconds.
    ///
    /// Overrides `interval_ms` from the config file. Default: 1000.
    #[arg(long, value_name = "MILLIS")]
    pub interval_ms: Option<u64>,

    /// Glob pattern to exclude, relative to the watch root (repeatable).
    ///
    /// Added on top of any `exclude` patterns from the config file.
    #[arg(long, value_name = "PATTERN")]
    pub exclude: Vec<String>,

    /// Path to the config file (TOML).
    ///
    /// If omitted, `Dirpoll.toml` in the current working directory is used
    /// when it exists; otherwise built-in defaults apply.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `DIRPOLL_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Validate the root and config, print the effective settings, and exit
    /// without polling.
    #[arg(long)]
    pub dry_run: bool,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Parse CLI arguments, exiting the process on error.
///
/// Usage errors (missing watch path, unknown flag, bad value) print to
/// stderr and exit with status 1. `--help` and `--version` keep clap's
/// status 0.
pub fn parse() -> CliArgs {
    match CliArgs::try_parse() {
        Ok(args) => args,
        Err(err) => {
            // `print` sends help/version to stdout and errors to stderr.
            let _ = err.print();
            std::process::exit(usage_exit_code(&err));
        }
    }
}

fn usage_exit_code(err: &clap::Error) -> i32 {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
        _ => 1,
    }
}
