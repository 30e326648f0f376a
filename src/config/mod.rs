// src/config/mod.rs

//! Optional TOML configuration.
//!
//! The config file supplies defaults for settings the CLI can override:
//! poll interval, recursion, and exclude patterns. A missing file at the
//! default location is not an error; built-in defaults apply instead.

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{default_config_path, load_and_validate, load_from_path};
pub use model::{ConfigFile, WatchSection};
pub use validate::validate_config;
