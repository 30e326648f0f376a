// src/config/validate.rs

use anyhow::{Context, Result, anyhow};

use crate::config::model::ConfigFile;
use crate::watch::ExcludeSet;

/// Run basic semantic validation against a loaded configuration.
///
/// This checks:
/// - `[watch].interval_ms`, when set, is >= 1
/// - every `[watch].exclude` pattern compiles as a glob
pub fn validate_config(cfg: &ConfigFile) -> Result<()> {
    if cfg.watch.interval_ms == Some(0) {
        return Err(anyhow!("[watch].interval_ms must be >= 1 (got 0)"));
    }

    ExcludeSet::compile(&cfg.watch.exclude).context("compiling [watch].exclude patterns")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::model::WatchSection;

    fn cfg_with(watch: WatchSection) -> ConfigFile {
        ConfigFile { watch }
    }

    #[test]
    fn default_config_is_valid() {
        assert!(validate_config(&ConfigFile::default()).is_ok());
    }

    #[test]
    fn zero_interval_is_rejected() {
        let cfg = cfg_with(WatchSection {
            interval_ms: Some(0),
            ..Default::default()
        });
        let err = validate_config(&cfg).unwrap_err();
        assert!(err.to_string().contains("interval_ms"));
    }

    #[test]
    fn bad_exclude_glob_is_rejected() {
        let cfg = cfg_with(WatchSection {
            exclude: vec!["[".to_string()],
            ..Default::default()
        });
        assert!(validate_config(&cfg).is_err());
    }
}
