//! Diagnostic logging to disk.
//!
//! The terminal belongs to the UI, so `tracing` output goes to a daily
//! file `riskrate_<date>.log` in the configured log directory (default:
//! `~/.local/share/riskrate/logs/`). Nothing is installed when logging is
//! disabled.

use crate::config::{expand_home, LoggingConfig};
use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Path of today's log file inside `log_dir`.
pub fn log_file_path(log_dir: &str) -> PathBuf {
    let date = chrono::Local::now().format("%Y-%m-%d");
    expand_home(log_dir).join(format!("riskrate_{}.log", date))
}

/// Installs the global subscriber. Returns the log file path when logging
/// is enabled.
pub fn init(config: &LoggingConfig) -> Result<Option<PathBuf>> {
    if !config.enabled {
        return Ok(None);
    }

    let path = log_file_path(&config.log_dir);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory {}", parent.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    let filter = EnvFilter::try_new(&config.level).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install log subscriber: {}", e))?;

    Ok(Some(path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_logging_installs_nothing() {
        let config = LoggingConfig::default();
        assert!(init(&config).unwrap().is_none());
    }

    #[test]
    fn log_file_is_dated() {
        let path = log_file_path("/var/log/riskrate");
        let name = path.file_name().unwrap().to_str().unwrap();
        assert!(name.starts_with("riskrate_"));
        assert!(name.ends_with(".log"));
        assert!(path.starts_with("/var/log/riskrate"));
    }
}
