//! Configuration data model.
//!
//! All structs derive `Serialize`/`Deserialize` for TOML persistence.
//! Every field has a sensible default so the application works out of the box.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::assessment::CategoryDef;

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub export: ExportConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Extra rubrics offered next to the built-in ones.
    #[serde(default)]
    pub frameworks: Vec<FrameworkConfig>,
}

/// UI appearance and behavior settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    /// Initial slider position for every category.
    #[serde(default = "default_score")]
    pub default_score: u8,
    /// Slider increment for Left/Right.
    #[serde(default = "default_score_step")]
    pub score_step: u8,
    /// chrono format string for dates shown on screen.
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
            default_score: default_score(),
            score_step: default_score_step(),
            date_format: default_date_format(),
        }
    }
}

/// JSON report export settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    #[serde(default = "default_export_dir")]
    pub dir: PathBuf,
    #[serde(default = "default_true")]
    pub pretty: bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            dir: default_export_dir(),
            pretty: true,
        }
    }
}

/// Diagnostic log file settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_log_dir")]
    pub log_dir: String,
    /// `tracing` filter directive, e.g. `info` or `riskrate=debug`.
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            log_dir: default_log_dir(),
            level: default_log_level(),
        }
    }
}

/// A user-defined framework.
///
/// ```toml
/// [[frameworks]]
/// name = "EU AI Act"
/// summary = "Regulatory readiness"
///
/// [[frameworks.categories]]
/// name = "Transparency"
/// prompt = "Are users told when they interact with AI?"
/// criteria = ["Disclosure notices", "Model documentation"]
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrameworkConfig {
    pub name: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub categories: Vec<CategoryDef>,
}

fn default_true() -> bool {
    true
}
fn default_tick_rate_ms() -> u64 {
    50
}
fn default_score() -> u8 {
    50
}
fn default_score_step() -> u8 {
    5
}
fn default_date_format() -> String {
    "%Y-%m-%d %H:%M".to_string()
}
fn default_export_dir() -> PathBuf {
    PathBuf::from("./reports")
}
fn default_log_dir() -> String {
    "~/.local/share/riskrate/logs".to_string()
}
fn default_log_level() -> String {
    "info".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_uses_defaults() {
        let cfg: AppConfig = toml::from_str("").unwrap();
        assert_eq!(cfg.ui.tick_rate_ms, 50);
        assert_eq!(cfg.ui.score_step, 5);
        assert_eq!(cfg.export.dir, PathBuf::from("./reports"));
        assert!(!cfg.logging.enabled);
        assert_eq!(cfg.logging.level, "info");
    }

    #[test]
    fn parses_custom_frameworks() {
        let cfg: AppConfig = toml::from_str(
            r#"
            [[frameworks]]
            name = "EU AI Act"
            summary = "Regulatory readiness"

            [[frameworks.categories]]
            name = "Transparency"
            criteria = ["Disclosure notices"]

            [[frameworks.categories]]
            name = "Human oversight"
            "#,
        )
        .unwrap();
        assert_eq!(cfg.frameworks.len(), 1);
        let fw = &cfg.frameworks[0];
        assert_eq!(fw.name, "EU AI Act");
        assert_eq!(fw.categories.len(), 2);
        assert_eq!(fw.categories[0].criteria, ["Disclosure notices"]);
        assert!(fw.categories[1].prompt.is_empty());
    }
}
