pub mod model;

use anyhow::{bail, Context, Result};
use chrono::format::{Item, StrftimeItems};
use std::path::{Path, PathBuf};

use crate::assessment::FrameworkCatalog;

pub use model::{AppConfig, FrameworkConfig, LoggingConfig};

fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("riskrate")
        .join("config.toml")
}

pub fn load_config() -> Result<AppConfig> {
    load_config_from(&config_path())
}

pub fn load_config_from(path: &Path) -> Result<AppConfig> {
    if !path.exists() {
        return Ok(AppConfig::default());
    }
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config from {}", path.display()))?;
    let config: AppConfig = toml::from_str(&contents)
        .with_context(|| format!("Failed to parse config file {}", path.display()))?;
    check_date_format(&config.ui.date_format)
        .with_context(|| format!("Invalid ui.date_format in {}", path.display()))?;
    Ok(config)
}

/// Rejects strftime patterns chrono cannot render.
fn check_date_format(fmt: &str) -> Result<()> {
    if StrftimeItems::new(fmt).any(|item| matches!(item, Item::Error)) {
        bail!("'{}' is not a valid date format", fmt);
    }
    Ok(())
}

/// Built-in rubrics plus every valid custom framework from the config.
/// Invalid entries are skipped with a warning.
pub fn build_catalog(frameworks: &[FrameworkConfig]) -> FrameworkCatalog {
    let mut catalog = FrameworkCatalog::builtin();
    for fw in frameworks {
        match catalog.register(&fw.name, &fw.summary, fw.categories.clone()) {
            Ok(def) => tracing::info!(
                framework = %def.framework,
                categories = def.categories.len(),
                "registered custom framework"
            ),
            Err(e) => tracing::warn!(framework = %fw.name, error = %e, "skipping custom framework"),
        }
    }
    catalog
}

/// Expands a leading `~/` to the home directory.
pub fn expand_home(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    PathBuf::from(path)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = load_config_from(&dir.path().join("nope.toml")).unwrap();
        assert_eq!(cfg.ui.default_score, 50);
        assert!(cfg.frameworks.is_empty());
    }

    #[test]
    fn malformed_file_names_the_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[ui\nscore_step = ").unwrap();
        let err = load_config_from(&path).unwrap_err();
        assert!(format!("{:#}", err).contains("config.toml"));
    }

    #[test]
    fn bad_date_format_names_the_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[ui]\ndate_format = \"%Q\"\n").unwrap();
        let err = format!("{:#}", load_config_from(&path).unwrap_err());
        assert!(err.contains("config.toml"), "{}", err);
        assert!(err.contains("date_format"), "{}", err);
    }

    #[test]
    fn custom_date_format_is_accepted() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[ui]\ndate_format = \"%d/%m/%Y\"\n").unwrap();
        assert_eq!(load_config_from(&path).unwrap().ui.date_format, "%d/%m/%Y");
    }

    const FRAMEWORKS_TOML: &str = r#"
[[frameworks]]
name = "EU AI Act"
summary = "Regulatory readiness"

[[frameworks.categories]]
name = "Transparency"

[[frameworks.categories]]
name = "Oversight"

[[frameworks]]
name = "NIST AI RMF"

[[frameworks.categories]]
name = "Shadow"

[[frameworks]]
name = "Empty"
"#;

    pub(crate) fn custom_framework_config() -> AppConfig {
        toml::from_str(FRAMEWORKS_TOML).unwrap()
    }

    #[test]
    fn build_catalog_keeps_valid_and_skips_bad_frameworks() {
        let cfg = custom_framework_config();
        assert_eq!(cfg.frameworks.len(), 3);

        let catalog = build_catalog(&cfg.frameworks);
        assert_eq!(catalog.len(), 3);

        let eu = catalog
            .get(&crate::assessment::Framework::Custom("EU AI Act".into()))
            .unwrap();
        assert_eq!(eu.category_names().collect::<Vec<_>>(), ["Transparency", "Oversight"]);

        let nist = catalog
            .get(&crate::assessment::Framework::NistAiRmf)
            .unwrap();
        assert!(!nist.has_category("Shadow"));
        assert!(catalog
            .get(&crate::assessment::Framework::Custom("Empty".into()))
            .is_none());
    }

    #[test]
    fn reads_partial_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[export]\ndir = \"/tmp/out\"\n").unwrap();
        let cfg = load_config_from(&path).unwrap();
        assert_eq!(cfg.export.dir, PathBuf::from("/tmp/out"));
        assert!(cfg.export.pretty);
        assert_eq!(cfg.ui.score_step, 5);
    }

    #[test]
    fn expand_home_leaves_plain_paths() {
        assert_eq!(expand_home("./reports"), PathBuf::from("./reports"));
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_home("~/logs"), home.join("logs"));
        }
    }
}
