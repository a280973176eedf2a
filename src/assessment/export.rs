//! JSON report export.
//!
//! A report is one record as a flat JSON object with the keys `name`,
//! `framework`, `assessor`, `date`, `scores`, `score`, `notes` and
//! `status`, in that order. Report files are written with sanitized,
//! collision-free names inside the export directory.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use super::record::Assessment;

/// Date layout used in reports and report file names.
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportRecord {
    pub name: String,
    pub framework: String,
    pub assessor: String,
    pub date: String,
    pub scores: BTreeMap<String, u8>,
    pub score: f64,
    pub notes: String,
    pub status: String,
}

impl From<&Assessment> for ExportRecord {
    fn from(a: &Assessment) -> Self {
        Self {
            name: a.name().to_string(),
            framework: a.framework().to_string(),
            assessor: a.assessor().to_string(),
            date: a.timestamp().format(DATE_FORMAT).to_string(),
            scores: a
                .category_scores()
                .iter()
                .map(|(k, v)| (k.clone(), v.value()))
                .collect(),
            score: a.overall_score(),
            notes: a.notes().unwrap_or_default().to_string(),
            status: a.status().to_string(),
        }
    }
}

pub fn to_json(record: &Assessment, pretty: bool) -> serde_json::Result<String> {
    let export = ExportRecord::from(record);
    if pretty {
        serde_json::to_string_pretty(&export)
    } else {
        serde_json::to_string(&export)
    }
}

/// Report file name: `<name>_<date>.json` with anything outside
/// `[A-Za-z0-9._-]` replaced by `_`.
pub fn file_name(record: &Assessment) -> String {
    let raw = format!(
        "{}_{}",
        record.name(),
        record.timestamp().format(DATE_FORMAT)
    );
    let safe: String = raw
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '.' {
                c
            } else {
                '_'
            }
        })
        .collect();
    // No hidden files
    let safe = safe.trim_start_matches('.');
    let safe = if safe.is_empty() { "assessment" } else { safe };
    format!("{}.json", safe)
}

/// First path in `dir` for `file_name` that does not exist yet, adding a
/// numeric suffix on collision.
fn unique_path(dir: &Path, file_name: &str) -> Option<PathBuf> {
    let path = dir.join(file_name);
    if !path.exists() {
        return Some(path);
    }

    let stem = Path::new(file_name)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("assessment");
    for i in 1..1000 {
        let candidate = dir.join(format!("{}_{}.json", stem, i));
        if !candidate.exists() {
            return Some(candidate);
        }
    }
    None
}

/// Writes `record` as a JSON report into `dir`, creating the directory if
/// needed. Returns the path written.
pub fn write_report(dir: &Path, record: &Assessment, pretty: bool) -> Result<PathBuf> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create export directory {}", dir.display()))?;

    let path = unique_path(dir, &file_name(record))
        .with_context(|| format!("No free report file name in {}", dir.display()))?;
    let json = to_json(record, pretty).with_context(|| "Failed to serialize report")?;
    std::fs::write(&path, json)
        .with_context(|| format!("Failed to write report to {}", path.display()))?;

    tracing::info!(path = %path.display(), name = record.name(), "report exported");
    Ok(path)
}
