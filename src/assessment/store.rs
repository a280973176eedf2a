//! Session-scoped assessment store.
//!
//! Records are kept in submission order and never edited or removed. The
//! store is owned by exactly one session and is not shared.

use chrono::{DateTime, Local};

use super::error::ValidationError;
use super::framework::{Framework, FrameworkCatalog, FrameworkFilter};
use super::record::{Assessment, AssessmentStatus, Submission};
use super::score::mean;

/// Count and mean overall score of one framework's records.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameworkSummary {
    pub framework: Framework,
    pub count: usize,
    pub average_score: f64,
}

#[derive(Debug, Default)]
pub struct AssessmentStore {
    records: Vec<Assessment>,
}

impl AssessmentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, record: Assessment) {
        self.records.push(record);
    }

    /// Validates `submission` and appends the resulting record. On error
    /// the store is left untouched.
    pub fn submit(
        &mut self,
        catalog: &FrameworkCatalog,
        submission: Submission,
        timestamp: DateTime<Local>,
    ) -> Result<&Assessment, ValidationError> {
        let record = submission.into_assessment(catalog, timestamp)?;
        let index = self.records.len();
        self.append(record);
        Ok(&self.records[index])
    }

    pub fn list_all(&self) -> &[Assessment] {
        &self.records
    }

    pub fn list_by_framework(&self, filter: &FrameworkFilter) -> Vec<&Assessment> {
        self.records
            .iter()
            .filter(|r| filter.matches(r.framework()))
            .collect()
    }

    pub fn count(&self) -> usize {
        self.records.len()
    }

    pub fn count_completed(&self) -> usize {
        self.records
            .iter()
            .filter(|r| r.status() == AssessmentStatus::Completed)
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Mean overall score across all records, `None` when there are none.
    pub fn average_score(&self) -> Option<f64> {
        mean(self.records.iter().map(Assessment::overall_score))
    }

    /// Per-framework counts and averages, in order of first submission.
    pub fn summary_by_framework(&self) -> Vec<FrameworkSummary> {
        let mut seen: Vec<&Framework> = Vec::new();
        for record in &self.records {
            if !seen.contains(&record.framework()) {
                seen.push(record.framework());
            }
        }

        seen.into_iter()
            .map(|framework| {
                let scores: Vec<f64> = self
                    .records
                    .iter()
                    .filter(|r| r.framework() == framework)
                    .map(Assessment::overall_score)
                    .collect();
                FrameworkSummary {
                    framework: framework.clone(),
                    count: scores.len(),
                    average_score: mean(scores).unwrap_or_default(),
                }
            })
            .collect()
    }
}
