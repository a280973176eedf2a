//! Assessment records and the submission that produces them.

use chrono::{DateTime, Local};
use std::collections::BTreeMap;
use std::fmt;

use super::error::ValidationError;
use super::framework::{Framework, FrameworkCatalog};
use super::score::{mean, MaturityBand, Score};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssessmentStatus {
    Completed,
}

impl AssessmentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AssessmentStatus::Completed => "Completed",
        }
    }
}

impl fmt::Display for AssessmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One completed rating. Fields are read-only after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Assessment {
    name: String,
    framework: Framework,
    assessor: String,
    timestamp: DateTime<Local>,
    category_scores: BTreeMap<String, Score>,
    overall_score: f64,
    notes: Option<String>,
    status: AssessmentStatus,
}

impl Assessment {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn framework(&self) -> &Framework {
        &self.framework
    }

    pub fn assessor(&self) -> &str {
        &self.assessor
    }

    pub fn timestamp(&self) -> DateTime<Local> {
        self.timestamp
    }

    pub fn category_scores(&self) -> &BTreeMap<String, Score> {
        &self.category_scores
    }

    pub fn overall_score(&self) -> f64 {
        self.overall_score
    }

    pub fn band(&self) -> MaturityBand {
        MaturityBand::from_score(self.overall_score)
    }

    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    pub fn status(&self) -> AssessmentStatus {
        self.status
    }
}

/// Raw form input for one assessment.
#[derive(Debug, Clone)]
pub struct Submission {
    pub name: String,
    pub framework: Framework,
    pub assessor: String,
    pub scores: BTreeMap<String, u8>,
    pub notes: String,
}

impl Submission {
    pub fn new(framework: Framework) -> Self {
        Self {
            name: String::new(),
            framework,
            assessor: String::new(),
            scores: BTreeMap::new(),
            notes: String::new(),
        }
    }

    /// Validates the input against the catalog and builds a completed
    /// record stamped with `timestamp`.
    pub fn into_assessment(
        self,
        catalog: &FrameworkCatalog,
        timestamp: DateTime<Local>,
    ) -> Result<Assessment, ValidationError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ValidationError::empty_field("project name"));
        }
        let assessor = self.assessor.trim();
        if assessor.is_empty() {
            return Err(ValidationError::empty_field("assessor name"));
        }

        let def = catalog
            .get(&self.framework)
            .ok_or_else(|| ValidationError::UnknownFramework(self.framework.to_string()))?;

        if let Some(extra) = self.scores.keys().find(|k| !def.has_category(k)) {
            return Err(ValidationError::UnexpectedCategory {
                framework: self.framework.to_string(),
                category: extra.clone(),
            });
        }

        let mut category_scores = BTreeMap::new();
        for category in def.category_names() {
            let raw = *self
                .scores
                .get(category)
                .ok_or_else(|| ValidationError::MissingCategory {
                    category: category.to_string(),
                })?;
            let score = Score::try_new(raw).ok_or_else(|| ValidationError::ScoreOutOfRange {
                category: category.to_string(),
                actual: raw,
            })?;
            category_scores.insert(category.to_string(), score);
        }

        // Catalog frameworks always carry at least one category.
        let overall_score = mean(category_scores.values().map(Score::as_f64)).unwrap_or_default();

        let notes = Some(self.notes.trim())
            .filter(|n| !n.is_empty())
            .map(str::to_string);

        Ok(Assessment {
            name: name.to_string(),
            framework: self.framework,
            assessor: assessor.to_string(),
            timestamp,
            category_scores,
            overall_score,
            notes,
            status: AssessmentStatus::Completed,
        })
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use chrono::TimeZone;

    pub(crate) fn at(h: u32, m: u32) -> DateTime<Local> {
        Local.with_ymd_and_hms(2026, 3, 14, h, m, 0).single().unwrap()
    }

    pub(crate) fn nist_submission(name: &str, assessor: &str, scores: [u8; 4]) -> Submission {
        let mut sub = Submission::new(Framework::NistAiRmf);
        sub.name = name.to_string();
        sub.assessor = assessor.to_string();
        for (cat, s) in ["Govern", "Map", "Measure", "Manage"].iter().zip(scores) {
            sub.scores.insert(cat.to_string(), s);
        }
        sub
    }

    pub(crate) fn iso_submission(name: &str, score: u8) -> Submission {
        let mut sub = Submission::new(Framework::Iso42001);
        sub.name = name.to_string();
        sub.assessor = "Bob".to_string();
        for cat in ["Planning", "Support", "Operation", "Performance", "Improvement"] {
            sub.scores.insert(cat.to_string(), score);
        }
        sub
    }

    #[test]
    fn chatbot_scenario_scores_75() {
        let catalog = FrameworkCatalog::builtin();
        let record = nist_submission("Chatbot", "Alice", [80, 60, 70, 90])
            .into_assessment(&catalog, at(9, 30))
            .unwrap();
        assert_eq!(record.overall_score(), 75.0);
        assert_eq!(record.status(), AssessmentStatus::Completed);
        assert_eq!(record.framework(), &Framework::NistAiRmf);
        assert_eq!(record.category_scores()["Govern"].value(), 80);
        assert_eq!(record.band(), MaturityBand::Good);
        assert_eq!(record.notes(), None);
    }

    #[test]
    fn overall_keeps_full_precision() {
        let catalog = FrameworkCatalog::builtin();
        let record = nist_submission("X", "Y", [1, 0, 0, 0])
            .into_assessment(&catalog, at(9, 0))
            .unwrap();
        assert_eq!(record.overall_score(), 0.25);
    }

    #[test]
    fn blank_name_is_rejected() {
        let catalog = FrameworkCatalog::builtin();
        let err = nist_submission("   ", "Alice", [50; 4])
            .into_assessment(&catalog, at(9, 0))
            .unwrap_err();
        assert_eq!(err, ValidationError::empty_field("project name"));
    }

    #[test]
    fn blank_assessor_is_rejected() {
        let catalog = FrameworkCatalog::builtin();
        let err = nist_submission("Chatbot", "", [50; 4])
            .into_assessment(&catalog, at(9, 0))
            .unwrap_err();
        assert!(err.is_missing_field());
    }

    #[test]
    fn missing_category_is_rejected() {
        let catalog = FrameworkCatalog::builtin();
        let mut sub = nist_submission("Chatbot", "Alice", [50; 4]);
        sub.scores.remove("Map");
        assert_eq!(
            sub.into_assessment(&catalog, at(9, 0)).unwrap_err(),
            ValidationError::MissingCategory {
                category: "Map".into()
            }
        );
    }

    #[test]
    fn foreign_category_is_rejected() {
        let catalog = FrameworkCatalog::builtin();
        let mut sub = nist_submission("Chatbot", "Alice", [50; 4]);
        sub.scores.insert("Planning".into(), 50);
        assert!(matches!(
            sub.into_assessment(&catalog, at(9, 0)),
            Err(ValidationError::UnexpectedCategory { .. })
        ));
    }

    #[test]
    fn score_above_100_is_rejected() {
        let catalog = FrameworkCatalog::builtin();
        let sub = nist_submission("Chatbot", "Alice", [50, 50, 101, 50]);
        assert_eq!(
            sub.into_assessment(&catalog, at(9, 0)).unwrap_err(),
            ValidationError::ScoreOutOfRange {
                category: "Measure".into(),
                actual: 101
            }
        );
    }

    #[test]
    fn unknown_framework_is_rejected() {
        let catalog = FrameworkCatalog::builtin();
        let mut sub = Submission::new(Framework::Custom("EU AI Act".into()));
        sub.name = "X".into();
        sub.assessor = "Y".into();
        assert_eq!(
            sub.into_assessment(&catalog, at(9, 0)).unwrap_err(),
            ValidationError::UnknownFramework("EU AI Act".into())
        );
    }

    #[test]
    fn text_fields_are_trimmed_and_blank_notes_dropped() {
        let catalog = FrameworkCatalog::builtin();
        let mut sub = nist_submission("  Chatbot ", " Alice", [50; 4]);
        sub.notes = "  \n".into();
        let record = sub.into_assessment(&catalog, at(9, 0)).unwrap();
        assert_eq!(record.name(), "Chatbot");
        assert_eq!(record.assessor(), "Alice");
        assert_eq!(record.notes(), None);
    }
}
