//! Framework rubrics and the catalog of known frameworks.
//!
//! A [`Framework`] is the tag carried by every record. The set is open:
//! the two built-in rubrics have their own variants and anything declared
//! in the config file becomes [`Framework::Custom`]. The category set a
//! submission must score lives in the [`FrameworkCatalog`].

use serde::{Deserialize, Serialize};
use std::fmt;

use super::error::CatalogError;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Framework {
    /// NIST AI Risk Management Framework.
    NistAiRmf,
    /// ISO/IEC 42001 AI management system.
    Iso42001,
    Custom(String),
}

impl Framework {
    const NIST_NAME: &'static str = "NIST AI RMF";
    const ISO_NAME: &'static str = "ISO 42001";

    /// Resolves a display name to a framework. Built-in names always map to
    /// their own variant.
    pub fn from_name(name: &str) -> Self {
        match name.trim() {
            Self::NIST_NAME => Framework::NistAiRmf,
            Self::ISO_NAME => Framework::Iso42001,
            other => Framework::Custom(other.to_string()),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Framework::NistAiRmf => Self::NIST_NAME,
            Framework::Iso42001 => Self::ISO_NAME,
            Framework::Custom(name) => name,
        }
    }

    pub fn is_builtin(&self) -> bool {
        !matches!(self, Framework::Custom(_))
    }
}

impl fmt::Display for Framework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Framework selector used by listings. `All` matches every record.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FrameworkFilter {
    #[default]
    All,
    Only(Framework),
}

impl FrameworkFilter {
    pub fn matches(&self, framework: &Framework) -> bool {
        match self {
            FrameworkFilter::All => true,
            FrameworkFilter::Only(f) => f == framework,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            FrameworkFilter::All => "All",
            FrameworkFilter::Only(f) => f.name(),
        }
    }
}

/// One scored area within a framework.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryDef {
    pub name: String,
    /// Question shown above the slider.
    #[serde(default)]
    pub prompt: String,
    /// Bullet points of what the category covers.
    #[serde(default)]
    pub criteria: Vec<String>,
}

impl CategoryDef {
    fn new(name: &str, prompt: &str, criteria: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            prompt: prompt.to_string(),
            criteria: criteria.iter().map(|c| c.to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FrameworkDef {
    pub framework: Framework,
    pub summary: String,
    pub categories: Vec<CategoryDef>,
}

impl FrameworkDef {
    pub fn category_names(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(|c| c.name.as_str())
    }

    pub fn has_category(&self, name: &str) -> bool {
        self.categories.iter().any(|c| c.name == name)
    }
}

/// Ordered set of frameworks a session can assess against.
#[derive(Debug, Clone)]
pub struct FrameworkCatalog {
    frameworks: Vec<FrameworkDef>,
}

impl FrameworkCatalog {
    /// Catalog holding the two built-in rubrics.
    pub fn builtin() -> Self {
        Self {
            frameworks: vec![nist_ai_rmf(), iso_42001()],
        }
    }

    /// Registers a framework from configuration.
    pub fn register(
        &mut self,
        name: &str,
        summary: &str,
        categories: Vec<CategoryDef>,
    ) -> Result<&FrameworkDef, CatalogError> {
        if name.trim().is_empty() {
            return Err(CatalogError::EmptyName);
        }
        let framework = Framework::from_name(name);
        if framework.is_builtin() || self.get(&framework).is_some() {
            return Err(CatalogError::Duplicate(framework.name().to_string()));
        }
        if categories.is_empty() {
            return Err(CatalogError::NoCategories(framework.name().to_string()));
        }
        for (i, cat) in categories.iter().enumerate() {
            if categories[..i].iter().any(|c| c.name == cat.name) {
                return Err(CatalogError::DuplicateCategory {
                    framework: framework.name().to_string(),
                    category: cat.name.clone(),
                });
            }
        }

        let index = self.frameworks.len();
        self.frameworks.push(FrameworkDef {
            framework,
            summary: summary.to_string(),
            categories,
        });
        Ok(&self.frameworks[index])
    }

    pub fn get(&self, framework: &Framework) -> Option<&FrameworkDef> {
        self.frameworks.iter().find(|d| &d.framework == framework)
    }

    pub fn frameworks(&self) -> &[FrameworkDef] {
        &self.frameworks
    }

    pub fn len(&self) -> usize {
        self.frameworks.len()
    }
}

impl Default for FrameworkCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

fn nist_ai_rmf() -> FrameworkDef {
    FrameworkDef {
        framework: Framework::NistAiRmf,
        summary: "Risk Management Framework for AI systems".to_string(),
        categories: vec![
            CategoryDef::new(
                "Govern",
                "Do you have clear AI governance structure, documented policies, and stakeholder involvement?",
                &[
                    "AI governance structure - Clear roles and responsibilities",
                    "Risk management policies - Documented AI risk policies and procedures",
                    "Stakeholder engagement - Regular consultation with affected parties",
                ],
            ),
            CategoryDef::new(
                "Map",
                "Have you identified AI system context, categorized risks, and assessed potential impacts?",
                &[
                    "Context identification - Understanding of AI system use cases and environment",
                    "Risk categorization - Systematic classification of AI-related risks",
                    "Impact assessment - Analysis of potential positive and negative impacts",
                ],
            ),
            CategoryDef::new(
                "Measure",
                "Do you have metrics for performance, bias testing procedures, and reliability measures?",
                &[
                    "Performance metrics - Defined and tracked AI system performance indicators",
                    "Bias testing - Regular testing for unfair bias and discrimination",
                    "Reliability measures - Assessment of system robustness and consistency",
                ],
            ),
            CategoryDef::new(
                "Manage",
                "Are risk mitigation strategies implemented, incident response ready, and continuous monitoring active?",
                &[
                    "Risk mitigation - Active strategies to reduce identified risks",
                    "Incident response - Documented procedures for AI system failures or issues",
                    "Continuous monitoring - Ongoing oversight of AI system performance and risks",
                ],
            ),
        ],
    }
}

fn iso_42001() -> FrameworkDef {
    FrameworkDef {
        framework: Framework::Iso42001,
        summary: "AI Management System standard".to_string(),
        categories: vec![
            CategoryDef::new(
                "Planning",
                "Do you have AI-specific policies, clear objectives, and risk assessment procedures?",
                &[
                    "AI policy - Documented organizational AI policy and scope",
                    "Objectives - Clear, measurable AI management objectives",
                    "Risk assessment - Systematic process for identifying AI risks",
                ],
            ),
            CategoryDef::new(
                "Support",
                "Are adequate resources allocated, staff competent, and documentation maintained?",
                &[
                    "Resources - Sufficient resources (people, budget, tools) for AI management",
                    "Competence - Staff training and qualification for AI roles",
                    "Documentation - Controlled documents and records for AI systems",
                ],
            ),
            CategoryDef::new(
                "Operation",
                "Are AI operations planned, impacts assessed, and data properly managed?",
                &[
                    "Planning & control - Operational planning for AI system lifecycle",
                    "Impact assessment - Regular assessment of AI system impacts",
                    "Data management - Data quality, privacy, and governance controls",
                ],
            ),
            CategoryDef::new(
                "Performance",
                "Is performance monitored, analyzed, and internally audited?",
                &[
                    "Monitoring - Regular monitoring of AI management system performance",
                    "Analysis - Data analysis and evaluation of effectiveness",
                    "Internal audit - Systematic audits of AI management system",
                ],
            ),
            CategoryDef::new(
                "Improvement",
                "Are nonconformities addressed, corrective actions taken, and continuous improvement active?",
                &[
                    "Nonconformity - Process for identifying and managing issues",
                    "Corrective action - Systematic approach to prevent recurrence",
                    "Continual improvement - Ongoing enhancement of AI management system",
                ],
            ),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cat(name: &str) -> CategoryDef {
        CategoryDef {
            name: name.to_string(),
            prompt: String::new(),
            criteria: vec![],
        }
    }

    #[test]
    fn builtin_names_resolve_to_builtin_variants() {
        assert_eq!(Framework::from_name("NIST AI RMF"), Framework::NistAiRmf);
        assert_eq!(Framework::from_name(" ISO 42001 "), Framework::Iso42001);
        assert_eq!(
            Framework::from_name("EU AI Act"),
            Framework::Custom("EU AI Act".into())
        );
    }

    #[test]
    fn builtin_catalog_has_expected_categories() {
        let catalog = FrameworkCatalog::builtin();
        let nist: Vec<_> = catalog
            .get(&Framework::NistAiRmf)
            .unwrap()
            .category_names()
            .collect();
        assert_eq!(nist, ["Govern", "Map", "Measure", "Manage"]);

        let iso = catalog.get(&Framework::Iso42001).unwrap();
        assert_eq!(iso.categories.len(), 5);
        assert!(iso.has_category("Improvement"));
        assert!(!iso.has_category("Govern"));
    }

    #[test]
    fn register_adds_custom_framework() {
        let mut catalog = FrameworkCatalog::builtin();
        let def = catalog
            .register("EU AI Act", "Regulation", vec![cat("Risk"), cat("Transparency")])
            .unwrap();
        assert_eq!(def.framework, Framework::Custom("EU AI Act".into()));
        assert_eq!(catalog.len(), 3);
    }

    #[test]
    fn register_rejects_builtin_and_duplicate_names() {
        let mut catalog = FrameworkCatalog::builtin();
        assert_eq!(
            catalog.register("NIST AI RMF", "", vec![cat("A")]).unwrap_err(),
            CatalogError::Duplicate("NIST AI RMF".into())
        );
        catalog.register("Internal", "", vec![cat("A")]).unwrap();
        assert!(matches!(
            catalog.register("Internal", "", vec![cat("B")]),
            Err(CatalogError::Duplicate(_))
        ));
    }

    #[test]
    fn register_rejects_blank_name() {
        let mut catalog = FrameworkCatalog::builtin();
        assert_eq!(
            catalog.register("", "", vec![cat("A")]).unwrap_err(),
            CatalogError::EmptyName
        );
        assert_eq!(
            catalog.register("   ", "", vec![cat("A")]).unwrap_err(),
            CatalogError::EmptyName
        );
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn register_rejects_empty_or_repeated_categories() {
        let mut catalog = FrameworkCatalog::builtin();
        assert_eq!(
            catalog.register("Empty", "", vec![]).unwrap_err(),
            CatalogError::NoCategories("Empty".into())
        );
        assert!(matches!(
            catalog.register("Twice", "", vec![cat("A"), cat("A")]),
            Err(CatalogError::DuplicateCategory { .. })
        ));
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn filter_all_matches_everything() {
        assert!(FrameworkFilter::All.matches(&Framework::Iso42001));
        let only = FrameworkFilter::Only(Framework::NistAiRmf);
        assert!(only.matches(&Framework::NistAiRmf));
        assert!(!only.matches(&Framework::Iso42001));
        assert_eq!(only.label(), "NIST AI RMF");
    }
}
