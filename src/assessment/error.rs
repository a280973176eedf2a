//! Error types for the assessment domain.

use thiserror::Error;

/// Reasons a submission is rejected. A rejected submission never reaches
/// the store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please fill in the {field}")]
    EmptyField { field: &'static str },

    #[error("Unknown framework '{0}'")]
    UnknownFramework(String),

    #[error("Missing score for category '{category}'")]
    MissingCategory { category: String },

    #[error("Framework '{framework}' has no category '{category}'")]
    UnexpectedCategory { framework: String, category: String },

    #[error("Score for '{category}' must be between 0 and 100, got {actual}")]
    ScoreOutOfRange { category: String, actual: u8 },
}

impl ValidationError {
    pub fn empty_field(field: &'static str) -> Self {
        ValidationError::EmptyField { field }
    }

    /// True when the rejection is a blank required text field.
    pub fn is_missing_field(&self) -> bool {
        matches!(self, ValidationError::EmptyField { .. })
    }
}

/// Problems registering a framework definition in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("Framework name is empty")]
    EmptyName,

    #[error("Framework '{0}' is already defined")]
    Duplicate(String),

    #[error("Framework '{0}' defines no categories")]
    NoCategories(String),

    #[error("Framework '{framework}' lists category '{category}' more than once")]
    DuplicateCategory { framework: String, category: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_field_message_names_the_field() {
        let err = ValidationError::empty_field("assessor name");
        assert_eq!(err.to_string(), "Please fill in the assessor name");
        assert!(err.is_missing_field());
    }

    #[test]
    fn structural_errors_are_not_missing_fields() {
        let err = ValidationError::MissingCategory {
            category: "Govern".into(),
        };
        assert!(!err.is_missing_field());
    }
}
