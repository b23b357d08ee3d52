use serde::Serialize;
use std::fmt;
use thiserror::Error;

use crate::domain::fields::FieldId;
use crate::domain::plan::GeneratorId;

/// A single schema violation found during validation.
///
/// `MissingField` and `InvalidValue` are mutually exclusive per field by
/// construction: a missing field has no value to judge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Violation {
    /// A required field is absent from the configuration block.
    MissingField { field: FieldId },

    /// A field is present but its value is outside the allowed set.
    ///
    /// `allowed` is the schema's declared set, verbatim, so callers can show
    /// the user every legal choice.
    InvalidValue {
        field: FieldId,
        value: String,
        allowed: &'static [&'static str],
    },
}

impl Violation {
    /// The field this violation concerns (used for ordering).
    pub fn field(&self) -> FieldId {
        match self {
            Self::MissingField { field } | Self::InvalidValue { field, .. } => *field,
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingField { field } => write!(f, "missing required field: {field}"),
            Self::InvalidValue {
                field,
                value,
                allowed,
            } => write!(
                f,
                "invalid value '{value}' for {field} (allowed: {})",
                allowed.join(", ")
            ),
        }
    }
}

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (callers may re-render them in multiple formats)
/// - Categorizable (for CLI display and exit codes)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Extraction Errors
    // ========================================================================
    #[error("configuration block not found (expected a region between '{start}' and '{end}')")]
    BlockNotFound { start: String, end: String },

    // ========================================================================
    // Validation Errors
    // ========================================================================
    /// One or more schema violations. Always carries the COMPLETE list so a
    /// single edit-retry cycle can fix every problem at once.
    #[error("configuration is invalid: {} violation(s)", violations.len())]
    ConfigurationInvalid { violations: Vec<Violation> },

    /// A key did not match any [`FieldId`]. The extractor uses this to skip
    /// unrecognized keys; it never surfaces to users on its own.
    #[error("unknown configuration field: {0}")]
    UnknownField(String),

    /// A value did not parse into its field's value enum. The validator
    /// converts this into a [`Violation::InvalidValue`] entry.
    #[error("unknown value '{value}' for field {field}")]
    UnknownValue { field: FieldId, value: String },

    // ========================================================================
    // Internal Invariant Violations
    // ========================================================================
    /// The planner requested a generator/parameter combination the registry
    /// cannot satisfy. A defect in the planning tables, never bad user input.
    #[error("generator '{generator}' cannot run: {detail}")]
    UnmappedGenerator {
        generator: GeneratorId,
        detail: String,
    },

    /// Two generators produced the same output path.
    #[error("duplicate artifact path: {path}")]
    DuplicateArtifactPath { path: String },

    /// A generator produced an absolute output path.
    #[error("absolute artifact paths are not allowed: {path}")]
    AbsoluteArtifactPath { path: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::BlockNotFound { start, end } => vec![
                "No configuration block was found in the document".into(),
                format!("Add a block delimited by '{start}' and '{end}'"),
                "Run 'groundwork init' to insert a starter block".into(),
            ],
            Self::ConfigurationInvalid { violations } => {
                let mut out = vec![format!(
                    "Fix the following {} problem(s) and re-run:",
                    violations.len()
                )];
                out.extend(violations.iter().map(|v| format!("  • {v}")));
                out
            }
            Self::UnknownValue { field, .. } => vec![
                format!("Check the allowed values for {field}"),
                "Run 'groundwork check' to list every violation at once".into(),
            ],
            Self::UnmappedGenerator { .. }
            | Self::DuplicateArtifactPath { .. }
            | Self::AbsoluteArtifactPath { .. } => vec![
                "This is a bug in the planning tables, not a configuration problem".into(),
                "Please report it with your configuration block attached".into(),
            ],
            Self::UnknownField(_) => vec!["Unrecognized keys are normally ignored".into()],
        }
    }

    /// Error category for CLI display styling and exit-code mapping.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::BlockNotFound { .. } => ErrorCategory::NotFound,
            Self::ConfigurationInvalid { .. }
            | Self::UnknownField(_)
            | Self::UnknownValue { .. } => ErrorCategory::Validation,
            Self::UnmappedGenerator { .. }
            | Self::DuplicateArtifactPath { .. }
            | Self::AbsoluteArtifactPath { .. } => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Internal,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn violation_display_names_the_field() {
        let v = Violation::MissingField {
            field: FieldId::Visibility,
        };
        assert_eq!(v.to_string(), "missing required field: VISIBILITY");
    }

    #[test]
    fn invalid_value_display_lists_allowed_set() {
        let v = Violation::InvalidValue {
            field: FieldId::Visibility,
            value: "internal".into(),
            allowed: &["public", "private"],
        };
        let s = v.to_string();
        assert!(s.contains("'internal'"));
        assert!(s.contains("public, private"));
    }

    #[test]
    fn configuration_invalid_suggestions_enumerate_violations() {
        let err = DomainError::ConfigurationInvalid {
            violations: vec![
                Violation::MissingField {
                    field: FieldId::Language,
                },
                Violation::MissingField {
                    field: FieldId::Testing,
                },
            ],
        };
        let suggestions = err.suggestions();
        assert!(suggestions.iter().any(|s| s.contains("LANGUAGE")));
        assert!(suggestions.iter().any(|s| s.contains("TESTING")));
    }

    #[test]
    fn categories() {
        let block = DomainError::BlockNotFound {
            start: "a".into(),
            end: "b".into(),
        };
        assert_eq!(block.category(), ErrorCategory::NotFound);

        let invalid = DomainError::ConfigurationInvalid { violations: vec![] };
        assert_eq!(invalid.category(), ErrorCategory::Validation);
    }
}
