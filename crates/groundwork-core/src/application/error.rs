//! Application layer errors.
//!
//! These represent orchestration failures: a port misbehaving or the
//! planner/registry pairing being broken. Business-logic failures are
//! `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::plan::GeneratorId;
use crate::error::ErrorCategory;

/// Errors that occur while orchestrating a scaffold run.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// The emitter failed to materialize an artifact.
    #[error("emit failed at {path}: {reason}")]
    EmitFailed { path: PathBuf, reason: String },

    /// The planner asked for a generator the registry does not hold.
    ///
    /// Like `DomainError::UnmappedGenerator`, this is a wiring defect: the
    /// planner and the registered generator set have drifted apart.
    #[error("no generator registered for '{generator}'")]
    GeneratorNotRegistered { generator: GeneratorId },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::EmitFailed { path, .. } => vec![
                format!("Failed to write: {}", path.display()),
                "Check that you have write permissions in the output directory".into(),
                "Check available disk space".into(),
            ],
            Self::GeneratorNotRegistered { generator } => vec![
                format!("The '{generator}' generator is planned but not registered"),
                "This is a bug in Groundwork, please report it".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::EmitFailed { .. } => ErrorCategory::Internal,
            Self::GeneratorNotRegistered { .. } => ErrorCategory::Internal,
        }
    }
}
