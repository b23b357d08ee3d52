//! Unified error handling for Groundwork Core.
//!
//! Wraps domain and application errors behind one type so callers get a
//! single surface for categories and suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for Groundwork Core operations.
#[derive(Debug, Error, Clone)]
pub enum GroundworkError {
    /// Errors from the domain layer (extraction, validation, planning).
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Errors from the application layer (emission, registry wiring).
    #[error(transparent)]
    Application(#[from] ApplicationError),
}

impl GroundworkError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::NotFound => ErrorCategory::NotFound,
                crate::domain::ErrorCategory::Internal => ErrorCategory::Internal,
            },
            Self::Application(e) => e.category(),
        }
    }

    /// The violation list, when this error carries one.
    ///
    /// Convenience for CLI layers that render violations as a listing rather
    /// than a single message.
    pub fn violations(&self) -> Option<&[crate::domain::Violation]> {
        match self {
            Self::Domain(DomainError::ConfigurationInvalid { violations }) => Some(violations),
            _ => None,
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Internal,
}

/// Convenient result type alias.
pub type GroundworkResult<T> = Result<T, GroundworkError>;
