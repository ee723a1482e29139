//! Unified error handling for Sitewright Core.
//!
//! This module provides a unified error type that wraps domain and
//! application errors, with rich context and user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for Sitewright Core operations.
///
/// This enum wraps all possible errors that can occur when using
/// sitewright-core, providing a unified interface for error handling.
#[derive(Debug, Error, Clone)]
pub enum CoreError {
    /// Errors from the domain layer (validation failures).
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (collaborator failures).
    #[error("Application error: {0}")]
    Application(#[from] ApplicationError),

    /// Configuration or setup errors.
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Unexpected internal errors (bugs).
    #[error("Internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

impl CoreError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
            Self::Configuration { message } => vec![
                format!("Configuration issue: {}", message),
                "Check your setup and try again".into(),
            ],
            Self::Internal { .. } => vec![
                "This appears to be a bug in Sitewright".into(),
                "Please report this issue at: https://github.com/cosecruz/sitewright/issues"
                    .into(),
            ],
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::Internal => ErrorCategory::Internal,
            },
            Self::Application(e) => e.category(),
            Self::Configuration { .. } => ErrorCategory::Configuration,
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Configuration,
    Internal,
}

/// Convenient result type alias.
pub type CoreResult<T> = Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_validation_maps_to_validation_category() {
        let err = CoreError::Domain(DomainError::InvalidDomainName {
            input: "x".into(),
            reason: "too short".into(),
        });
        assert_eq!(err.category(), ErrorCategory::Validation);
        assert!(!err.suggestions().is_empty());
    }

    #[test]
    fn application_unavailable_maps_to_configuration() {
        let err = CoreError::Application(ApplicationError::ControlPlaneUnavailable {
            binary: "clpctl".into(),
            reason: "not found".into(),
        });
        assert_eq!(err.category(), ErrorCategory::Configuration);
    }
}
