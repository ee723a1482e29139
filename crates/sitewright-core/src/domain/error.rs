use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (for re-prompt loops)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors (400-level equivalent)
    // ========================================================================
    #[error("invalid domain name '{input}': {reason}")]
    InvalidDomainName { input: String, reason: String },

    #[error("invalid PHP version '{input}': expected <major>.<minor>, e.g. 8.3")]
    InvalidPhpVersion { input: String },

    #[error("invalid vhost template: {reason}")]
    InvalidVhostTemplate { reason: String },

    // ========================================================================
    // Constraint Violations
    // ========================================================================
    #[error("Required field missing: {field}")]
    MissingRequiredField { field: &'static str },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidDomainName { input, reason } => vec![
                format!("'{}' is not a valid domain name: {}", input, reason),
                "Use letters, digits, dots and hyphens only".into(),
                "The name must end in a top-level domain of two or more letters".into(),
                "Examples: example.com, www.example.com, staging.example.co.uk".into(),
            ],
            Self::InvalidPhpVersion { input } => vec![
                format!("'{}' is not a valid PHP version", input),
                "Use the <major>.<minor> form, e.g. 8.2 or 8.3".into(),
            ],
            Self::InvalidVhostTemplate { reason } => vec![
                format!("Vhost template rejected: {}", reason),
                "Pick one of the templates shown by the interactive prompt".into(),
            ],
            Self::MissingRequiredField { field } => vec![
                format!("'{}' must be provided before the request can be built", field),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidDomainName { .. }
            | Self::InvalidPhpVersion { .. }
            | Self::InvalidVhostTemplate { .. } => ErrorCategory::Validation,
            Self::MissingRequiredField { .. } => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Internal,
}
