//! Unified error handling for appguard core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with rich context and user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for appguard core operations.
///
/// Rule violations are never reported through this type; they are returned
/// as a `ValidationReport`.
#[derive(Debug, Error, Clone)]
pub enum AppGuardError {
    /// Errors from the domain layer.
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (decoding, envelopes, I/O).
    #[error("{0}")]
    Application(#[from] ApplicationError),

    /// Configuration or setup errors.
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Unexpected internal errors (bugs).
    #[error("Internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

impl AppGuardError {
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
                "This appears to be a bug in appguard".into(),
                "Please report this issue at: https://github.com/cosecruz/appguard/issues".into(),
            ],
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
            Self::Configuration { .. } => ErrorCategory::Configuration,
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }

    /// `true` if this error came from an undecodable document.
    pub fn is_decode(&self) -> bool {
        matches!(self, Self::Application(ApplicationError::Decode(_)))
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Configuration,
    Internal,
}

/// Convenient result type alias.
pub type AppGuardResult<T> = Result<T, AppGuardError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::DecodeError;

    #[test]
    fn decode_errors_are_validation_category() {
        let err: AppGuardError = ApplicationError::from(DecodeError::new("eof")).into();
        assert!(err.is_decode());
        assert_eq!(err.category(), ErrorCategory::Validation);
    }
}
