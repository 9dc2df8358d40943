use thiserror::Error;

use crate::domain::registry::RULE_REGISTRY;

/// Root domain error type.
///
/// Rule violations are not errors; they are collected into a report. This
/// type covers misuse of the domain API itself.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    #[error("Unknown rule '{name}'")]
    UnknownRule { name: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::UnknownRule { name } => {
                let mut suggestions = vec![
                    format!("'{}' is not a known rule", name),
                    "Known rules:".into(),
                ];
                suggestions.extend(
                    RULE_REGISTRY
                        .iter()
                        .map(|def| format!("  • {}", def.kind)),
                );
                suggestions
            }
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::UnknownRule { .. } => ErrorCategory::NotFound,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Internal,
}
