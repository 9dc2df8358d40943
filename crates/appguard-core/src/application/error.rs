//! Application layer errors.
//!
//! These errors represent failures in orchestration, not rule violations.
//! Violations are collected into a `ValidationReport` by `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// A payload could not be decoded into a document.
///
/// `Display` is exactly the decoder's message; it becomes the rejection
/// reason verbatim.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct DecodeError {
    pub message: String,
    pub line: Option<usize>,
    pub column: Option<usize>,
}

impl DecodeError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            line: None,
            column: None,
        }
    }

    pub fn at(mut self, line: usize, column: usize) -> Self {
        self.line = Some(line);
        self.column = Some(column);
        self
    }
}

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// The document payload could not be decoded.
    #[error("Document could not be decoded: {0}")]
    Decode(#[from] DecodeError),

    /// The admission envelope was malformed or incomplete.
    #[error("Invalid admission envelope: {reason}")]
    Envelope { reason: String },

    /// Reading a document source failed.
    #[error("I/O error at {path}: {reason}")]
    Io { path: PathBuf, reason: String },

    /// An operation name was not recognised.
    #[error("Unknown admission operation '{name}'")]
    UnknownOperation { name: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Decode(err) => {
                let mut suggestions = vec!["Check that the document is valid JSON".into()];
                if let (Some(line), Some(column)) = (err.line, err.column) {
                    suggestions.push(format!("Problem near line {line}, column {column}"));
                }
                suggestions
                    .push("List fields (roles, services, selectedRoles) must be arrays".into());
                suggestions
            }
            Self::Envelope { .. } => vec![
                "An AdmissionReview must carry a `request` object".into(),
                "The request must include `uid` and `object`".into(),
            ],
            Self::Io { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that the file exists and is readable".into(),
            ],
            Self::UnknownOperation { .. } => vec![
                "Valid operations: CREATE, UPDATE, DELETE, CONNECT".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Decode(_) | Self::Envelope { .. } => ErrorCategory::Validation,
            Self::Io { .. } => ErrorCategory::Internal,
            Self::UnknownOperation { .. } => ErrorCategory::Configuration,
        }
    }
}
