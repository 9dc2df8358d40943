//! Application layer for appguard.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (AdmissionService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Admission**: Transport-neutral request/response types
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! rules itself. All rules live in `crate::domain`.

pub mod admission;
pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{AdmissionService, DEFAULT_VALIDATED_OPERATIONS};

// Re-export port traits (for adapter implementation)
pub use ports::{DocumentDecoder, RoleCatalog};

pub use admission::{AdmissionRequest, AdmissionResponse, AdmissionStatus, Operation};
pub use error::{ApplicationError, DecodeError};
