// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for appguard.
//!
//! This module contains the document model and the admission rules. Decoding
//! and role lookup are handled via ports (traits) defined in the application
//! layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Rule checks are synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **Read-only**: Nothing here mutates the document under validation
//! - **Structured results**: Violations are data until rendered
//!
// Public API - what the world sees
pub mod common;
pub mod entities;
pub mod error;
pub mod registry;
pub mod report;
pub mod rules;
pub mod value_objects;
pub mod violation;

// Private implementation details - not visible outside domain
mod validation;

// Re-exports for convenience
pub use entities::{
    ApplicationBuilder, ApplicationDefinition, ApplicationSpec, Config, Endpoint, ImageRef,
    ObjectMeta, Role, RoleServiceBinding, Service,
};

pub use error::{DomainError, ErrorCategory};

pub use registry::{RULE_REGISTRY, RuleDef};
pub use report::{RuleReport, ValidationOutcome, ValidationReport};
pub use validation::ApplicationValidator;
pub use value_objects::RuleKind;
pub use violation::Violation;
