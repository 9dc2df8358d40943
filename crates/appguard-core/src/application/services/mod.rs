//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "decide an admission request".

pub mod admission_service;

pub use admission_service::{AdmissionService, DEFAULT_VALIDATED_OPERATIONS};
