//! appguard Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the appguard
//! admission validator, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │   appguard-cli (CLI / webhook host)     │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │           (AdmissionService)            │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │   (Driven: DocumentDecoder, RoleCatalog)│
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    appguard-adapters (Infrastructure)   │
//! │ (JsonDocumentDecoder, DocumentCatalog)  │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │ (ApplicationDefinition, rules, reports) │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use appguard_core::application::{AdmissionRequest, AdmissionService, Operation};
//!
//! // 1. Wire the service with injected adapters
//! let service = AdmissionService::new(decoder, catalog);
//!
//! // 2. Decide a request
//! let request = AdmissionRequest::new(Operation::Create, raw_document);
//! let response = service.admit(&request);
//! assert!(response.allowed);
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        AdmissionRequest, AdmissionResponse, AdmissionService, DecodeError, Operation,
        ports::{DocumentDecoder, RoleCatalog},
    };
    pub use crate::domain::{
        ApplicationDefinition, Endpoint, Role, RoleServiceBinding, RuleKind, RuleReport, Service,
        ValidationOutcome, ValidationReport, Violation,
    };
    pub use crate::error::{AppGuardError, AppGuardResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
