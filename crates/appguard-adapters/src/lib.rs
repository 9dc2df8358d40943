//! Infrastructure adapters for appguard.
//!
//! This crate implements the ports defined in `appguard-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod catalog;
pub mod decoder;
pub mod filesystem;
pub mod review;

// Re-export commonly used adapters
pub use catalog::DocumentCatalog;
pub use decoder::JsonDocumentDecoder;
pub use review::{AdmissionReview, ReviewError};

use appguard_core::application::AdmissionService;

/// An [`AdmissionService`] wired with the JSON decoder and the
/// document-backed role catalog.
pub fn default_service() -> AdmissionService {
    AdmissionService::new(
        Box::new(JsonDocumentDecoder::new()),
        Box::new(DocumentCatalog::new()),
    )
}
