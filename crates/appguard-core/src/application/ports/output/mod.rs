//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the admission service needs from outside.
//! The `appguard-adapters` crate provides implementations.

use crate::application::error::DecodeError;
use crate::domain::{ApplicationDefinition, Role};

/// Port for turning a raw payload into a document.
///
/// Implemented by:
/// - `appguard_adapters::decoder::JsonDocumentDecoder` (production)
pub trait DocumentDecoder: Send + Sync {
    /// Decode `raw` into a document. Must be deterministic.
    fn decode(&self, raw: &[u8]) -> Result<ApplicationDefinition, DecodeError>;
}

/// Port for identifier extraction and role lookup.
///
/// Implemented by:
/// - `appguard_adapters::catalog::DocumentCatalog` (declaration order, exact match)
///
/// ## Design Notes
///
/// - `role_ids`/`service_ids` are the authoritative declared lists, in the
///   order used for diagnostics
/// - `resolve_role` may apply resolution beyond plain string equality;
///   selected roles are checked through it, not through `role_ids`
pub trait RoleCatalog: Send + Sync {
    /// Every declared role identifier, duplicates included.
    fn role_ids(&self, app: &ApplicationDefinition) -> Vec<String>;

    /// Every declared service identifier, duplicates included.
    fn service_ids(&self, app: &ApplicationDefinition) -> Vec<String>;

    /// The role definition `id` refers to, if any.
    fn resolve_role(&self, app: &ApplicationDefinition, id: &str) -> Option<Role>;
}
