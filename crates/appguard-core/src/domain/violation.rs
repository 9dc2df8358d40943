//! Tagged violation records.
//!
//! A violation is data (kind + parameters). Its message template is the
//! `#[error]` attribute, so the text is fixed at compile time and only
//! rendered when a report is turned into a user-facing message.

use serde::Serialize;
use thiserror::Error;

use crate::domain::value_objects::RuleKind;

#[derive(Debug, Error, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Violation {
    // ========================================================================
    // Declared-entity uniqueness
    // ========================================================================
    #[error("Each role must have a unique ID.")]
    NonUniqueRoleId,

    #[error("Each service must have a unique ID.")]
    NonUniqueServiceId,

    // ========================================================================
    // Config-section uniqueness
    // ========================================================================
    #[error("Each selected role must be unique.")]
    NonUniqueSelectedRole,

    #[error("Each role_services array element must have a unique role_id.")]
    NonUniqueServiceRole,

    // ========================================================================
    // Referential integrity
    // ========================================================================
    #[error("Invalid role_id({role_id}) in role_services array. Valid role IDs: {valid}")]
    InvalidNodeRoleId { role_id: String, valid: String },

    #[error("Invalid service_id({service_id}) in role_services array. Valid service IDs: {valid}")]
    InvalidServiceId { service_id: String, valid: String },

    #[error("Invalid element({role_id}) in selected_roles array. Valid role IDs: {valid}")]
    InvalidSelectedRoleId { role_id: String, valid: String },

    // ========================================================================
    // Property constraints
    // ========================================================================
    #[error("Top-level image must be specified if any role lacks an image.")]
    NoDefaultImage,

    #[error("url_scheme must be specified for service endpoint({service_id}) if is_dashboard is true.")]
    NoUrlScheme { service_id: String },
}

impl Violation {
    /// The rule that produces this violation.
    pub fn rule(&self) -> RuleKind {
        match self {
            Self::NonUniqueRoleId | Self::NonUniqueServiceId => RuleKind::Uniqueness,
            Self::NonUniqueSelectedRole | Self::NonUniqueServiceRole => RuleKind::RefUniqueness,
            Self::InvalidNodeRoleId { .. } | Self::InvalidServiceId { .. } => {
                RuleKind::ServiceRoleRefs
            }
            Self::InvalidSelectedRoleId { .. } => RuleKind::SelectedRoles,
            Self::NoDefaultImage => RuleKind::RoleProperties,
            Self::NoUrlScheme { .. } => RuleKind::ServiceProperties,
        }
    }
}
