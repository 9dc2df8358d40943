//! Domain value objects: the rule kinds.
//!
//! # Design
//!
//! `RuleKind` is a pure value type: `Copy`, equality-by-value, no identity.
//! It holds no policy. Descriptions and short-circuit policy live in
//! `registry.rs`; this file only defines the names and their parsers.
//!
//! # Adding New Rules
//!
//! 1. Add the enum variant here, in its evaluation position
//! 2. Add the `as_str` arm and the `FromStr` arm here
//! 3. Add a `RuleDef` entry in `registry.rs`
//! 4. Add the check in `rules.rs` and wire it into `ApplicationValidator`

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── RuleKind ──────────────────────────────────────────────────────────────────

/// One of the cross-reference checks applied to every document.
///
/// Variant order is evaluation order, and therefore message order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RuleKind {
    Uniqueness,
    RefUniqueness,
    ServiceRoleRefs,
    SelectedRoles,
    RoleProperties,
    ServiceProperties,
}

impl RuleKind {
    /// All kinds, in evaluation order.
    pub const ALL: [RuleKind; 6] = [
        Self::Uniqueness,
        Self::RefUniqueness,
        Self::ServiceRoleRefs,
        Self::SelectedRoles,
        Self::RoleProperties,
        Self::ServiceProperties,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Uniqueness => "uniqueness",
            Self::RefUniqueness => "ref-uniqueness",
            Self::ServiceRoleRefs => "service-role-refs",
            Self::SelectedRoles => "selected-roles",
            Self::RoleProperties => "role-properties",
            Self::ServiceProperties => "service-properties",
        }
    }

    /// Whether this rule stops scanning after its first failure.
    ///
    /// Delegates to `registry::rule_def`. Do not add match arms here.
    pub fn stop_on_first(self) -> bool {
        crate::domain::registry::rule_def(self).stop_on_first
    }

    pub fn description(self) -> &'static str {
        crate::domain::registry::rule_def(self).description
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RuleKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace('_', "-").as_str() {
            "uniqueness" => Ok(Self::Uniqueness),
            "ref-uniqueness" => Ok(Self::RefUniqueness),
            "service-role-refs" => Ok(Self::ServiceRoleRefs),
            "selected-roles" => Ok(Self::SelectedRoles),
            "role-properties" => Ok(Self::RoleProperties),
            "service-properties" => Ok(Self::ServiceProperties),
            other => Err(DomainError::UnknownRule {
                name: other.to_string(),
            }),
        }
    }
}
