//! Rule registry.
//!
//! Each rule is described exactly once by its [`RuleDef`]: a stable name,
//! a description for the CLI, and its short-circuit policy. The policy is
//! observable in the produced messages, so it is recorded per rule instead
//! of being unified.
//!
//! Two rules report each kind of failure at most once:
//! - `ref-uniqueness` reports one duplicate-selection message and one
//!   duplicate-binding message, however many entries repeat
//! - `role-properties` reports one missing-image message however many roles
//!   lack an image
//!
//! Every other rule accumulates all of its violations.

use crate::domain::value_objects::RuleKind;

/// Static description of one rule.
#[derive(Debug, Clone, Copy)]
pub struct RuleDef {
    pub kind: RuleKind,
    pub description: &'static str,
    pub stop_on_first: bool,
}

/// Single source of truth for rule metadata, in evaluation order.
pub static RULE_REGISTRY: &[RuleDef] = &[
    RuleDef {
        kind: RuleKind::Uniqueness,
        description: "Declared role IDs and declared service IDs are each pairwise distinct",
        stop_on_first: false,
    },
    RuleDef {
        kind: RuleKind::RefUniqueness,
        description: "selected_roles has no duplicates and no two role_services share a role_id (each reported once)",
        stop_on_first: true,
    },
    RuleDef {
        kind: RuleKind::ServiceRoleRefs,
        description: "Every role_id and service_id in role_services names a declared role or service",
        stop_on_first: false,
    },
    RuleDef {
        kind: RuleKind::SelectedRoles,
        description: "Every selected_roles entry resolves to a role definition",
        stop_on_first: false,
    },
    RuleDef {
        kind: RuleKind::RoleProperties,
        description: "A role without its own image requires a top-level default image",
        stop_on_first: true,
    },
    RuleDef {
        kind: RuleKind::ServiceProperties,
        description: "A dashboard service endpoint must specify a url_scheme",
        stop_on_first: false,
    },
];

impl RuleDef {
    /// How many violations the rule reports, for display.
    pub fn policy(&self) -> &'static str {
        if self.stop_on_first {
            "each kind of failure once"
        } else {
            "all violations"
        }
    }
}

/// Look up the definition of a rule.
///
/// The registry covers every `RuleKind` variant; the `registry_is_complete`
/// test guards that.
pub fn rule_def(kind: RuleKind) -> &'static RuleDef {
    let index = RuleKind::ALL
        .iter()
        .position(|k| *k == kind)
        .unwrap_or_default();
    &RULE_REGISTRY[index]
}
