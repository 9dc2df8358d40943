use tracing::debug;

use crate::domain::{
    entities::ApplicationDefinition,
    report::{RuleReport, ValidationReport},
    rules,
    value_objects::RuleKind,
};

/// Centralized document validation.
///
/// Runs every rule, in [`RuleKind::ALL`] order, and never lets one rule's
/// result skip another.
pub struct ApplicationValidator;

impl ApplicationValidator {
    /// Validate a decoded document against the declared identifier lists.
    ///
    /// `resolves` answers whether a selected-role entry names a role
    /// definition; it is supplied by the caller's role catalog.
    pub fn validate<F>(
        app: &ApplicationDefinition,
        role_ids: &[String],
        service_ids: &[String],
        resolves: F,
    ) -> ValidationReport
    where
        F: Fn(&str) -> bool,
    {
        let reports: Vec<RuleReport> = RuleKind::ALL
            .iter()
            .map(|kind| {
                let report = match kind {
                    RuleKind::Uniqueness => rules::check_uniqueness(role_ids, service_ids),
                    RuleKind::RefUniqueness => rules::check_ref_uniqueness(app),
                    RuleKind::ServiceRoleRefs => {
                        rules::check_service_role_refs(app, role_ids, service_ids)
                    }
                    RuleKind::SelectedRoles => {
                        rules::check_selected_roles(app, role_ids, &resolves)
                    }
                    RuleKind::RoleProperties => rules::check_role_properties(app),
                    RuleKind::ServiceProperties => rules::check_service_properties(app),
                };
                debug!(
                    rule = %kind,
                    violations = report.violations.len(),
                    "Rule evaluated"
                );
                report
            })
            .collect();

        ValidationReport::new(reports)
    }
}
