//! The cross-reference checks.
//!
//! Each check is a pure function over the document (and, where needed, the
//! declared identifier lists) that returns a [`RuleReport`]. Checks never
//! look at each other's results.

use crate::domain::common::{join_ids, list_is_unique, string_in_list};
use crate::domain::entities::ApplicationDefinition;
use crate::domain::report::RuleReport;
use crate::domain::value_objects::RuleKind;
use crate::domain::violation::Violation;

/// Declared role IDs and declared service IDs must each be duplicate-free.
///
/// Both lists are checked; either or both may report.
pub fn check_uniqueness(role_ids: &[String], service_ids: &[String]) -> RuleReport {
    let mut report = RuleReport::new(RuleKind::Uniqueness);
    if !list_is_unique(role_ids) {
        report.push(Violation::NonUniqueRoleId);
    }
    if !list_is_unique(service_ids) {
        report.push(Violation::NonUniqueServiceId);
    }
    report
}

/// `selected_roles` must be duplicate-free, and no two `role_services`
/// bindings may share a role.
pub fn check_ref_uniqueness(app: &ApplicationDefinition) -> RuleReport {
    let kind = RuleKind::RefUniqueness;
    let mut report = RuleReport::new(kind);
    let config = app.config();

    if !list_is_unique(&config.selected_roles) {
        report.push(Violation::NonUniqueSelectedRole);
    }

    let mut seen = std::collections::HashSet::new();
    for binding in &config.role_services {
        if !seen.insert(binding.role_id.as_str()) {
            report.push(Violation::NonUniqueServiceRole);
            if kind.stop_on_first() {
                break;
            }
        }
    }
    report
}

/// Every role and service named in `role_services` must be declared.
pub fn check_service_role_refs(
    app: &ApplicationDefinition,
    role_ids: &[String],
    service_ids: &[String],
) -> RuleReport {
    let mut report = RuleReport::new(RuleKind::ServiceRoleRefs);

    for binding in &app.config().role_services {
        if !string_in_list(&binding.role_id, role_ids) {
            report.push(Violation::InvalidNodeRoleId {
                role_id: binding.role_id.clone(),
                valid: join_ids(role_ids),
            });
        }
        for service_id in &binding.service_ids {
            if !string_in_list(service_id, service_ids) {
                report.push(Violation::InvalidServiceId {
                    service_id: service_id.clone(),
                    valid: join_ids(service_ids),
                });
            }
        }
    }
    report
}

/// Every `selected_roles` entry must resolve to a role definition.
///
/// Resolution is delegated to `resolves` rather than compared against
/// `role_ids`; `role_ids` is only used to list the valid choices.
pub fn check_selected_roles<F>(
    app: &ApplicationDefinition,
    role_ids: &[String],
    resolves: F,
) -> RuleReport
where
    F: Fn(&str) -> bool,
{
    let mut report = RuleReport::new(RuleKind::SelectedRoles);

    for selected in &app.config().selected_roles {
        if !resolves(selected) {
            report.push(Violation::InvalidSelectedRoleId {
                role_id: selected.clone(),
                valid: join_ids(role_ids),
            });
        }
    }
    report
}

/// A role without its own image needs a document-level default image.
pub fn check_role_properties(app: &ApplicationDefinition) -> RuleReport {
    let kind = RuleKind::RoleProperties;
    let mut report = RuleReport::new(kind);

    if app.has_default_image() {
        return report;
    }
    for role in app.roles() {
        if !role.has_image() {
            report.push(Violation::NoDefaultImage);
            if kind.stop_on_first() {
                break;
            }
        }
    }
    report
}

/// A dashboard endpoint must name its URL scheme.
pub fn check_service_properties(app: &ApplicationDefinition) -> RuleReport {
    let mut report = RuleReport::new(RuleKind::ServiceProperties);

    for service in app.services() {
        if service.endpoint.is_dashboard && !service.endpoint.has_url_scheme() {
            report.push(Violation::NoUrlScheme {
                service_id: service.id.clone(),
            });
        }
    }
    report
}
