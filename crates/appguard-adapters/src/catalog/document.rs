//! Role catalog backed by the document's own declarations.

use appguard_core::{
    application::ports::RoleCatalog,
    domain::{ApplicationDefinition, Role},
};

/// Reads identifiers straight from the document.
///
/// IDs are returned in declaration order with duplicates kept, so the
/// uniqueness rule can see them. Role resolution is an exact, case-sensitive
/// match on `id`; the first matching role wins.
#[derive(Debug, Clone, Copy)]
pub struct DocumentCatalog;

impl DocumentCatalog {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DocumentCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl RoleCatalog for DocumentCatalog {
    fn role_ids(&self, app: &ApplicationDefinition) -> Vec<String> {
        app.roles().iter().map(|role| role.id.clone()).collect()
    }

    fn service_ids(&self, app: &ApplicationDefinition) -> Vec<String> {
        app.services()
            .iter()
            .map(|service| service.id.clone())
            .collect()
    }

    fn resolve_role(&self, app: &ApplicationDefinition, id: &str) -> Option<Role> {
        app.roles().iter().find(|role| role.id == id).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use appguard_core::domain::Service;

    fn app() -> ApplicationDefinition {
        ApplicationDefinition::builder()
            .role(Role::new("worker"))
            .role(Role::new("controller").with_image("ctl:1"))
            .role(Role::new("worker"))
            .service(Service::new("ssh"))
            .build()
    }

    #[test]
    fn ids_keep_order_and_duplicates() {
        let catalog = DocumentCatalog::new();
        assert_eq!(catalog.role_ids(&app()), vec!["worker", "controller", "worker"]);
        assert_eq!(catalog.service_ids(&app()), vec!["ssh"]);
    }

    #[test]
    fn resolution_is_exact() {
        let catalog = DocumentCatalog::new();
        let role = catalog.resolve_role(&app(), "controller").unwrap();
        assert!(role.has_image());
        assert!(catalog.resolve_role(&app(), "Controller").is_none());
        assert!(catalog.resolve_role(&app(), "").is_none());
    }
}
