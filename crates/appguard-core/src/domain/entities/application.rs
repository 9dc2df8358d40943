//! The application definition document and its parts.
//!
//! Every type here is a read-only view of the decoded custom resource. The
//! decoder is lenient: missing lists decode as empty and missing images as
//! absent, so structural presence is never enforced at this layer. An
//! explicit `null` reads the same as a missing field, and every camelCase
//! field name also accepts its snake_case spelling.

use serde::{Deserialize, Deserializer, Serialize};

/// Decode `null` as the type's default.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// A container image reference.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageRef {
    #[serde(default, alias = "repo_tag", skip_serializing_if = "Option::is_none")]
    pub repo_tag: Option<String>,
}

impl ImageRef {
    pub fn new(repo_tag: impl Into<String>) -> Self {
        Self {
            repo_tag: Some(repo_tag.into()),
        }
    }

    /// An empty `repoTag` is treated the same as no tag.
    pub fn is_set(&self) -> bool {
        self.repo_tag.as_deref().is_some_and(|tag| !tag.is_empty())
    }
}

/// Kubernetes-style object metadata. Only used for diagnostics.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectMeta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
}

/// The document under validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationDefinition {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default)]
    pub metadata: ObjectMeta,
    #[serde(default)]
    pub spec: ApplicationSpec,
}

impl ApplicationDefinition {
    /// Start a builder with an empty spec.
    pub fn builder() -> ApplicationBuilder {
        ApplicationBuilder::default()
    }

    /// Declared roles, in document order.
    pub fn roles(&self) -> &[Role] {
        &self.spec.roles
    }

    /// Declared services, in document order.
    pub fn services(&self) -> &[Service] {
        &self.spec.services
    }

    pub fn config(&self) -> &Config {
        &self.spec.config
    }

    /// Whether the document carries a usable default image.
    pub fn has_default_image(&self) -> bool {
        self.spec.image.as_ref().is_some_and(ImageRef::is_set)
    }

    /// Display name for logs; falls back to `<unnamed>`.
    pub fn display_name(&self) -> &str {
        self.metadata.name.as_deref().unwrap_or("<unnamed>")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Fallback image for roles that omit their own.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<ImageRef>,
    #[serde(
        default,
        alias = "nodeRoles",
        alias = "node_roles",
        deserialize_with = "null_as_default"
    )]
    pub roles: Vec<Role>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub services: Vec<Service>,
    #[serde(default)]
    pub config: Config,
}

/// A named node type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Role {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<ImageRef>,
}

impl Role {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            image: None,
        }
    }

    pub fn with_image(mut self, repo_tag: impl Into<String>) -> Self {
        self.image = Some(ImageRef::new(repo_tag));
        self
    }

    pub fn has_image(&self) -> bool {
        self.image.as_ref().is_some_and(ImageRef::is_set)
    }
}

/// A capability exposed by the application.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default)]
    pub endpoint: Endpoint,
}

impl Service {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    pub fn with_endpoint(mut self, endpoint: Endpoint) -> Self {
        self.endpoint = endpoint;
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Endpoint {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<u32>,
    #[serde(default, alias = "url_scheme", skip_serializing_if = "Option::is_none")]
    pub url_scheme: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(default, alias = "is_dashboard", deserialize_with = "null_as_default")]
    pub is_dashboard: bool,
}

impl Endpoint {
    /// A dashboard endpoint with the given scheme (empty means unset).
    pub fn dashboard(url_scheme: impl Into<String>) -> Self {
        Self {
            url_scheme: Some(url_scheme.into()),
            is_dashboard: true,
            ..Self::default()
        }
    }

    pub fn has_url_scheme(&self) -> bool {
        self.url_scheme.as_deref().is_some_and(|s| !s.is_empty())
    }
}

/// The section that selects roles and binds them to services.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default, alias = "selected_roles", deserialize_with = "null_as_default")]
    pub selected_roles: Vec<String>,
    #[serde(default, alias = "role_services", deserialize_with = "null_as_default")]
    pub role_services: Vec<RoleServiceBinding>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleServiceBinding {
    #[serde(default, alias = "role_id", deserialize_with = "null_as_default")]
    pub role_id: String,
    #[serde(default, alias = "service_ids", deserialize_with = "null_as_default")]
    pub service_ids: Vec<String>,
}

impl RoleServiceBinding {
    pub fn new<I, S>(role_id: impl Into<String>, service_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            role_id: role_id.into(),
            service_ids: service_ids.into_iter().map(Into::into).collect(),
        }
    }
}

// ── Builder ───────────────────────────────────────────────────────────────────

/// Fluent construction of documents, mostly for tests and fixtures.
#[derive(Debug, Default)]
pub struct ApplicationBuilder {
    doc: ApplicationDefinition,
}

impl ApplicationBuilder {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.doc.metadata.name = Some(name.into());
        self
    }

    pub fn default_image(mut self, repo_tag: impl Into<String>) -> Self {
        self.doc.spec.image = Some(ImageRef::new(repo_tag));
        self
    }

    pub fn role(mut self, role: Role) -> Self {
        self.doc.spec.roles.push(role);
        self
    }

    pub fn service(mut self, service: Service) -> Self {
        self.doc.spec.services.push(service);
        self
    }

    pub fn selected_role(mut self, id: impl Into<String>) -> Self {
        self.doc.spec.config.selected_roles.push(id.into());
        self
    }

    pub fn binding(mut self, binding: RoleServiceBinding) -> Self {
        self.doc.spec.config.role_services.push(binding);
        self
    }

    pub fn build(self) -> ApplicationDefinition {
        self.doc
    }
}
