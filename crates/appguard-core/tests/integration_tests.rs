//! Integration tests for appguard-core.
//!
//! The ports are mocked so these tests pin down how `AdmissionService` uses
//! its collaborators, independent of the real adapters.

use appguard_core::{
    application::{
        AdmissionRequest, AdmissionService, DecodeError, Operation,
        ports::{DocumentDecoder, RoleCatalog},
    },
    domain::{ApplicationDefinition, Endpoint, Role, RoleServiceBinding, Service},
};
use mockall::mock;

mock! {
    pub Decoder {}
    impl DocumentDecoder for Decoder {
        fn decode(&self, raw: &[u8]) -> Result<ApplicationDefinition, DecodeError>;
    }
}

mock! {
    pub Catalog {}
    impl RoleCatalog for Catalog {
        fn role_ids(&self, app: &ApplicationDefinition) -> Vec<String>;
        fn service_ids(&self, app: &ApplicationDefinition) -> Vec<String>;
        fn resolve_role(&self, app: &ApplicationDefinition, id: &str) -> Option<Role>;
    }
}

fn document() -> ApplicationDefinition {
    ApplicationDefinition::builder()
        .name("spark")
        .default_image("registry/spark:2.4")
        .role(Role::new("controller"))
        .service(Service::new("ui").with_endpoint(Endpoint::dashboard("http")))
        .selected_role("Controller")
        .binding(RoleServiceBinding::new("controller", ["ui"]))
        .build()
}

fn decoder_returning(doc: ApplicationDefinition) -> MockDecoder {
    let mut decoder = MockDecoder::new();
    decoder
        .expect_decode()
        .times(1)
        .returning(move |_| Ok(doc.clone()));
    decoder
}

fn catalog_for(role_ids: &[&str], service_ids: &[&str]) -> MockCatalog {
    let roles: Vec<String> = role_ids.iter().map(|s| s.to_string()).collect();
    let services: Vec<String> = service_ids.iter().map(|s| s.to_string()).collect();

    let mut catalog = MockCatalog::new();
    catalog
        .expect_role_ids()
        .times(1)
        .returning(move |_| roles.clone());
    catalog
        .expect_service_ids()
        .times(1)
        .returning(move |_| services.clone());
    catalog
}

#[test]
fn selected_roles_are_checked_through_the_resolver() {
    let mut catalog = catalog_for(&["controller"], &["ui"]);
    catalog
        .expect_resolve_role()
        .withf(|_, id| id == "Controller")
        .times(1)
        .returning(|_, _| Some(Role::new("controller")));

    let service = AdmissionService::new(
        Box::new(decoder_returning(document())),
        Box::new(catalog),
    );

    let request = AdmissionRequest::new(Operation::Create, b"{}".to_vec());
    let response = service.admit(&request);

    assert!(response.allowed, "unexpected denial: {:?}", response.message());
    assert_eq!(response.uid, request.uid);
    assert!(response.status.is_none());
}

#[test]
fn unresolved_selected_role_lists_declared_ids() {
    let mut catalog = catalog_for(&["controller", "worker"], &["ui"]);
    catalog.expect_resolve_role().returning(|_, _| None);

    let service = AdmissionService::new(
        Box::new(decoder_returning(document())),
        Box::new(catalog),
    );

    let response = service.admit(&AdmissionRequest::new(Operation::Update, b"{}".to_vec()));

    assert!(!response.allowed);
    assert_eq!(
        response.message(),
        Some("\nInvalid element(Controller) in selected_roles array. Valid role IDs: controller,worker")
    );
}

#[test]
fn decode_failure_rejects_without_consulting_the_catalog() {
    let mut decoder = MockDecoder::new();
    decoder
        .expect_decode()
        .times(1)
        .returning(|_| Err(DecodeError::new("expected value at line 1 column 1").at(1, 1)));

    let mut catalog = MockCatalog::new();
    catalog.expect_role_ids().never();
    catalog.expect_service_ids().never();
    catalog.expect_resolve_role().never();

    let service = AdmissionService::new(Box::new(decoder), Box::new(catalog));
    let response = service.admit(&AdmissionRequest::new(Operation::Create, b"nope".to_vec()));

    assert!(!response.allowed);
    assert_eq!(response.message(), Some("\nexpected value at line 1 column 1"));
}

#[test]
fn validate_surfaces_decode_failure_as_error() {
    let mut decoder = MockDecoder::new();
    decoder
        .expect_decode()
        .returning(|_| Err(DecodeError::new("trailing characters")));

    let service = AdmissionService::new(Box::new(decoder), Box::new(MockCatalog::new()));
    let err = service.validate(b"{}}").unwrap_err();

    assert!(err.is_decode());
    assert!(err.to_string().contains("trailing characters"));
}

#[test]
fn delete_requests_are_admitted_without_decoding() {
    let mut decoder = MockDecoder::new();
    decoder.expect_decode().never();

    let service = AdmissionService::new(Box::new(decoder), Box::new(MockCatalog::new()));
    let request = AdmissionRequest::new(Operation::Delete, Vec::new()).with_uid("del-1");
    let response = service.admit(&request);

    assert!(response.allowed);
    assert_eq!(response.uid, "del-1");
}

#[test]
fn configured_operations_replace_the_defaults() {
    let mut decoder = MockDecoder::new();
    decoder.expect_decode().never();

    let service = AdmissionService::new(Box::new(decoder), Box::new(MockCatalog::new()))
        .with_validated_operations([Operation::Create]);

    assert_eq!(service.validated_operations(), &[Operation::Create]);
    let response = service.admit(&AdmissionRequest::new(Operation::Update, b"{}".to_vec()));
    assert!(response.allowed);
}
