//! End-to-end admission tests through the real JSON decoder and document
//! catalog.

use appguard_adapters::{
    AdmissionReview, JsonDocumentDecoder, default_service, filesystem, review,
};
use appguard_core::{
    application::{AdmissionRequest, Operation, ports::DocumentDecoder},
    domain::ValidationOutcome,
};
use serde_json::{Value, json};
use tempfile::TempDir;

fn valid_document() -> Value {
    json!({
        "apiVersion": "app.example.com/v1",
        "kind": "ApplicationDefinition",
        "metadata": { "name": "spark", "namespace": "apps" },
        "spec": {
            "label": "Spark",
            "image": { "repoTag": "registry/spark:2.4" },
            "roles": [
                { "id": "controller" },
                { "id": "worker", "image": { "repoTag": "registry/spark-worker:2.4" } }
            ],
            "services": [
                { "id": "ssh", "endpoint": { "port": 22 } },
                { "id": "ui", "label": "Spark UI",
                  "endpoint": { "port": 8080, "urlScheme": "http", "isDashboard": true } }
            ],
            "config": {
                "selectedRoles": ["controller", "worker"],
                "roleServices": [
                    { "roleId": "controller", "serviceIds": ["ssh", "ui"] },
                    { "roleId": "worker", "serviceIds": ["ssh"] }
                ]
            }
        }
    })
}

fn admit(doc: &Value) -> (bool, Option<String>) {
    let service = default_service();
    let request = AdmissionRequest::new(Operation::Create, doc.to_string());
    let response = service.admit(&request);
    assert_eq!(response.uid, request.uid);
    (response.allowed, response.message().map(str::to_string))
}

fn rejection(doc: &Value) -> String {
    let (allowed, message) = admit(doc);
    assert!(!allowed, "document was unexpectedly admitted");
    message.expect("rejection carries a message")
}

#[test]
fn well_formed_document_is_admitted() {
    let (allowed, message) = admit(&valid_document());
    assert!(allowed, "unexpected rejection: {:?}", message);
    assert!(message.is_none());
}

#[test]
fn repeated_evaluation_is_deterministic() {
    let mut doc = valid_document();
    doc["spec"]["config"]["roleServices"][0]["roleId"] = json!("ghost");
    let raw = doc.to_string();

    let service = default_service();
    let first = service.evaluate(raw.as_bytes());
    let second = service.evaluate(raw.as_bytes());
    assert_eq!(first, second);
    assert!(!first.is_accepted());
}

#[test]
fn duplicate_role_ids_are_rejected() {
    let mut doc = valid_document();
    doc["spec"]["roles"] = json!([
        { "id": "worker" },
        { "id": "worker" }
    ]);
    doc["spec"]["config"] = json!({});

    let message = rejection(&doc);
    assert!(message.contains("Each role must have a unique ID."));
}

#[test]
fn unknown_binding_role_names_the_declared_ids() {
    let mut doc = valid_document();
    doc["spec"]["config"]["roleServices"][1]["roleId"] = json!("ghost");

    let message = rejection(&doc);
    assert_eq!(
        message,
        "\nInvalid role_id(ghost) in role_services array. Valid role IDs: controller,worker"
    );
}

#[test]
fn duplicate_selected_roles_rejected_even_when_invalid() {
    let mut doc = valid_document();
    doc["spec"]["config"]["selectedRoles"] = json!(["a", "a"]);

    let message = rejection(&doc);
    let blocks: Vec<&str> = message.trim_start_matches('\n').split('\n').collect();
    assert_eq!(blocks[0], "Each selected role must be unique.");
    // "a" is not a declared role either, once per occurrence.
    assert_eq!(
        blocks.iter().filter(|b| b.contains("element(a)")).count(),
        2
    );
}

#[test]
fn missing_images_report_once() {
    let mut doc = valid_document();
    doc["spec"]["image"] = json!({ "repoTag": "" });
    doc["spec"]["roles"] = json!([
        { "id": "controller" },
        { "id": "worker" }
    ]);

    let message = rejection(&doc);
    assert_eq!(
        message,
        "\nTop-level image must be specified if any role lacks an image."
    );
}

#[test]
fn every_dashboard_without_scheme_is_named() {
    let mut doc = valid_document();
    doc["spec"]["services"] = json!([
        { "id": "ssh" },
        { "id": "ui", "endpoint": { "isDashboard": true } },
        { "id": "notebook", "endpoint": { "isDashboard": true, "urlScheme": "" } }
    ]);

    let message = rejection(&doc);
    assert_eq!(
        message,
        "\nurl_scheme must be specified for service endpoint(ui) if is_dashboard is true.\n\
         url_scheme must be specified for service endpoint(notebook) if is_dashboard is true."
    );
}

#[test]
fn blocks_follow_rule_order() {
    let mut doc = valid_document();
    doc["spec"]["image"] = json!(null);
    doc["spec"]["services"][1]["endpoint"]["urlScheme"] = json!("");
    doc["spec"]["roles"] = json!([
        { "id": "controller" },
        { "id": "controller" },
        { "id": "worker" }
    ]);

    let service = default_service();
    let report = service.validate(doc.to_string().as_bytes()).unwrap();
    let kinds: Vec<&str> = report
        .reports()
        .iter()
        .filter(|r| !r.is_clean())
        .map(|r| r.kind.as_str())
        .collect();
    assert_eq!(
        kinds,
        vec!["uniqueness", "role-properties", "service-properties"]
    );

    let message = report.into_outcome().message().unwrap();
    let uniqueness = message.find("unique ID").unwrap();
    let image = message.find("Top-level image").unwrap();
    let scheme = message.find("url_scheme").unwrap();
    assert!(uniqueness < image && image < scheme);
}

#[test]
fn malformed_payload_reports_only_the_decode_error() {
    let raw: &[u8] = b"{ \"spec\": ";
    let outcome = default_service().evaluate(raw);

    let ValidationOutcome::Rejected { reasons } = &outcome else {
        panic!("expected rejection, got {outcome:?}");
    };
    let decode_error = JsonDocumentDecoder::new().decode(raw).unwrap_err();
    assert_eq!(reasons, &vec![decode_error.to_string()]);
}

#[test]
fn snake_case_document_is_validated_like_camel_case() {
    let doc = json!({
        "spec": {
            "roles": [ { "id": "a" } ],
            "services": [ { "id": "ui", "endpoint": { "is_dashboard": true } } ],
            "config": {
                "selected_roles": ["ghost"],
                "role_services": [ { "role_id": "ghost", "service_ids": ["nope"] } ]
            }
        }
    });

    let message = rejection(&doc);
    assert!(message.contains("Invalid element(ghost) in selected_roles array"));
    assert!(message.contains("Invalid role_id(ghost) in role_services array"));
    assert!(message.contains("Invalid service_id(nope) in role_services array"));
    assert!(message.contains("Top-level image must be specified"));
    assert!(message.contains("endpoint(ui)"));
}

#[test]
fn null_sections_are_treated_as_absent() {
    let doc = json!({
        "spec": {
            "image": { "repoTag": "registry/spark:2.4" },
            "roles": [ { "id": "a" } ],
            "services": null,
            "config": { "selectedRoles": null, "roleServices": [] }
        }
    });

    let (allowed, message) = admit(&doc);
    assert!(allowed, "unexpected rejection: {:?}", message);
}

#[test]
fn review_round_trip_echoes_uid() {
    let incoming = json!({
        "apiVersion": "admission.k8s.io/v1",
        "kind": "AdmissionReview",
        "request": {
            "uid": "b1d7c3e0",
            "operation": "CREATE",
            "object": { "spec": { "services": [ { "id": "ui", "endpoint": { "isDashboard": true } } ] } }
        }
    });

    let reply = review::review(&default_service(), incoming.to_string().as_bytes()).unwrap();
    let response = reply.response.as_ref().unwrap();
    assert_eq!(response.uid, "b1d7c3e0");
    assert!(!response.allowed);
    assert!(response.message().unwrap().contains("endpoint(ui)"));
}

#[test]
fn review_with_unvalidated_operation_is_allowed() {
    let incoming = br#"{"request":{"uid":"x","operation":"DELETE"}}"#;
    let reply = review::review(&default_service(), incoming).unwrap();

    assert_eq!(reply.api_version, "admission.k8s.io/v1");
    assert!(reply.response.unwrap().allowed);
}

#[test]
fn malformed_review_is_an_error() {
    assert!(review::review(&default_service(), b"[]").is_err());
    assert!(AdmissionReview::from_slice(b"{").is_err());
}

#[test]
fn discovery_walks_directories_for_json() {
    let dir = TempDir::new().unwrap();
    let nested = dir.path().join("nested");
    std::fs::create_dir(&nested).unwrap();
    std::fs::write(dir.path().join("b.json"), "{}").unwrap();
    std::fs::write(nested.join("a.JSON"), "{}").unwrap();
    std::fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

    let found = filesystem::discover_documents(&[dir.path().to_path_buf()]).unwrap();
    assert_eq!(found.len(), 2);
    assert!(found.iter().all(|p| p.extension().is_some()));
    assert!(!found.iter().any(|p| p.ends_with("notes.txt")));
}

#[test]
fn explicit_files_are_kept_and_deduplicated() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("app.yaml");
    std::fs::write(&file, "{}").unwrap();

    let found =
        filesystem::discover_documents(&[file.clone(), dir.path().to_path_buf(), file.clone()])
            .unwrap();
    assert_eq!(found, vec![file.clone()]);

    let raw = filesystem::read_document(&file).unwrap();
    assert_eq!(raw, b"{}");
}

#[test]
fn missing_path_is_an_error() {
    let dir = TempDir::new().unwrap();
    let err = filesystem::discover_documents(&[dir.path().join("absent.json")]).unwrap_err();
    assert!(err.to_string().contains("absent.json"));
}
