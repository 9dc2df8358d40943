//! Kubernetes-style `AdmissionReview` envelope codec.
//!
//! The webhook transport hands over a JSON review whose `request.object` is
//! the document itself. This module lifts that into the core's
//! [`AdmissionRequest`] (object as the exact bytes received) and wraps the
//! core's [`AdmissionResponse`] back into a review.

use serde::{Deserialize, Serialize};
use serde_json::value::RawValue;
use thiserror::Error;
use tracing::{debug, instrument};

use appguard_core::{
    application::{
        AdmissionRequest, AdmissionResponse, AdmissionService, ApplicationError, Operation,
    },
    error::AppGuardError,
};

pub const REVIEW_API_VERSION: &str = "admission.k8s.io/v1";
pub const REVIEW_KIND: &str = "AdmissionReview";

/// Errors reading or writing a review envelope.
#[derive(Debug, Error)]
pub enum ReviewError {
    #[error("malformed AdmissionReview: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("AdmissionReview has no request")]
    MissingRequest,

    #[error("failed to encode AdmissionReview: {0}")]
    Encode(#[source] serde_json::Error),
}

impl From<ReviewError> for AppGuardError {
    fn from(err: ReviewError) -> Self {
        ApplicationError::Envelope {
            reason: err.to_string(),
        }
        .into()
    }
}

/// The resource type a request refers to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupVersionKind {
    #[serde(default)]
    pub group: String,
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub kind: String,
}

/// `request` as it appears on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewRequest {
    pub uid: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<GroupVersionKind>,
    pub operation: Operation,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub object: Option<Box<RawValue>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdmissionReview {
    #[serde(default = "default_api_version")]
    pub api_version: String,
    #[serde(default = "default_kind")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request: Option<ReviewRequest>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response: Option<AdmissionResponse>,
}

fn default_api_version() -> String {
    REVIEW_API_VERSION.to_string()
}

fn default_kind() -> String {
    REVIEW_KIND.to_string()
}

impl AdmissionReview {
    pub fn from_slice(raw: &[u8]) -> Result<Self, ReviewError> {
        Ok(serde_json::from_slice(raw)?)
    }

    /// Lift the wire request into a core request.
    ///
    /// `object` is passed on byte for byte. A missing `object` becomes an
    /// empty payload; operations that need one will then fail to decode.
    pub fn to_request(&self) -> Result<AdmissionRequest, ReviewError> {
        let wire = self.request.as_ref().ok_or(ReviewError::MissingRequest)?;

        let object = wire
            .object
            .as_ref()
            .map(|raw| raw.get().as_bytes().to_vec())
            .unwrap_or_default();

        Ok(AdmissionRequest {
            uid: wire.uid.clone(),
            operation: wire.operation,
            name: wire.name.clone(),
            namespace: wire.namespace.clone(),
            object,
        })
    }

    /// The reply review: same apiVersion and kind, response set, request
    /// dropped.
    pub fn respond(&self, response: AdmissionResponse) -> Self {
        Self {
            api_version: self.api_version.clone(),
            kind: self.kind.clone(),
            request: None,
            response: Some(response),
        }
    }

    pub fn to_vec_pretty(&self) -> Result<Vec<u8>, ReviewError> {
        serde_json::to_vec_pretty(self).map_err(ReviewError::Encode)
    }
}

/// Decode a review, decide it, and return the reply review.
#[instrument(skip_all, fields(bytes = raw.len()))]
pub fn review(service: &AdmissionService, raw: &[u8]) -> Result<AdmissionReview, ReviewError> {
    let incoming = AdmissionReview::from_slice(raw)?;
    let request = incoming.to_request()?;
    debug!(uid = %request.uid, operation = %request.operation, "Review decoded");

    let response = service.admit(&request);
    Ok(incoming.respond(response))
}
