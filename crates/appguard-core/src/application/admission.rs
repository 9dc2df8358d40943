//! Admission request/response types.
//!
//! These are the transport-neutral halves of an admission review. The wire
//! envelope (apiVersion, kind, JSON object embedding) is handled by
//! `appguard_adapters::review`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::application::ApplicationError;
use crate::domain::ValidationOutcome;

/// The operation that triggered the admission call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Operation {
    Create,
    Update,
    Delete,
    Connect,
}

impl Operation {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Create => "CREATE",
            Self::Update => "UPDATE",
            Self::Delete => "DELETE",
            Self::Connect => "CONNECT",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Operation {
    type Err = ApplicationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "CREATE" => Ok(Self::Create),
            "UPDATE" => Ok(Self::Update),
            "DELETE" => Ok(Self::Delete),
            "CONNECT" => Ok(Self::Connect),
            _ => Err(ApplicationError::UnknownOperation {
                name: s.to_string(),
            }),
        }
    }
}

/// One admission call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdmissionRequest {
    pub uid: String,
    pub operation: Operation,
    pub name: Option<String>,
    pub namespace: Option<String>,
    /// The serialized document, opaque until decoded.
    pub object: Vec<u8>,
}

impl AdmissionRequest {
    /// A request with a freshly generated uid.
    pub fn new(operation: Operation, object: impl Into<Vec<u8>>) -> Self {
        Self {
            uid: Uuid::new_v4().to_string(),
            operation,
            name: None,
            namespace: None,
            object: object.into(),
        }
    }

    pub fn with_uid(mut self, uid: impl Into<String>) -> Self {
        self.uid = uid.into();
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdmissionStatus {
    pub message: String,
}

/// The decision record returned for one request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdmissionResponse {
    pub uid: String,
    pub allowed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<AdmissionStatus>,
}

impl AdmissionResponse {
    pub fn allow(uid: impl Into<String>) -> Self {
        Self {
            uid: uid.into(),
            allowed: true,
            status: None,
        }
    }

    /// Build the response for a validation outcome.
    pub fn from_outcome(uid: impl Into<String>, outcome: &ValidationOutcome) -> Self {
        Self {
            uid: uid.into(),
            allowed: outcome.is_accepted(),
            status: outcome.message().map(|message| AdmissionStatus { message }),
        }
    }

    /// The status message, if the request was denied.
    pub fn message(&self) -> Option<&str> {
        self.status.as_ref().map(|s| s.message.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operation_parses_case_insensitively() {
        assert_eq!("create".parse::<Operation>().unwrap(), Operation::Create);
        assert_eq!("UPDATE".parse::<Operation>().unwrap(), Operation::Update);
        assert!(matches!(
            "PATCH".parse::<Operation>(),
            Err(ApplicationError::UnknownOperation { .. })
        ));
    }

    #[test]
    fn new_requests_get_distinct_uids() {
        let a = AdmissionRequest::new(Operation::Create, b"{}".to_vec());
        let b = AdmissionRequest::new(Operation::Create, b"{}".to_vec());
        assert_ne!(a.uid, b.uid);
        assert!(!a.uid.is_empty());
    }

    #[test]
    fn allowed_response_omits_status() {
        let json = serde_json::to_value(AdmissionResponse::allow("abc")).unwrap();
        assert_eq!(json, serde_json::json!({ "uid": "abc", "allowed": true }));
    }

    #[test]
    fn rejected_response_carries_message() {
        let outcome = ValidationOutcome::rejected("bad");
        let resp = AdmissionResponse::from_outcome("abc", &outcome);
        assert!(!resp.allowed);
        assert_eq!(resp.message(), Some("\nbad"));
    }
}
