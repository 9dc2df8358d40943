//! Admission Service - main application orchestrator.
//!
//! This service coordinates one admission decision:
//! 1. Skip operations that carry nothing to validate
//! 2. Decode the payload (a decode failure rejects immediately)
//! 3. Extract the declared role and service identifiers
//! 4. Run every rule and compose the response
//!
//! It implements the driving port (incoming) and uses driven ports (outgoing).

use tracing::{debug, info, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        admission::{AdmissionRequest, AdmissionResponse, Operation},
        ports::{DocumentDecoder, RoleCatalog},
    },
    domain::{ApplicationDefinition, ApplicationValidator, ValidationOutcome, ValidationReport},
    error::AppGuardResult,
};

/// Operations validated when no explicit set is configured.
pub const DEFAULT_VALIDATED_OPERATIONS: [Operation; 2] = [Operation::Create, Operation::Update];

/// Main admission service.
///
/// Holds the injected collaborators; each call works on its own decoded
/// document and shares no mutable state with other calls.
pub struct AdmissionService {
    decoder: Box<dyn DocumentDecoder>,
    catalog: Box<dyn RoleCatalog>,
    validated_operations: Vec<Operation>,
}

impl AdmissionService {
    /// Create a new admission service with the given adapters.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use appguard_core::application::{AdmissionService, ports::*};
    ///
    /// let service = AdmissionService::new(
    ///     decoder, // impl DocumentDecoder
    ///     catalog, // impl RoleCatalog
    /// );
    /// ```
    pub fn new(decoder: Box<dyn DocumentDecoder>, catalog: Box<dyn RoleCatalog>) -> Self {
        Self {
            decoder,
            catalog,
            validated_operations: DEFAULT_VALIDATED_OPERATIONS.to_vec(),
        }
    }

    /// Replace the set of operations that are validated. Requests for any
    /// other operation are admitted without decoding.
    pub fn with_validated_operations(
        mut self,
        operations: impl IntoIterator<Item = Operation>,
    ) -> Self {
        self.validated_operations = operations.into_iter().collect();
        self
    }

    pub fn validated_operations(&self) -> &[Operation] {
        &self.validated_operations
    }

    /// Decide one admission request.
    ///
    /// This is the entry point a webhook host calls. It never fails: decode
    /// errors and rule violations both become a denied response.
    #[instrument(
        skip_all,
        fields(
            uid = %request.uid,
            operation = %request.operation,
            name = request.name.as_deref().unwrap_or("")
        )
    )]
    pub fn admit(&self, request: &AdmissionRequest) -> AdmissionResponse {
        if !self.validated_operations.contains(&request.operation) {
            debug!("Operation not validated, admitting");
            return AdmissionResponse::allow(&request.uid);
        }

        let outcome = self.evaluate(&request.object);
        match &outcome {
            ValidationOutcome::Accepted => info!("Document admitted"),
            ValidationOutcome::Rejected { reasons } => {
                warn!(rule_groups = reasons.len(), "Document rejected")
            }
        }

        AdmissionResponse::from_outcome(&request.uid, &outcome)
    }

    /// Decode and validate a payload, folding a decode failure into a
    /// single-reason rejection.
    pub fn evaluate(&self, raw: &[u8]) -> ValidationOutcome {
        match self.decoder.decode(raw) {
            Ok(app) => self.validate_document(&app).into_outcome(),
            Err(err) => {
                warn!(error = %err, "Payload could not be decoded");
                ValidationOutcome::rejected(err.to_string())
            }
        }
    }

    /// Decode and validate a payload, keeping the structured report.
    pub fn validate(&self, raw: &[u8]) -> AppGuardResult<ValidationReport> {
        let app = self.decoder.decode(raw).map_err(ApplicationError::from)?;
        Ok(self.validate_document(&app))
    }

    /// Validate an already-decoded document.
    #[instrument(skip_all, fields(document = %app.display_name()))]
    pub fn validate_document(&self, app: &ApplicationDefinition) -> ValidationReport {
        let role_ids = self.catalog.role_ids(app);
        let service_ids = self.catalog.service_ids(app);

        let report = ApplicationValidator::validate(app, &role_ids, &service_ids, |id| {
            self.catalog.resolve_role(app, id).is_some()
        });

        debug!(
            roles = role_ids.len(),
            services = service_ids.len(),
            violations = report.violation_count(),
            "Document validated"
        );
        report
    }
}
