//! JSON document decoder using serde_json.

use appguard_core::{
    application::{DecodeError, ports::DocumentDecoder},
    domain::ApplicationDefinition,
};
use tracing::trace;

/// Decodes JSON-encoded application definitions.
#[derive(Debug, Clone, Copy)]
pub struct JsonDocumentDecoder;

impl JsonDocumentDecoder {
    /// Create a new JSON decoder.
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonDocumentDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentDecoder for JsonDocumentDecoder {
    fn decode(&self, raw: &[u8]) -> Result<ApplicationDefinition, DecodeError> {
        trace!(bytes = raw.len(), "Decoding document");
        serde_json::from_slice(raw).map_err(map_json_error)
    }
}

fn map_json_error(e: serde_json::Error) -> DecodeError {
    let (line, column) = (e.line(), e.column());
    let err = DecodeError::new(e.to_string());
    // serde_json reports 0/0 when no position applies.
    if line > 0 { err.at(line, column) } else { err }
}
