//! Filesystem adapters.

mod local;

pub use local::{discover_documents, read_document};
