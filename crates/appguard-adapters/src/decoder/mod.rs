//! Document decoders.

mod json;

pub use json::JsonDocumentDecoder;
