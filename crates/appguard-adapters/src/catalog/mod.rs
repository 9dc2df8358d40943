//! Role catalog adapters.

mod document;

pub use document::DocumentCatalog;
