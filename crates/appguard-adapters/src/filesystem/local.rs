//! Local document discovery using walkdir and std::fs.

use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, instrument};
use walkdir::WalkDir;

use appguard_core::{
    application::ApplicationError,
    error::{AppGuardError, AppGuardResult},
};

/// Extension of document files picked up from directories.
const DOCUMENT_EXTENSION: &str = "json";

/// Expand `paths` into a sorted, de-duplicated list of document files.
///
/// Files are taken as given, whatever their extension. Directories are
/// walked recursively for `*.json` files.
#[instrument(skip_all, fields(inputs = paths.len()))]
pub fn discover_documents(paths: &[PathBuf]) -> AppGuardResult<Vec<PathBuf>> {
    let mut found = Vec::new();

    for path in paths {
        if path.is_dir() {
            for entry in WalkDir::new(path).min_depth(1).sort_by_file_name() {
                let entry = entry.map_err(|e| ApplicationError::Io {
                    path: e.path().unwrap_or(path).to_path_buf(),
                    reason: format!("directory walk error: {e}"),
                })?;
                if entry.file_type().is_file() && has_document_extension(entry.path()) {
                    found.push(entry.into_path());
                }
            }
        } else if path.exists() {
            found.push(path.clone());
        } else {
            return Err(map_io_error(
                path,
                io::Error::new(io::ErrorKind::NotFound, "no such file or directory"),
                "find document",
            ));
        }
    }

    found.sort();
    found.dedup();
    debug!(documents = found.len(), "Documents discovered");
    Ok(found)
}

/// Read a document's raw bytes.
pub fn read_document(path: &Path) -> AppGuardResult<Vec<u8>> {
    std::fs::read(path).map_err(|e| map_io_error(path, e, "read document"))
}

fn has_document_extension(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case(DOCUMENT_EXTENSION))
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> AppGuardError {
    ApplicationError::Io {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}
