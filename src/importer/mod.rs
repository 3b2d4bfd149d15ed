//! Import layer: reading source files into datasets

mod csv;
mod json;

use std::path::Path;

use crate::diagnostics::Diagnostic;
use crate::model::Dataset;
use crate::options::Options;

/// Read and normalize a source file into a [`Dataset`].
///
/// Routing is by lowercased extension: `.json` and `.csv` are supported.
/// Every failure mode here is recoverable: a missing path, an unknown
/// extension, an empty file, or unparseable content all come back as
/// `Err(Diagnostic)`, which callers treat as "nothing to convert".
pub fn import_path(path: &Path, options: &Options) -> Result<Dataset, Diagnostic> {
    if !path.exists() {
        return Err(Diagnostic::PathNotFound(path.to_path_buf()));
    }

    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    match ext.as_str() {
        "json" => json::import(path),
        "csv" => csv::import(path, options.headers.as_deref()),
        _ => Err(Diagnostic::UnsupportedImport(ext)),
    }
}
