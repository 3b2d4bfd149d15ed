//! dataconv - Convert between JSON documents and CSV tables
//!
//! Normalizes irregular nested structures (list-of-records,
//! dict-of-records, flat key/value mappings) into tabular form and
//! restores boolean typing lost in text encodings.

pub mod diagnostics;
pub mod error;
pub mod exporter;
pub mod importer;
pub mod model;
pub mod options;

use std::path::Path;

pub use diagnostics::Diagnostic;
pub use error::Error;
pub use exporter::{enforce_cell_limit, export_path, shape_for_export, Outcome, Shaped};
pub use importer::import_path;
pub use model::{CellValue, Dataset, Record};
pub use options::Options;

/// Convert one file into another, routing both sides by extension.
///
/// Recoverable conditions (missing input, empty or malformed content,
/// nothing to export) come back as [`Outcome::Skipped`] carrying the
/// diagnostic; the only `Err` cases are an unsupported export extension
/// and write failures. The target extension is checked before any import
/// work so a misconfigured output path fails fast.
pub fn convert_file(input: &Path, output: &Path, options: &Options) -> Result<Outcome, Error> {
    exporter::validate_target(output)?;

    match import_path(input, options) {
        Ok(data) => export_path(output, &data, options),
        Err(diagnostic) => Ok(Outcome::Skipped(diagnostic)),
    }
}
