//! Export layer: writing datasets to target files

mod csv;
mod json;
pub mod shape;

use std::fs;
use std::path::Path;

use crate::diagnostics::Diagnostic;
use crate::error::Error;
use crate::model::Dataset;
use crate::options::Options;

pub use shape::{enforce_cell_limit, shape_for_export, Shaped};

/// Supported export targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Target {
    Json,
    Csv,
}

fn target_format(path: &Path) -> Result<Target, Error> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    match ext.as_str() {
        "json" => Ok(Target::Json),
        "csv" => Ok(Target::Csv),
        _ => Err(Error::UnsupportedExport(ext)),
    }
}

/// Check that a path has a writable extension without writing anything.
/// Used to fail fast before any import work happens.
pub fn validate_target(path: &Path) -> Result<(), Error> {
    target_format(path).map(|_| ())
}

/// What an export attempt produced
#[derive(Debug)]
pub enum Outcome {
    /// The target file was written
    Written,
    /// Nothing was written; the diagnostic says why
    Skipped(Diagnostic),
}

/// Write a dataset to the target path, routing by extension.
///
/// An unknown extension is fatal: no downstream writer exists for it, so
/// it is treated as a configuration mistake. An empty dataset is not:
/// the export is skipped, no file is written and no directory is
/// created. Parent directories are created ahead of a real write.
pub fn export_path(path: &Path, data: &Dataset, options: &Options) -> Result<Outcome, Error> {
    let target = target_format(path)?;

    if data.is_empty() {
        return Ok(Outcome::Skipped(Diagnostic::NothingToExport));
    }

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    match target {
        Target::Json => json::export(path, data)?,
        Target::Csv => csv::export(path, data, options)?,
    }

    Ok(Outcome::Written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_unsupported_extension_is_fatal() {
        let data = Dataset::from_json(&json!([{"a": 1}])).unwrap();
        let result = export_path(Path::new("out.xml"), &data, &Options::default());
        assert!(matches!(result, Err(Error::UnsupportedExport(_))));
    }

    #[test]
    fn test_empty_dataset_skips_write_and_mkdir() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("out.csv");
        let data = Dataset::Records(Vec::new());
        let outcome = export_path(&path, &data, &Options::default()).unwrap();
        assert!(matches!(
            outcome,
            Outcome::Skipped(Diagnostic::NothingToExport)
        ));
        assert!(!path.exists());
        assert!(!path.parent().unwrap().exists());
    }

    #[test]
    fn test_parent_directories_created() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a").join("b").join("out.json");
        let data = Dataset::from_json(&json!([{"x": 1}])).unwrap();
        let outcome = export_path(&path, &data, &Options::default()).unwrap();
        assert!(matches!(outcome, Outcome::Written));
        assert!(path.exists());
    }
}
