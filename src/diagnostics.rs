//! Recoverable conditions reported to the caller as values
//!
//! None of these abort a conversion. An import that hits one yields no
//! data, and the embedding application decides how to surface the message
//! (console, log, UI).

use std::path::PathBuf;

/// A non-fatal condition detected during import or export
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// The input path does not exist
    PathNotFound(PathBuf),
    /// The input extension is neither `.json` nor `.csv`
    UnsupportedImport(String),
    /// The input file is zero bytes
    EmptyFile(PathBuf),
    /// The input exists but could not be parsed; the underlying cause is
    /// captured as text and never propagated
    Malformed { path: PathBuf, detail: String },
    /// The value handed to the exporter was absent or empty
    NothingToExport,
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Diagnostic::PathNotFound(path) => {
                write!(f, "Path {} could not be found.", path.display())
            }
            Diagnostic::UnsupportedImport(ext) => {
                write!(
                    f,
                    "Data can only be imported from .json and .csv formats (got `.{}`).",
                    ext
                )
            }
            Diagnostic::EmptyFile(path) => write!(f, "{} is empty.", path.display()),
            Diagnostic::Malformed { path, detail } => {
                write!(f, "{} exists, but could not load it: {}", path.display(), detail)
            }
            Diagnostic::NothingToExport => write!(f, "Nothing to export."),
        }
    }
}
