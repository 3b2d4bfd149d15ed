//! JSON import

use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::diagnostics::Diagnostic;
use crate::model::Dataset;

/// Load a JSON document and classify it into a dataset.
///
/// The whole file is read and parsed in one go. Invalid JSON, or a
/// document with no record-shaped view (a bare scalar, an array of
/// scalars), is reported as malformed; the parse error itself is never
/// propagated.
pub(crate) fn import(path: &Path) -> Result<Dataset, Diagnostic> {
    let content = fs::read_to_string(path).map_err(|e| Diagnostic::Malformed {
        path: path.to_path_buf(),
        detail: e.to_string(),
    })?;

    if content.is_empty() {
        return Err(Diagnostic::EmptyFile(path.to_path_buf()));
    }

    let value: Value = serde_json::from_str(&content).map_err(|e| Diagnostic::Malformed {
        path: path.to_path_buf(),
        detail: e.to_string(),
    })?;

    Dataset::from_json(&value).ok_or_else(|| Diagnostic::Malformed {
        path: path.to_path_buf(),
        detail: "document is not record-shaped".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CellValue;
    use std::io::Write;

    fn write_json(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_array_of_objects() {
        let file = write_json(r#"[{"a": 1, "b": "x"}, {"a": 2, "b": "y"}]"#);
        match import(file.path()).unwrap() {
            Dataset::Records(rows) => {
                assert_eq!(rows.len(), 2);
                assert_eq!(rows[0].get("a"), Some(&CellValue::Int(1)));
            }
            other => panic!("unexpected shape: {:?}", other),
        }
    }

    #[test]
    fn test_booleans_stay_typed() {
        let file = write_json(r#"{"a": 1, "b": true}"#);
        match import(file.path()).unwrap() {
            Dataset::Flat(record) => {
                assert_eq!(record.get("b"), Some(&CellValue::Bool(true)));
            }
            other => panic!("unexpected shape: {:?}", other),
        }
    }

    #[test]
    fn test_invalid_json_reported() {
        let file = write_json("{not json");
        assert!(matches!(
            import(file.path()),
            Err(Diagnostic::Malformed { .. })
        ));
    }

    #[test]
    fn test_empty_file_reported() {
        let file = write_json("");
        assert!(matches!(import(file.path()), Err(Diagnostic::EmptyFile(_))));
    }

    #[test]
    fn test_scalar_document_reported() {
        let file = write_json("42");
        assert!(matches!(
            import(file.path()),
            Err(Diagnostic::Malformed { .. })
        ));
    }
}
