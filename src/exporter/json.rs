//! JSON export

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::error::Error;
use crate::model::Dataset;

/// Write a dataset as pretty-printed JSON with four-space indentation.
/// Non-ASCII characters are written as-is, not escaped.
pub(crate) fn export(path: &Path, data: &Dataset) -> Result<(), Error> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = Serializer::with_formatter(&mut writer, formatter);
    data.serialize(&mut serializer)?;

    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn export_to_string(data: &Dataset) -> String {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");
        export(&path, data).unwrap();
        std::fs::read_to_string(&path).unwrap()
    }

    #[test]
    fn test_four_space_indent() {
        let data = Dataset::from_json(&json!({"a": 1, "b": 2})).unwrap();
        let out = export_to_string(&data);
        assert_eq!(out, "{\n    \"a\": 1,\n    \"b\": 2\n}");
    }

    #[test]
    fn test_non_ascii_preserved() {
        let data = Dataset::from_json(&json!({"name": "café", "city": "Αθήνα"})).unwrap();
        let out = export_to_string(&data);
        assert!(out.contains("café"));
        assert!(out.contains("Αθήνα"));
        assert!(!out.contains("\\u"));
    }

    #[test]
    fn test_array_shape_round_trips() {
        let source = json!([{"a": 1}, {"a": 2}]);
        let data = Dataset::from_json(&source).unwrap();
        let out = export_to_string(&data);
        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed, source);
    }
}
