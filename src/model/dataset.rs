//! Source-shape classification for heterogeneous inputs

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;

use super::record::Record;
use super::value::CellValue;

/// The three tabular-convertible shapes a source document can take.
///
/// The shape is decided exactly once, when raw parsed data enters the
/// system; everything downstream matches on the variant instead of
/// re-inspecting the data. `Flat` is also the import result for a
/// single-row CSV, so callers always see "one record" and "many records"
/// as distinct variants rather than a list that is sometimes length one.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Dataset {
    /// A sequence of records, one per row
    Records(Vec<Record>),
    /// A mapping whose values are the records; outer keys carry no cell data
    Keyed(IndexMap<String, Record>),
    /// A single flat record
    Flat(Record),
}

impl Dataset {
    /// Classify a parsed JSON document into a dataset.
    ///
    /// Returns `None` when the document cannot be viewed as records:
    /// a scalar top level, or an array containing non-object elements.
    pub fn from_json(value: &Value) -> Option<Dataset> {
        match value {
            Value::Array(items) => {
                let rows = items
                    .iter()
                    .map(|item| match item {
                        Value::Object(obj) => Some(record_from_object(obj)),
                        _ => None,
                    })
                    .collect::<Option<Vec<Record>>>()?;
                Some(Dataset::Records(rows))
            }
            Value::Object(obj) => {
                let nested = matches!(obj.values().next(), Some(Value::Object(_)));
                if nested {
                    let keyed = obj
                        .iter()
                        .map(|(k, v)| match v {
                            Value::Object(inner) => Some((k.clone(), record_from_object(inner))),
                            _ => None,
                        })
                        .collect::<Option<IndexMap<String, Record>>>()?;
                    Some(Dataset::Keyed(keyed))
                } else {
                    Some(Dataset::Flat(record_from_object(obj)))
                }
            }
            _ => None,
        }
    }

    /// True when there is nothing to export: no rows, or a record with
    /// no fields
    pub fn is_empty(&self) -> bool {
        match self {
            Dataset::Records(rows) => rows.is_empty(),
            Dataset::Keyed(map) => map.is_empty(),
            Dataset::Flat(record) => record.is_empty(),
        }
    }

    /// Number of source rows (outer entries for the keyed shape)
    pub fn row_count(&self) -> usize {
        match self {
            Dataset::Records(rows) => rows.len(),
            Dataset::Keyed(map) => map.len(),
            Dataset::Flat(_) => 1,
        }
    }
}

fn record_from_object(obj: &serde_json::Map<String, Value>) -> Record {
    obj.iter()
        .map(|(k, v)| (k.clone(), CellValue::from_json(v)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_array_of_objects_is_records() {
        let value = json!([{"a": 1}, {"a": 2}]);
        match Dataset::from_json(&value) {
            Some(Dataset::Records(rows)) => assert_eq!(rows.len(), 2),
            other => panic!("unexpected classification: {:?}", other),
        }
    }

    #[test]
    fn test_object_of_objects_is_keyed() {
        let value = json!({"k1": {"x": 1}, "k2": {"x": 2}});
        match Dataset::from_json(&value) {
            Some(Dataset::Keyed(map)) => {
                let keys: Vec<&String> = map.keys().collect();
                assert_eq!(keys, vec!["k1", "k2"]);
            }
            other => panic!("unexpected classification: {:?}", other),
        }
    }

    #[test]
    fn test_scalar_object_is_flat() {
        let value = json!({"color": "red", "size": "large"});
        assert!(matches!(
            Dataset::from_json(&value),
            Some(Dataset::Flat(_))
        ));
    }

    #[test]
    fn test_scalar_top_level_rejected() {
        assert_eq!(Dataset::from_json(&json!(42)), None);
        assert_eq!(Dataset::from_json(&json!([1, 2, 3])), None);
    }

    #[test]
    fn test_empty_shapes_are_empty() {
        assert!(Dataset::Records(Vec::new()).is_empty());
        assert!(Dataset::Flat(Record::new()).is_empty());
        assert!(!Dataset::from_json(&json!({"a": 1})).unwrap().is_empty());
    }

    #[test]
    fn test_serializes_shape_transparently() {
        let records = Dataset::from_json(&json!([{"a": 1}])).unwrap();
        assert_eq!(serde_json::to_value(&records).unwrap(), json!([{"a": 1}]));

        let keyed = Dataset::from_json(&json!({"k": {"a": 1}})).unwrap();
        assert_eq!(
            serde_json::to_value(&keyed).unwrap(),
            json!({"k": {"a": 1}})
        );
    }
}
