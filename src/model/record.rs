//! One row's worth of field->value data

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::value::CellValue;

/// An ordered mapping from field name to cell value.
///
/// Field names are unique within a record and iteration follows
/// first-insertion order, which is what header inference relies on.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(IndexMap<String, CellValue>);

impl Record {
    pub fn new() -> Self {
        Self(IndexMap::new())
    }

    /// Insert a field, replacing any existing value under the same name
    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<CellValue>) {
        self.0.insert(field.into(), value.into());
    }

    pub fn get(&self, field: &str) -> Option<&CellValue> {
        self.0.get(field)
    }

    /// Field names in first-seen order
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &CellValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// The first field/value pair, if any
    pub fn first(&self) -> Option<(&str, &CellValue)> {
        self.0.first().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, CellValue)> for Record {
    fn from_iter<I: IntoIterator<Item = (String, CellValue)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for Record {
    type Item = (String, CellValue);
    type IntoIter = indexmap::map::IntoIter<String, CellValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insertion_order_preserved() {
        let mut record = Record::new();
        record.insert("b", 1i64);
        record.insert("a", 2i64);
        record.insert("c", 3i64);
        let fields: Vec<&str> = record.fields().collect();
        assert_eq!(fields, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_serializes_as_object() {
        let mut record = Record::new();
        record.insert("name", "ada");
        record.insert("active", true);
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"name":"ada","active":true}"#);
    }
}
