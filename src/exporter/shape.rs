//! Shaping arbitrary datasets into rows sharing one header set
//!
//! This is where the irregular source shapes become a canonical table.
//! The shaper borrows its input and builds owned output, so the caller's
//! structure is never touched.

use crate::model::{Dataset, Record};

/// A canonical table: one header set plus the rows to write under it
#[derive(Debug, Clone, PartialEq)]
pub struct Shaped {
    pub headers: Vec<String>,
    pub rows: Vec<Record>,
}

/// Derive the header set and row list for a dataset.
///
/// Supplied headers always win over derived ones. Derivation by shape:
///
/// - `Records`: headers come from the first record's field order.
/// - `Keyed`: headers come from the first nested record; the rows are
///   the nested records in order and the outer keys are discarded.
/// - `Flat`: a vertical two-column table. The first pair's key and value
///   text become the two header names and each later pair becomes one
///   row. Long-standing convention; callers depend on it.
pub fn shape_for_export(data: &Dataset, headers: Option<&[String]>) -> Shaped {
    match data {
        Dataset::Records(rows) => {
            let headers = match headers {
                Some(names) => names.to_vec(),
                None => rows
                    .first()
                    .map(|r| r.fields().map(String::from).collect())
                    .unwrap_or_default(),
            };
            Shaped {
                headers,
                rows: rows.clone(),
            }
        }
        Dataset::Keyed(map) => {
            let headers = match headers {
                Some(names) => names.to_vec(),
                None => map
                    .values()
                    .next()
                    .map(|r| r.fields().map(String::from).collect())
                    .unwrap_or_default(),
            };
            Shaped {
                headers,
                rows: map.values().cloned().collect(),
            }
        }
        Dataset::Flat(record) => shape_flat(record, headers),
    }
}

/// Turn a flat record into the vertical two-column form.
///
/// Without supplied headers the first pair is sacrificed as the header
/// labels. With supplied headers there is nothing to sacrifice, so every
/// pair becomes a row under the given names.
fn shape_flat(record: &Record, headers: Option<&[String]>) -> Shaped {
    let (headers, skip) = match headers {
        Some(names) => (names.to_vec(), 0),
        None => match record.first() {
            Some((key, value)) => (vec![key.to_string(), value.display()], 1),
            None => (Vec::new(), 0),
        },
    };

    let rows = record
        .iter()
        .skip(skip)
        .map(|(key, value)| {
            let mut row = Record::new();
            if let Some(h0) = headers.first() {
                row.insert(h0.clone(), key);
            }
            if let Some(h1) = headers.get(1) {
                row.insert(h1.clone(), value.clone());
            }
            row
        })
        .collect();

    Shaped { headers, rows }
}

/// Cap a cell's text at `limit` characters, ellipsizing the tail.
///
/// Limits of 3 or less are clamped up to 4 so there is always room for
/// the marker. The result never exceeds `limit` characters. Counting is
/// by character, not byte, so multi-byte text is never split mid-glyph.
pub fn enforce_cell_limit(value: &str, limit: usize) -> String {
    let limit = limit.max(4);

    if value.chars().count() > limit {
        let mut trimmed: String = value.chars().take(limit - 3).collect();
        trimmed.push_str("...");
        trimmed
    } else {
        value.to_string()
    }
}
