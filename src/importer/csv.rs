//! CSV import and row normalization

use std::fs;
use std::path::Path;

use crate::diagnostics::Diagnostic;
use crate::model::{CellValue, Dataset, Record};

/// Delimiters the sniffer will consider, most common first
const DELIMITER_CANDIDATES: [u8; 4] = [b',', b';', b'\t', b'|'];

/// Load a CSV file into a dataset.
///
/// When `headers` is supplied the whole file is data and rows bind to the
/// given names positionally; otherwise the first line provides the
/// headers. A file with exactly one data row collapses to
/// [`Dataset::Flat`] so callers see a single record, not a list of one.
pub(crate) fn import(path: &Path, headers: Option<&[String]>) -> Result<Dataset, Diagnostic> {
    let content = fs::read_to_string(path).map_err(|e| Diagnostic::Malformed {
        path: path.to_path_buf(),
        detail: e.to_string(),
    })?;

    if content.is_empty() {
        return Err(Diagnostic::EmptyFile(path.to_path_buf()));
    }

    let delimiter = sniff_delimiter(&content);

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(headers.is_none())
        .flexible(true)
        .from_reader(content.as_bytes());

    let malformed = |e: csv::Error| Diagnostic::Malformed {
        path: path.to_path_buf(),
        detail: e.to_string(),
    };

    let headers: Vec<String> = match headers {
        Some(names) => names.to_vec(),
        None => reader.headers().map_err(malformed)?.iter().map(String::from).collect(),
    };

    let mut rows = Vec::new();
    for result in reader.records() {
        let row = result.map_err(malformed)?;
        rows.push(bind_row(&headers, &row));
    }

    Ok(normalize_rows(rows))
}

/// One best-effort dialect sniff: whichever candidate delimiter appears
/// most often in the first line wins, defaulting to comma.
fn sniff_delimiter(content: &str) -> u8 {
    let first_line = content.lines().next().unwrap_or("");
    let mut best = b',';
    let mut best_count = 0;
    for candidate in DELIMITER_CANDIDATES {
        let count = first_line.bytes().filter(|&b| b == candidate).count();
        if count > best_count {
            best = candidate;
            best_count = count;
        }
    }
    best
}

/// Bind one raw row to the header set, reconciling width mismatches:
/// values beyond the headers are dropped, absent trailing fields fill
/// with the null sentinel.
fn bind_row(headers: &[String], row: &csv::StringRecord) -> Record {
    headers
        .iter()
        .enumerate()
        .map(|(i, name)| {
            let cell = match row.get(i) {
                Some(text) => coerce_bool(text),
                None => CellValue::Null,
            };
            (name.clone(), cell)
        })
        .collect()
}

/// Restore boolean typing lost in the text encoding: exactly "true" or
/// "false" in any letter case becomes a logical value, everything else
/// passes through unchanged.
fn coerce_bool(text: &str) -> CellValue {
    if text.eq_ignore_ascii_case("true") {
        CellValue::Bool(true)
    } else if text.eq_ignore_ascii_case("false") {
        CellValue::Bool(false)
    } else {
        CellValue::String(text.to_string())
    }
}

/// Collapse a single-row table to a flat record
fn normalize_rows(mut rows: Vec<Record>) -> Dataset {
    if rows.len() == 1 {
        Dataset::Flat(rows.remove(0))
    } else {
        Dataset::Records(rows)
    }
}
