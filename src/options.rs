//! Conversion options

/// Spreadsheet cell character ceiling; cells longer than this corrupt
/// saves in common spreadsheet tools.
pub const CELL_CHAR_LIMIT: usize = 32750;

/// Options accepted by both sides of a conversion.
///
/// `headers` applies to CSV on both import (field names for a headerless
/// file) and export (column names to write). `delimiter` and
/// `trim_long_strings` are export-side CSV concerns.
#[derive(Debug, Clone)]
pub struct Options {
    /// Column names; when absent they are inferred from the data
    pub headers: Option<Vec<String>>,
    /// Field delimiter for CSV export
    pub delimiter: u8,
    /// Trim cell values that exceed `cell_limit` on CSV export
    pub trim_long_strings: bool,
    /// Maximum cell length enforced when trimming is on
    pub cell_limit: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            headers: None,
            delimiter: b',',
            trim_long_strings: false,
            cell_limit: CELL_CHAR_LIMIT,
        }
    }
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set explicit column names
    pub fn with_headers(mut self, headers: Vec<String>) -> Self {
        self.headers = Some(headers);
        self
    }

    /// Set the CSV export delimiter
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Enable trimming of over-length cell values
    pub fn with_trim_long_strings(mut self, trim: bool) -> Self {
        self.trim_long_strings = trim;
        self
    }

    /// Override the cell length ceiling used when trimming
    pub fn with_cell_limit(mut self, limit: usize) -> Self {
        self.cell_limit = limit;
        self
    }
}
