//! CSV export

use std::path::Path;

use crate::error::Error;
use crate::model::{CellValue, Dataset};
use crate::options::Options;

use super::shape::{enforce_cell_limit, shape_for_export};

/// Write a dataset as delimited text: header row first, then each shaped
/// row. Headers missing from a row render as empty cells; row fields not
/// in the header set are silently dropped.
pub(crate) fn export(path: &Path, data: &Dataset, options: &Options) -> Result<(), Error> {
    let shaped = shape_for_export(data, options.headers.as_deref());

    let mut writer = csv::WriterBuilder::new()
        .delimiter(options.delimiter)
        .from_path(path)?;

    writer.write_record(&shaped.headers)?;

    for row in &shaped.rows {
        let cells = shaped.headers.iter().map(|header| {
            let text = row.get(header).map(CellValue::display).unwrap_or_default();
            if options.trim_long_strings {
                enforce_cell_limit(&text, options.cell_limit)
            } else {
                text
            }
        });
        writer.write_record(cells)?;
    }

    writer.flush()?;
    Ok(())
}
