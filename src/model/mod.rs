//! Data model for records, cell values, and source shapes

mod dataset;
mod record;
mod value;

pub use dataset::Dataset;
pub use record::Record;
pub use value::CellValue;
