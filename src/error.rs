//! Fatal errors
//!
//! Only two things stop a conversion: asking for an export format no
//! writer exists for, and an I/O failure while writing. Everything
//! recoverable lives in [`crate::diagnostics::Diagnostic`] instead.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Writing to an unknown format is a configuration mistake, not a
    /// degradable condition like reading one
    #[error("Exports can only be made to .json and .csv formats (got `.{0}`).")]
    UnsupportedExport(String),

    #[error("failed to write output")]
    Io(#[from] std::io::Error),

    #[error("failed to encode output")]
    Encode(#[from] serde_json::Error),

    #[error("failed to write delimited output")]
    Csv(#[from] csv::Error),
}
