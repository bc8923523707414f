//! Error types for the capture module.

use std::path::PathBuf;
use thiserror::Error;

use super::Column;

/// Errors that can occur while loading the capture table.
#[derive(Debug, Error)]
pub enum CaptureError {
    /// Export file could not be opened.
    #[error("Failed to read capture export {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed delimited data.
    #[error("Malformed capture export at line {line}")]
    Csv {
        line: u64,
        #[source]
        source: csv::Error,
    },

    /// A column every capture needs is absent from the header.
    #[error("Capture export is missing required column '{}'", .0.header())]
    MissingColumn(Column),
}
