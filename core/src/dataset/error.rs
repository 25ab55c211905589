//! Error types for dataset loading

use std::path::PathBuf;
use thiserror::Error;

/// Errors during raw-row parsing
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("missing place identifier at row {row_number}")]
    MissingPlace { row_number: u64 },

    #[error("invalid place identifier at row {row_number}: {value}")]
    InvalidPlace { row_number: u64, value: String },

    #[error("duplicate place {place} at row {row_number}")]
    DuplicatePlace { row_number: u64, place: u32 },
}

/// Errors during dataset file reading
#[derive(Debug, Error)]
pub enum ReaderError {
    #[error("failed to open dataset file {path}")]
    OpenFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read record from {path}")]
    ReadRecord {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}
