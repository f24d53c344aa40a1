//! Error types for fastq-qc

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for fastq-qc operations
pub type Result<T> = std::result::Result<T, QcError>;

/// Error types that can occur during FASTQ validation and QC analysis
///
/// File-level errors terminate the analysis of the offending file but never
/// affect other files in a batch. Per-record validation failures are not
/// errors: they are collected in
/// [`ValidationReport`](crate::validate::ValidationReport).
#[derive(Debug, Error)]
pub enum QcError {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Input path does not exist or is not readable
    #[error("file not found: {path}")]
    FileNotFound {
        /// Path that could not be opened
        path: PathBuf,
    },

    /// Physical line count is not a multiple of 4 (truncated final record)
    #[error(
        "truncated FASTQ file: {line_count} lines is not a multiple of 4 \
         ({complete_records} complete records recovered)"
    )]
    TruncatedFile {
        /// Total physical lines seen before the stream ended
        line_count: u64,
        /// Number of complete 4-line records read before truncation
        complete_records: u64,
    },

    /// A metric found zero applicable bases, so its value is undefined
    #[error("no data: {metric} found zero applicable bases")]
    NoData {
        /// Name of the metric that had nothing to measure
        metric: &'static str,
    },
}
