//! fastq-qc: streaming FASTQ validation and quality-control metrics
//!
//! # Overview
//!
//! fastq-qc checks sequencing read files before they enter an analysis
//! pipeline: structural validation of the 4-line FASTQ format, paired-end
//! consistency between R1/R2 mates, and three per-file quality metrics
//! (GC content, Phred base quality, ambiguous-base rate), each classified
//! pass/warning/fail against caller-supplied thresholds.
//!
//! Everything streams: files are processed record by record with constant
//! memory, and gzip-compressed input (`.fastq.gz`) is decompressed
//! transparently.
//!
//! ## Quick start
//!
//! ```no_run
//! use fastq_qc::{validate_file, QcConfig, QcReport};
//!
//! # fn main() -> fastq_qc::Result<()> {
//! let validation = validate_file("sample.fastq.gz")?;
//! if validation.is_valid() {
//!     let qc = QcReport::analyze("sample.fastq.gz", &QcConfig::default())?;
//!     println!("GC {:.2}%, overall {}", qc.gc.gc_percentage, qc.overall());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Two validation tiers
//!
//! [`validate_file`] inspects every record on four independent axes and
//! collects every failure; [`count_reads`] only counts physical lines and
//! divides by 4. Both detect a truncated final record. Callers choose the
//! tier by file size and latency budget.
//!
//! ## Module organization
//!
//! - [`io`]: streaming FASTQ parser and compressed file access
//! - [`validate`]: per-record validation, fast read count, paired-end checks
//! - [`qc`]: the three QC metrics, their thresholds and the combined report
//!
//! ## Concurrency
//!
//! Every operation here is a single-threaded, synchronous scan over one
//! file. Batch callers can parallelize across files freely: analyses are
//! read-only and share no state.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod io;
pub mod qc;
pub mod types;
pub mod validate;

// Re-export commonly used types
pub use error::{QcError, Result};
pub use io::FastqStream;
pub use qc::{
    base_quality, gc_content, n_base_rate, GcReport, GcThresholds, NBaseReport, NBaseThresholds,
    QcConfig, QcReport, QualityReport, QualityThresholds,
};
pub use types::{FastqRecord, Severity};
pub use validate::{
    check_paired, count_reads, validate_file, MateMismatch, PairedReport, RecordError,
    RecordErrorKind, ValidationReport,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
