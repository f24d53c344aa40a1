//! Ambiguous-base (N) rate metric
//!
//! The N percentage is computed over *all* sequence characters, ambiguity
//! codes included, unlike the [GC metric](crate::qc::gc) whose denominator
//! is called bases only. The asymmetry is intentional and must be preserved:
//! a file of pure-`N` sequences has an undefined GC percentage but an N rate
//! of exactly 100%. Unifying the denominators would silently change outputs
//! against historical reports.

use crate::error::{QcError, Result};
use crate::qc::config::NBaseThresholds;
use crate::qc::scan_records;
use crate::types::Severity;
use log::warn;
use std::path::Path;

/// Streaming accumulator for N-base statistics
#[derive(Debug, Clone, Copy, Default)]
pub struct NBaseCounter {
    n: u64,
    total: u64,
}

impl NBaseCounter {
    /// Create an empty counter
    pub fn new() -> Self {
        Self::default()
    }

    /// Accumulate one sequence
    pub fn update(&mut self, sequence: &[u8]) {
        self.total += sequence.len() as u64;
        self.n += sequence
            .iter()
            .filter(|&&b| b == b'N' || b == b'n')
            .count() as u64;
    }

    /// All sequence characters seen
    pub fn total_bases(&self) -> u64 {
        self.total
    }

    /// Finalize into a classified report
    ///
    /// Fails with [`QcError::NoData`] when no sequence characters were seen.
    pub fn finish(&self, reads: u64, thresholds: &NBaseThresholds) -> Result<NBaseReport> {
        if self.total == 0 {
            return Err(QcError::NoData {
                metric: "n_base_rate",
            });
        }

        let n_percentage = 100.0 * self.n as f64 / self.total as f64;
        let status = thresholds.classify(n_percentage);

        if status != Severity::Pass {
            warn!(
                "N-base rate {:.2}% at or above the {:.1}% threshold",
                n_percentage, thresholds.warn
            );
        }

        Ok(NBaseReport {
            n_percentage,
            n_bases: self.n,
            total_bases: self.total,
            reads,
            status,
        })
    }
}

/// Ambiguous-base result for one file
#[derive(Debug, Clone, PartialEq)]
pub struct NBaseReport {
    /// N percentage over all sequence characters
    pub n_percentage: f64,
    /// Count of N/n characters
    pub n_bases: u64,
    /// All sequence characters
    pub total_bases: u64,
    /// Records scanned
    pub reads: u64,
    /// Classification against the supplied thresholds
    pub status: Severity,
}

/// Compute the ambiguous-base rate for a FASTQ file
///
/// # Example
///
/// ```no_run
/// use fastq_qc::{n_base_rate, NBaseThresholds};
///
/// # fn main() -> fastq_qc::Result<()> {
/// let report = n_base_rate("sample.fastq", &NBaseThresholds::default())?;
/// println!("N: {:.2}% ({})", report.n_percentage, report.status);
/// # Ok(())
/// # }
/// ```
pub fn n_base_rate<P: AsRef<Path>>(path: P, thresholds: &NBaseThresholds) -> Result<NBaseReport> {
    let mut counter = NBaseCounter::new();
    let reads = scan_records(path, |record| counter.update(&record.sequence))?;
    counter.finish(reads, thresholds)
}
