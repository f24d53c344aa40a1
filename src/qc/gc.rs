//! GC-content metric
//!
//! The GC percentage is computed over *called* bases only: A, C, G and T
//! (case-insensitive). N and the IUPAC ambiguity codes are excluded from the
//! denominator so that a run of ambiguous calls cannot drag the GC estimate
//! toward zero. This differs deliberately from the
//! [N-rate metric](crate::qc::n_content), whose denominator is every
//! sequence character; see that module for the other half of the asymmetry.

use crate::error::{QcError, Result};
use crate::qc::config::GcThresholds;
use crate::qc::scan_records;
use crate::types::Severity;
use log::warn;
use std::path::Path;

/// Streaming accumulator for GC statistics
///
/// Purely additive per record, so results are invariant to record order and
/// partial accumulators could be merged.
#[derive(Debug, Clone, Copy, Default)]
pub struct GcCounter {
    gc: u64,
    at: u64,
    n: u64,
    other: u64,
}

impl GcCounter {
    /// Create an empty counter
    pub fn new() -> Self {
        Self::default()
    }

    /// Accumulate one sequence
    pub fn update(&mut self, sequence: &[u8]) {
        for &base in sequence {
            match base {
                b'G' | b'C' | b'g' | b'c' => self.gc += 1,
                b'A' | b'T' | b'a' | b't' => self.at += 1,
                b'N' | b'n' => self.n += 1,
                _ => self.other += 1,
            }
        }
    }

    /// Called bases: the GC denominator (A/C/G/T only)
    pub fn called_bases(&self) -> u64 {
        self.gc + self.at
    }

    /// All sequence characters seen, ambiguity codes included
    pub fn total_bases(&self) -> u64 {
        self.gc + self.at + self.n + self.other
    }

    /// Finalize into a classified report
    ///
    /// Fails with [`QcError::NoData`] when no called bases were seen (e.g.
    /// an empty file, or sequences consisting solely of `N`).
    pub fn finish(&self, reads: u64, thresholds: &GcThresholds) -> Result<GcReport> {
        let called = self.called_bases();
        if called == 0 {
            return Err(QcError::NoData {
                metric: "gc_content",
            });
        }

        let gc_percentage = 100.0 * self.gc as f64 / called as f64;
        let status = thresholds.classify(gc_percentage);

        if status != Severity::Pass {
            warn!(
                "GC content {:.2}% outside expected range [{:.1}, {:.1}]",
                gc_percentage, thresholds.low, thresholds.high
            );
        }

        Ok(GcReport {
            gc_percentage,
            gc_bases: self.gc,
            at_bases: self.at,
            n_bases: self.n,
            total_bases: self.total_bases(),
            reads,
            status,
        })
    }
}

/// GC-content result for one file
#[derive(Debug, Clone, PartialEq)]
pub struct GcReport {
    /// GC percentage over called bases
    pub gc_percentage: f64,
    /// Count of G/C bases
    pub gc_bases: u64,
    /// Count of A/T bases
    pub at_bases: u64,
    /// Count of N bases
    pub n_bases: u64,
    /// All sequence characters, ambiguity codes included
    pub total_bases: u64,
    /// Records scanned
    pub reads: u64,
    /// Classification against the supplied thresholds
    pub status: Severity,
}

/// Compute GC content for a FASTQ file
///
/// Streams the file record by record; memory use is constant. Fails with
/// [`QcError::FileNotFound`] for a missing path, [`QcError::TruncatedFile`]
/// for a malformed stream, and [`QcError::NoData`] when the file contains no
/// called bases.
///
/// # Example
///
/// ```no_run
/// use fastq_qc::{gc_content, GcThresholds};
///
/// # fn main() -> fastq_qc::Result<()> {
/// let report = gc_content("sample.fastq", &GcThresholds::default())?;
/// println!("GC: {:.2}% ({})", report.gc_percentage, report.status);
/// # Ok(())
/// # }
/// ```
pub fn gc_content<P: AsRef<Path>>(path: P, thresholds: &GcThresholds) -> Result<GcReport> {
    let mut counter = GcCounter::new();
    let reads = scan_records(path, |record| counter.update(&record.sequence))?;
    counter.finish(reads, thresholds)
}
