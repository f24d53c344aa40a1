//! Combined single-pass QC report
//!
//! Each metric's accumulation is purely additive per record, so all three
//! can share one traversal of the file. For large inputs this reads the
//! file once instead of three times; results are identical to running the
//! standalone metric functions.

use crate::error::Result;
use crate::qc::config::QcConfig;
use crate::qc::gc::{GcCounter, GcReport};
use crate::qc::n_content::{NBaseCounter, NBaseReport};
use crate::qc::quality::{QualityReport, QualityStats};
use crate::qc::scan_records;
use crate::types::Severity;
use std::path::Path;

/// All three QC metrics for one file, computed in a single streaming pass
#[derive(Debug, Clone, PartialEq)]
pub struct QcReport {
    /// GC-content result
    pub gc: GcReport,
    /// Base-quality result
    pub quality: QualityReport,
    /// Ambiguous-base result
    pub n_base: NBaseReport,
    /// Records scanned
    pub reads: u64,
}

impl QcReport {
    /// Run all three metrics over one file in a single pass
    ///
    /// Fails with [`QcError::NoData`](crate::QcError::NoData) if any metric
    /// has nothing to measure (an empty file, or pure-`N` sequences for the
    /// GC metric); run the standalone metric functions when partial results
    /// for such files are wanted.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use fastq_qc::{QcConfig, QcReport};
    ///
    /// # fn main() -> fastq_qc::Result<()> {
    /// let report = QcReport::analyze("sample.fastq.gz", &QcConfig::default())?;
    /// println!("overall: {}", report.overall());
    /// # Ok(())
    /// # }
    /// ```
    pub fn analyze<P: AsRef<Path>>(path: P, config: &QcConfig) -> Result<Self> {
        let mut gc = GcCounter::new();
        let mut quality = QualityStats::new();
        let mut n_base = NBaseCounter::new();

        let reads = scan_records(path, |record| {
            gc.update(&record.sequence);
            quality.update(&record.quality);
            n_base.update(&record.sequence);
        })?;

        Ok(Self {
            gc: gc.finish(reads, &config.gc)?,
            quality: quality.finish(&config.quality)?,
            n_base: n_base.finish(reads, &config.n_base)?,
            reads,
        })
    }

    /// Worst severity across the three metrics
    pub fn overall(&self) -> Severity {
        self.gc
            .status
            .max(self.quality.status)
            .max(self.n_base.status)
    }
}
