//! Phred base-quality metric
//!
//! Quality characters are decoded as Phred+33 (Sanger / Illumina 1.8+), the
//! encoding every modern instrument emits. Scores are accumulated into a
//! fixed 94-bin histogram, which is enough to derive mean, median, min, max
//! and the Q30 fraction in constant memory over arbitrarily large files.

use crate::error::{QcError, Result};
use crate::qc::config::QualityThresholds;
use crate::qc::scan_records;
use crate::types::Severity;
use std::path::Path;

/// ASCII offset of Phred+33 encoding
pub const PHRED_OFFSET: u8 = 33;

/// Highest representable Phred score ('~' = ASCII 126)
pub const MAX_PHRED: u8 = 93;

/// Phred score counted as "high quality" for the Q30 fraction
const Q30: u8 = 30;

/// Streaming accumulator for Phred quality statistics
#[derive(Debug, Clone)]
pub struct QualityStats {
    histogram: [u64; MAX_PHRED as usize + 1],
    sum: u64,
    count: u64,
    q30_count: u64,
    min: u8,
    max: u8,
}

impl Default for QualityStats {
    fn default() -> Self {
        Self {
            histogram: [0; MAX_PHRED as usize + 1],
            sum: 0,
            count: 0,
            q30_count: 0,
            min: u8::MAX,
            max: 0,
        }
    }
}

impl QualityStats {
    /// Create an empty accumulator
    pub fn new() -> Self {
        Self::default()
    }

    /// Accumulate one quality string (Phred+33 ASCII)
    ///
    /// Characters below the offset decode to score 0; characters above '~'
    /// clamp to [`MAX_PHRED`]. Neither occurs in well-formed files.
    pub fn update(&mut self, quality: &[u8]) {
        for &q in quality {
            let score = q.saturating_sub(PHRED_OFFSET).min(MAX_PHRED);
            self.histogram[score as usize] += 1;
            self.sum += score as u64;
            self.count += 1;
            if score >= Q30 {
                self.q30_count += 1;
            }
            self.min = self.min.min(score);
            self.max = self.max.max(score);
        }
    }

    /// Total quality characters seen
    pub fn total_bases(&self) -> u64 {
        self.count
    }

    /// Median Phred score from the histogram
    ///
    /// For an even count this is the mean of the two middle scores.
    fn median(&self) -> f64 {
        debug_assert!(self.count > 0);
        let lower_rank = (self.count - 1) / 2;
        let upper_rank = self.count / 2;

        let mut lower = None;
        let mut upper = None;
        let mut seen = 0u64;

        for (score, &freq) in self.histogram.iter().enumerate() {
            if freq == 0 {
                continue;
            }
            seen += freq;
            if lower.is_none() && seen > lower_rank {
                lower = Some(score as f64);
            }
            if seen > upper_rank {
                upper = Some(score as f64);
                break;
            }
        }

        // Both ranks are < count, so the walk always fills both
        (lower.unwrap_or(0.0) + upper.unwrap_or(0.0)) / 2.0
    }

    /// Finalize into a classified report
    ///
    /// Fails with [`QcError::NoData`] when no quality characters were seen.
    pub fn finish(&self, thresholds: &QualityThresholds) -> Result<QualityReport> {
        if self.count == 0 {
            return Err(QcError::NoData {
                metric: "base_quality",
            });
        }

        let q30_percentage = 100.0 * self.q30_count as f64 / self.count as f64;

        Ok(QualityReport {
            mean: self.sum as f64 / self.count as f64,
            median: self.median(),
            min: self.min,
            max: self.max,
            q30_percentage,
            total_bases: self.count,
            status: thresholds.classify(q30_percentage),
        })
    }
}

/// Base-quality result for one file
#[derive(Debug, Clone, PartialEq)]
pub struct QualityReport {
    /// Mean Phred score
    pub mean: f64,
    /// Median Phred score
    pub median: f64,
    /// Minimum Phred score observed
    pub min: u8,
    /// Maximum Phred score observed
    pub max: u8,
    /// Percentage of bases at Q30 or above
    pub q30_percentage: f64,
    /// Total quality characters
    pub total_bases: u64,
    /// Classification against the supplied thresholds
    pub status: Severity,
}

/// Compute Phred quality statistics for a FASTQ file
///
/// # Example
///
/// ```no_run
/// use fastq_qc::{base_quality, QualityThresholds};
///
/// # fn main() -> fastq_qc::Result<()> {
/// let report = base_quality("sample.fastq", &QualityThresholds::default())?;
/// println!(
///     "mean Q{:.1}, Q30+ {:.1}% ({})",
///     report.mean, report.q30_percentage, report.status
/// );
/// # Ok(())
/// # }
/// ```
pub fn base_quality<P: AsRef<Path>>(
    path: P,
    thresholds: &QualityThresholds,
) -> Result<QualityReport> {
    let mut stats = QualityStats::new();
    scan_records(path, |record| stats.update(&record.quality))?;
    stats.finish(thresholds)
}
