//! QC metrics engine: GC content, base quality, ambiguous-base rate
//!
//! Three independently invokable metrics, all built on the same streaming
//! pattern: a per-record accumulator (`update` per record, purely additive)
//! finalized into a report with a [`Severity`](crate::types::Severity)
//! classification against the caller's thresholds. Accumulation is
//! commutative, so every metric is invariant to record order.
//!
//! [`QcReport::analyze`](report::QcReport::analyze) computes all three in a
//! single pass over the file; the standalone functions
//! ([`gc_content`](gc::gc_content), [`base_quality`](quality::base_quality),
//! [`n_base_rate`](n_content::n_base_rate)) each run their own pass.

pub mod config;
pub mod gc;
pub mod n_content;
pub mod quality;
pub mod report;

pub use config::{GcThresholds, NBaseThresholds, QcConfig, QualityThresholds};
pub use gc::{gc_content, GcCounter, GcReport};
pub use n_content::{n_base_rate, NBaseCounter, NBaseReport};
pub use quality::{base_quality, QualityReport, QualityStats};
pub use report::QcReport;

use crate::error::Result;
use crate::io::FastqStream;
use crate::types::FastqRecord;
use log::info;
use std::path::Path;

/// Records between progress log lines during a metric scan
const PROGRESS_INTERVAL: u64 = 100_000;

/// Stream a file's records through an accumulator callback
///
/// Returns the number of records processed. Shared by the standalone metric
/// functions and the combined single-pass report.
pub(crate) fn scan_records<P, F>(path: P, mut update: F) -> Result<u64>
where
    P: AsRef<Path>,
    F: FnMut(&FastqRecord),
{
    let path = path.as_ref();
    let stream = FastqStream::from_path(path)?;
    let mut reads = 0u64;

    for record in stream {
        let record = record?;
        update(&record);
        reads += 1;

        if reads % PROGRESS_INTERVAL == 0 {
            info!("{}: processed {} sequences", path.display(), reads);
        }
    }

    Ok(reads)
}
