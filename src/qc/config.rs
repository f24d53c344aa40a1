//! QC thresholds passed explicitly per invocation
//!
//! Every metric takes its thresholds as an argument instead of reading
//! module-level constants, so tuning is local to a call site and testable.
//! Defaults are documented on each struct.

use crate::types::Severity;

/// GC-content classification thresholds
///
/// Percentages inside `[low, high]` classify as [`Severity::Pass`]; outside
/// the range but within `margin` of it as [`Severity::Warning`]; further out
/// as [`Severity::Fail`].
///
/// Defaults: `low = 45.0`, `high = 55.0`, `margin = 10.0`, centered on the
/// ~50% GC expected for a typical bacterial isolate. Organism-specific ranges
/// (e.g. 50–51% for E. coli) should be passed per invocation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GcThresholds {
    /// Lower bound of the accepted range (percent)
    pub low: f64,
    /// Upper bound of the accepted range (percent)
    pub high: f64,
    /// Tolerance band beyond the accepted range (percentage points)
    pub margin: f64,
}

impl Default for GcThresholds {
    fn default() -> Self {
        Self {
            low: 45.0,
            high: 55.0,
            margin: 10.0,
        }
    }
}

impl GcThresholds {
    /// Map a GC percentage to a severity
    pub fn classify(&self, gc_percentage: f64) -> Severity {
        if gc_percentage >= self.low && gc_percentage <= self.high {
            Severity::Pass
        } else if gc_percentage >= self.low - self.margin
            && gc_percentage <= self.high + self.margin
        {
            Severity::Warning
        } else {
            Severity::Fail
        }
    }
}

/// Base-quality classification thresholds (percent of bases at Q30 or above)
///
/// Q30+ percentage at or above `excellent` classifies as [`Severity::Pass`],
/// at or above `good` as [`Severity::Warning`], below as [`Severity::Fail`].
///
/// Defaults: `excellent = 90.0`, `good = 80.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QualityThresholds {
    /// Q30+ percentage for an excellent library
    pub excellent: f64,
    /// Q30+ percentage for an acceptable library
    pub good: f64,
}

impl Default for QualityThresholds {
    fn default() -> Self {
        Self {
            excellent: 90.0,
            good: 80.0,
        }
    }
}

impl QualityThresholds {
    /// Map a Q30+ percentage to a severity
    pub fn classify(&self, q30_percentage: f64) -> Severity {
        if q30_percentage >= self.excellent {
            Severity::Pass
        } else if q30_percentage >= self.good {
            Severity::Warning
        } else {
            Severity::Fail
        }
    }
}

/// Ambiguous-base (N) rate classification thresholds
///
/// N percentages below `warn` classify as [`Severity::Pass`]; from `warn` up
/// to and including `fail` as [`Severity::Warning`]; above `fail` as
/// [`Severity::Fail`]. Both boundaries belong to the Warning band: exactly
/// `warn` percent is a Warning, exactly `fail` percent is a Warning.
///
/// Defaults: `warn = 5.0`, `fail = 10.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NBaseThresholds {
    /// N percentage at which the file stops passing
    pub warn: f64,
    /// N percentage above which the file fails
    pub fail: f64,
}

impl Default for NBaseThresholds {
    fn default() -> Self {
        Self {
            warn: 5.0,
            fail: 10.0,
        }
    }
}

impl NBaseThresholds {
    /// Map an N percentage to a severity
    pub fn classify(&self, n_percentage: f64) -> Severity {
        if n_percentage < self.warn {
            Severity::Pass
        } else if n_percentage <= self.fail {
            Severity::Warning
        } else {
            Severity::Fail
        }
    }
}

/// Combined configuration for a full QC pass
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct QcConfig {
    /// GC-content thresholds
    pub gc: GcThresholds,
    /// Base-quality thresholds
    pub quality: QualityThresholds,
    /// Ambiguous-base thresholds
    pub n_base: NBaseThresholds,
}
