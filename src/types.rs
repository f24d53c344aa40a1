//! Common types used throughout fastq-qc

use std::fmt;

/// A FASTQ record: one sequencing read occupying four physical lines
///
/// The header and separator lines are stored raw (sentinel characters
/// included, trailing newline stripped) so that the
/// [`validate`](crate::validate) module, not the parser, judges them.
/// The same applies to the `sequence.len() == quality.len()` invariant:
/// the validator must be able to enumerate every malformed record in a file
/// instead of aborting at the first one, so [`FastqStream`] yields records
/// as they appear on disk.
///
/// [`FastqStream`]: crate::io::FastqStream
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FastqRecord {
    /// Raw header line (expected to start with '@')
    pub header: String,
    /// DNA sequence
    pub sequence: Vec<u8>,
    /// Raw separator line (expected to start with '+')
    pub separator: String,
    /// Quality scores (Phred+33 encoded ASCII)
    pub quality: Vec<u8>,
}

impl FastqRecord {
    /// Create a new FASTQ record
    pub fn new(header: String, sequence: Vec<u8>, separator: String, quality: Vec<u8>) -> Self {
        Self {
            header,
            sequence,
            separator,
            quality,
        }
    }

    /// Read identifier: the header without its '@' sentinel
    ///
    /// Returns the full header (description included) when the sentinel is
    /// missing, so malformed records still produce something traceable.
    pub fn id(&self) -> &str {
        self.header.strip_prefix('@').unwrap_or(&self.header)
    }

    /// Check if the record has an empty sequence
    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }
}

/// Ordered severity scale shared by all QC metrics
///
/// Each metric defines its own threshold-to-severity mapping (see
/// [`qc::config`](crate::qc::config)); the scale itself is common so that
/// statuses compare and aggregate without stringly-typed drift. `Pass` is the
/// lowest severity and `Fail` the highest, which makes the worst status of a
/// set simply its maximum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    /// Value within the accepted range
    Pass,
    /// Value outside the accepted range but within tolerance
    Warning,
    /// Value far outside the accepted range
    Fail,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Pass => write!(f, "pass"),
            Severity::Warning => write!(f, "warning"),
            Severity::Fail => write!(f, "fail"),
        }
    }
}
