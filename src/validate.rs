//! Per-record FASTQ validation and paired-end consistency checks
//!
//! Validation is a two-tier API:
//!
//! - [`validate_file`] is the full content check: every record is evaluated
//!   on four independent axes (header sentinel, separator sentinel,
//!   sequence/quality length, nucleotide alphabet) and every failure is
//!   collected; the scan never short-circuits on a bad record.
//! - [`count_reads`] is the cheap structural check: physical line count
//!   divided by 4, with no per-record work. Callers pick the tier that fits
//!   their file size and latency budget.
//!
//! [`check_paired`] compares an R1/R2 file pair: fast read counts first,
//! then (only when the counts agree) a positional comparison of mate IDs.

use crate::error::{QcError, Result};
use crate::io::fastq::count_physical_lines;
use crate::io::{CompressedReader, FastqStream};
use crate::types::FastqRecord;
use log::{debug, info};
use std::fmt;
use std::path::Path;

/// Records between progress log lines during full validation
const PROGRESS_INTERVAL: u64 = 100_000;

/// Which validation axis a record failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordErrorKind {
    /// Header line does not start with '@'
    Header,
    /// Separator line does not start with '+'
    Separator,
    /// Sequence and quality strings differ in length
    LengthMismatch,
    /// Sequence contains a character outside the IUPAC nucleotide alphabet
    Alphabet,
}

impl fmt::Display for RecordErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordErrorKind::Header => write!(f, "header"),
            RecordErrorKind::Separator => write!(f, "separator"),
            RecordErrorKind::LengthMismatch => write!(f, "length"),
            RecordErrorKind::Alphabet => write!(f, "alphabet"),
        }
    }
}

/// One validation failure, tagged with the 1-based record index
///
/// A single record can produce several of these: the four axes are checked
/// independently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordError {
    /// 1-based index of the offending record (records, not lines)
    pub record: u64,
    /// Failed axis
    pub kind: RecordErrorKind,
    /// Human-readable description
    pub message: String,
}

impl fmt::Display for RecordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "record {}: {}", self.record, self.message)
    }
}

/// Aggregate verdict for one file
#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    /// Total records scanned
    pub total_reads: u64,
    /// Records that passed all four axes
    pub valid_reads: u64,
    /// Every validation failure, in record order
    pub errors: Vec<RecordError>,
}

impl ValidationReport {
    /// True iff no record failed any axis
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Check whether a byte is in the accepted nucleotide alphabet
///
/// Accepted (case-insensitive): the four standard bases, `N`, the IUPAC
/// two-base ambiguity codes `R Y S W K M`, and the three-base codes
/// `B D H V`.
#[inline]
pub fn is_valid_base(base: u8) -> bool {
    matches!(
        base,
        b'A' | b'C' | b'G' | b'T' | b'N' | // Standard + N
        b'a' | b'c' | b'g' | b't' | b'n' | // Lowercase
        b'R' | b'Y' | b'S' | b'W' | b'K' | b'M' | // Two-base ambiguity
        b'r' | b'y' | b's' | b'w' | b'k' | b'm' |
        b'B' | b'D' | b'H' | b'V' | // Three-base ambiguity
        b'b' | b'd' | b'h' | b'v'
    )
}

/// Evaluate one record on all four axes
///
/// Returns one [`RecordError`] per failed axis; an empty vec means the
/// record is valid. `index` is 1-based.
pub fn validate_record(record: &FastqRecord, index: u64) -> Vec<RecordError> {
    let mut errors = Vec::new();

    if !record.header.starts_with('@') {
        errors.push(RecordError {
            record: index,
            kind: RecordErrorKind::Header,
            message: format!(
                "header must start with '@', got {:?}",
                record.header.chars().next().map(String::from).unwrap_or_default()
            ),
        });
    }

    if !record.separator.starts_with('+') {
        errors.push(RecordError {
            record: index,
            kind: RecordErrorKind::Separator,
            message: format!(
                "separator must start with '+', got {:?}",
                record.separator.chars().next().map(String::from).unwrap_or_default()
            ),
        });
    }

    if record.sequence.len() != record.quality.len() {
        errors.push(RecordError {
            record: index,
            kind: RecordErrorKind::LengthMismatch,
            message: format!(
                "sequence length ({}) != quality length ({})",
                record.sequence.len(),
                record.quality.len()
            ),
        });
    }

    if let Some(&bad) = record.sequence.iter().find(|&&b| !is_valid_base(b)) {
        errors.push(RecordError {
            record: index,
            kind: RecordErrorKind::Alphabet,
            message: format!("invalid character {:?} in sequence", bad as char),
        });
    }

    errors
}

/// Full per-record validation of a FASTQ file
///
/// Record-level failures never stop the scan; they are collected into the
/// returned [`ValidationReport`]. File-level failures (missing path,
/// truncated final record) abort with an error.
///
/// # Example
///
/// ```no_run
/// use fastq_qc::validate_file;
///
/// # fn main() -> fastq_qc::Result<()> {
/// let report = validate_file("sample.fastq")?;
/// if !report.is_valid() {
///     for error in &report.errors {
///         eprintln!("{}", error);
///     }
/// }
/// # Ok(())
/// # }
/// ```
pub fn validate_file<P: AsRef<Path>>(path: P) -> Result<ValidationReport> {
    let path = path.as_ref();
    let stream = FastqStream::from_path(path)?;
    let mut report = ValidationReport::default();

    for record in stream {
        let record = record?;
        report.total_reads += 1;

        let errors = validate_record(&record, report.total_reads);
        if errors.is_empty() {
            report.valid_reads += 1;
        } else {
            report.errors.extend(errors);
        }

        if report.total_reads % PROGRESS_INTERVAL == 0 {
            info!(
                "{}: validated {} records ({} errors so far)",
                path.display(),
                report.total_reads,
                report.errors.len()
            );
        }
    }

    debug!(
        "{}: {} of {} records valid",
        path.display(),
        report.valid_reads,
        report.total_reads
    );
    Ok(report)
}

/// Fast read count: physical line count / 4, no per-record validation
///
/// Fails with [`QcError::TruncatedFile`] if the line count is not divisible
/// by 4. An empty file counts as zero reads.
pub fn count_reads<P: AsRef<Path>>(path: P) -> Result<u64> {
    let reader = CompressedReader::from_path(path)?;
    let lines = count_physical_lines(reader)?;

    if lines % 4 != 0 {
        return Err(QcError::TruncatedFile {
            line_count: lines,
            complete_records: lines / 4,
        });
    }

    Ok(lines / 4)
}

/// A mate-ID disagreement at one record position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MateMismatch {
    /// 1-based record position in both files
    pub record: u64,
    /// Base ID observed in R1 at this position
    pub r1_id: String,
    /// Base ID observed in R2 at this position
    pub r2_id: String,
}

impl fmt::Display for MateMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "record {}: R1 id {:?} != R2 id {:?}",
            self.record, self.r1_id, self.r2_id
        )
    }
}

/// Result of comparing two paired-end mate files
#[derive(Debug, Clone)]
pub struct PairedReport {
    /// Read count of the R1 file
    pub r1_reads: u64,
    /// Read count of the R2 file
    pub r2_reads: u64,
    /// Positional mate-ID disagreements (empty when counts differ: the ID
    /// scan is skipped in that case)
    pub id_mismatches: Vec<MateMismatch>,
}

impl PairedReport {
    /// True iff both files contain the same number of reads
    pub fn counts_match(&self) -> bool {
        self.r1_reads == self.r2_reads
    }

    /// True iff counts match and no mate-ID disagreement was found
    pub fn is_consistent(&self) -> bool {
        self.counts_match() && self.id_mismatches.is_empty()
    }
}

/// Compare an R1/R2 paired-end file pair
///
/// Read counts are compared first using the fast tier ([`count_reads`]), so
/// a truncated file in either position is detected before any pairwise work.
/// When the counts differ the report records both counts and skips the ID
/// scan. When they agree, the base ID at every position is compared after
/// stripping one trailing mate marker (`/1`, `/2`, `.1` or `.2`); every
/// disagreement is collected and a mismatch never stops the scan.
///
/// # Example
///
/// ```no_run
/// use fastq_qc::check_paired;
///
/// # fn main() -> fastq_qc::Result<()> {
/// let report = check_paired("sample_R1.fastq", "sample_R2.fastq")?;
/// assert!(report.is_consistent());
/// # Ok(())
/// # }
/// ```
pub fn check_paired<P1: AsRef<Path>, P2: AsRef<Path>>(r1: P1, r2: P2) -> Result<PairedReport> {
    let r1 = r1.as_ref();
    let r2 = r2.as_ref();

    let r1_reads = count_reads(r1)?;
    let r2_reads = count_reads(r2)?;

    let mut report = PairedReport {
        r1_reads,
        r2_reads,
        id_mismatches: Vec::new(),
    };

    if r1_reads != r2_reads {
        info!(
            "paired-end count mismatch: {} has {} reads, {} has {}",
            r1.display(),
            r1_reads,
            r2.display(),
            r2_reads
        );
        return Ok(report);
    }

    let stream1 = FastqStream::from_path(r1)?;
    let stream2 = FastqStream::from_path(r2)?;

    for (position, (rec1, rec2)) in stream1.zip(stream2).enumerate() {
        let (rec1, rec2) = (rec1?, rec2?);
        let id1 = mate_base_id(rec1.id());
        let id2 = mate_base_id(rec2.id());

        if id1 != id2 {
            report.id_mismatches.push(MateMismatch {
                record: position as u64 + 1,
                r1_id: id1.to_string(),
                r2_id: id2.to_string(),
            });
        }
    }

    Ok(report)
}

/// Base ID used for mate comparison
///
/// Takes the first whitespace-delimited token of the read ID and strips one
/// trailing `/1`, `/2`, `.1` or `.2` mate marker if present.
pub fn mate_base_id(id: &str) -> &str {
    let token = id.split_whitespace().next().unwrap_or("");
    for marker in ["/1", "/2", ".1", ".2"] {
        if let Some(base) = token.strip_suffix(marker) {
            return base;
        }
    }
    token
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn record(header: &str, seq: &[u8], sep: &str, qual: &[u8]) -> FastqRecord {
        FastqRecord::new(header.to_string(), seq.to_vec(), sep.to_string(), qual.to_vec())
    }

    fn write_fastq(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_alphabet_accepts_iupac_codes() {
        for &b in b"ACGTNacgtnRYSWKMryswkmBDHVbdhv" {
            assert!(is_valid_base(b), "expected {:?} to be valid", b as char);
        }
        for &b in b"XxZzEeUuIiJjOo 0123-.@+" {
            assert!(!is_valid_base(b), "expected {:?} to be invalid", b as char);
        }
    }

    #[test]
    fn test_valid_record_has_no_errors() {
        let rec = record("@r1", b"ACGTN", "+", b"IIIII");
        assert!(validate_record(&rec, 1).is_empty());
    }

    #[test]
    fn test_bad_header_sentinel() {
        let rec = record(">r1", b"ACGT", "+", b"IIII");
        let errors = validate_record(&rec, 3);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, RecordErrorKind::Header);
        assert_eq!(errors[0].record, 3);
    }

    #[test]
    fn test_bad_separator_sentinel() {
        let rec = record("@r1", b"ACGT", "-", b"IIII");
        let errors = validate_record(&rec, 1);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, RecordErrorKind::Separator);
    }

    #[test]
    fn test_length_mismatch() {
        let rec = record("@r1", b"ACGTACGT", "+", b"III");
        let errors = validate_record(&rec, 7);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, RecordErrorKind::LengthMismatch);
        assert!(errors[0].message.contains("8"));
        assert!(errors[0].message.contains("3"));
    }

    #[test]
    fn test_invalid_alphabet_character() {
        let rec = record("@r1", b"ACXGT", "+", b"IIIII");
        let errors = validate_record(&rec, 1);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, RecordErrorKind::Alphabet);
        assert!(errors[0].message.contains('X'));
    }

    #[test]
    fn test_multiple_axes_fail_independently() {
        // Bad header, bad separator, length mismatch, and invalid character
        let rec = record("r1", b"ACXG", "-", b"II");
        let errors = validate_record(&rec, 2);
        assert_eq!(errors.len(), 4);
        assert!(errors.iter().all(|e| e.record == 2));
    }

    #[test]
    fn test_validate_file_collects_all_errors() {
        let file = write_fastq(
            "@r1\nACGT\n+\nIIII\n\
             @r2\nACGT\n+\nII\n\
             @r3\nACXT\n+\nIIII\n",
        );

        let report = validate_file(file.path()).unwrap();
        assert_eq!(report.total_reads, 3);
        assert_eq!(report.valid_reads, 1);
        assert!(!report.is_valid());
        assert_eq!(report.errors.len(), 2);
        assert_eq!(report.errors[0].kind, RecordErrorKind::LengthMismatch);
        assert_eq!(report.errors[0].record, 2);
        assert_eq!(report.errors[1].kind, RecordErrorKind::Alphabet);
        assert_eq!(report.errors[1].record, 3);
    }

    #[test]
    fn test_validate_empty_file() {
        let file = write_fastq("");
        let report = validate_file(file.path()).unwrap();
        assert_eq!(report.total_reads, 0);
        assert!(report.is_valid());
    }

    #[test]
    fn test_validate_missing_file() {
        let result = validate_file("nonexistent.fastq");
        assert!(matches!(result, Err(QcError::FileNotFound { .. })));
    }

    #[test]
    fn test_count_reads() {
        let file = write_fastq("@r1\nACGT\n+\nIIII\n@r2\nACGT\n+\nIIII\n");
        assert_eq!(count_reads(file.path()).unwrap(), 2);
    }

    #[test]
    fn test_count_reads_empty_file() {
        let file = write_fastq("");
        assert_eq!(count_reads(file.path()).unwrap(), 0);
    }

    #[test]
    fn test_count_reads_truncated() {
        let file = write_fastq("@r1\nACGT\n+\nIIII\n@r2\nACGT\n");
        match count_reads(file.path()) {
            Err(QcError::TruncatedFile {
                line_count,
                complete_records,
            }) => {
                assert_eq!(line_count, 6);
                assert_eq!(complete_records, 1);
            }
            other => panic!("expected TruncatedFile, got {:?}", other),
        }
    }

    #[test]
    fn test_mate_base_id_strips_markers() {
        assert_eq!(mate_base_id("read_1/1"), "read_1");
        assert_eq!(mate_base_id("read_1/2"), "read_1");
        assert_eq!(mate_base_id("SRR000001.1"), "SRR000001");
        assert_eq!(mate_base_id("read_1/1 length=60"), "read_1");
        assert_eq!(mate_base_id("plain"), "plain");
        assert_eq!(mate_base_id(""), "");
    }

    #[test]
    fn test_check_paired_consistent() {
        let r1 = write_fastq("@a/1\nACGT\n+\nIIII\n@b/1\nACGT\n+\nIIII\n");
        let r2 = write_fastq("@a/2\nACGT\n+\nIIII\n@b/2\nACGT\n+\nIIII\n");

        let report = check_paired(r1.path(), r2.path()).unwrap();
        assert!(report.counts_match());
        assert!(report.is_consistent());
    }

    #[test]
    fn test_check_paired_count_mismatch_skips_id_scan() {
        let r1 = write_fastq("@a/1\nACGT\n+\nIIII\n@b/1\nACGT\n+\nIIII\n");
        let r2 = write_fastq("@zzz/2\nACGT\n+\nIIII\n");

        let report = check_paired(r1.path(), r2.path()).unwrap();
        assert_eq!(report.r1_reads, 2);
        assert_eq!(report.r2_reads, 1);
        assert!(!report.counts_match());
        assert!(report.id_mismatches.is_empty());
        assert!(!report.is_consistent());
    }

    #[test]
    fn test_check_paired_collects_all_id_mismatches() {
        let r1 = write_fastq(
            "@a/1\nACGT\n+\nIIII\n@b/1\nACGT\n+\nIIII\n@c/1\nACGT\n+\nIIII\n",
        );
        let r2 = write_fastq(
            "@a/2\nACGT\n+\nIIII\n@WRONG/2\nACGT\n+\nIIII\n@c/2\nACGT\n+\nIIII\n",
        );

        let report = check_paired(r1.path(), r2.path()).unwrap();
        assert!(report.counts_match());
        assert_eq!(report.id_mismatches.len(), 1);
        assert_eq!(report.id_mismatches[0].record, 2);
        assert_eq!(report.id_mismatches[0].r1_id, "b");
        assert_eq!(report.id_mismatches[0].r2_id, "WRONG");
    }

    #[test]
    fn test_check_paired_truncated_file_detected_first() {
        let r1 = write_fastq("@a/1\nACGT\n+\nIIII\n");
        let r2 = write_fastq("@a/2\nACGT\n+\n");

        let result = check_paired(r1.path(), r2.path());
        assert!(matches!(result, Err(QcError::TruncatedFile { .. })));
    }

    // Property-based tests
    use proptest::prelude::*;

    proptest! {
        /// Valid uppercase and lowercase sequences never fail the alphabet axis
        #[test]
        fn test_case_insensitive_alphabet(seq in "[ACGTNacgtn]{1,200}") {
            let qual = vec![b'I'; seq.len()];
            let rec = record("@r", seq.as_bytes(), "+", &qual);
            prop_assert!(validate_record(&rec, 1).is_empty());
        }

        /// A length mismatch yields exactly one error of kind LengthMismatch
        #[test]
        fn test_length_mismatch_single_error(
            seq_len in 1..100usize,
            delta in 1..50usize,
        ) {
            let seq = vec![b'A'; seq_len];
            let qual = vec![b'I'; seq_len + delta];
            let rec = record("@r", &seq, "+", &qual);
            let errors = validate_record(&rec, 1);
            prop_assert_eq!(errors.len(), 1);
            prop_assert_eq!(errors[0].kind, RecordErrorKind::LengthMismatch);
        }

        /// Fast count equals full-scan count for well-formed files
        #[test]
        fn test_two_tiers_agree(count in 0..30usize) {
            let mut content = String::new();
            for i in 0..count {
                content.push_str(&format!("@read_{}\nACGT\n+\nIIII\n", i));
            }
            let file = write_fastq(&content);

            let fast = count_reads(file.path()).unwrap();
            let report = validate_file(file.path()).unwrap();
            prop_assert_eq!(fast, report.total_reads);
        }
    }
}
