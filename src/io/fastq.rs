//! Streaming FASTQ record reader
//!
//! [`FastqStream`] parses a FASTQ byte stream into discrete 4-line records
//! lazily: memory use is a handful of reusable line buffers regardless of
//! file size. The parser is deliberately lenient about record *content*
//! (header sentinel, separator sentinel, sequence/quality length); those are
//! the [`validate`](crate::validate) module's axes, and judging them here
//! would make it impossible to enumerate every malformed record in a file.
//!
//! The one structural rule the reader does enforce is the 4-line grouping:
//! a stream that ends mid-record fails with [`QcError::TruncatedFile`],
//! reporting how many complete records were recoverable. The line count is
//! tracked incrementally, never by buffering the file.

use crate::error::{QcError, Result};
use crate::io::source::CompressedReader;
use crate::types::FastqRecord;
use std::io::BufRead;
use std::path::Path;

/// Lazy iterator over FASTQ records
///
/// Yields records in file order. CRLF and LF line endings are both
/// tolerated; the trailing newline (and a preceding `\r` if present) is
/// stripped from every line.
///
/// # Example
///
/// ```no_run
/// use fastq_qc::FastqStream;
///
/// # fn main() -> fastq_qc::Result<()> {
/// let stream = FastqStream::from_path("sample.fastq.gz")?;
///
/// for record in stream {
///     let record = record?;
///     // One record at a time, constant memory
/// }
/// # Ok(())
/// # }
/// ```
pub struct FastqStream<R: BufRead> {
    reader: R,
    line1: String,
    line2: String,
    line3: String,
    line4: String,
    line_number: u64,
    records_read: u64,
    finished: bool,
}

impl FastqStream<CompressedReader> {
    /// Create a FASTQ stream from a file path (gzip autodetected)
    ///
    /// Fails with [`QcError::FileNotFound`] if the path does not exist or
    /// cannot be read.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let reader = CompressedReader::from_path(path)?;
        Ok(Self::from_reader(reader))
    }
}

impl<R: BufRead> FastqStream<R> {
    /// Create a FASTQ stream from a buffered reader
    pub fn from_reader(reader: R) -> Self {
        Self {
            reader,
            line1: String::with_capacity(256),
            line2: String::with_capacity(256),
            line3: String::with_capacity(256),
            line4: String::with_capacity(256),
            line_number: 0,
            records_read: 0,
            finished: false,
        }
    }

    /// Number of complete records read so far
    pub fn records_read(&self) -> u64 {
        self.records_read
    }

    /// Read one 4-line record from the reader
    fn read_record(&mut self) -> Result<Option<FastqRecord>> {
        self.line1.clear();
        self.line2.clear();
        self.line3.clear();
        self.line4.clear();

        let n1 = self.reader.read_line(&mut self.line1)?;
        if n1 == 0 {
            return Ok(None);
        }
        self.line_number += 1;

        for line in [&mut self.line2, &mut self.line3, &mut self.line4] {
            let n = self.reader.read_line(line)?;
            if n == 0 {
                // Stream exhausted mid-record: total line count is not a
                // multiple of 4
                return Err(QcError::TruncatedFile {
                    line_count: self.line_number,
                    complete_records: self.records_read,
                });
            }
            self.line_number += 1;
        }

        let record = FastqRecord {
            header: trim_line_ending(&self.line1).to_string(),
            sequence: trim_line_ending(&self.line2).as_bytes().to_vec(),
            separator: trim_line_ending(&self.line3).to_string(),
            quality: trim_line_ending(&self.line4).as_bytes().to_vec(),
        };

        self.records_read += 1;
        Ok(Some(record))
    }
}

impl<R: BufRead> Iterator for FastqStream<R> {
    type Item = Result<FastqRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        match self.read_record() {
            Ok(Some(record)) => Some(Ok(record)),
            Ok(None) => {
                self.finished = true;
                None
            }
            Err(e) => {
                self.finished = true;
                Some(Err(e))
            }
        }
    }
}

/// Strip one trailing LF and a preceding CR if present
///
/// Not `trim_end`: quality strings may not contain whitespace, but trimming
/// arbitrary trailing whitespace would silently change a malformed line's
/// length before the validator sees it.
fn trim_line_ending(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

/// Count physical lines without parsing records
///
/// A final line without a trailing newline still counts. Used by the fast
/// read-count tier (see [`count_reads`](crate::validate::count_reads)).
pub(crate) fn count_physical_lines<R: BufRead>(mut reader: R) -> Result<u64> {
    let mut lines = 0u64;
    let mut last_byte_was_newline = true;

    loop {
        let buf = reader.fill_buf()?;
        if buf.is_empty() {
            break;
        }
        lines += buf.iter().filter(|&&b| b == b'\n').count() as u64;
        last_byte_was_newline = buf[buf.len() - 1] == b'\n';
        let len = buf.len();
        reader.consume(len);
    }

    if !last_byte_was_newline {
        lines += 1;
    }

    Ok(lines)
}
