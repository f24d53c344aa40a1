//! I/O module: streaming FASTQ parsing and file access
//!
//! Reads are streamed record-by-record with constant memory regardless of
//! file size. Gzip-compressed input is decompressed transparently.

pub mod fastq;
pub mod source;

pub use fastq::FastqStream;
pub use source::{CompressedReader, MMAP_THRESHOLD};
