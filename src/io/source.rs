//! Local file access with compression autodetection
//!
//! FASTQ files arrive either plain or gzip-compressed (SRA delivers
//! `.fastq.gz`), so every reader in this crate goes through
//! [`CompressedReader`]: it sniffs the gzip magic bytes on the open stream and
//! decompresses transparently when they are present. Large local files are
//! memory-mapped; small ones use standard buffered I/O where mmap overhead
//! dominates.

use crate::error::{QcError, Result};
use flate2::read::MultiGzDecoder;
use memmap2::Mmap;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::Path;

/// Memory-mapped file threshold (50 MB)
///
/// Below this size the cost of establishing the mapping outweighs the
/// sequential-read benefit.
pub const MMAP_THRESHOLD: u64 = 50 * 1024 * 1024;

/// Buffered reader over a local file with transparent gzip decompression
///
/// # Example
///
/// ```no_run
/// use fastq_qc::io::CompressedReader;
/// use std::io::BufRead;
///
/// # fn main() -> fastq_qc::Result<()> {
/// let mut reader = CompressedReader::from_path("sample.fastq.gz")?;
/// let mut line = String::new();
/// reader.read_line(&mut line)?;
/// # Ok(())
/// # }
/// ```
pub struct CompressedReader {
    inner: Box<dyn BufRead + Send>,
}

impl CompressedReader {
    /// Open a local file, decompressing if the gzip magic bytes are present
    ///
    /// Fails with [`QcError::FileNotFound`] when the path does not exist or
    /// cannot be read.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut reader = open_local_file(path.as_ref())?;

        // Peek at the first two bytes to detect gzip (ID1=31, ID2=139)
        let is_gzipped = {
            let peeked = reader.fill_buf()?;
            peeked.len() >= 2 && peeked[0] == 31 && peeked[1] == 139
        };

        let inner: Box<dyn BufRead + Send> = if is_gzipped {
            // MultiGzDecoder handles multi-member archives (bgzip output
            // is a sequence of independent gzip members)
            Box::new(BufReader::new(MultiGzDecoder::new(reader)))
        } else {
            reader
        };

        Ok(Self { inner })
    }
}

impl Read for CompressedReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.inner.read(buf)
    }
}

impl BufRead for CompressedReader {
    fn fill_buf(&mut self) -> io::Result<&[u8]> {
        self.inner.fill_buf()
    }

    fn consume(&mut self, amt: usize) {
        self.inner.consume(amt)
    }
}

/// Open a local file, choosing the I/O method by file size
fn open_local_file(path: &Path) -> Result<Box<dyn BufRead + Send>> {
    let metadata = std::fs::metadata(path).map_err(|e| not_found_or_io(e, path))?;

    if metadata.len() >= MMAP_THRESHOLD {
        open_mmap_file(path)
    } else {
        let file = File::open(path).map_err(|e| not_found_or_io(e, path))?;
        Ok(Box::new(BufReader::new(file)))
    }
}

fn not_found_or_io(e: io::Error, path: &Path) -> QcError {
    if e.kind() == io::ErrorKind::NotFound {
        QcError::FileNotFound {
            path: path.to_path_buf(),
        }
    } else {
        QcError::Io(e)
    }
}

/// Open file with memory mapping and sequential-access hints
#[cfg(target_os = "macos")]
fn open_mmap_file(path: &Path) -> Result<Box<dyn BufRead + Send>> {
    use libc::{madvise, MADV_SEQUENTIAL, MADV_WILLNEED};

    let file = File::open(path).map_err(|e| not_found_or_io(e, path))?;
    let mmap = unsafe { Mmap::map(&file)? };

    unsafe {
        madvise(
            mmap.as_ptr() as *mut _,
            mmap.len(),
            MADV_SEQUENTIAL | MADV_WILLNEED,
        );
    }

    Ok(Box::new(io::Cursor::new(mmap)))
}

#[cfg(not(target_os = "macos"))]
fn open_mmap_file(path: &Path) -> Result<Box<dyn BufRead + Send>> {
    let file = File::open(path).map_err(|e| not_found_or_io(e, path))?;
    let mmap = unsafe { Mmap::map(&file)? };
    Ok(Box::new(io::Cursor::new(mmap)))
}
