//! Read counting without building records.

use crate::error::{FastqError, FormatError, IoContext};
use crate::util::open_path;

use std::io::{self, Read};
use std::path::Path;

/// Bytes read per chunk while counting lines.
pub const COUNT_CHUNK_SIZE: usize = 1024 * 1024;

/// Number of reads in a FASTQ(.gz) file, computed as line count / 4.
///
/// The file is opened and closed here; `.gz` is decompressed, decided by
/// extension. Fails with [`FormatError::MalformedFile`] when the number of
/// lines is not a multiple of four.
pub fn count_reads<P: AsRef<Path>>(path: P) -> Result<u64, FastqError> {
    let path = path.as_ref();
    let mut rdr = open_path(path).map_err(|e| FastqError::io_err(e, IoContext::default()))?;
    let n = count_reads_from(&mut rdr)?;
    log::debug!("{}: {n} reads", path.display());
    Ok(n)
}

/// Like [`count_reads`] for an already-open reader, consumed from its
/// current position to the end. The reader is left open.
pub fn count_reads_from<R: Read + ?Sized>(reader: &mut R) -> Result<u64, FastqError> {
    let mut buf = vec![0u8; COUNT_CHUNK_SIZE];
    let mut lines = 0u64;
    let mut bytes = 0u64;
    loop {
        let n = match reader.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => {
                return Err(FastqError::io_err(
                    e,
                    IoContext {
                        byte_pos: bytes,
                        line_num: lines,
                    },
                ));
            }
        };
        lines += memchr::memchr_iter(b'\n', &buf[..n]).count() as u64;
        bytes += n as u64;
    }
    log::debug!("counted {lines} lines in {bytes} bytes");

    if lines % 4 != 0 {
        return Err(FastqError::fmt_err(
            FormatError::MalformedFile { lines },
            IoContext {
                byte_pos: bytes,
                line_num: lines,
            },
        ));
    }
    Ok(lines / 4)
}
