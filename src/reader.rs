use crate::error::{FastqError, IoContext};
use crate::record::FastqRead;
use crate::util::open_path;

use std::io::{self, BufRead};
use std::iter::FusedIterator;
use std::path::{Path, PathBuf};

/// Where a reader's input came from, which also decides who closes it.
#[derive(Debug)]
pub enum Source {
    /// Opened by the reader from this path; released at end of input,
    /// on error, or on [`FastqReader::close`].
    Path(PathBuf),
    /// Handed in by the caller; never released by the reader.
    Reader,
}

/// Streaming FASTQ reader (plain/.gz) yielding one [`FastqRead`] per
/// 4-line cycle, in input order.
pub struct FastqReader<'a> {
    src: Source,
    rdr: Option<Box<dyn BufRead + Send + 'a>>,
    lines: [String; 4],
    line_num: u64,
    byte_pos: u64,
    nreads: u64,
    done: bool,
}

impl FastqReader<'static> {
    /// Open from a file path. `.gz` is decompressed, decided by extension.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, FastqError> {
        let path = path.as_ref();
        let rdr = open_path(path).map_err(|e| FastqError::io_err(e, IoContext::default()))?;
        Ok(Self::new(Source::Path(path.to_path_buf()), rdr))
    }
}

impl<'a> FastqReader<'a> {
    /// Wrap an already-open `BufRead` (stdin, a cursor, `&mut` of a reader
    /// the caller keeps using afterwards, ...). The reader is never closed
    /// by the stream.
    pub fn from_bufread<R: BufRead + Send + 'a>(reader: R) -> Self {
        Self::new(Source::Reader, Box::new(reader))
    }

    fn new(src: Source, rdr: Box<dyn BufRead + Send + 'a>) -> Self {
        Self {
            src,
            rdr: Some(rdr),
            lines: Default::default(),
            line_num: 0,
            byte_pos: 0,
            nreads: 0,
            done: false,
        }
    }

    pub fn source(&self) -> &Source {
        &self.src
    }

    /// Whether the reader opened its input itself.
    pub fn is_owned(&self) -> bool {
        matches!(self.src, Source::Path(_))
    }

    /// Records yielded so far.
    pub fn records_read(&self) -> u64 {
        self.nreads
    }

    /// Iterator-style `next` record. After the end of input or the first
    /// error, always `None`.
    pub fn next(&mut self) -> Option<Result<FastqRead, FastqError>> {
        if self.done {
            return None;
        }
        match self.read_one() {
            Ok(Some(rec)) => {
                self.nreads += 1;
                Some(Ok(rec))
            }
            Ok(None) => {
                self.close();
                None
            }
            Err(err) => {
                self.close();
                Some(Err(err))
            }
        }
    }

    /// Stop reading. An input opened from a path is released here; a
    /// handed-in reader is left alone.
    pub fn close(&mut self) {
        self.done = true;
        if let Source::Path(path) = &self.src {
            if self.rdr.take().is_some() {
                log::debug!(
                    "closed {} after {} reads",
                    path.display(),
                    self.nreads
                );
            }
        }
    }

    fn read_line(&mut self, idx: usize) -> io::Result<usize> {
        let Some(rdr) = self.rdr.as_mut() else {
            return Ok(0);
        };
        let n = rdr.read_line(&mut self.lines[idx])?;
        if n > 0 {
            self.line_num += 1;
            self.byte_pos += n as u64;
        }
        Ok(n)
    }

    fn read_one(&mut self) -> Result<Option<FastqRead>, FastqError> {
        for line in &mut self.lines {
            line.clear();
        }

        let n = self
            .read_line(0)
            .map_err(|e| FastqError::io_err(e, self.ctx()))?;
        if n == 0 {
            return Ok(None);
        }
        for idx in 1..4 {
            let n = self
                .read_line(idx)
                .map_err(|e| FastqError::io_err(e, self.ctx()))?;
            if n == 0 {
                break;
            }
        }

        let [seqid, seq, optid, qual] = &self.lines;
        FastqRead::from_lines(seqid, seq, optid, qual)
            .map(Some)
            .map_err(|e| {
                log::warn!("stopping at malformed record after {} reads: {e}", self.nreads);
                FastqError::fmt_err(e, self.ctx())
            })
    }

    #[inline]
    fn ctx(&self) -> IoContext {
        IoContext {
            byte_pos: self.byte_pos,
            line_num: self.line_num,
        }
    }
}

impl Iterator for FastqReader<'_> {
    type Item = Result<FastqRead, FastqError>;
    fn next(&mut self) -> Option<Self::Item> {
        FastqReader::next(self)
    }
}

impl FusedIterator for FastqReader<'_> {}
