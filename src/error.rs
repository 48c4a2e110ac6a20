use crate::record::RecordLine;
use std::io;
use thiserror::Error;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IoContext {
    pub byte_pos: u64,
    pub line_num: u64,
}

#[derive(Debug, Error)]
pub enum FormatError {
    /// A 4-line cycle started but the input ended before it was complete.
    #[error("incomplete record: {missing} line missing at end of input")]
    MalformedRecord { missing: RecordLine },
    /// Total line count is not a multiple of four.
    #[error("bad read count from {lines} lines: not a FASTQ file, or file is truncated/corrupted")]
    MalformedFile { lines: u64 },
}

#[derive(Debug, Error)]
pub enum FastqError {
    #[error("I/O error at {ctx:?}: {source}")]
    Io {
        #[source]
        source: io::Error,
        ctx: IoContext,
    },
    #[error("format error at {ctx:?}: {source}")]
    Format {
        #[source]
        source: FormatError,
        ctx: IoContext,
    },
}

impl FastqError {
    pub(crate) fn io_err(source: io::Error, ctx: IoContext) -> Self {
        Self::Io { source, ctx }
    }
    pub(crate) fn fmt_err(source: FormatError, ctx: IoContext) -> Self {
        Self::Format { source, ctx }
    }

    pub fn is_malformed_record(&self) -> bool {
        matches!(
            self,
            Self::Format {
                source: FormatError::MalformedRecord { .. },
                ..
            }
        )
    }

    pub fn is_malformed_file(&self) -> bool {
        matches!(
            self,
            Self::Format {
                source: FormatError::MalformedFile { .. },
                ..
            }
        )
    }
}
