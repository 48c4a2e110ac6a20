//! Streaming FASTQ reader with Illumina sequence identifier decomposition.
//!
//! - Plain and `.gz` input, chosen by file extension.
//! - Streaming, one 4-line record at a time (no full-file buffering).
//! - Identifier lines classified as Illumina 1.8+, Illumina 1.3/1.5 or
//!   unrecognized (kept verbatim).
//! - A truncated final record is an error, never silently dropped.
//! - Fast read counting from line counts, without building records.

pub mod count;
pub mod error;
pub mod reader;
pub mod record;
pub mod seqid;
mod util;

pub use crate::count::{count_reads, count_reads_from};
pub use crate::error::{FastqError, FormatError, IoContext};
pub use crate::reader::{FastqReader, Source};
pub use crate::record::{FastqRead, RecordLine};
pub use crate::seqid::{IdFormat, Illumina18Id, IlluminaId, SequenceIdentifier};
