use crate::error::FormatError;
use crate::seqid::SequenceIdentifier;
use std::fmt;

/// Position of a line within a 4-line FASTQ record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordLine {
    Identifier,
    Sequence,
    SecondaryId,
    Quality,
}

impl fmt::Display for RecordLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Identifier => "sequence identifier",
            Self::Sequence => "sequence",
            Self::SecondaryId => "'+' separator",
            Self::Quality => "quality",
        })
    }
}

/// One FASTQ read record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FastqRead {
    pub seqid: SequenceIdentifier,
    pub sequence: String,
    /// Third line, including the leading `+`.
    pub optid: String,
    pub quality: String,
}

impl FastqRead {
    /// Build a record from the four raw lines of one cycle, each still
    /// carrying its line terminator. A zero-length line means the input ran
    /// out before the cycle was complete.
    pub fn from_lines(
        seqid_line: &str,
        seq_line: &str,
        optid_line: &str,
        quality_line: &str,
    ) -> Result<Self, FormatError> {
        let lines = [
            (RecordLine::Identifier, seqid_line),
            (RecordLine::Sequence, seq_line),
            (RecordLine::SecondaryId, optid_line),
            (RecordLine::Quality, quality_line),
        ];
        if let Some(&(missing, _)) = lines.iter().find(|(_, l)| l.is_empty()) {
            return Err(FormatError::MalformedRecord { missing });
        }
        Ok(Self {
            seqid: SequenceIdentifier::parse(seqid_line),
            sequence: trim_line_terminator(seq_line).to_string(),
            optid: trim_line_terminator(optid_line).to_string(),
            quality: trim_line_terminator(quality_line).to_string(),
        })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.sequence.len()
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }
}

impl fmt::Display for FastqRead {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\n{}\n{}\n{}",
            self.seqid, self.sequence, self.optid, self.quality
        )
    }
}

/// Strip one trailing `\n` or `\r\n`, nothing else.
pub(crate) fn trim_line_terminator(line: &str) -> &str {
    match line.strip_suffix('\n') {
        Some(l) => l.strip_suffix('\r').unwrap_or(l),
        None => line,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_only_the_terminator() {
        assert_eq!(trim_line_terminator("ACGT\n"), "ACGT");
        assert_eq!(trim_line_terminator("ACGT\r\n"), "ACGT");
        assert_eq!(trim_line_terminator(" ACGT \n"), " ACGT ");
        assert_eq!(trim_line_terminator("ACGT"), "ACGT");
        assert_eq!(trim_line_terminator("ACGT\n\n"), "ACGT\n");
    }
}
