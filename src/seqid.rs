//! Sequence identifier (first FASTQ line) classification.
//!
//! Two Illumina layouts are decomposed into fields:
//!
//! - Illumina 1.8+: `@EAS139:136:FC706VJ:2:2104:15343:197393 1:Y:18:ATCACG`
//! - Illumina 1.3/1.5: `@HWUSI-EAS100R:6:73:941:1973#0/1`
//!
//! Anything else is kept verbatim as [`SequenceIdentifier::Unrecognized`].
//! Formatting a parsed identifier with `Display` reproduces the input line.

use std::borrow::Cow;
use std::fmt;

/// Which identifier grammar a line matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IdFormat {
    /// Illumina 1.8+.
    Illumina18,
    /// Illumina 1.3 and 1.5.
    Illumina,
    Unrecognized,
}

/// Fields of an Illumina 1.8+ identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Illumina18Id {
    pub instrument_name: String,
    pub run_id: String,
    pub flowcell_id: String,
    pub flowcell_lane: String,
    pub tile_no: String,
    pub x_coord: String,
    pub y_coord: String,
    pub pair_id: String,
    pub bad_read: String,
    pub control_bit_flag: String,
    /// Barcode; empty (not absent) when the trailing field is blank.
    pub index_sequence: String,
}

/// Fields of a legacy Illumina 1.3/1.5 identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IlluminaId {
    pub instrument_name: String,
    pub flowcell_lane: String,
    pub tile_no: String,
    pub x_coord: String,
    pub y_coord: String,
    pub multiplex_index_no: String,
    pub pair_id: String,
}

/// A parsed sequence identifier line.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SequenceIdentifier {
    Illumina18(Illumina18Id),
    Illumina(IlluminaId),
    /// Trimmed input line that matched neither grammar.
    Unrecognized(String),
}

impl SequenceIdentifier {
    /// Classify an identifier line. Surrounding whitespace (including the
    /// line terminator) is ignored. Illumina 1.8+ is tried first.
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        if let Some(id) = match_illumina18(line) {
            Self::Illumina18(id)
        } else if let Some(id) = match_illumina(line) {
            Self::Illumina(id)
        } else {
            Self::Unrecognized(line.to_string())
        }
    }

    pub fn format(&self) -> IdFormat {
        match self {
            Self::Illumina18(_) => IdFormat::Illumina18,
            Self::Illumina(_) => IdFormat::Illumina,
            Self::Unrecognized(_) => IdFormat::Unrecognized,
        }
    }

    /// The identifier line as it was read (trimmed).
    pub fn raw(&self) -> Cow<'_, str> {
        match self {
            Self::Unrecognized(raw) => Cow::Borrowed(raw),
            _ => Cow::Owned(self.to_string()),
        }
    }

    pub fn instrument_name(&self) -> Option<&str> {
        match self {
            Self::Illumina18(id) => Some(&id.instrument_name),
            Self::Illumina(id) => Some(&id.instrument_name),
            Self::Unrecognized(_) => None,
        }
    }

    pub fn run_id(&self) -> Option<&str> {
        self.illumina18().map(|id| id.run_id.as_str())
    }

    pub fn flowcell_id(&self) -> Option<&str> {
        self.illumina18().map(|id| id.flowcell_id.as_str())
    }

    pub fn flowcell_lane(&self) -> Option<&str> {
        match self {
            Self::Illumina18(id) => Some(&id.flowcell_lane),
            Self::Illumina(id) => Some(&id.flowcell_lane),
            Self::Unrecognized(_) => None,
        }
    }

    pub fn tile_no(&self) -> Option<&str> {
        match self {
            Self::Illumina18(id) => Some(&id.tile_no),
            Self::Illumina(id) => Some(&id.tile_no),
            Self::Unrecognized(_) => None,
        }
    }

    pub fn x_coord(&self) -> Option<&str> {
        match self {
            Self::Illumina18(id) => Some(&id.x_coord),
            Self::Illumina(id) => Some(&id.x_coord),
            Self::Unrecognized(_) => None,
        }
    }

    pub fn y_coord(&self) -> Option<&str> {
        match self {
            Self::Illumina18(id) => Some(&id.y_coord),
            Self::Illumina(id) => Some(&id.y_coord),
            Self::Unrecognized(_) => None,
        }
    }

    pub fn multiplex_index_no(&self) -> Option<&str> {
        match self {
            Self::Illumina(id) => Some(&id.multiplex_index_no),
            _ => None,
        }
    }

    pub fn pair_id(&self) -> Option<&str> {
        match self {
            Self::Illumina18(id) => Some(&id.pair_id),
            Self::Illumina(id) => Some(&id.pair_id),
            Self::Unrecognized(_) => None,
        }
    }

    pub fn bad_read(&self) -> Option<&str> {
        self.illumina18().map(|id| id.bad_read.as_str())
    }

    pub fn control_bit_flag(&self) -> Option<&str> {
        self.illumina18().map(|id| id.control_bit_flag.as_str())
    }

    pub fn index_sequence(&self) -> Option<&str> {
        self.illumina18().map(|id| id.index_sequence.as_str())
    }

    #[inline]
    fn illumina18(&self) -> Option<&Illumina18Id> {
        match self {
            Self::Illumina18(id) => Some(id),
            _ => None,
        }
    }
}

impl From<&str> for SequenceIdentifier {
    fn from(line: &str) -> Self {
        Self::parse(line)
    }
}

impl fmt::Display for SequenceIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Illumina18(id) => write!(
                f,
                "@{}:{}:{}:{}:{}:{}:{} {}:{}:{}:{}",
                id.instrument_name,
                id.run_id,
                id.flowcell_id,
                id.flowcell_lane,
                id.tile_no,
                id.x_coord,
                id.y_coord,
                id.pair_id,
                id.bad_read,
                id.control_bit_flag,
                id.index_sequence
            ),
            Self::Illumina(id) => write!(
                f,
                "@{}:{}:{}:{}:{}#{}/{}",
                id.instrument_name,
                id.flowcell_lane,
                id.tile_no,
                id.x_coord,
                id.y_coord,
                id.multiplex_index_no,
                id.pair_id
            ),
            Self::Unrecognized(raw) => f.write_str(raw),
        }
    }
}

/// `@inst:run:flowcell:lane:tile:x:y pair:bad:ctrl:index`
///
/// The first six fields are any non-empty text without `:`. `y` runs up to
/// the first space and may contain neither `:` nor a space. After the space
/// come three non-empty `:`-terminated fields; the index is the rest of the
/// line and may be empty or contain `:`.
fn match_illumina18(line: &str) -> Option<Illumina18Id> {
    let body = line.strip_prefix('@')?;
    let mut head = body.splitn(7, ':');
    let mut next_field = || head.next().filter(|s| !s.is_empty());
    let instrument_name = next_field()?;
    let run_id = next_field()?;
    let flowcell_id = next_field()?;
    let flowcell_lane = next_field()?;
    let tile_no = next_field()?;
    let x_coord = next_field()?;
    let rest = head.next()?;

    let (y_coord, tail) = rest.split_once(' ')?;
    if y_coord.is_empty() || y_coord.contains(':') {
        return None;
    }

    let tail: Vec<&str> = tail.splitn(4, ':').collect();
    let [pair_id, bad_read, control_bit_flag, index_sequence] = tail.as_slice() else {
        return None;
    };
    if pair_id.is_empty() || bad_read.is_empty() || control_bit_flag.is_empty() {
        return None;
    }

    Some(Illumina18Id {
        instrument_name: instrument_name.to_string(),
        run_id: run_id.to_string(),
        flowcell_id: flowcell_id.to_string(),
        flowcell_lane: flowcell_lane.to_string(),
        tile_no: tile_no.to_string(),
        x_coord: x_coord.to_string(),
        y_coord: y_coord.to_string(),
        pair_id: pair_id.to_string(),
        bad_read: bad_read.to_string(),
        control_bit_flag: control_bit_flag.to_string(),
        index_sequence: index_sequence.to_string(),
    })
}

/// `@inst:lane:tile:x:y#m/pair`
///
/// The first four fields are non-empty text without `:`; `y` is non-empty
/// text without `#`. `m` is a single character other than `/`, and `pair`
/// is the non-empty remainder of the line.
fn match_illumina(line: &str) -> Option<IlluminaId> {
    let body = line.strip_prefix('@')?;
    let mut head = body.splitn(5, ':');
    let mut next_field = || head.next().filter(|s| !s.is_empty());
    let instrument_name = next_field()?;
    let flowcell_lane = next_field()?;
    let tile_no = next_field()?;
    let x_coord = next_field()?;
    let rest = head.next()?;

    let (y_coord, tail) = rest.split_once('#')?;
    if y_coord.is_empty() {
        return None;
    }

    let mut chars = tail.chars();
    let multiplex = chars.next().filter(|&c| c != '/')?;
    let pair_id = chars.as_str().strip_prefix('/')?;
    if pair_id.is_empty() {
        return None;
    }

    Some(IlluminaId {
        instrument_name: instrument_name.to_string(),
        flowcell_lane: flowcell_lane.to_string(),
        tile_no: tile_no.to_string(),
        x_coord: x_coord.to_string(),
        y_coord: y_coord.to_string(),
        multiplex_index_no: multiplex.to_string(),
        pair_id: pair_id.to_string(),
    })
}
