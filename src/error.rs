//! Error types for run-sequence operations.

use std::fmt;

/// Result type alias for richrun operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for richrun operations.
///
/// Every variant is a caller contract violation: positions and ranges must
/// lie within `[0, flattened length]` of the sequence they are applied to.
/// The core never clamps them into range.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// Position past the end of the sequence.
    PositionOutOfBounds { position: usize, len: usize },
    /// Range reaching past the end of the sequence.
    RangeOutOfBounds { start: usize, end: usize, len: usize },
    /// Range with `start > end`.
    InvertedRange { start: usize, end: usize },
    /// Position lookup against a sequence with no runs.
    EmptySequence,
    /// Insertion strictly inside a run that cannot hold typed text.
    InsideAtomicRun { position: usize },
    /// Scanner consumed past the end of its buffer.
    ScannerExhausted { cursor: usize },
    /// Scanner moved back from the start of its buffer.
    ScannerUnderflow,
    /// Content edit requested without a caret or selection.
    NoSelection,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PositionOutOfBounds { position, len } => {
                write!(f, "position {position} out of bounds for length {len}")
            }
            Self::RangeOutOfBounds { start, end, len } => {
                write!(f, "range {start}..{end} out of bounds for length {len}")
            }
            Self::InvertedRange { start, end } => {
                write!(f, "inverted range: start {start} is after end {end}")
            }
            Self::EmptySequence => write!(f, "position lookup on an empty sequence"),
            Self::InsideAtomicRun { position } => {
                write!(f, "position {position} is inside an atomic run")
            }
            Self::ScannerExhausted { cursor } => {
                write!(f, "scanner exhausted at cursor {cursor}")
            }
            Self::ScannerUnderflow => write!(f, "scanner cursor moved before start"),
            Self::NoSelection => write!(f, "content edit requires a caret or selection"),
        }
    }
}

impl std::error::Error for Error {}
