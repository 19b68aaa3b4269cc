use std::fmt;
use thiserror::Error;

/// Input field a validation failure refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Sequence,
    Quality,
    Score,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Field::Sequence => "sequence",
            Field::Quality => "quality",
            Field::Score => "score",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("score {score} outside [0, 93]")]
    ScoreOutOfRange { score: u8 },
    #[error("{field} contains non-printable byte 0x{byte:02X} at position {pos}")]
    NotPrintable { field: Field, pos: usize, byte: u8 },
    #[error("quality length ({qual}) does not match sequence length ({seq})")]
    LengthMismatch { seq: usize, qual: usize },
}

impl ValidationError {
    /// The offending input field.
    pub fn field(&self) -> Field {
        match self {
            Self::ScoreOutOfRange { .. } => Field::Score,
            Self::NotPrintable { field, .. } => *field,
            Self::LengthMismatch { .. } => Field::Quality,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodingError {
    #[error(
        "unrecognized quality character 0x{byte:02X} at position {pos}; wrong encoding or already-Sanger input"
    )]
    UnrecognizedChar { pos: usize, byte: u8 },
    #[error("score {score} outside [0, 93]")]
    ScoreOutOfRange { score: u8 },
    #[error("byte 0x{byte:02X} at position {pos} is not a Sanger quality character")]
    NotSanger { pos: usize, byte: u8 },
}

#[derive(Debug, Error)]
pub enum TrimError {
    #[error("invalid read: {0}")]
    Validation(#[from] ValidationError),
    #[error("encoding error: {0}")]
    Encoding(#[from] EncodingError),
}
