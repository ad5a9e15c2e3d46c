//! Error types for character array decoding and editing.

use std::fmt;
use std::io;

/// Result type alias for chararray operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for chararray operations.
///
/// Clamped-mode editing never produces an error; every variant except `Io`
/// comes from a strict-mode call or a strict decode.
#[derive(Debug)]
pub enum Error {
    /// I/O error while reading a byte source.
    Io(io::Error),
    /// Range reaches outside `[0, len]` of the array.
    OutOfBounds { from: isize, to: isize, len: usize },
    /// Range with `from > to`.
    InvertedRange { from: isize, to: isize },
    /// Declared character count differs from what the bytes decode to.
    LengthMismatch { declared: usize, decoded: usize },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OutOfBounds { from, to, len } => {
                write!(f, "range [{from}, {to}) out of bounds for array of length {len}")
            }
            Self::InvertedRange { from, to } => {
                write!(f, "inverted range [{from}, {to}): from is greater than to")
            }
            Self::LengthMismatch { declared, decoded } => {
                write!(
                    f,
                    "declared length {declared} does not match decoded length {decoded}"
                )
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}
