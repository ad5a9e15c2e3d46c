//! Range resolution shared by every editing operation.
//!
//! Operations accept either an absolute range `[from, to)` or a relative
//! slice `(index, count)`. A slice with a negative count extends backward
//! from `index`, so `(10, -3)` names the three characters ending at and
//! including position 10, i.e. `[8, 11)`.

use std::fmt;
use std::ops::Range;

use crate::error::{Error, Result};

/// How out-of-range addresses are handled.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BoundsMode {
    /// Out-of-range or inverted addresses fail with an error.
    Strict,
    /// `from` is clamped to `[0, len - 1]` and `to` to `[1, len]` before use.
    Clamped,
}

impl BoundsMode {
    #[must_use]
    pub fn is_clamped(self) -> bool {
        self == Self::Clamped
    }
}

impl From<bool> for BoundsMode {
    /// `true` selects the clamping ("safe") mode.
    fn from(safe: bool) -> Self {
        if safe { Self::Clamped } else { Self::Strict }
    }
}

/// A half-open range `[from, to)` over character indices.
///
/// Bounds are signed: slice resolution can produce negative positions, which
/// are rejected or clamped only when the range is applied to an array.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CharRange {
    pub from: isize,
    pub to: isize,
}

impl CharRange {
    /// Create an absolute range.
    #[must_use]
    pub const fn new(from: isize, to: isize) -> Self {
        Self { from, to }
    }

    /// Resolve a relative slice `(index, count)` into an absolute range.
    ///
    /// ```
    /// use chararray::CharRange;
    ///
    /// assert_eq!(CharRange::from_slice(2, 3), CharRange::new(2, 5));
    /// assert_eq!(CharRange::from_slice(10, -3), CharRange::new(8, 11));
    /// ```
    #[must_use]
    pub const fn from_slice(index: isize, count: isize) -> Self {
        if count >= 0 {
            Self::new(index, index.saturating_add(count))
        } else {
            Self::new(
                index.saturating_add(count).saturating_add(1),
                index.saturating_add(1),
            )
        }
    }

    /// Number of positions covered, zero when inverted.
    #[must_use]
    pub fn len(self) -> usize {
        self.to.saturating_sub(self.from).max(0) as usize
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.from >= self.to
    }

    /// Clamp against an array of length `len`.
    ///
    /// `from` lands in `[0, len - 1]` and `to` in `[1, len]`, independently.
    /// An empty array has no valid position at all and clamps to `[0, 0)`.
    #[must_use]
    pub fn clamp(self, len: usize) -> Self {
        if len == 0 {
            return Self::new(0, 0);
        }
        let len = len as isize;
        Self::new(self.from.clamp(0, len - 1), self.to.clamp(1, len))
    }

    /// Turn this range into indices valid for an array of length `len`.
    ///
    /// In clamped mode a range that is still inverted after clamping
    /// resolves to the empty range at `from`.
    pub fn resolve(self, len: usize, mode: BoundsMode) -> Result<Range<usize>> {
        match mode {
            BoundsMode::Clamped => {
                let clamped = self.clamp(len);
                let from = clamped.from as usize;
                Ok(from..(clamped.to as usize).max(from))
            }
            BoundsMode::Strict => {
                if self.from > self.to {
                    return Err(Error::InvertedRange {
                        from: self.from,
                        to: self.to,
                    });
                }
                if self.from < 0 || self.to > len as isize {
                    return Err(Error::OutOfBounds {
                        from: self.from,
                        to: self.to,
                        len,
                    });
                }
                Ok(self.from as usize..self.to as usize)
            }
        }
    }
}

impl From<Range<isize>> for CharRange {
    fn from(range: Range<isize>) -> Self {
        Self::new(range.start, range.end)
    }
}

impl fmt::Display for CharRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.from, self.to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_slice_positive_count() {
        assert_eq!(CharRange::from_slice(0, 0), CharRange::new(0, 0));
        assert_eq!(CharRange::from_slice(3, 4), CharRange::new(3, 7));
    }

    #[test]
    fn test_from_slice_negative_count() {
        assert_eq!(CharRange::from_slice(10, -3), CharRange::new(8, 11));
        assert_eq!(CharRange::from_slice(0, -1), CharRange::new(0, 1));
        assert_eq!(CharRange::from_slice(1, -5), CharRange::new(-3, 2));
    }

    #[test]
    fn test_from_slice_saturates() {
        let range = CharRange::from_slice(isize::MAX, 10);
        assert_eq!(range.to, isize::MAX);
    }

    #[test]
    fn test_len_and_empty() {
        assert_eq!(CharRange::new(2, 5).len(), 3);
        assert_eq!(CharRange::new(5, 2).len(), 0);
        assert!(CharRange::new(3, 3).is_empty());
        assert!(CharRange::new(4, 1).is_empty());
    }

    #[test]
    fn test_clamp_is_asymmetric() {
        // to never drops below 1, even for a range that was empty at 0.
        assert_eq!(CharRange::new(0, 0).clamp(5), CharRange::new(0, 1));
        assert_eq!(CharRange::new(-4, 99).clamp(5), CharRange::new(0, 5));
        // from never reaches len.
        assert_eq!(CharRange::new(5, 5).clamp(5), CharRange::new(4, 5));
    }

    #[test]
    fn test_clamp_empty_array() {
        assert_eq!(CharRange::new(-1, 3).clamp(0), CharRange::new(0, 0));
    }

    #[test]
    fn test_clamp_idempotent() {
        let once = CharRange::new(-7, 42).clamp(6);
        assert_eq!(once.clamp(6), once);
    }

    #[test]
    fn test_resolve_strict() {
        assert_eq!(CharRange::new(1, 3).resolve(4, BoundsMode::Strict).unwrap(), 1..3);
        assert_eq!(CharRange::new(4, 4).resolve(4, BoundsMode::Strict).unwrap(), 4..4);
        assert!(matches!(
            CharRange::new(-1, 2).resolve(4, BoundsMode::Strict),
            Err(Error::OutOfBounds { .. })
        ));
        assert!(matches!(
            CharRange::new(2, 5).resolve(4, BoundsMode::Strict),
            Err(Error::OutOfBounds { .. })
        ));
        assert!(matches!(
            CharRange::new(3, 1).resolve(4, BoundsMode::Strict),
            Err(Error::InvertedRange { from: 3, to: 1 })
        ));
    }

    #[test]
    fn test_resolve_clamped() {
        assert_eq!(CharRange::new(-3, 99).resolve(4, BoundsMode::Clamped).unwrap(), 0..4);
        assert_eq!(CharRange::new(3, 1).resolve(4, BoundsMode::Clamped).unwrap(), 3..3);
        assert_eq!(CharRange::new(0, 5).resolve(0, BoundsMode::Clamped).unwrap(), 0..0);
    }

    #[test]
    fn test_bounds_mode_from_bool() {
        assert_eq!(BoundsMode::from(true), BoundsMode::Clamped);
        assert_eq!(BoundsMode::from(false), BoundsMode::Strict);
        assert!(BoundsMode::Clamped.is_clamped());
    }

    #[test]
    fn test_display() {
        assert_eq!(CharRange::new(-2, 1).to_string(), "[-2, 1)");
        assert_eq!(CharRange::from(1..4), CharRange::new(1, 4));
    }
}
