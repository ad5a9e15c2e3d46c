//! The decoded character array.

use std::fmt::{self, Write as _};
use std::ops::{Deref, Range};

use crate::chars::range::{BoundsMode, CharRange};
use crate::error::Result;

/// An ordered, 0-based array of decoded characters.
///
/// Reads go through `Deref<Target = [char]>`; writes go through the editing
/// operations, which mutate in place and hand back `&mut Self` so they can
/// be chained.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct CharArray {
    chars: Vec<char>,
}

impl CharArray {
    /// Create an empty array.
    #[must_use]
    pub fn new() -> Self {
        Self { chars: Vec::new() }
    }

    /// Create an empty array with room for `capacity` characters.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            chars: Vec::with_capacity(capacity),
        }
    }

    /// Build an array from the characters of a string.
    #[must_use]
    pub fn from_str(s: &str) -> Self {
        s.chars().collect()
    }

    /// Number of characters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[char] {
        &self.chars
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<char> {
        self.chars
    }

    /// Read a single character.
    ///
    /// Strict mode fails outside `[0, len)`. Clamped mode reads the nearest
    /// valid position and returns `None` only for an empty array.
    pub fn char_at(&self, index: isize, mode: BoundsMode) -> Result<Option<char>> {
        let range = self.resolve(CharRange::from_slice(index, 1), mode)?;
        Ok(self.chars.get(range.start).copied())
    }

    /// Resolve a range against this array's length.
    pub(crate) fn resolve(&self, range: CharRange, mode: BoundsMode) -> Result<Range<usize>> {
        range.resolve(self.chars.len(), mode)
    }

    pub(crate) fn chars_mut(&mut self) -> &mut Vec<char> {
        &mut self.chars
    }
}

impl Deref for CharArray {
    type Target = [char];

    fn deref(&self) -> &[char] {
        &self.chars
    }
}

impl AsRef<[char]> for CharArray {
    fn as_ref(&self) -> &[char] {
        &self.chars
    }
}

impl From<Vec<char>> for CharArray {
    fn from(chars: Vec<char>) -> Self {
        Self { chars }
    }
}

impl From<&str> for CharArray {
    fn from(s: &str) -> Self {
        Self::from_str(s)
    }
}

impl From<CharArray> for Vec<char> {
    fn from(array: CharArray) -> Self {
        array.chars
    }
}

impl FromIterator<char> for CharArray {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        Self {
            chars: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for CharArray {
    type Item = char;
    type IntoIter = std::vec::IntoIter<char>;

    fn into_iter(self) -> Self::IntoIter {
        self.chars.into_iter()
    }
}

impl<'a> IntoIterator for &'a CharArray {
    type Item = &'a char;
    type IntoIter = std::slice::Iter<'a, char>;

    fn into_iter(self) -> Self::IntoIter {
        self.chars.iter()
    }
}

impl fmt::Display for CharArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &c in &self.chars {
            f.write_char(c)?;
        }
        Ok(())
    }
}
