//! Read-only operations: joining, counting and searching.

use crate::chars::array::CharArray;
use crate::chars::range::{BoundsMode, CharRange};
use crate::error::Result;

impl CharArray {
    /// Join the characters of a slice into a `String`.
    pub fn join(&self, index: isize, count: isize, mode: BoundsMode) -> Result<String> {
        let range = CharRange::from_slice(index, count);
        self.join_range(range.from, range.to, mode)
    }

    /// Join the characters of `[from, to)` into a `String`.
    pub fn join_range(&self, from: isize, to: isize, mode: BoundsMode) -> Result<String> {
        let range = self.resolve(CharRange::new(from, to), mode)?;
        Ok(self[range].iter().collect())
    }

    /// Count the slots of a slice equal to `target`.
    pub fn count(
        &self,
        index: isize,
        count: isize,
        target: char,
        mode: BoundsMode,
    ) -> Result<usize> {
        let range = CharRange::from_slice(index, count);
        self.count_range(range.from, range.to, target, mode)
    }

    /// Count the slots of `[from, to)` equal to `target`.
    pub fn count_range(
        &self,
        from: isize,
        to: isize,
        target: char,
        mode: BoundsMode,
    ) -> Result<usize> {
        let range = self.resolve(CharRange::new(from, to), mode)?;
        Ok(self[range].iter().filter(|&&c| c == target).count())
    }

    /// Index of the first `target` in a slice.
    pub fn find(
        &self,
        index: isize,
        count: isize,
        target: char,
        mode: BoundsMode,
    ) -> Result<Option<usize>> {
        let range = CharRange::from_slice(index, count);
        self.find_range(range.from, range.to, target, mode)
    }

    /// Index of the first `target` in `[from, to)`, scanning left to right.
    pub fn find_range(
        &self,
        from: isize,
        to: isize,
        target: char,
        mode: BoundsMode,
    ) -> Result<Option<usize>> {
        let range = self.resolve(CharRange::new(from, to), mode)?;
        let start = range.start;
        Ok(self[range]
            .iter()
            .position(|&c| c == target)
            .map(|offset| start + offset))
    }

    /// Index of the last `target` in a slice.
    pub fn find_last(
        &self,
        index: isize,
        count: isize,
        target: char,
        mode: BoundsMode,
    ) -> Result<Option<usize>> {
        let range = CharRange::from_slice(index, count);
        self.find_last_range(range.from, range.to, target, mode)
    }

    /// Index of the last `target` in `[from, to)`, scanning right to left.
    pub fn find_last_range(
        &self,
        from: isize,
        to: isize,
        target: char,
        mode: BoundsMode,
    ) -> Result<Option<usize>> {
        let range = self.resolve(CharRange::new(from, to), mode)?;
        let start = range.start;
        Ok(self[range]
            .iter()
            .rposition(|&c| c == target)
            .map(|offset| start + offset))
    }

    /// First position in a slice holding any of `targets`.
    pub fn find_any(
        &self,
        index: isize,
        count: isize,
        targets: &[char],
        mode: BoundsMode,
    ) -> Result<Option<(usize, char)>> {
        let range = CharRange::from_slice(index, count);
        self.find_any_range(range.from, range.to, targets, mode)
    }

    /// First position in `[from, to)` holding any of `targets`.
    ///
    /// Position wins over target order: the leftmost matching slot is
    /// returned even if a target listed earlier matches further right.
    ///
    /// ```
    /// use chararray::{BoundsMode, CharArray};
    ///
    /// let array = CharArray::from("xyz");
    /// let hit = array.find_any_range(0, 3, &['z', 'y'], BoundsMode::Strict).unwrap();
    /// assert_eq!(hit, Some((1, 'y')));
    /// ```
    pub fn find_any_range(
        &self,
        from: isize,
        to: isize,
        targets: &[char],
        mode: BoundsMode,
    ) -> Result<Option<(usize, char)>> {
        let range = self.resolve(CharRange::new(from, to), mode)?;
        let start = range.start;
        for (offset, &c) in self[range].iter().enumerate() {
            if let Some(&matched) = targets.iter().find(|&&t| t == c) {
                return Ok(Some((start + offset, matched)));
            }
        }
        Ok(None)
    }
}
