//! Mutating operations: delete, insert, replace and remove.
//!
//! Each operation edits the array in place and returns the same handle, so
//! edits chain with `?`:
//!
//! ```
//! use chararray::{BoundsMode, CharArray};
//!
//! let mut array = CharArray::from("a-b-c");
//! array
//!     .remove_all('-')
//!     .insert(3, '!', BoundsMode::Strict)?
//!     .replace_range(0, 1, 'A', BoundsMode::Strict)?;
//! assert_eq!(array.to_string(), "Abc!");
//! # Ok::<(), chararray::Error>(())
//! ```

use crate::chars::array::CharArray;
use crate::chars::range::{BoundsMode, CharRange};
use crate::error::{Error, Result};

impl CharArray {
    /// Delete a slice, closing the gap.
    pub fn delete(&mut self, index: isize, count: isize, mode: BoundsMode) -> Result<&mut Self> {
        let range = CharRange::from_slice(index, count);
        self.delete_range(range.from, range.to, mode)
    }

    /// Delete `[from, to)`. Following characters shift left and the array
    /// shrinks by the range length.
    pub fn delete_range(&mut self, from: isize, to: isize, mode: BoundsMode) -> Result<&mut Self> {
        let range = self.resolve(CharRange::new(from, to), mode)?;
        self.chars_mut().drain(range);
        Ok(self)
    }

    /// Insert `ch` at `index`, shifting the rest right by one.
    ///
    /// `index` may equal the length to append. Clamped mode clamps `index`
    /// into `[0, len]`.
    pub fn insert(&mut self, index: isize, ch: char, mode: BoundsMode) -> Result<&mut Self> {
        let len = self.len();
        let position = match mode {
            BoundsMode::Clamped => index.clamp(0, len as isize) as usize,
            BoundsMode::Strict => {
                if index < 0 || index > len as isize {
                    return Err(Error::OutOfBounds {
                        from: index,
                        to: index,
                        len,
                    });
                }
                index as usize
            }
        };
        self.chars_mut().insert(position, ch);
        Ok(self)
    }

    /// Overwrite every slot of a slice with `ch`.
    pub fn replace(
        &mut self,
        index: isize,
        count: isize,
        ch: char,
        mode: BoundsMode,
    ) -> Result<&mut Self> {
        let range = CharRange::from_slice(index, count);
        self.replace_range(range.from, range.to, ch, mode)
    }

    /// Overwrite every slot of `[from, to)` with `ch`. The length is unchanged.
    pub fn replace_range(
        &mut self,
        from: isize,
        to: isize,
        ch: char,
        mode: BoundsMode,
    ) -> Result<&mut Self> {
        let range = self.resolve(CharRange::new(from, to), mode)?;
        self.chars_mut()[range].fill(ch);
        Ok(self)
    }

    /// Remove every `target` within a slice.
    pub fn remove(
        &mut self,
        index: isize,
        count: isize,
        target: char,
        mode: BoundsMode,
    ) -> Result<&mut Self> {
        let range = CharRange::from_slice(index, count);
        self.remove_range(range.from, range.to, target, mode)
    }

    /// Remove every `target` within `[from, to)`.
    ///
    /// Characters outside the range are kept whatever their value; everything
    /// after a removed slot shifts left to close the gap.
    pub fn remove_range(
        &mut self,
        from: isize,
        to: isize,
        target: char,
        mode: BoundsMode,
    ) -> Result<&mut Self> {
        let range = self.resolve(CharRange::new(from, to), mode)?;
        let mut index = 0;
        self.chars_mut().retain(|&c| {
            let doomed = c == target && range.contains(&index);
            index += 1;
            !doomed
        });
        Ok(self)
    }

    /// Remove every `target` in the whole array.
    pub fn remove_all(&mut self, target: char) -> &mut Self {
        self.chars_mut().retain(|&c| c != target);
        self
    }
}
