//! Whole-buffer UTF-8 decoding.

use std::io::Read;
use std::iter::FusedIterator;

use crate::chars::CharArray;
use crate::error::{Error, Result};
use crate::event::{LogLevel, emit_log};
use crate::utf8::lead::{MAX_LEAD_PROBES, code_point_count, lead_width, payload_mask};

/// How a declared length is checked against the decoded count.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LengthCheck {
    /// Keep what was decoded; a mismatch is only logged.
    #[default]
    Trust,
    /// Fail with [`Error::LengthMismatch`] on a mismatch.
    Strict,
}

/// Options for [`decode_with`] and [`decode_reader`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DecodeOptions {
    /// Expected number of code points. `None` pre-scans the bytes.
    pub declared_len: Option<usize>,
    pub length_check: LengthCheck,
}

impl DecodeOptions {
    /// Create options with a trusted, pre-scanned length.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the expected number of code points.
    #[must_use]
    pub fn with_declared_len(mut self, len: usize) -> Self {
        self.declared_len = Some(len);
        self
    }

    /// Set the length check policy.
    #[must_use]
    pub fn with_length_check(mut self, check: LengthCheck) -> Self {
        self.length_check = check;
        self
    }
}

/// Iterator over the code points of a UTF-8 byte buffer.
#[derive(Clone, Debug)]
pub struct CodePoints<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> CodePoints<'a> {
    /// Byte offset of the next lead byte.
    #[must_use]
    pub fn offset(&self) -> usize {
        self.pos.min(self.bytes.len())
    }

    /// Bytes not yet consumed.
    #[must_use]
    pub fn remaining(&self) -> &'a [u8] {
        &self.bytes[self.offset()..]
    }
}

impl Iterator for CodePoints<'_> {
    type Item = char;

    fn next(&mut self) -> Option<char> {
        let lead = *self.bytes.get(self.pos)?;
        let width = lead_width(lead);
        if width == 1 || width > 4 {
            emit_log(
                LogLevel::Debug,
                &format!("unsupported lead byte {lead:#04x} at offset {}", self.pos),
            );
        }

        // Always move forward, even on a width-0 (ASCII) lead.
        let advance = width.max(1);
        // Truncated sequences assemble from what is present.
        let end = (self.pos + advance).min(self.bytes.len());

        let mut code = u32::from(lead & payload_mask(width));
        for &byte in &self.bytes[self.pos + 1..end] {
            code = (code << 6) | u32::from(byte & 0x3F);
        }
        self.pos += advance;

        Some(char::from_u32(code).unwrap_or(char::REPLACEMENT_CHARACTER))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.bytes.len().saturating_sub(self.pos);
        // A 5-bit lead consumes five bytes per item.
        (remaining.div_ceil(MAX_LEAD_PROBES as usize), Some(remaining))
    }
}

impl FusedIterator for CodePoints<'_> {}

/// Iterate over the code points of a UTF-8 byte buffer.
#[must_use]
pub fn code_points(bytes: &[u8]) -> CodePoints<'_> {
    CodePoints { bytes, pos: 0 }
}

/// Decode a UTF-8 byte buffer into a character array.
///
/// `declared_len` pre-sizes the array and should equal the number of code
/// points in `bytes`. A mismatch is logged at `Warn` and the returned array
/// holds exactly what was decoded.
///
/// ```
/// use chararray::decode;
///
/// let chars = decode("A€🙂".as_bytes(), 3);
/// assert_eq!(chars.as_slice(), &['A', '€', '🙂']);
/// ```
#[must_use]
pub fn decode(bytes: &[u8], declared_len: usize) -> CharArray {
    let mut chars = Vec::with_capacity(declared_len);
    chars.extend(code_points(bytes));
    if chars.len() != declared_len {
        emit_log(
            LogLevel::Warn,
            &format!(
                "declared length {declared_len} but decoded {} code points from {} bytes",
                chars.len(),
                bytes.len()
            ),
        );
    }
    CharArray::from(chars)
}

/// Decode with explicit options.
pub fn decode_with(bytes: &[u8], options: &DecodeOptions) -> Result<CharArray> {
    let declared = options
        .declared_len
        .unwrap_or_else(|| code_point_count(bytes));
    let chars = decode(bytes, declared);

    if options.length_check == LengthCheck::Strict && chars.len() != declared {
        return Err(Error::LengthMismatch {
            declared,
            decoded: chars.len(),
        });
    }
    Ok(chars)
}

/// Decode a string slice, taking the length from a pre-scan.
#[must_use]
pub fn decode_str(s: &str) -> CharArray {
    let bytes = s.as_bytes();
    decode(bytes, code_point_count(bytes))
}

/// Read a byte source to the end, then decode it.
pub fn decode_reader<R: Read>(mut reader: R, options: &DecodeOptions) -> Result<CharArray> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    decode_with(&bytes, options)
}
