//! Lead-byte classification.

/// Maximum number of leading one-bits inspected in a lead byte.
///
/// A sixth leading one bit would describe a sequence longer than UTF-8
/// allows; such bytes classify as width 5 and decode to garbage.
pub const MAX_LEAD_PROBES: u32 = 5;

/// Encoded width announced by a lead byte.
///
/// Counts the leading one-bits: `0xxxxxxx` gives 0 (a single ASCII byte),
/// `110xxxxx` gives 2, `1110xxxx` gives 3, `11110xxx` gives 4. A stray
/// continuation byte `10xxxxxx` gives 1.
#[inline]
#[must_use]
pub fn lead_width(byte: u8) -> usize {
    byte.leading_ones().min(MAX_LEAD_PROBES) as usize
}

/// Check if a byte has the continuation form `10xxxxxx`.
#[inline]
#[must_use]
pub fn is_continuation(byte: u8) -> bool {
    byte & 0xC0 == 0x80
}

/// Mask selecting the payload bits of a lead byte of the given width.
///
/// Only multi-byte leads are masked; an ASCII byte or a stray continuation
/// byte is taken whole.
#[inline]
pub(crate) fn payload_mask(width: usize) -> u8 {
    if width <= 1 { 0xFF } else { 0xFF >> width }
}

/// Count the code points in a byte buffer without decoding them.
///
/// Every byte that is not a continuation byte starts a code point. For
/// well-formed UTF-8 this equals `str::chars().count()`.
#[must_use]
pub fn code_point_count(bytes: &[u8]) -> usize {
    bytes.iter().filter(|&&b| !is_continuation(b)).count()
}
