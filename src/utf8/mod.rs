//! UTF-8 decoding into character arrays.
//!
//! The decoder trusts its input: malformed sequences are neither detected
//! nor repaired, they simply decode to whatever the bit assembly produces.
//! Assembled values that are not Unicode scalar values become U+FFFD.

mod decoder;
mod lead;

pub use decoder::{
    CodePoints, DecodeOptions, LengthCheck, code_points, decode, decode_reader, decode_str,
    decode_with,
};
pub use lead::{MAX_LEAD_PROBES, code_point_count, is_continuation, lead_width};
