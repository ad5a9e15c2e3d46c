//! Fuzz target for the UTF-8 decoder.
//!
//! Tests that arbitrary bytes decode without panicking, and that valid
//! UTF-8 decodes exactly like the standard library.

#![no_main]

use chararray::{code_point_count, decode};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Malformed input yields garbage slots, never a panic
    let chars = decode(data, code_point_count(data));
    assert!(chars.len() <= data.len());

    if let Ok(text) = std::str::from_utf8(data) {
        let expected: Vec<char> = text.chars().collect();
        assert_eq!(chars.as_slice(), expected.as_slice());
    }
});
