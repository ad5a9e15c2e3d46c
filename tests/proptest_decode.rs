//! Property-based tests for UTF-8 decoding.
//!
//! Uses proptest to verify invariants that must hold across all valid inputs.

use chararray::{
    BoundsMode, DecodeOptions, LengthCheck, code_point_count, code_points, decode, decode_str,
    decode_with, lead_width,
};
use proptest::prelude::*;

// ============================================================================
// Strategies
// ============================================================================

/// Generate arbitrary UTF-8 strings (proptest default).
fn utf8_string() -> impl Strategy<Value = String> {
    "\\PC{0,100}"
}

/// Generate strings mixing every encoded width.
fn mixed_width_string() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop::sample::select(vec!['A', 'z', 'é', 'ß', '€', '中', '🙂', '𝄞']),
        0..50,
    )
    .prop_map(|chars| chars.into_iter().collect::<String>())
}

// ============================================================================
// Round Trip Properties
// ============================================================================

proptest! {
    /// Decoding then joining the full range reproduces the input.
    #[test]
    fn decode_join_round_trip(s in utf8_string()) {
        let n = s.chars().count();
        let chars = decode(s.as_bytes(), n);
        let joined = chars.join_range(0, n as isize, BoundsMode::Strict).unwrap();
        prop_assert_eq!(&joined, &s);
    }

    /// The decoder agrees with the standard library on well-formed input.
    #[test]
    fn decode_matches_std_chars(s in mixed_width_string()) {
        let chars = decode_str(&s);
        let expected: Vec<char> = s.chars().collect();
        prop_assert_eq!(chars.as_slice(), expected.as_slice());
    }

    /// The pre-scan count equals the decoded count for well-formed input.
    #[test]
    fn prescan_count_matches(s in utf8_string()) {
        prop_assert_eq!(code_point_count(s.as_bytes()), s.chars().count());
    }

    /// A strict decode with the true length never fails.
    #[test]
    fn strict_decode_accepts_true_length(s in utf8_string()) {
        let options = DecodeOptions::new()
            .with_declared_len(s.chars().count())
            .with_length_check(LengthCheck::Strict);
        prop_assert!(decode_with(s.as_bytes(), &options).is_ok());
    }
}

// ============================================================================
// Width Properties
// ============================================================================

proptest! {
    /// Every encoded char decodes to exactly one slot with the same value.
    #[test]
    fn single_char_decodes_to_one_slot(c in any::<char>()) {
        let mut buf = [0u8; 4];
        let encoded = c.encode_utf8(&mut buf);
        let chars = decode(encoded.as_bytes(), 1);
        prop_assert_eq!(chars.len(), 1);
        prop_assert_eq!(chars[0], c);
    }

    /// The lead byte announces the encoded length (0 for ASCII).
    #[test]
    fn lead_width_matches_len_utf8(c in any::<char>()) {
        let mut buf = [0u8; 4];
        let encoded = c.encode_utf8(&mut buf);
        let expected = if c.is_ascii() { 0 } else { c.len_utf8() };
        prop_assert_eq!(lead_width(encoded.as_bytes()[0]), expected);
    }
}

// ============================================================================
// Malformed Input Properties
// ============================================================================

proptest! {
    /// Arbitrary bytes never panic and never yield more slots than bytes.
    #[test]
    fn arbitrary_bytes_make_progress(bytes in prop::collection::vec(any::<u8>(), 0..256)) {
        let iter = code_points(&bytes);
        let (lower, upper) = iter.size_hint();
        let decoded: Vec<char> = iter.collect();
        prop_assert!(decoded.len() <= bytes.len());
        prop_assert!(lower <= decoded.len(),
            "size_hint lower bound {} exceeds {} decoded", lower, decoded.len());
        prop_assert_eq!(upper, Some(bytes.len()));
        if !bytes.is_empty() {
            prop_assert!(!decoded.is_empty());
        }
    }
}
