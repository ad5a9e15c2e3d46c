//! `chararray` - UTF-8 decoding into randomly indexable character arrays
//!
//! Decodes a UTF-8 byte buffer into a 0-based array of Unicode scalar values
//! and provides slice-oriented editing over it: read, count, search, insert,
//! delete, replace and remove, addressed either by absolute range
//! `[from, to)` or by relative slice `(index, count)`.
//!
//! ```
//! use chararray::{BoundsMode, decode};
//!
//! let bytes = "café au lait".as_bytes();
//! let mut chars = decode(bytes, 12);
//! assert_eq!(chars.find(0, 12, 'é', BoundsMode::Strict).unwrap(), Some(3));
//!
//! // Negative counts extend backward from the index: the last four characters.
//! chars.delete(11, -4, BoundsMode::Strict).unwrap();
//! assert_eq!(chars.to_string(), "café au ");
//! ```

// Crate-level lint configuration
#![allow(clippy::cast_possible_truncation)] // Index arithmetic bounded by array length
#![allow(clippy::cast_sign_loss)] // Resolved bounds are checked non-negative first
#![allow(clippy::cast_possible_wrap)] // Array lengths fit in isize
#![allow(clippy::module_name_repetitions)] // Allow chars::CharArray etc
#![allow(clippy::missing_errors_doc)] // Errors are documented on the Error enum
#![allow(clippy::missing_const_for_fn)] // Many functions could be const, not critical
#![allow(clippy::doc_markdown)] // Allow technical names without backticks
#![allow(clippy::should_implement_trait)] // from_str naming is intentional

pub mod chars;
pub mod error;
pub mod event;
pub mod utf8;

// Re-export core types at crate root
pub use chars::{BoundsMode, CharArray, CharRange};
pub use error::{Error, Result};
pub use event::{LogLevel, clear_log_callback, emit_log, set_log_callback};
pub use utf8::{
    CodePoints, DecodeOptions, LengthCheck, code_point_count, code_points, decode, decode_reader,
    decode_str, decode_with, lead_width,
};
