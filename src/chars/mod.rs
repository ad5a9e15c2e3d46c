//! Character arrays and the range/slice editing operations over them.
//!
//! Every addressed operation comes in two forms: `op(index, count, ...)`
//! takes a relative slice, `op_range(from, to, ...)` an absolute range. The
//! slice form resolves through [`CharRange::from_slice`] and delegates to the
//! range form with the same [`BoundsMode`].

mod array;
mod edit;
mod range;
mod search;

pub use array::CharArray;
pub use range::{BoundsMode, CharRange};
